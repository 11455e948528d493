use rbsrc::{Dialect, Options, Unparser, Version};
use rbsrc_test::builders::{self, Args, block, call, fcall, int, lasgn, list, lvar, node, opcall, scope, str_, sym, vcall};
use serde_json::{Value as Json, json};

fn main() {
    divan::main();
}

/// `((((x + 1) + 2) + ...) + n)`
fn operator_chain(n: i64) -> Json {
    (1..=n).fold(vcall("x"), |acc, i| opcall(acc, "+", int(i)))
}

fn class_body(methods: usize) -> Json {
    let defs = (0..methods)
        .map(|i| {
            let args = Args {
                pre_num: 1,
                opt: builders::chain("OPT_ARG", vec![lasgn("b", int(1))]),
                kw: builders::chain("KW_ARG", vec![lasgn("c", json!("NODE_SPECIAL_REQUIRED_KEYWORD"))]),
                ..Default::default()
            };
            let body = block(vec![
                lasgn("sum", opcall(lvar("a"), "+", lvar("b"))),
                fcall("puts", list(vec![str_("sum"), lvar("sum")])),
                node("HASH", vec![list(vec![sym("c"), lvar("c")])]),
            ]);
            builders::defn(&format!("method_{i}"), scope(vec!["a", "b", "c"], args.to_json(), body))
        })
        .collect();

    node(
        "CLASS",
        vec![node("COLON2", vec![Json::Null, json!("Bench")]), Json::Null, scope(vec![], Json::Null, block(defs))],
    )
}

#[divan::bench(args = [10, 100, 1000])]
fn unparse_operator_chain(bencher: divan::Bencher, n: i64) {
    let tree = rbsrc::Node::from_json(&operator_chain(n).to_string()).unwrap();
    let unparser = Unparser::default();
    bencher.bench(|| unparser.unparse(&tree).unwrap());
}

#[divan::bench(args = [1, 50])]
fn unparse_class(bencher: divan::Bencher, methods: usize) {
    let tree = rbsrc::Node::from_json(&class_body(methods).to_string()).unwrap();
    let unparser = Unparser::default();
    bencher.bench(|| unparser.unparse(&tree).unwrap());
}

#[divan::bench(args = [Dialect::Ruby2_7, Dialect::Ruby3_0, Dialect::Ruby3_1])]
fn unparse_keyword_call(bencher: divan::Bencher, dialect: Dialect) {
    let hash = node("HASH", vec![list(vec![sym("a"), int(1), sym("b"), str_("two")])]);
    let tree = rbsrc::Node::from_json(&call(vcall("obj"), "configure", list(vec![vcall("x"), hash])).to_string()).unwrap();
    let unparser = Unparser::for_dialect(dialect);
    bencher.bench(|| unparser.unparse(&tree).unwrap());
}

#[divan::bench(name = "unparse_from_json")]
fn unparse_from_json() -> String {
    let text = class_body(5).to_string();
    rbsrc::unparse(text.as_str(), &Options::new(Version::new(3, 1, 0))).unwrap()
}
