use rbsrc::{Dialect, Node, NodeKind, Options, UnparseError, Unparser, Value, Version};
use rbsrc_test::builders::{
    array, call, fcall, int, konst, lasgn, list, node, opcall, scope, str_, sym, to_document, vcall,
};
use rstest::{fixture, rstest};
use serde_json::{Value as Json, json};

#[fixture]
fn options() -> Options {
    rbsrc_test::init_tracing();
    Options::default()
}

fn at(version: &str) -> Options {
    Options::new(version.parse().unwrap())
}

#[rstest]
fn test_operator_expression(options: Options) {
    let tree = opcall(vcall("a"), "+", vcall("b"));
    assert_eq!(rbsrc::unparse(tree, &options), Ok("(a + b)".to_string()));
}

#[rstest]
fn test_if_else(options: Options) {
    let tree = node("IF", vec![opcall(vcall("x"), "==", int(1)), vcall("y"), vcall("z")]);
    assert_eq!(
        rbsrc::unparse(tree, &options),
        Ok("if (x == 1)\n  y\nelse\n  z\nend".to_string())
    );
}

#[rstest]
fn test_call_with_block(options: Options) {
    let tree = node("ITER", vec![call(int(3), "times", Json::Null), scope(vec![], Json::Null, vcall("y"))]);
    assert_eq!(rbsrc::unparse(tree, &options), Ok("3.times() { y }".to_string()));
}

#[rstest]
fn test_destructuring_assignment(options: Options) {
    let tree = node(
        "MASGN",
        vec![vcall("f"), list(vec![lasgn("a", Json::Null), lasgn("b", Json::Null)]), Json::Null],
    );
    assert_eq!(rbsrc::unparse(tree, &options), Ok("(a, b, ) = f".to_string()));
}

#[rstest]
#[case::ruby2_6("2.6.0", "f({ :a => 1, :b => 2 })")]
#[case::ruby2_7("2.7.0", "f({ :a => 1, :b => 2 })")]
#[case::ruby2_7_2("2.7.2", "f({ :a => 1, :b => 2 })")]
#[case::ruby3_0("3.0.0", "f(a: 1, b: 2)")]
#[case::ruby3_1("3.1.0", "f(a: 1, b: 2)")]
fn test_keyword_arguments(#[case] version: &str, #[case] expected: &str) {
    let seq = if version == "2.6.0" { array } else { list };
    let hash = node("HASH", vec![seq(vec![sym("a"), int(1), sym("b"), int(2)])]);
    let tree = fcall("f", seq(vec![hash]));
    assert_eq!(rbsrc::unparse(tree, &at(version)), Ok(expected.to_string()));
}

#[rstest]
fn test_pattern_matching_on_base_stratum() {
    let tree = node(
        "CASE3",
        vec![vcall("x"), node("IN", vec![int(1), vcall("y"), Json::Null]), Json::Null],
    );
    assert_eq!(
        rbsrc::unparse(&tree, &at("2.6.0")),
        Err(UnparseError::UnsupportedConstruct("CASE3".into()))
    );
    assert_eq!(
        rbsrc::unparse(&tree, &at("2.7.0")),
        Ok("case x\nin 1\n  y\n\nend".to_string())
    );
}

fn gated_tree(tag: &str) -> Json {
    let no_name = json!("NODE_SPECIAL_NO_NAME_REST");
    match tag {
        "LIST" => list(vec![int(1)]),
        "CASE3" => node(
            "CASE3",
            vec![vcall("x"), node("IN", vec![int(1), vcall("y"), Json::Null]), Json::Null],
        ),
        "ARYPTN" => node("ARYPTN", vec![Json::Null, list(vec![int(1)]), Json::Null, Json::Null]),
        "HSHPTN" => node("HSHPTN", vec![Json::Null, Json::Null, Json::Null]),
        "OP_ASGN2" => node("OP_ASGN2", vec![vcall("s"), json!(false), json!("f"), json!("+"), int(1)]),
        "FNDPTN" => node("FNDPTN", vec![Json::Null, no_name.clone(), list(vec![int(1)]), no_name]),
        _ => unreachable!(),
    }
}

#[rstest]
#[case::list("LIST", "2.7.0", "[1]")]
#[case::case3("CASE3", "2.7.0", "case x\nin 1\n  y\n\nend")]
#[case::aryptn("ARYPTN", "2.7.0", "[1]")]
#[case::hshptn("HSHPTN", "2.7.0", "{}")]
#[case::op_asgn2("OP_ASGN2", "2.7.2", "(s.f += 1)")]
#[case::fndptn("FNDPTN", "3.0.0", "[*, 1, *]")]
fn test_version_gating(#[case] tag: &str, #[case] introduced: &str, #[case] expected: &str) {
    let tree = gated_tree(tag);
    let introduced: Version = introduced.parse().unwrap();

    for version in ["2.6.0", "2.7.0", "2.7.2", "3.0.0", "3.1.0"] {
        let result = rbsrc::unparse(&tree, &at(version));
        if version.parse::<Version>().unwrap() < introduced {
            assert_eq!(result, Err(UnparseError::UnsupportedConstruct(tag.into())), "{tag} at {version}");
        } else {
            assert_eq!(result, Ok(expected.to_string()), "{tag} at {version}");
        }
    }
}

#[rstest]
fn test_input_shapes_agree(options: Options) {
    let positional = opcall(vcall("a"), "+", vcall("b"));
    let document = to_document(&positional);
    let native = Node::new(
        NodeKind::Opcall,
        [
            Value::from(Node::new(NodeKind::Vcall, [Value::from("a")])),
            Value::from("+"),
            Value::from(Node::new(
                NodeKind::List,
                [Value::from(Node::new(NodeKind::Vcall, [Value::from("b")])), Value::Nil],
            )),
        ],
    );

    let expected = Ok("(a + b)".to_string());
    assert_eq!(rbsrc::unparse(&positional, &options), expected);
    assert_eq!(rbsrc::unparse(&document, &options), expected);
    assert_eq!(rbsrc::unparse(native, &options), expected);
    assert_eq!(rbsrc::unparse(positional.to_string().as_str(), &options), expected);
}

#[rstest]
fn test_document_input_from_text(options: Options) {
    let text = r#"{"type": "STR", "children": [{"str": "a\"b"}]}"#;
    let node = Node::from_json(text).unwrap();
    assert_eq!(rbsrc::unparse(node, &options), Ok(r#""a\"b""#.to_string()));
}

#[rstest]
#[case::invalid_json("not json")]
#[case::scalar_root("42")]
#[case::empty_tag(r#"["", []]"#)]
fn test_malformed_input(#[case] text: &str) {
    assert!(matches!(
        rbsrc::unparse(text, &Options::default()),
        Err(UnparseError::MalformedTree(_))
    ));
}

#[rstest]
#[case::too_old("2.5.9")]
#[case::too_new("4.0.0")]
fn test_unsupported_dialect(#[case] version: &str) {
    assert_eq!(
        rbsrc::unparse(int(1), &at(version)),
        Err(UnparseError::UnsupportedDialect(version.to_string()))
    );
}

#[test]
fn test_invalid_version() {
    assert_eq!(
        "abc".parse::<Version>(),
        Err(UnparseError::UnsupportedDialect("abc".to_string()))
    );
}

#[test]
fn test_default_options() {
    let unparser = Unparser::with_options(&Options::default()).unwrap();
    assert_eq!(unparser.dialect(), Dialect::Ruby3_1);
    assert_eq!(unparser.dialect(), Dialect::latest());
}

#[rstest]
#[case::ruby2_6(Dialect::Ruby2_6, "2.6.0")]
#[case::ruby2_7(Dialect::Ruby2_7, "2.7.0")]
#[case::ruby2_7_2(Dialect::Ruby2_7_2, "2.7.2")]
#[case::ruby3_0(Dialect::Ruby3_0, "3.0.0")]
#[case::ruby3_1(Dialect::Ruby3_1, "3.1.0")]
fn test_stratum_chain(#[case] dialect: Dialect, #[case] version: &str) {
    let unparser = Unparser::new(&version.parse().unwrap()).unwrap();
    assert_eq!(unparser.dialect(), dialect);

    let stratum = unparser.stratum();
    match stratum.parent() {
        Some(parent) => {
            assert_eq!(Some(parent.dialect()), dialect.parent());
            assert!(stratum.len() >= parent.len());
        }
        None => assert_eq!(dialect, Dialect::Ruby2_6),
    }
}

#[rstest]
#[case::ruby2_6("2.6.0")]
#[case::ruby3_1("3.1.0")]
fn test_method_definition(#[case] version: &str) {
    let tree = node(
        "CLASS",
        vec![
            node("COLON2", vec![Json::Null, json!("Greeter")]),
            Json::Null,
            scope(
                vec![],
                Json::Null,
                node(
                    "DEFN",
                    vec![
                        json!("hello"),
                        scope(
                            vec!["name"],
                            node("ARGS", vec![json!(1), Json::Null, Json::Null, Json::Null, json!(0),
                                Json::Null, Json::Null, Json::Null, Json::Null, Json::Null]),
                            node("DSTR", vec![
                                json!({"str": "Hello, "}),
                                node("EVSTR", vec![node("LVAR", vec![json!("name")])]),
                                Json::Null,
                            ]),
                        ),
                    ],
                ),
            ),
        ],
    );
    assert_eq!(
        rbsrc::unparse(tree, &at(version)),
        Ok("class Greeter\n  def hello(name)\n  \"Hello, #{name}\"\nend\nend".to_string())
    );
}

#[rstest]
fn test_constant_path_and_strings(options: Options) {
    let tree = call(
        node("COLON2", vec![konst("File"), json!("Separator")]),
        "+",
        list(vec![str_("x\ty")]),
    );
    assert_eq!(
        rbsrc::unparse(tree, &options),
        Ok("File::Separator.+(\"x\\ty\")".to_string())
    );
}

#[rstest]
fn test_unknown_construct_fails_whole_tree(options: Options) {
    let tree = node(
        "BLOCK",
        vec![lasgn("a", int(1)), fcall("puts", list(vec![node("NO_SUCH_NODE", vec![])]))],
    );
    assert_eq!(
        rbsrc::unparse(tree, &options),
        Err(UnparseError::UnsupportedConstruct("NO_SUCH_NODE".into()))
    );
}

/// `for <names> in 1..3 do foo end`
fn for_loop(names: Json, rest: Json) -> Json {
    let masgn = node("MASGN", vec![node("FOR_MASGN", vec![node("DVAR", vec![Json::Null])]), names, rest]);
    let args = node(
        "ARGS",
        vec![json!(1), masgn, Json::Null, Json::Null, json!(0), Json::Null, Json::Null, Json::Null, Json::Null, Json::Null],
    );
    node(
        "FOR",
        vec![node("DOT2", vec![int(1), int(3)]), scope_with_slots(vec![Json::Null], args, vcall("foo"))],
    )
}

fn scope_with_slots(tbl: Vec<Json>, args: Json, body: Json) -> Json {
    node("SCOPE", vec![Json::Array(tbl), args, body])
}

#[rstest]
#[case::ruby2_7("2.7.0")]
#[case::ruby3_0("3.0.0")]
#[case::ruby3_1("3.1.0")]
fn test_for_loop_destructuring(#[case] version: &str) {
    let names = list(vec![
        node("DASGN_CURR", vec![json!("x"), Json::Null]),
        node("DASGN_CURR", vec![json!("y"), Json::Null]),
    ]);
    assert_eq!(
        rbsrc::unparse(for_loop(names, Json::Null), &at(version)),
        Ok("for (x, y, ) in (1..3) do\n  foo\nend".to_string())
    );
}

#[rstest]
fn test_for_loop_anonymous_splat(options: Options) {
    let tree = for_loop(Json::Null, json!("NODE_SPECIAL_NO_NAME_REST"));
    assert_eq!(
        rbsrc::unparse(tree, &options),
        Ok("for (*) in (1..3) do\n  foo\nend".to_string())
    );
}

#[rstest]
#[case::past_i64(r#"["LIT", [9223372036854775808]]"#, "9223372036854775808")]
#[case::past_u64(r#"["LIT", [123456789012345678901234567890]]"#, "123456789012345678901234567890")]
#[case::negative(r#"["LIT", [-9223372036854775809]]"#, "-9223372036854775809")]
#[case::float(r#"["LIT", [1e20]]"#, "1.0e+20")]
fn test_large_integer_literals(options: Options, #[case] text: &str, #[case] expected: &str) {
    assert_eq!(rbsrc::unparse(text, &options), Ok(expected.to_string()));
}

#[rstest]
fn test_splat_concatenation_as_assigned_value(options: Options) {
    let tree = lasgn("x", node("ARGSPUSH", vec![node("SPLAT", vec![vcall("a")]), vcall("b")]));
    assert_eq!(rbsrc::unparse(tree, &options), Ok("(x = [*a, b])".to_string()));
}
