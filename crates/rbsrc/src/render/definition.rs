use crate::{
    Context, Node, Unparser, UnparseResult,
    render::{name, params, required},
};

pub fn render_defn(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let mid = name(node, 0)?;
    let scope = params::scope(un, required(node, 1)?, ctx.descend())?;

    Ok(format!("def {mid}({})\n  {}\nend", scope.params, scope.body))
}

pub fn render_defs(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let recv = un.child(node, 0, ctx.descend())?;
    let mid = name(node, 1)?;
    let scope = params::scope(un, required(node, 2)?, ctx.descend())?;

    Ok(format!("def {recv}.{mid}({})\n  {}\nend", scope.params, scope.body))
}

/// Body of a class-like definition: statements separated by `;` without a `begin` wrapper.
fn definition_body(un: &Unparser, node: &Node, index: usize, ctx: Context) -> UnparseResult {
    let scope = params::scope(un, required(node, index)?, ctx.descend().bare_statements())?;
    Ok(scope.body)
}

pub fn render_class(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let c = ctx.descend();
    let cpath = un.child(node, 0, c)?;
    let superclass = un
        .render_opt(node.child(1), c)?
        .map(|s| format!(" < {s}"))
        .unwrap_or_default();
    let body = definition_body(un, node, 2, ctx)?;

    Ok(format!("class {cpath}{superclass}\n  {body}\nend"))
}

pub fn render_module(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let cpath = un.child(node, 0, ctx.descend())?;
    let body = definition_body(un, node, 1, ctx)?;

    Ok(format!("module {cpath}\n  {body}\nend"))
}

pub fn render_sclass(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let recv = un.child(node, 0, ctx.descend())?;
    let body = definition_body(un, node, 1, ctx)?;

    Ok(format!("class << {recv}\n  {body}\nend"))
}

pub fn render_lambda(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let scope = params::scope(un, required(node, 0)?, ctx.descend())?;
    Ok(format!("-> ({}) {{ {} }}", scope.params, scope.body))
}

pub fn render_alias(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let c = ctx.descend();
    Ok(format!("alias {} {}", un.child(node, 0, c)?, un.child(node, 1, c)?))
}

pub fn render_valias(_: &Unparser, node: &Node, _: Context) -> UnparseResult {
    Ok(format!("alias {} {}", name(node, 0)?, name(node, 1)?))
}

pub fn render_undef(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    Ok(format!("undef {}", un.child(node, 0, ctx.descend())?))
}

pub fn render_postexe(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    Ok(format!("END {{ {} }}", un.child(node, 0, ctx.descend())?))
}

#[cfg(test)]
mod tests {
    use crate::{UnparseError, render::test_helper::{render, render_latest}, Dialect};
    use rstest::rstest;
    use serde_json::{Value as Json, json};

    fn scope(tbl: Json, args: Json, body: Json) -> Json {
        json!(["SCOPE", [tbl, args, body]])
    }

    fn args(pre_num: i64, kw: Json, kwrest: Json) -> Json {
        json!(["ARGS", [pre_num, null, null, null, 0, null, null, kw, kwrest, null]])
    }

    fn no_args() -> Json {
        args(0, json!(null), json!(null))
    }

    fn block(statements: Vec<Json>) -> Json {
        json!(["BLOCK", statements])
    }

    fn lasgn(name: &str, value: i64) -> Json {
        json!(["LASGN", [name, ["LIT", [value]]]])
    }

    #[rstest]
    #[case::defn(json!(["DEFN", ["foo", scope(json!([]), no_args(), json!(["VCALL", ["bar"]]))]]), "def foo()\n  bar\nend")]
    #[case::defn_params(
        json!(["DEFN", ["foo", scope(json!(["a", "b"]), args(2, json!(null), json!(null)), json!(["LVAR", ["a"]]))]]),
        "def foo(a, b)\n  a\nend"
    )]
    #[case::defn_statements(
        json!(["DEFN", ["foo", scope(json!([]), no_args(), block(vec![json!(["VCALL", ["a"]]), json!(["VCALL", ["b"]])]))]]),
        "def foo()\n  begin a; b; end\nend"
    )]
    #[case::defs(
        json!(["DEFS", [["VCALL", ["obj"]], "foo", scope(json!(["a", "b", "kwd"]), json!(["ARGS", [1, null, null, null, 0, null, null,
            ["KW_ARG", [["LASGN", ["b", "NODE_SPECIAL_REQUIRED_KEYWORD"]], null]],
            ["LVAR", ["kwd"]], null]]), json!(["VCALL", ["bar"]]))]]),
        "def obj.foo(a, b:, **kwd)\n  bar\nend"
    )]
    #[case::class(
        json!(["CLASS", [["COLON2", [["CONST", ["M"]], "C"]], ["CONST", ["C2"]],
            scope(json!(["a", "b"]), json!(null), block(vec![lasgn("a", 1), lasgn("b", 2)]))]]),
        "class M::C < C2\n  (a = 1); (b = 2)\nend"
    )]
    #[case::class_plain(
        json!(["CLASS", [["COLON2", [null, "C"]], null, scope(json!([]), json!(null), json!(["VCALL", ["foo"]]))]]),
        "class C\n  foo\nend"
    )]
    #[case::class_leading_begin(
        json!(["CLASS", [["COLON2", [null, "C"]], null,
            scope(json!([]), json!(null), block(vec![json!(["BEGIN", [null]]), json!(["VCALL", ["foo"]])]))]]),
        "class C\n  foo\nend"
    )]
    #[case::module(
        json!(["MODULE", [["COLON2", [null, "M"]], scope(json!([]), json!(null), block(vec![json!(["VCALL", ["foo"]]), json!(["VCALL", ["bar"]])]))]]),
        "module M\n  foo; bar\nend"
    )]
    #[case::sclass(
        json!(["SCLASS", [["CALL", [["VCALL", ["obj"]], "hoge", null]], scope(json!([]), json!(null), json!(["VCALL", ["foo"]]))]]),
        "class << obj.hoge()\n  foo\nend"
    )]
    #[case::lambda(json!(["LAMBDA", [scope(json!([]), no_args(), json!(["VCALL", ["foo"]]))]]), "-> () { foo }")]
    #[case::lambda_keywords(
        json!(["LAMBDA", [scope(json!(["a", "b", null]), args(0,
            json!(["KW_ARG", [["DASGN_CURR", ["a", "NODE_SPECIAL_REQUIRED_KEYWORD"]],
                ["KW_ARG", [["DASGN_CURR", ["b", ["LIT", [1]]]], null]]]]),
            json!(null)), json!(["VCALL", ["foo"]]))]]),
        "-> (a:, b: 1) { foo }"
    )]
    #[case::alias(json!(["ALIAS", [["LIT", [{"sym": "bar"}]], ["LIT", [{"sym": "foo"}]]]]), "alias :bar :foo")]
    #[case::valias(json!(["VALIAS", ["$y", "$x"]]), "alias $y $x")]
    #[case::undef(json!(["UNDEF", [["LIT", [{"sym": "foo"}]]]]), "undef :foo")]
    #[case::postexe(json!(["POSTEXE", [scope(json!([]), json!(null), json!(["VCALL", ["foo"]]))]]), "END { foo }")]
    fn test_render(#[case] tree: Json, #[case] expected: &str) {
        assert_eq!(render_latest(tree), expected);
    }

    #[test]
    fn test_defn_without_scope() {
        assert!(matches!(
            render(Dialect::latest(), json!(["DEFN", ["foo", null]])),
            Err(UnparseError::MalformedTree(_))
        ));
    }
}
