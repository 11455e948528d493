//! Positional JSON tree builders.
use serde_json::{Value as Json, json};

pub fn node(tag: &str, children: Vec<Json>) -> Json {
    json!([tag, children])
}

pub fn vcall(name: &str) -> Json {
    node("VCALL", vec![json!(name)])
}

pub fn lvar(name: &str) -> Json {
    node("LVAR", vec![json!(name)])
}

pub fn konst(name: &str) -> Json {
    node("CONST", vec![json!(name)])
}

pub fn int(n: i64) -> Json {
    node("LIT", vec![json!(n)])
}

pub fn sym(name: &str) -> Json {
    node("LIT", vec![json!({"sym": name})])
}

pub fn str_(text: &str) -> Json {
    node("STR", vec![json!({"str": text})])
}

/// A `LIST` (2.7+) with its `nil` terminator.
pub fn list(items: Vec<Json>) -> Json {
    terminated("LIST", items)
}

/// An `ARRAY`, the 2.6 spelling of [`list`].
pub fn array(items: Vec<Json>) -> Json {
    terminated("ARRAY", items)
}

fn terminated(tag: &str, mut items: Vec<Json>) -> Json {
    items.push(Json::Null);
    node(tag, items)
}

pub fn lasgn(name: &str, value: Json) -> Json {
    node("LASGN", vec![json!(name), value])
}

pub fn fcall(name: &str, args: Json) -> Json {
    node("FCALL", vec![json!(name), args])
}

pub fn call(recv: Json, name: &str, args: Json) -> Json {
    node("CALL", vec![recv, json!(name), args])
}

/// `left op right` with a single right operand.
pub fn opcall(left: Json, op: &str, right: Json) -> Json {
    node("OPCALL", vec![left, json!(op), list(vec![right])])
}

pub fn block(statements: Vec<Json>) -> Json {
    node("BLOCK", statements)
}

pub fn scope(tbl: Vec<&str>, args: Json, body: Json) -> Json {
    node("SCOPE", vec![json!(tbl), args, body])
}

/// The slots of an `ARGS` node, in tree order.
#[derive(Debug, Clone, Default)]
pub struct Args {
    pub pre_num: usize,
    pub pre_init: Option<Json>,
    pub opt: Option<Json>,
    pub post_num: usize,
    pub post_init: Option<Json>,
    pub rest: Option<Json>,
    pub kw: Option<Json>,
    pub kwrest: Option<Json>,
    pub block: Option<Json>,
}

impl Args {
    pub fn to_json(&self) -> Json {
        node(
            "ARGS",
            vec![
                json!(self.pre_num),
                self.pre_init.clone().unwrap_or_default(),
                self.opt.clone().unwrap_or_default(),
                Json::Null,
                json!(self.post_num),
                self.post_init.clone().unwrap_or_default(),
                self.rest.clone().unwrap_or_default(),
                self.kw.clone().unwrap_or_default(),
                self.kwrest.clone().unwrap_or_default(),
                self.block.clone().unwrap_or_default(),
            ],
        )
    }
}

/// Links assignments into an `OPT_ARG` or `KW_ARG` chain.
pub fn chain(tag: &str, heads: Vec<Json>) -> Option<Json> {
    heads
        .into_iter()
        .rev()
        .fold(None, |next, head| Some(node(tag, vec![head, next.unwrap_or_default()])))
}

pub fn defn(name: &str, scope: Json) -> Json {
    node("DEFN", vec![json!(name), scope])
}

/// Rewrites a positional tree into the document shape, `{"type": .., "children": [..]}`.
pub fn to_document(tree: &Json) -> Json {
    match tree {
        Json::Array(items) => match items.as_slice() {
            [Json::String(tag), Json::Array(children)] if is_tag(tag) => json!({
                "type": tag,
                "children": children.iter().map(to_document).collect::<Vec<_>>(),
            }),
            _ => Json::Array(items.iter().map(to_document).collect()),
        },
        other => other.clone(),
    }
}

fn is_tag(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_chain_links_in_order() {
        let chain = chain("OPT_ARG", vec![lasgn("a", int(1)), lasgn("b", int(2))]);
        assert_eq!(
            chain,
            Some(json!(["OPT_ARG", [["LASGN", ["a", ["LIT", [1]]]], ["OPT_ARG", [["LASGN", ["b", ["LIT", [2]]]], null]]]]))
        );
        assert_eq!(super::chain("KW_ARG", vec![]), None);
    }

    #[rstest]
    #[case::list(list(vec![int(1)]), json!(["LIST", [["LIT", [1]], null]]))]
    #[case::array(array(vec![]), json!(["ARRAY", [null]]))]
    fn test_terminated(#[case] built: Json, #[case] expected: Json) {
        assert_eq!(built, expected);
    }

    #[test]
    fn test_to_document() {
        assert_eq!(
            to_document(&opcall(vcall("a"), "+", vcall("b"))),
            json!({"type": "OPCALL", "children": [
                {"type": "VCALL", "children": ["a"]},
                "+",
                {"type": "LIST", "children": [{"type": "VCALL", "children": ["b"]}, null]},
            ]})
        );
        assert_eq!(to_document(&json!(["a", "b"])), json!(["a", "b"]));
    }

    #[test]
    fn test_args_slots() {
        let args = Args {
            pre_num: 2,
            block: Some(json!("blk")),
            ..Default::default()
        };
        assert_eq!(
            args.to_json(),
            json!(["ARGS", [2, null, null, null, 0, null, null, null, null, "blk"]])
        );
    }
}
