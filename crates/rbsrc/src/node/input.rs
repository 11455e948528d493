//! Adapters from the accepted tree shapes to [`Node`].
//!
//! Three shapes are accepted: a native [`Node`], an ordered document
//! `{"type": "LIT", "children": [1]}` and a positional array `["LIT", [1]]`.
use serde::{Deserialize, Deserializer, de::Error as _};
use serde_json::{Map, Value as Json};

use super::{Node, Regexp, Value};
use crate::error::{UnparseError, UnparseResult};
use crate::quote;

/// Anything that can be turned into a tree root.
pub trait NodeInput {
    fn into_node(self) -> UnparseResult<Node>;
}

impl NodeInput for Node {
    fn into_node(self) -> UnparseResult<Node> {
        Ok(self)
    }
}

impl NodeInput for &Node {
    fn into_node(self) -> UnparseResult<Node> {
        Ok(self.clone())
    }
}

impl NodeInput for Json {
    fn into_node(self) -> UnparseResult<Node> {
        (&self).into_node()
    }
}

impl NodeInput for &Json {
    fn into_node(self) -> UnparseResult<Node> {
        match from_json(self)? {
            Value::Node(node) => Ok(*node),
            _ => Err(UnparseError::malformed(format!("expected a node at the root, found `{self}`"))),
        }
    }
}

impl NodeInput for &str {
    fn into_node(self) -> UnparseResult<Node> {
        let json: Json = serde_json::from_str(self)?;
        json.into_node()
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = Json::deserialize(deserializer)?;
        json.into_node().map_err(D::Error::custom)
    }
}

fn is_tag(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// Converts one JSON value into a child value.
pub fn from_json(json: &Json) -> UnparseResult<Value> {
    match json {
        Json::Null => Ok(Value::Nil),
        Json::Bool(b) => Ok(Value::Bool(*b)),
        Json::Number(n) => number(n),
        Json::String(s) => Ok(Value::symbol(s.as_str())),
        Json::Array(items) => match items.as_slice() {
            [Json::String(tag), Json::Array(children)] if is_tag(tag) => node(tag, children),
            _ => items.iter().map(from_json).collect::<UnparseResult<Vec<_>>>().map(Value::List),
        },
        Json::Object(map) => match map.get("type") {
            Some(Json::String(tag)) => match map.get("children") {
                Some(Json::Array(children)) => node(tag, children),
                Some(other) => Err(UnparseError::malformed(format!(
                    "children of `{tag}` must be an array, found `{other}`"
                ))),
                None => Err(UnparseError::malformed(format!("node `{tag}` has no children"))),
            },
            Some(other) => Err(UnparseError::malformed(format!("node type must be a string, found `{other}`"))),
            None => tagged_scalar(map),
        },
    }
}

fn node(tag: &str, children: &[Json]) -> UnparseResult<Value> {
    let children = children.iter().map(from_json).collect::<UnparseResult<Vec<_>>>()?;
    Ok(Node::with_tag(tag, children).into())
}

/// Integers keep every digit; only a number written with a fraction or exponent is a float.
fn number(n: &serde_json::Number) -> UnparseResult<Value> {
    if let Some(i) = n.as_i64() {
        return Ok(Value::Integer(i));
    }

    let text = n.to_string();
    if is_integer(&text) {
        Ok(Value::BigInt(text.into()))
    } else if let Some(f) = n.as_f64().filter(|f| f.is_finite()) {
        Ok(Value::Float(f))
    } else {
        Err(UnparseError::malformed(format!("number `{n}` is out of range")))
    }
}

fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn tagged_scalar(map: &Map<String, Json>) -> UnparseResult<Value> {
    match (map.get("str"), map.get("sym"), map.get("float"), map.get("regexp")) {
        (Some(Json::String(s)), None, None, None) => Ok(Value::String(s.clone())),
        (None, Some(Json::String(s)), None, None) => Ok(Value::symbol(s.as_str())),
        (None, None, Some(Json::Number(n)), None) => n
            .as_f64()
            .map(Value::Float)
            .ok_or_else(|| UnparseError::malformed(format!("float `{n}` is out of range"))),
        (None, None, None, Some(Json::String(source))) => {
            let options = match map.get("options") {
                None | Some(Json::Null) => 0,
                Some(Json::Number(n)) => n
                    .as_u64()
                    .and_then(|n| u32::try_from(n).ok())
                    .ok_or_else(|| UnparseError::malformed(format!("invalid regexp options `{n}`")))?,
                Some(Json::String(flags)) => quote::regexp_options(flags),
                Some(other) => {
                    return Err(UnparseError::malformed(format!("invalid regexp options `{other}`")));
                }
            };
            Ok(Value::Regexp(Regexp::new(source.as_str(), options)))
        }
        _ => Err(UnparseError::malformed(format!(
            "unrecognized value `{}`",
            Json::Object(map.clone())
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_shapes_agree() {
        let document = json!({"type": "OPCALL", "children": [
            {"type": "LIT", "children": [1]},
            "+",
            {"type": "LIST", "children": [{"type": "LIT", "children": [2]}, null]}
        ]});
        let positional = json!(["OPCALL", [["LIT", [1]], "+", ["LIST", [["LIT", [2]], null]]]]);
        let native = Node::new(
            NodeKind::Opcall,
            vec![
                Node::new(NodeKind::Lit, vec![Value::Integer(1)]).into(),
                Value::symbol("+"),
                Node::new(
                    NodeKind::List,
                    vec![Node::new(NodeKind::Lit, vec![Value::Integer(2)]).into(), Value::Nil],
                )
                .into(),
            ],
        );

        assert_eq!(document.into_node(), Ok(native.clone()));
        assert_eq!(positional.into_node(), Ok(native));
    }

    #[rstest]
    #[case::string(json!({"str": "hoge"}), Value::String("hoge".to_string()))]
    #[case::symbol(json!({"sym": "NODE_SPECIAL_NO_NAME_REST"}), Value::symbol("NODE_SPECIAL_NO_NAME_REST"))]
    #[case::float(json!({"float": 1}), Value::Float(1.0))]
    #[case::regexp_flags(json!({"regexp": "foo", "options": "ix"}), Value::Regexp(Regexp::new("foo", 3)))]
    #[case::regexp_bits(json!({"regexp": "foo", "options": 4}), Value::Regexp(Regexp::new("foo", 4)))]
    #[case::table(json!(["a", null, "b"]), Value::List(vec![Value::symbol("a"), Value::Nil, Value::symbol("b")]))]
    #[case::lowercase_pair(json!(["a", []]), Value::List(vec![Value::symbol("a"), Value::List(vec![])]))]
    #[case::float_number(json!(1.5), Value::Float(1.5))]
    fn test_scalars(#[case] json: Json, #[case] expected: Value) {
        assert_eq!(from_json(&json), Ok(expected));
    }

    #[rstest]
    #[case::scalar_root(json!(1))]
    #[case::list_root(json!([1, 2]))]
    #[case::missing_children(json!({"type": "LIT"}))]
    #[case::children_not_array(json!({"type": "LIT", "children": 1}))]
    #[case::type_not_string(json!({"type": 1, "children": []}))]
    #[case::unknown_object(json!({"foo": 1}))]
    #[case::nested_bad(json!(["LIT", [{"bar": true}]]))]
    fn test_malformed(#[case] json: Json) {
        assert!(matches!(json.into_node(), Err(UnparseError::MalformedTree(_))));
    }

    #[test]
    fn test_unknown_tag_is_not_malformed() {
        let node = json!(["BOGUS_NODE", []]).into_node().unwrap();
        assert_eq!(node.kind(), NodeKind::Unknown);
        assert_eq!(node.tag(), "BOGUS_NODE");
    }

    #[test]
    fn test_from_str() {
        let node = Node::from_json(r#"{"type": "NODE_VCALL", "children": ["foo"], "first_lineno": 1}"#).unwrap();
        assert_eq!(node.kind(), NodeKind::Vcall);
        assert!(matches!(Node::from_json("{"), Err(UnparseError::MalformedTree(_))));
    }

    #[rstest]
    #[case::i64_max("9223372036854775807", Value::Integer(i64::MAX))]
    #[case::past_i64("9223372036854775808", Value::BigInt("9223372036854775808".into()))]
    #[case::past_u64("123456789012345678901234567890", Value::BigInt("123456789012345678901234567890".into()))]
    #[case::negative_past_i64("-9223372036854775809", Value::BigInt("-9223372036854775809".into()))]
    #[case::exponent("1e20", Value::Float(1e20))]
    #[case::fraction("2.5", Value::Float(2.5))]
    fn test_numbers_from_text(#[case] text: &str, #[case] expected: Value) {
        let json: Json = serde_json::from_str(text).unwrap();
        assert_eq!(from_json(&json), Ok(expected));
    }

    #[test]
    fn test_deserialize() {
        let node: Node = serde_json::from_value(json!(["ZLIST", []])).unwrap();
        assert_eq!(node.kind(), NodeKind::Zlist);
    }
}
