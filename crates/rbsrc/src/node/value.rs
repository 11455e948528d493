use itertools::Itertools;
use smol_str::SmolStr;

use super::{Node, NodeKind};
use crate::quote;

/// A regular expression literal carried by `LIT` or `MATCH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regexp {
    pub source: String,
    pub options: u32,
}

impl Regexp {
    pub fn new(source: impl Into<String>, options: u32) -> Self {
        Self {
            source: source.into(),
            options,
        }
    }

    pub fn inspect(&self) -> String {
        quote::inspect_regexp(&self.source, self.options)
    }
}

/// A child slot of a [`Node`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The absent or empty marker.
    #[default]
    Nil,
    Bool(bool),
    Integer(i64),
    /// An integer outside `i64`, kept as its decimal digits.
    BigInt(SmolStr),
    Float(f64),
    Symbol(SmolStr),
    String(String),
    Regexp(Regexp),
    List(Vec<Value>),
    Node(Box<Node>),
}

pub(crate) static NIL: Value = Value::Nil;

impl Value {
    pub fn symbol(name: impl Into<SmolStr>) -> Self {
        Value::Symbol(name.into())
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn kind(&self) -> Option<NodeKind> {
        self.as_node().map(Node::kind)
    }

    pub fn is_kind(&self, kind: NodeKind) -> bool {
        self.kind() == Some(kind)
    }

    /// The text of a symbol or string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Symbol(s) => Some(s.as_str()),
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn is_symbol(&self, name: &str) -> bool {
        matches!(self, Value::Symbol(s) if s == name)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(values) => Some(values),
            _ => None,
        }
    }

    /// Ruby `inspect` of a literal scalar, as `LIT` renders it.
    pub fn inspect(&self) -> String {
        match self {
            Value::Nil => "nil".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Integer(n) => n.to_string(),
            Value::BigInt(digits) => digits.to_string(),
            Value::Float(f) => quote::inspect_float(*f),
            Value::Symbol(s) => quote::inspect_symbol(s),
            Value::String(s) => quote::dump(s),
            Value::Regexp(re) => re.inspect(),
            Value::List(values) => format!("[{}]", values.iter().map(Value::inspect).join(", ")),
            Value::Node(node) => format!("#<{}>", node.tag()),
        }
    }

    /// Textual form of a scalar that passes through dispatch unchanged.
    pub fn to_text(&self) -> String {
        match self {
            Value::Nil => String::new(),
            Value::Symbol(s) => s.to_string(),
            Value::String(s) => s.clone(),
            _ => self.inspect(),
        }
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Value::Node(Box::new(node))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Symbol(s.into())
    }
}

impl From<Regexp> for Value {
    fn from(re: Regexp) -> Self {
        Value::Regexp(re)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Nil, Into::into)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::List(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::nil(Value::Nil, "")]
    #[case::symbol(Value::symbol("foo"), "foo")]
    #[case::string(Value::String("a\"b".to_string()), "a\"b")]
    #[case::integer(Value::Integer(42), "42")]
    #[case::float(Value::Float(1.0), "1.0")]
    #[case::bool(Value::Bool(false), "false")]
    #[case::list(Value::List(vec![Value::symbol("a"), Value::Nil]), "[:a, nil]")]
    fn test_to_text(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_text(), expected);
    }

    #[rstest]
    #[case::symbol(Value::symbol("hoge"), ":hoge")]
    #[case::string(Value::String("hoge".to_string()), "\"hoge\"")]
    #[case::regexp(Value::Regexp(Regexp::new("foo", 1)), "/foo/i")]
    #[case::negative(Value::Integer(-1), "-1")]
    #[case::bignum(Value::BigInt("18446744073709551616".into()), "18446744073709551616")]
    fn test_inspect(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.inspect(), expected);
    }

    #[test]
    fn test_accessors() {
        let node = Value::from(Node::new(NodeKind::Lvar, vec![Value::symbol("a")]));
        assert!(node.is_kind(NodeKind::Lvar));
        assert_eq!(node.as_str(), None);
        assert_eq!(Value::symbol("a").as_str(), Some("a"));
        assert!(Value::symbol("NODE_SPECIAL_NO_NAME_REST").is_symbol("NODE_SPECIAL_NO_NAME_REST"));
        assert_eq!(Value::from(None::<i64>), Value::Nil);
    }
}
