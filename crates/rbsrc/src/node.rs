use smallvec::SmallVec;
use smol_str::SmolStr;

use crate::error::UnparseResult;

pub mod input;
pub mod kind;
pub mod value;

pub use input::NodeInput;
pub use kind::NodeKind;
pub use value::{Regexp, Value};

/// Symbols the parser stores in place of a node to mark special slots.
pub mod special {
    pub const NO_NAME_REST: &str = "NODE_SPECIAL_NO_NAME_REST";
    pub const NO_REST_KEYWORD: &str = "NODE_SPECIAL_NO_REST_KEYWORD";
    pub const REQUIRED_KEYWORD: &str = "NODE_SPECIAL_REQUIRED_KEYWORD";
    pub const EXCESSIVE_COMMA: &str = "NODE_SPECIAL_EXCESSIVE_COMMA";
}

pub type Children = SmallVec<[Value; 4]>;

/// A tagged tree vertex with ordered, fixed-role children.
///
/// Nodes are read-only once built; rendering never annotates them.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    tag: SmolStr,
    children: Children,
}

impl Node {
    pub fn new(kind: NodeKind, children: impl IntoIterator<Item = Value>) -> Self {
        Self {
            kind,
            tag: kind.as_str().into(),
            children: children.into_iter().collect(),
        }
    }

    /// Builds a node from its textual tag. Unknown tags are kept for error reporting.
    pub fn with_tag(tag: &str, children: impl IntoIterator<Item = Value>) -> Self {
        let kind = NodeKind::from_tag(tag);
        let tag = match kind {
            NodeKind::Unknown => SmolStr::new(tag),
            kind => SmolStr::new(kind.as_str()),
        };

        Self {
            kind,
            tag,
            children: children.into_iter().collect(),
        }
    }

    /// Parses a node from JSON text in the document or positional shape.
    pub fn from_json(json: &str) -> UnparseResult<Self> {
        json.into_node()
    }

    #[inline(always)]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn is(&self, kind: NodeKind) -> bool {
        self.kind == kind
    }

    pub fn children(&self) -> &[Value] {
        &self.children
    }

    /// The child at `index`, or the absent marker past the end.
    pub fn child(&self, index: usize) -> &Value {
        self.children.get(index).unwrap_or(&value::NIL)
    }

    pub fn child_node(&self, index: usize) -> Option<&Node> {
        self.child(index).as_node()
    }

    pub fn symbol(&self, index: usize) -> Option<&str> {
        self.child(index).as_str()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Elements of a literal collection without the trailing `nil` terminator.
    pub fn elements(&self) -> &[Value] {
        match self.children.split_last() {
            Some((Value::Nil, init)) => init,
            _ => &self.children,
        }
    }

    /// A copy with `value` at `index`, padding with `nil` as needed.
    pub fn with_child(&self, index: usize, value: Value) -> Self {
        let mut node = self.clone();
        if node.children.len() <= index {
            node.children.resize(index + 1, Value::Nil);
        }
        node.children[index] = value;
        node
    }
}
