//! The renderer library: one function per node kind, grouped by category.
//!
//! Every renderer has the [`crate::RenderFn`] shape. Overrides used by later
//! strata have the [`crate::OverrideFn`] shape and take the replaced rule.
use crate::{Node, Value, error::UnparseError};

pub(crate) mod assign;
pub(crate) mod call;
pub(crate) mod collection;
pub(crate) mod control;
pub(crate) mod definition;
pub(crate) mod exception;
pub(crate) mod literal;
pub(crate) mod params;
pub(crate) mod pattern;
pub(crate) mod range;
pub(crate) mod reference;
pub(crate) mod sequence;

/// The symbol or string stored at `index`, which the kind requires.
pub(crate) fn name(node: &Node, index: usize) -> Result<&str, UnparseError> {
    node.symbol(index).ok_or_else(|| {
        UnparseError::malformed(format!(
            "{} expects a name at child {index}, found `{}`",
            node.tag(),
            node.child(index).inspect()
        ))
    })
}

/// The node stored at `index`, which the kind requires.
pub(crate) fn required<'a>(node: &'a Node, index: usize) -> Result<&'a Node, UnparseError> {
    node.child_node(index).ok_or_else(|| {
        UnparseError::malformed(format!(
            "{} expects a node at child {index}, found `{}`",
            node.tag(),
            node.child(index).inspect()
        ))
    })
}

/// Elements of an optional list child.
pub(crate) fn elements(value: &Value) -> &[Value] {
    value.as_node().map(Node::elements).unwrap_or_default()
}
