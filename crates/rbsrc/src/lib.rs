//! `rbsrc` rebuilds Ruby source text from parser node trees.
//!
//! A tree is rendered depth first by an [`Unparser`] bound to the rule
//! stratum of one grammar dialect (Ruby 2.6 through 3.x). The output adds the
//! grouping and separators the tree does not store, so that reparsing it with
//! the same dialect yields an equal tree.
//!
//! ## Examples
//!
//! ```rust
//! use rbsrc::{Options, Version};
//! use serde_json::json;
//!
//! // a + b
//! let tree = json!(["OPCALL", [["VCALL", ["a"]], "+", ["LIST", [["VCALL", ["b"]], null]]]]);
//! assert_eq!(rbsrc::unparse(tree, &Options::default()).unwrap(), "(a + b)");
//!
//! // Keyword arguments render as a hash literal before Ruby 3.0
//! let call = json!({"type": "FCALL", "children": ["f", {"type": "LIST", "children": [
//!     {"type": "HASH", "children": [{"type": "LIST", "children": [
//!         {"type": "LIT", "children": ["a"]}, {"type": "LIT", "children": [1]}, null
//!     ]}]}, null
//! ]}]});
//! let options = Options::new(Version::new(2, 7, 0));
//! assert_eq!(rbsrc::unparse(&call, &options).unwrap(), "f({ :a => 1 })");
//! assert_eq!(rbsrc::unparse(&call, &Options::default()).unwrap(), "f(a: 1)");
//! ```
mod context;
mod dialect;
mod engine;
mod error;
mod node;
mod quote;
mod render;
mod stratum;

pub use context::{Binding, Context, HashStyle, ListStyle, Quoting, Statements};
pub use dialect::{Dialect, Options, Version};
pub use engine::Unparser;
pub use error::{UnparseError, UnparseResult};
pub use node::{Node, NodeInput, NodeKind, Regexp, Value, special};
pub use stratum::{OverrideFn, RenderFn, Rule, Stratum};

/// Renders `tree` as source text for the dialect selected in `options`.
pub fn unparse(tree: impl NodeInput, options: &Options) -> UnparseResult {
    Unparser::with_options(options)?.unparse(tree)
}
