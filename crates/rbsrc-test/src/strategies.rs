//! Property-based testing strategies for node trees.
//!
//! Each strategy yields a tree together with the source text it must render
//! to, so a property can compare the two directly.
//!
//! # Examples
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use rbsrc_test::strategies::arb_method_definition;
//!
//! proptest! {
//!     #[test]
//!     fn test_params((tree, expected) in arb_method_definition()) {
//!         // render `tree` and compare with `expected`
//!     }
//! }
//! ```
use proptest::prelude::*;
use serde_json::{Value as Json, json};

use crate::builders::{self, Args};

/// Lower-case identifiers that are not Ruby keywords.
pub fn arb_identifier() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}".prop_filter("Avoid reserved keywords", |s| {
        !matches!(
            s.as_str(),
            "if" | "in"
                | "do"
                | "or"
                | "and"
                | "def"
                | "end"
                | "for"
                | "nil"
                | "not"
                | "self"
                | "then"
                | "true"
                | "case"
                | "else"
                | "when"
                | "redo"
                | "next"
                | "false"
                | "while"
                | "until"
                | "break"
                | "begin"
                | "class"
                | "alias"
                | "elsif"
                | "retry"
                | "super"
                | "undef"
                | "yield"
                | "ensure"
                | "module"
                | "rescue"
                | "return"
                | "unless"
                | "defined"
        )
    })
}

/// Shape of a generated parameter list.
#[derive(Debug, Clone)]
pub struct ParamShape {
    pub pre: usize,
    pub optional: Vec<i64>,
    pub rest: bool,
    pub post: usize,
    /// `None` is a required keyword.
    pub keywords: Vec<Option<i64>>,
    pub kwrest: bool,
    pub block: bool,
}

impl ParamShape {
    /// The local table, laid out as the parser does: one slot per name plus the hidden keyword slot.
    fn table(&self) -> Vec<Json> {
        let mut tbl = Vec::new();
        tbl.extend((0..self.pre).map(|i| json!(format!("a{i}"))));
        tbl.extend((0..self.optional.len()).map(|i| json!(format!("o{i}"))));
        if self.rest {
            tbl.push(json!("rest"));
        }
        tbl.extend((0..self.post).map(|i| json!(format!("p{i}"))));
        tbl.extend((0..self.keywords.len()).map(|i| json!(format!("k{i}"))));
        if !self.keywords.is_empty() {
            tbl.push(Json::Null);
        }
        if self.kwrest {
            tbl.push(json!("opts"));
        }
        if self.block {
            tbl.push(json!("blk"));
        }
        tbl
    }

    fn args(&self) -> Args {
        let optional = self
            .optional
            .iter()
            .enumerate()
            .map(|(i, v)| builders::lasgn(&format!("o{i}"), builders::int(*v)))
            .collect();
        let keywords = self
            .keywords
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let value = v.map_or_else(|| json!("NODE_SPECIAL_REQUIRED_KEYWORD"), builders::int);
                builders::lasgn(&format!("k{i}"), value)
            })
            .collect();

        Args {
            pre_num: self.pre,
            opt: builders::chain("OPT_ARG", optional),
            post_num: self.post,
            rest: self.rest.then(|| json!("rest")),
            kw: builders::chain("KW_ARG", keywords),
            kwrest: self.kwrest.then(|| builders::lvar("opts")),
            block: self.block.then(|| json!("blk")),
            ..Default::default()
        }
    }

    /// The parameter list source text.
    pub fn expected(&self) -> String {
        let mut params = Vec::new();
        params.extend((0..self.pre).map(|i| format!("a{i}")));
        params.extend(self.optional.iter().enumerate().map(|(i, v)| format!("o{i} = {v}")));
        if self.rest {
            params.push("*rest".to_string());
        }
        params.extend((0..self.post).map(|i| format!("p{i}")));
        params.extend(self.keywords.iter().enumerate().map(|(i, v)| match v {
            Some(v) => format!("k{i}: {v}"),
            None => format!("k{i}:"),
        }));
        if self.kwrest {
            params.push("**opts".to_string());
        }
        if self.block {
            params.push("&blk".to_string());
        }
        params.join(", ")
    }

    pub fn scope(&self, body: Json) -> Json {
        let tbl = Json::Array(self.table());
        builders::node("SCOPE", vec![tbl, self.args().to_json(), body])
    }
}

pub fn arb_param_shape() -> impl Strategy<Value = ParamShape> {
    (
        0usize..3,
        prop::collection::vec(0i64..100, 0..3),
        any::<bool>(),
        0usize..3,
        prop::collection::vec(prop::option::of(0i64..100), 0..3),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(pre, optional, rest, post, keywords, kwrest, block)| ParamShape {
            pre,
            optional,
            rest,
            post,
            keywords,
            kwrest,
            block,
        })
}

/// A `DEFN` over a generated parameter list, with its expected source.
pub fn arb_method_definition() -> impl Strategy<Value = (Json, String)> {
    (arb_identifier(), arb_param_shape()).prop_map(|(name, shape)| {
        let tree = builders::defn(&name, shape.scope(builders::node("NIL", vec![])));
        let expected = format!("def {name}({})\n  nil\nend", shape.expected());
        (tree, expected)
    })
}

/// Printable text including characters that need escaping in a double-quoted literal.
pub fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,16}",
        "[ -~]{0,16}",
        "[a-z\"\\\\#{}\n\t]{0,16}",
    ]
}

/// Binary operator chains, e.g. `((a + b) * c)`, with their expected source.
pub fn arb_operator_chain() -> impl Strategy<Value = (Json, String)> {
    let leaf = arb_identifier().prop_map(|name| (builders::vcall(&name), name));
    leaf.prop_recursive(4, 16, 2, |inner| {
        (inner.clone(), prop::sample::select(vec!["+", "-", "*", "==", "<"]), inner).prop_map(
            |((left, l), op, (right, r))| (builders::opcall(left, op, right), format!("({l} {op} {r})")),
        )
    })
}
