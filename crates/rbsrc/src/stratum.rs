//! Version-stratified rule tables.
//!
//! Each [`Stratum`] maps node kinds to rules. The base stratum is built from a
//! flat table; every later one starts from a copy of its parent's rules and
//! adds or replaces entries. A replacing rule can be a [`Rule::Override`],
//! which receives the rule it replaced and may call it directly.
use std::{fmt, sync::Arc, sync::LazyLock};

use rustc_hash::FxHashMap;

use crate::{
    Context, Dialect, Node, NodeKind, Unparser,
    error::UnparseResult,
};

mod ruby2_6;
mod ruby2_7;
mod ruby2_7_2;
mod ruby3_0;
mod ruby3_1;

pub type RenderFn = fn(&Unparser, &Node, Context) -> UnparseResult;
pub type OverrideFn = fn(&Unparser, &Node, Context, &Rule) -> UnparseResult;

#[derive(Clone)]
pub enum Rule {
    Render(RenderFn),
    /// Replaces `parent`, which the override receives as an argument.
    Override { render: OverrideFn, parent: Arc<Rule> },
}

impl Rule {
    pub fn apply(&self, unparser: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
        match self {
            Rule::Render(render) => render(unparser, node, ctx),
            Rule::Override { render, parent } => render(unparser, node, ctx, parent),
        }
    }

    /// Number of overrides stacked on the base renderer.
    pub fn depth(&self) -> usize {
        match self {
            Rule::Render(_) => 0,
            Rule::Override { parent, .. } => parent.depth() + 1,
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Render(_) => write!(f, "Render"),
            Rule::Override { parent, .. } => f.debug_tuple("Override").field(parent).finish(),
        }
    }
}

/// An immutable rule table for one dialect.
pub struct Stratum {
    dialect: Dialect,
    parent: Option<&'static Stratum>,
    rules: FxHashMap<NodeKind, Rule>,
}

impl Stratum {
    pub(crate) fn base(dialect: Dialect, table: &[(NodeKind, RenderFn)]) -> Self {
        let rules = table.iter().map(|(kind, render)| (*kind, Rule::Render(*render))).collect();
        Self {
            dialect,
            parent: None,
            rules,
        }
    }

    pub(crate) fn overlay(parent: &'static Stratum, dialect: Dialect) -> Overlay {
        Overlay {
            stratum: Stratum {
                dialect,
                parent: Some(parent),
                rules: parent.rules.clone(),
            },
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn parent(&self) -> Option<&'static Stratum> {
        self.parent
    }

    pub fn rule(&self, kind: NodeKind) -> Option<&Rule> {
        self.rules.get(&kind)
    }

    pub fn supports(&self, kind: NodeKind) -> bool {
        self.rules.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Debug for Stratum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stratum")
            .field("dialect", &self.dialect)
            .field("parent", &self.parent.map(|p| p.dialect))
            .field("rules", &self.rules.len())
            .finish()
    }
}

/// Builder for a stratum derived from a parent.
pub(crate) struct Overlay {
    stratum: Stratum,
}

impl Overlay {
    /// Adds a renderer for a kind the parent does not know, or replaces one outright.
    pub fn rule(mut self, kind: NodeKind, render: RenderFn) -> Self {
        self.stratum.rules.insert(kind, Rule::Render(render));
        self
    }

    /// Replaces the parent's renderer with one that may delegate to it.
    pub fn wrap(mut self, kind: NodeKind, render: OverrideFn) -> Self {
        match self.stratum.rules.remove(&kind) {
            Some(parent) => {
                self.stratum.rules.insert(
                    kind,
                    Rule::Override {
                        render,
                        parent: Arc::new(parent),
                    },
                );
            }
            None => {
                tracing::warn!(%kind, dialect = %self.stratum.dialect, "No rule to wrap");
            }
        }
        self
    }

    pub fn build(self) -> Stratum {
        tracing::debug!(
            dialect = %self.stratum.dialect,
            rules = self.stratum.rules.len(),
            "Built stratum"
        );
        self.stratum
    }
}

static RUBY_2_6: LazyLock<Stratum> = LazyLock::new(ruby2_6::build);
static RUBY_2_7: LazyLock<Stratum> = LazyLock::new(|| ruby2_7::build(&RUBY_2_6));
static RUBY_2_7_2: LazyLock<Stratum> = LazyLock::new(|| ruby2_7_2::build(&RUBY_2_7));
static RUBY_3_0: LazyLock<Stratum> = LazyLock::new(|| ruby3_0::build(&RUBY_2_7_2));
static RUBY_3_1: LazyLock<Stratum> = LazyLock::new(|| ruby3_1::build(&RUBY_3_0));

/// The shared stratum for `dialect`, built on first use.
pub fn for_dialect(dialect: Dialect) -> &'static Stratum {
    match dialect {
        Dialect::Ruby2_6 => &RUBY_2_6,
        Dialect::Ruby2_7 => &RUBY_2_7,
        Dialect::Ruby2_7_2 => &RUBY_2_7_2,
        Dialect::Ruby3_0 => &RUBY_3_0,
        Dialect::Ruby3_1 => &RUBY_3_1,
    }
}
