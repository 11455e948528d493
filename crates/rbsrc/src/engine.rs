use crate::{
    Context, Dialect, Node, NodeInput, Options, Value, Version,
    error::{UnparseError, UnparseResult},
    stratum::{self, Stratum},
};

/// An unparse session bound to one stratum.
///
/// Cheap to copy; the stratum it points to is shared and immutable.
#[derive(Debug, Clone, Copy)]
pub struct Unparser {
    stratum: &'static Stratum,
}

impl Default for Unparser {
    fn default() -> Self {
        Self::for_dialect(Dialect::latest())
    }
}

impl Unparser {
    pub fn new(version: &Version) -> UnparseResult<Self> {
        let dialect = Dialect::for_version(version).inspect_err(|_| {
            tracing::debug!(%version, "No stratum for version");
        })?;
        tracing::debug!(%version, %dialect, "Resolved dialect");
        Ok(Self::for_dialect(dialect))
    }

    pub fn with_options(options: &Options) -> UnparseResult<Self> {
        Self::new(&options.dialect)
    }

    pub fn for_dialect(dialect: Dialect) -> Self {
        Self {
            stratum: stratum::for_dialect(dialect),
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.stratum.dialect()
    }

    pub fn stratum(&self) -> &'static Stratum {
        self.stratum
    }

    /// Renders a whole tree from a fresh context.
    pub fn unparse(&self, tree: impl NodeInput) -> UnparseResult {
        let node = tree.into_node()?;
        self.render_node(&node, Context::new())
    }

    /// Renders a child value. Anything that is not a node passes through as text.
    pub fn render(&self, value: &Value, ctx: Context) -> UnparseResult {
        match value {
            Value::Node(node) => self.render_node(node, ctx),
            other => Ok(other.to_text()),
        }
    }

    pub fn render_node(&self, node: &Node, ctx: Context) -> UnparseResult {
        tracing::trace!(kind = node.tag(), "render");

        match self.stratum.rule(node.kind()) {
            Some(rule) => rule.apply(self, node, ctx),
            None => {
                tracing::debug!(kind = node.tag(), dialect = %self.dialect(), "Unsupported construct");
                Err(UnparseError::unsupported(node.tag()))
            }
        }
    }

    /// Like [`Unparser::render`], but `None` for the absent marker.
    pub fn render_opt(&self, value: &Value, ctx: Context) -> UnparseResult<Option<String>> {
        match value {
            Value::Nil => Ok(None),
            value => self.render(value, ctx).map(Some),
        }
    }

    pub fn render_all(&self, values: &[Value], ctx: Context) -> UnparseResult<Vec<String>> {
        values.iter().map(|v| self.render(v, ctx)).collect()
    }

    /// Renders `node.child(index)`.
    pub fn child(&self, node: &Node, index: usize, ctx: Context) -> UnparseResult {
        self.render(node.child(index), ctx)
    }
}
