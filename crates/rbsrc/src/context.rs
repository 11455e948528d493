//! Formatting intent threaded through recursive rendering.
//!
//! A [`Context`] is a small `Copy` value. Renderers never mutate the one they
//! receive; they derive a new one for each child. Positional flags describe
//! the slot a child sits in and are dropped by [`Context::descend`], so they
//! only reach a grandchild when a renderer forwards them on purpose. Scoped
//! flags (`pattern`, `destructure`) hold for a whole subtree.

/// How a literal sequence renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ListStyle {
    /// `[a, b]`
    #[default]
    Bracketed,
    /// `a, b`
    Inline,
    /// `a, b` where the last element is in keyword position.
    Arguments,
}

impl ListStyle {
    pub fn is_inline(&self) -> bool {
        !matches!(self, ListStyle::Bracketed)
    }
}

/// How a hash literal renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HashStyle {
    #[default]
    Braced,
    /// Trailing argument: may render as bare keyword arguments.
    Keywords,
}

/// Whether a statement sequence keeps its `begin ... end` wrapper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Statements {
    #[default]
    Wrapped,
    Bare,
}

/// How a local assignment renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Binding {
    /// `(a = 1)`
    #[default]
    Grouped,
    /// `a = 1`
    Bare,
    /// `a: 1`
    Keyword,
}

/// How a plain string segment renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Quoting {
    /// `"a\n"`
    #[default]
    Quoted,
    /// `a\n`
    Escaped,
    /// The raw text, as inside a regexp.
    Raw,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Context {
    pub list: ListStyle,
    pub hash: HashStyle,
    pub statements: Statements,
    pub binding: Binding,
    pub quoting: Quoting,
    /// Inside a pattern: `|` alternation, pinned locals, `value => name` bindings.
    pub pattern: bool,
    /// Inside a parameter destructuring group.
    pub destructure: bool,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for an ordinary child: positional flags are dropped.
    #[must_use]
    pub fn descend(self) -> Self {
        Self {
            pattern: self.pattern,
            destructure: self.destructure,
            ..Self::default()
        }
    }

    /// Context for a plain expression, leaving pattern mode.
    #[must_use]
    pub fn expression(self) -> Self {
        Self {
            pattern: false,
            ..self.descend()
        }
    }

    #[must_use]
    pub fn with_list(self, list: ListStyle) -> Self {
        Self { list, ..self }
    }

    #[must_use]
    pub fn inline(self) -> Self {
        self.with_list(ListStyle::Inline)
    }

    #[must_use]
    pub fn arguments(self) -> Self {
        self.with_list(ListStyle::Arguments)
    }

    #[must_use]
    pub fn with_hash(self, hash: HashStyle) -> Self {
        Self { hash, ..self }
    }

    #[must_use]
    pub fn with_statements(self, statements: Statements) -> Self {
        Self { statements, ..self }
    }

    #[must_use]
    pub fn bare_statements(self) -> Self {
        self.with_statements(Statements::Bare)
    }

    #[must_use]
    pub fn with_binding(self, binding: Binding) -> Self {
        Self { binding, ..self }
    }

    #[must_use]
    pub fn with_quoting(self, quoting: Quoting) -> Self {
        Self { quoting, ..self }
    }

    #[must_use]
    pub fn in_pattern(self) -> Self {
        Self { pattern: true, ..self }
    }

    #[must_use]
    pub fn in_destructure(self) -> Self {
        Self {
            destructure: true,
            ..self
        }
    }

    #[must_use]
    pub fn without_destructure(self) -> Self {
        Self {
            destructure: false,
            ..self
        }
    }
}
