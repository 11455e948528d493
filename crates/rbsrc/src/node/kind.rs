use std::str::FromStr;

use strum::{AsRefStr, EnumIter, EnumString};

/// Node tags produced by the Ruby 2.6 to 3.1 abstract syntax trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Scope,
    Block,
    If,
    Unless,
    Case,
    #[strum(to_string = "CASE2")]
    Case2,
    #[strum(to_string = "CASE3")]
    Case3,
    When,
    In,
    While,
    Until,
    Iter,
    For,
    ForMasgn,
    Break,
    Next,
    Redo,
    Retry,
    Begin,
    Rescue,
    Resbody,
    Ensure,
    And,
    Or,
    Masgn,
    Lasgn,
    Dasgn,
    DasgnCurr,
    Iasgn,
    Cvasgn,
    Gasgn,
    Cdecl,
    #[strum(to_string = "OP_ASGN1")]
    OpAsgn1,
    #[strum(to_string = "OP_ASGN2")]
    OpAsgn2,
    OpAsgnAnd,
    OpAsgnOr,
    OpCdecl,
    Call,
    Opcall,
    Fcall,
    Vcall,
    Qcall,
    Super,
    Zsuper,
    Array,
    Zarray,
    List,
    Zlist,
    Values,
    Hash,
    Return,
    Yield,
    Lvar,
    Dvar,
    Ivar,
    Const,
    Cvar,
    Gvar,
    NthRef,
    BackRef,
    Match,
    #[strum(to_string = "MATCH2")]
    Match2,
    #[strum(to_string = "MATCH3")]
    Match3,
    Lit,
    Str,
    Dstr,
    Xstr,
    Dxstr,
    Evstr,
    Dregx,
    Once,
    Args,
    ArgsAux,
    OptArg,
    KwArg,
    Postarg,
    Argscat,
    Argspush,
    Splat,
    BlockPass,
    Defn,
    Defs,
    Alias,
    Valias,
    Undef,
    Class,
    Module,
    Sclass,
    #[strum(to_string = "COLON2")]
    Colon2,
    #[strum(to_string = "COLON3")]
    Colon3,
    #[strum(to_string = "DOT2")]
    Dot2,
    #[strum(to_string = "DOT3")]
    Dot3,
    #[strum(to_string = "FLIP2")]
    Flip2,
    #[strum(to_string = "FLIP3")]
    Flip3,
    #[strum(to_string = "SELF")]
    SelfExpr,
    Nil,
    True,
    False,
    Errinfo,
    Defined,
    Postexe,
    Dsym,
    Attrasgn,
    Lambda,
    Aryptn,
    Hshptn,
    Fndptn,
    Error,
    /// A tag outside the known catalogue. Dispatch reports it as unsupported.
    #[strum(disabled)]
    Unknown,
}

impl NodeKind {
    /// Resolves a tag, accepting an optional `NODE_` prefix.
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.strip_prefix("NODE_").unwrap_or(tag);
        NodeKind::from_str(tag).unwrap_or(NodeKind::Unknown)
    }

    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    /// Literal-collection kinds whose children end with a `nil` terminator.
    pub fn is_list(&self) -> bool {
        matches!(self, NodeKind::Array | NodeKind::List)
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    #[rstest]
    #[case::simple("LIT", NodeKind::Lit)]
    #[case::prefixed("NODE_LIT", NodeKind::Lit)]
    #[case::underscore("DASGN_CURR", NodeKind::DasgnCurr)]
    #[case::digit("OP_ASGN1", NodeKind::OpAsgn1)]
    #[case::digit_word("CASE3", NodeKind::Case3)]
    #[case::self_("SELF", NodeKind::SelfExpr)]
    #[case::three_words("OP_ASGN_AND", NodeKind::OpAsgnAnd)]
    #[case::unknown("SOMETHING_ELSE", NodeKind::Unknown)]
    #[case::lowercase("lit", NodeKind::Unknown)]
    fn test_from_tag(#[case] tag: &str, #[case] expected: NodeKind) {
        assert_eq!(NodeKind::from_tag(tag), expected);
    }

    #[test]
    fn test_tags_round_trip() {
        for kind in NodeKind::iter().filter(|k| *k != NodeKind::Unknown) {
            assert_eq!(NodeKind::from_tag(kind.as_str()), kind, "{kind}");
        }
    }
}
