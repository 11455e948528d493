use crate::{
    Dialect, NodeKind,
    render::{assign, pattern},
};

use super::Stratum;

/// Kinds that render as `^(expr)` inside a pattern.
const PINNABLE_EXPRESSIONS: [NodeKind; 8] = [
    NodeKind::Call,
    NodeKind::Qcall,
    NodeKind::Fcall,
    NodeKind::Vcall,
    NodeKind::Opcall,
    NodeKind::Iter,
    NodeKind::Block,
    NodeKind::Begin,
];

const PINNABLE_VARIABLES: [NodeKind; 3] = [NodeKind::Ivar, NodeKind::Cvar, NodeKind::Gvar];

/// `DASGN_CURR` is gone; `DASGN` takes over the local assignment rules.
pub(crate) fn build(parent: &'static Stratum) -> Stratum {
    let overlay = Stratum::overlay(parent, Dialect::Ruby3_1).rule(NodeKind::Dasgn, assign::render_lasgn);

    let overlay = PINNABLE_EXPRESSIONS
        .into_iter()
        .fold(overlay, |overlay, kind| overlay.wrap(kind, pattern::render_pinned_expression));

    PINNABLE_VARIABLES
        .into_iter()
        .fold(overlay, |overlay, kind| overlay.wrap(kind, pattern::render_pinned_variable))
        .build()
}
