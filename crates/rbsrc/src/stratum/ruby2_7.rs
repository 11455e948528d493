use crate::{
    Dialect, NodeKind,
    render::{assign, collection, pattern},
};

use super::Stratum;

/// `LIST` replaces `ARRAY` and pattern matching arrives.
pub(crate) fn build(parent: &'static Stratum) -> Stratum {
    Stratum::overlay(parent, Dialect::Ruby2_7)
        .rule(NodeKind::List, collection::render_list)
        .rule(NodeKind::Zlist, collection::render_zlist)
        .rule(NodeKind::Case3, pattern::render_case3)
        .rule(NodeKind::In, pattern::render_in)
        .rule(NodeKind::Aryptn, pattern::render_aryptn)
        .rule(NodeKind::Hshptn, pattern::render_hshptn)
        .wrap(NodeKind::Masgn, assign::render_masgn_padded)
        .build()
}
