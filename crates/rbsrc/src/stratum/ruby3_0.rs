use crate::{
    Dialect, NodeKind,
    render::{collection, literal, pattern},
};

use super::Stratum;

pub(crate) fn build(parent: &'static Stratum) -> Stratum {
    Stratum::overlay(parent, Dialect::Ruby3_0)
        .rule(NodeKind::Fndptn, pattern::render_fndptn)
        .wrap(NodeKind::Dstr, literal::render_dstr_literal)
        .wrap(NodeKind::Hash, collection::render_hash_keywords)
        .wrap(NodeKind::Case3, pattern::render_case3_rightward)
        .build()
}
