use crate::{Dialect, NodeKind, render::assign};

use super::Stratum;

pub(crate) fn build(parent: &'static Stratum) -> Stratum {
    Stratum::overlay(parent, Dialect::Ruby2_7_2)
        .rule(NodeKind::OpAsgn2, assign::render_op_asgn2)
        .build()
}
