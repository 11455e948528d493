use crate::{
    Dialect, NodeKind,
    render::{
        assign, call, collection, control, definition, exception, literal, params, range, reference,
        sequence,
    },
};

use super::{RenderFn, Stratum};

/// Every kind the 2.6 grammar produces. `ERROR` is never rendered.
const BASE: &[(NodeKind, RenderFn)] = &[
    (NodeKind::Scope, params::render_scope),
    (NodeKind::Args, params::render_args),
    (NodeKind::ArgsAux, params::render_args_aux),
    (NodeKind::OptArg, params::render_opt_arg),
    (NodeKind::KwArg, params::render_kw_arg),
    (NodeKind::Block, sequence::render_block),
    (NodeKind::Begin, sequence::render_begin),
    (NodeKind::If, control::render_if),
    (NodeKind::Unless, control::render_unless),
    (NodeKind::Case, control::render_case),
    (NodeKind::Case2, control::render_case2),
    (NodeKind::When, control::render_when),
    (NodeKind::While, control::render_while),
    (NodeKind::Until, control::render_until),
    (NodeKind::Iter, control::render_iter),
    (NodeKind::For, control::render_for),
    (NodeKind::ForMasgn, control::render_for_masgn),
    (NodeKind::Break, control::render_break),
    (NodeKind::Next, control::render_next),
    (NodeKind::Return, control::render_return),
    (NodeKind::Redo, control::render_redo),
    (NodeKind::Retry, control::render_retry),
    (NodeKind::And, control::render_and),
    (NodeKind::Or, control::render_or),
    (NodeKind::Rescue, exception::render_rescue),
    (NodeKind::Resbody, exception::render_resbody),
    (NodeKind::Ensure, exception::render_ensure),
    (NodeKind::Errinfo, exception::render_errinfo),
    (NodeKind::Masgn, assign::render_masgn),
    (NodeKind::Postarg, assign::render_postarg),
    (NodeKind::Lasgn, assign::render_lasgn),
    (NodeKind::DasgnCurr, assign::render_lasgn),
    (NodeKind::Dasgn, assign::render_variable_assign),
    (NodeKind::Iasgn, assign::render_variable_assign),
    (NodeKind::Cvasgn, assign::render_variable_assign),
    (NodeKind::Gasgn, assign::render_variable_assign),
    (NodeKind::Cdecl, assign::render_cdecl),
    (NodeKind::OpAsgn1, assign::render_op_asgn1),
    (NodeKind::OpAsgnAnd, assign::render_op_asgn_and),
    (NodeKind::OpAsgnOr, assign::render_op_asgn_or),
    (NodeKind::OpCdecl, assign::render_op_cdecl),
    (NodeKind::Attrasgn, assign::render_attrasgn),
    (NodeKind::Call, call::render_call),
    (NodeKind::Qcall, call::render_qcall),
    (NodeKind::Opcall, call::render_opcall),
    (NodeKind::Fcall, call::render_fcall),
    (NodeKind::Vcall, call::render_vcall),
    (NodeKind::Super, call::render_super),
    (NodeKind::Zsuper, call::render_zsuper),
    (NodeKind::Yield, call::render_yield),
    (NodeKind::Argscat, call::render_argscat),
    (NodeKind::Argspush, call::render_argspush),
    (NodeKind::Splat, call::render_splat),
    (NodeKind::BlockPass, call::render_block_pass),
    (NodeKind::Match, call::render_match),
    (NodeKind::Match2, call::render_match2),
    (NodeKind::Match3, call::render_match3),
    (NodeKind::Defined, call::render_defined),
    (NodeKind::Array, collection::render_list),
    (NodeKind::Zarray, collection::render_zlist),
    (NodeKind::Values, collection::render_values),
    (NodeKind::Hash, collection::render_hash),
    (NodeKind::Lit, literal::render_lit),
    (NodeKind::Str, literal::render_str),
    (NodeKind::Xstr, literal::render_xstr),
    (NodeKind::Dstr, literal::render_dstr),
    (NodeKind::Dxstr, literal::render_dxstr),
    (NodeKind::Dsym, literal::render_dsym),
    (NodeKind::Dregx, literal::render_dregx),
    (NodeKind::Once, literal::render_once),
    (NodeKind::Evstr, literal::render_evstr),
    (NodeKind::Nil, literal::render_nil),
    (NodeKind::True, literal::render_true),
    (NodeKind::False, literal::render_false),
    (NodeKind::SelfExpr, literal::render_self),
    (NodeKind::Lvar, reference::render_lvar),
    (NodeKind::Dvar, reference::render_dvar),
    (NodeKind::Ivar, reference::render_variable),
    (NodeKind::Cvar, reference::render_variable),
    (NodeKind::Gvar, reference::render_variable),
    (NodeKind::Const, reference::render_variable),
    (NodeKind::NthRef, reference::render_variable),
    (NodeKind::BackRef, reference::render_variable),
    (NodeKind::Colon2, reference::render_colon2),
    (NodeKind::Colon3, reference::render_colon3),
    (NodeKind::Defn, definition::render_defn),
    (NodeKind::Defs, definition::render_defs),
    (NodeKind::Class, definition::render_class),
    (NodeKind::Module, definition::render_module),
    (NodeKind::Sclass, definition::render_sclass),
    (NodeKind::Lambda, definition::render_lambda),
    (NodeKind::Alias, definition::render_alias),
    (NodeKind::Valias, definition::render_valias),
    (NodeKind::Undef, definition::render_undef),
    (NodeKind::Postexe, definition::render_postexe),
    (NodeKind::Dot2, range::render_dot2),
    (NodeKind::Dot3, range::render_dot3),
    (NodeKind::Flip2, range::render_flip2),
    (NodeKind::Flip3, range::render_flip3),
];

pub(crate) fn build() -> Stratum {
    Stratum::base(Dialect::Ruby2_6, BASE)
}
