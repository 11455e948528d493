use crate::{Context, Node, Unparser, UnparseResult, render::name};

/// A local reference. Pattern mode pins it, as in `in ^a`.
fn local(node: &Node, ctx: Context) -> String {
    let name = node.child(0).to_text();
    if ctx.pattern { format!("^{name}") } else { name }
}

pub fn render_lvar(_: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    Ok(local(node, ctx))
}

pub fn render_dvar(_: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    Ok(local(node, ctx))
}

/// `IVAR`, `CVAR`, `GVAR`, `CONST`, `NTH_REF` and `BACK_REF`.
pub fn render_variable(_: &Unparser, node: &Node, _: Context) -> UnparseResult {
    Ok(node.child(0).to_text())
}

pub fn render_colon2(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let mid = name(node, 1)?;
    match un.render_opt(node.child(0), ctx.descend())? {
        Some(head) => Ok(format!("{head}::{mid}")),
        None => Ok(mid.to_string()),
    }
}

pub fn render_colon3(_: &Unparser, node: &Node, _: Context) -> UnparseResult {
    Ok(format!("::{}", name(node, 0)?))
}
