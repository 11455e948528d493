use crate::{Context, Node, Unparser, UnparseResult};

fn range(op: &str, un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let c = ctx.descend();
    Ok(format!("({}{op}{})", un.child(node, 0, c)?, un.child(node, 1, c)?))
}

/// Flip-flops keep each bound grouped so the condition reads back as one.
fn flip_flop(op: &str, un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let c = ctx.descend();
    Ok(format!("({}){op}({})", un.child(node, 0, c)?, un.child(node, 1, c)?))
}

pub fn render_dot2(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    range("..", un, node, ctx)
}

pub fn render_dot3(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    range("...", un, node, ctx)
}

pub fn render_flip2(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    flip_flop("..", un, node, ctx)
}

pub fn render_flip3(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    flip_flop("...", un, node, ctx)
}
