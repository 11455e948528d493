use crate::{
    Context, HashStyle, ListStyle, Node, Unparser, UnparseResult,
    render::name,
};

/// Renders an argument slot: a bare list whose last element may be keyword arguments.
fn arguments(un: &Unparser, node: &Node, index: usize, ctx: Context) -> UnparseResult {
    un.child(node, index, ctx.descend().arguments())
}

fn method_call(separator: &str, un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let receiver = un.child(node, 0, ctx.descend())?;
    let mid = name(node, 1)?;
    let args = arguments(un, node, 2, ctx)?;

    Ok(format!("{receiver}{separator}{mid}({args})"))
}

pub fn render_call(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    method_call(".", un, node, ctx)
}

pub fn render_qcall(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    method_call("&.", un, node, ctx)
}

pub fn render_opcall(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let c = ctx.descend();
    let op = name(node, 1)?;
    let left = un.child(node, 0, c)?;

    match un.render_opt(node.child(2), c.inline())? {
        None => Ok(format!("({}{left})", op.strip_suffix('@').unwrap_or(op))),
        Some(right) => Ok(format!("({left} {op} {right})")),
    }
}

pub fn render_fcall(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let mid = name(node, 0)?;
    let args = arguments(un, node, 1, ctx)?;

    if mid == "[]" {
        Ok(format!("self[{args}]"))
    } else {
        Ok(format!("{mid}({args})"))
    }
}

pub fn render_vcall(_: &Unparser, node: &Node, _: Context) -> UnparseResult {
    Ok(name(node, 0)?.to_string())
}

pub fn render_super(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    Ok(format!("super({})", arguments(un, node, 0, ctx)?))
}

pub fn render_zsuper(_: &Unparser, _: &Node, _: Context) -> UnparseResult {
    Ok("super".to_string())
}

pub fn render_yield(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    Ok(format!("yield({})", arguments(un, node, 0, ctx)?))
}

/// Splat concatenations are bare inside an argument or inline list.
///
/// Elsewhere, as the value of `x = *a, b`, they render as the array literal
/// `[*a, b]`, which parses to the same node.
fn splat_list(ctx: Context, items: String) -> String {
    if ctx.list.is_inline() {
        items
    } else {
        format!("[{items}]")
    }
}

/// The list mode handed to a concatenated list operand.
fn operand_list(ctx: Context) -> ListStyle {
    if ctx.list.is_inline() { ctx.list } else { ListStyle::Inline }
}

pub fn render_argscat(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let c = ctx.descend();
    let head = un.child(node, 0, c.inline())?;
    let body = node.child(1);

    let items = if body.kind().is_some_and(|k| k.is_list()) {
        format!("{head}, {}", un.render(body, c.with_list(operand_list(ctx)))?)
    } else {
        format!("{head}, *{}", un.render(body, c)?)
    };
    Ok(splat_list(ctx, items))
}

pub fn render_argspush(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let c = ctx.descend();
    let head = un.child(node, 0, c.inline())?;
    let body_ctx = match ctx.list {
        ListStyle::Arguments => c.with_hash(HashStyle::Keywords),
        _ => c,
    };

    Ok(splat_list(ctx, format!("{head}, {}", un.child(node, 1, body_ctx)?)))
}

pub fn render_splat(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    Ok(format!("*{}", un.child(node, 0, ctx.descend())?))
}

pub fn render_block_pass(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let c = ctx.descend();
    let list = match ctx.list {
        ListStyle::Bracketed => ListStyle::Inline,
        list => list,
    };
    let body = un.child(node, 1, c)?;

    match un.render_opt(node.child(0), c.with_list(list))? {
        Some(head) => Ok(format!("{head}, &{body}")),
        None => Ok(format!("&{body}")),
    }
}

pub fn render_match(_: &Unparser, node: &Node, _: Context) -> UnparseResult {
    Ok(node.child(0).inspect())
}

pub fn render_match2(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let c = ctx.descend();
    Ok(format!("({} =~ {})", un.child(node, 0, c)?, un.child(node, 1, c)?))
}

pub fn render_match3(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let c = ctx.descend();
    Ok(format!("({} =~ {})", un.child(node, 1, c)?, un.child(node, 0, c)?))
}

pub fn render_defined(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    Ok(format!("defined?({})", un.child(node, 0, ctx.descend())?))
}
