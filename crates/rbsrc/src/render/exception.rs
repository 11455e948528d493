use crate::{Context, Node, NodeKind, Unparser, UnparseResult, Value};

pub fn render_rescue(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let c = ctx.descend();
    let body = un.child(node, 0, c)?;
    let clauses = un.child(node, 1, c)?;
    let else_ = un
        .render_opt(node.child(2), Context::new())?
        .map(|e| format!("\nelse\n  {e}"))
        .unwrap_or_default();

    Ok(format!("begin\n  {body}\n{clauses}{else_}\nend"))
}

/// Whether a rescue body starts by binding the exception, as in `rescue => e`.
fn binds_exception(body: &Value) -> bool {
    let first = match body.as_node() {
        Some(block) if block.is(NodeKind::Block) => block.child(0),
        _ => body,
    };
    first.as_node().is_some_and(|n| n.child(1).is_kind(NodeKind::Errinfo))
}

pub fn render_resbody(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let c = ctx.descend();
    let exceptions = un.render_opt(node.child(0), c.inline())?;
    let body = node.child(1);

    let clause = if binds_exception(body) {
        let binding = un.render(body, c.bare_statements())?;
        match exceptions {
            Some(list) => format!("rescue {list} {binding}"),
            None => format!("rescue {binding}"),
        }
    } else {
        let exceptions = exceptions.map(|e| format!("{e};"));
        let head = exceptions.as_deref().unwrap_or(";");
        if body.is_kind(NodeKind::Block) {
            format!("rescue {head}{}", un.render(body, c)?)
        } else {
            format!("rescue {head} {}", un.render(body, c)?)
        }
    };

    match un.render_opt(node.child(2), c)? {
        Some(next) => Ok(format!("{clause}\n{next}")),
        None => Ok(clause),
    }
}

pub fn render_ensure(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let c = ctx.descend();
    Ok(format!(
        "begin\n  {}\nensure\n  {}\nend",
        un.child(node, 0, c)?,
        un.child(node, 1, c)?
    ))
}

pub fn render_errinfo(_: &Unparser, _: &Node, _: Context) -> UnparseResult {
    Ok("$!".to_string())
}
