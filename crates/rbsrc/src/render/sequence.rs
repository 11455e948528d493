use crate::{Context, Node, NodeKind, Statements, Unparser, UnparseResult};

pub fn render_block(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let statements = node.children();
    let Some((head, rest)) = statements.split_first() else {
        return Ok(String::new());
    };
    let c = ctx.descend();

    if ctx.statements == Statements::Bare {
        let shown = if head.is_kind(NodeKind::Begin) { rest } else { statements };
        return Ok(un.render_all(shown, c)?.join("; "));
    }

    if rest.first().is_some_and(|v| v.is_kind(NodeKind::Begin)) {
        // BEGIN { ... }
        let body = head.as_node().map(|h| h.child(0)).unwrap_or(head);
        return Ok(format!("BEGIN {{ {} }}", un.render(body, c)?));
    }

    if head.is_kind(NodeKind::Begin) {
        Ok(format!("begin; {}; end", un.render_all(rest, c)?.join("; ")))
    } else if rest.is_empty() {
        Ok(format!("{};", un.render(head, c)?))
    } else {
        Ok(format!("begin {}; end", un.render_all(statements, c)?.join("; ")))
    }
}

pub fn render_begin(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    match un.render_opt(node.child(0), ctx.descend())? {
        Some(body) => Ok(format!("begin\n  {body}\nend")),
        None => Ok(String::new()),
    }
}
