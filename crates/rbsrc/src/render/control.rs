use crate::{Context, Node, NodeKind, Unparser, UnparseResult, Value, render::params};

fn conditional(keyword: &str, un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let c = ctx.descend();
    let cond = un.child(node, 0, c)?;
    let body = un.child(node, 1, c)?;
    let else_ = un
        .render_opt(node.child(2), c)?
        .map(|e| format!("\nelse\n  {e}"))
        .unwrap_or_default();

    Ok(format!("{keyword} {cond}\n  {body}{else_}\nend"))
}

pub fn render_if(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    conditional("if", un, node, ctx)
}

pub fn render_unless(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    conditional("unless", un, node, ctx)
}

pub fn render_case(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let c = ctx.descend();
    let head = un.child(node, 0, c)?;
    let body = un.child(node, 1, c)?;
    let else_ = un
        .render_opt(node.child(2), c)?
        .map(|e| format!("\nelse\n  {e}"))
        .unwrap_or_default();

    Ok(format!("case {head}\n{body}{else_}\nend"))
}

pub fn render_case2(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    Ok(format!("case\n{}\nend", un.child(node, 1, ctx.descend())?))
}

/// The clause after a `when`/`in` body: another clause of `kind`, an `else` branch, or nothing.
pub(crate) fn clause_tail(un: &Unparser, next: &Value, kind: NodeKind, ctx: Context) -> UnparseResult {
    match next {
        Value::Nil => Ok(String::new()),
        next if next.is_kind(kind) => un.render(next, ctx),
        next => Ok(format!("else\n  {}", un.render(next, ctx)?)),
    }
}

pub fn render_when(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let c = ctx.descend();
    let head = un.child(node, 0, c.inline())?;
    let body = un.child(node, 1, c)?;
    let next = clause_tail(un, node.child(2), NodeKind::When, c)?;

    Ok(format!("when {head}\n  {body}\n{next}"))
}

fn conditional_loop(keyword: &str, un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let c = ctx.descend();
    let cond = un.child(node, 0, c)?;
    let body = un.child(node, 1, c)?;

    if node.child(2).as_bool().unwrap_or(true) {
        Ok(format!("{keyword} {cond}\n  {body}\nend"))
    } else {
        Ok(format!("begin\n  {body}\nend {keyword} {cond}"))
    }
}

pub fn render_while(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    conditional_loop("while", un, node, ctx)
}

pub fn render_until(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    conditional_loop("until", un, node, ctx)
}

pub fn render_iter(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let c = ctx.descend();
    Ok(format!("{} {{ {} }}", un.child(node, 0, c)?, un.child(node, 1, c)?))
}

pub fn render_for(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let c = ctx.descend();
    let iter = un.child(node, 0, c)?;
    let scope = params::scope(un, crate::render::required(node, 1)?, c)?;

    Ok(format!("for {} in {iter} do\n  {}\nend", scope.params, scope.body))
}

/// The parameter slot of a `for` loop; rendered through its `MASGN`.
pub fn render_for_masgn(_: &Unparser, _: &Node, _: Context) -> UnparseResult {
    Ok(String::new())
}

fn jump(keyword: &str, un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    Ok(format!("{keyword} {}", un.child(node, 0, ctx.descend())?))
}

pub fn render_break(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    jump("break", un, node, ctx)
}

pub fn render_next(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    jump("next", un, node, ctx)
}

pub fn render_return(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    Ok(format!("({})", jump("return", un, node, ctx)?))
}

pub fn render_redo(_: &Unparser, _: &Node, _: Context) -> UnparseResult {
    Ok("redo".to_string())
}

pub fn render_retry(_: &Unparser, _: &Node, _: Context) -> UnparseResult {
    Ok("retry".to_string())
}

pub fn render_and(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    Ok(format!("({})", un.render_all(node.children(), ctx.descend())?.join(" && ")))
}

pub fn render_or(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let alternatives = un.render_all(node.children(), ctx.descend())?;
    if ctx.pattern {
        Ok(alternatives.join(" | "))
    } else {
        Ok(format!("({})", alternatives.join(" || ")))
    }
}
