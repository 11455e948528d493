//! Pattern matching, from the 2.7 grammar on.
//!
//! Everything below an `in` head renders with `pattern` set: locals pin,
//! `OR` becomes `|`, and a local assignment with a value reads `value => name`.
use crate::{
    Context, Node, NodeKind, Rule, Unparser, UnparseResult, Value,
    error::UnparseError,
    node::special,
    quote,
    render::{collection, control},
};

pub fn render_case3(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let c = ctx.expression();
    let head = un.child(node, 0, c)?;
    let body = un.child(node, 1, c)?;
    let else_ = un
        .render_opt(node.child(2), c)?
        .map(|e| format!("\nelse\n{e}"))
        .unwrap_or_default();

    Ok(format!("case {head}\n{body}{else_}\nend"))
}

/// From 3.0 a single `in` clause without a body is the rightward form `value => pattern`.
pub fn render_case3_rightward(un: &Unparser, node: &Node, ctx: Context, parent: &Rule) -> UnparseResult {
    let rightward = node.child(2).is_nil()
        && node
            .child_node(1)
            .is_some_and(|clause| clause.is(NodeKind::In) && clause.child(1).is_nil() && clause.child(2).is_nil());

    if !rightward {
        return parent.apply(un, node, ctx);
    }

    let c = ctx.expression();
    let head = un.child(node, 0, c)?;
    let clause = un.child(node, 1, c)?;
    let pattern = clause.strip_prefix("in ").unwrap_or(&clause);

    Ok(format!("{head} => {pattern}"))
}

/// The head of an `in` clause, with its guard when it has one.
fn clause_head(un: &Unparser, head: &Value, ctx: Context) -> UnparseResult {
    let pattern_ctx = ctx.descend().in_pattern().inline();

    let guard = head
        .as_node()
        .filter(|h| h.is(NodeKind::If) || h.is(NodeKind::Unless));

    match guard {
        Some(guard) => {
            let keyword = if guard.is(NodeKind::If) { "if" } else { "unless" };
            let pattern = un.child(guard, 1, pattern_ctx)?;
            let cond = un.child(guard, 0, ctx.expression())?;
            Ok(format!("{pattern} {keyword} {cond}"))
        }
        None => un.render(head, pattern_ctx),
    }
}

pub fn render_in(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let c = ctx.expression();
    let head = clause_head(un, node.child(0), ctx)?;
    let body = un.child(node, 1, c)?;
    let next = control::clause_tail(un, node.child(2), NodeKind::In, c)?;

    Ok(format!("in {head}\n  {body}\n{next}"))
}

/// A splat slot inside an array or find pattern.
fn splat(un: &Unparser, value: &Value, ctx: Context) -> UnparseResult<Option<String>> {
    match value {
        Value::Nil => Ok(None),
        rest if rest.is_symbol(special::NO_NAME_REST) => Ok(Some("*".to_string())),
        rest => Ok(Some(format!("*{}", un.render(rest, ctx)?))),
    }
}

pub fn render_aryptn(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let c = ctx.descend().in_pattern();
    let constant = un.render_opt(node.child(0), c)?.unwrap_or_default();

    let parts = [
        un.render_opt(node.child(1), c.inline())?,
        splat(un, node.child(2), c)?,
        un.render_opt(node.child(3), c.inline())?,
    ];
    let parts = parts.into_iter().flatten().filter(|p| !p.is_empty()).collect::<Vec<_>>();

    Ok(format!("{constant}[{}]", parts.join(", ")))
}

/// From 3.0: `in [*, x, *post]`.
pub fn render_fndptn(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let c = ctx.descend().in_pattern();
    let constant = un.render_opt(node.child(0), c)?.unwrap_or_default();

    let parts = [
        splat(un, node.child(1), c)?,
        un.render_opt(node.child(2), c.inline())?,
        splat(un, node.child(3), c)?,
    ];
    let parts = parts.into_iter().flatten().filter(|p| !p.is_empty()).collect::<Vec<_>>();

    Ok(format!("{constant}[{}]", parts.join(", ")))
}

/// The `key:` label of a hash pattern entry.
fn pattern_key(key: &Value) -> UnparseResult {
    let name = match key.as_node() {
        Some(k) if k.is(NodeKind::Lit) || k.is(NodeKind::Str) => k.child(0).as_str(),
        _ => key.as_str(),
    };

    name.map(quote::label).ok_or_else(|| {
        UnparseError::malformed(format!("HSHPTN expects symbol keys, found `{}`", key.inspect()))
    })
}

pub fn render_hshptn(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let c = ctx.descend().in_pattern();
    let constant = un.render_opt(node.child(0), c)?;

    let mut entries = match node.child_node(1) {
        Some(hash) => collection::pairs(hash)
            .map(|(key, value)| {
                let label = pattern_key(key)?;
                match un.render_opt(value, c)? {
                    Some(value) => Ok(format!("{label} {value}")),
                    None => Ok(label),
                }
            })
            .collect::<UnparseResult<Vec<_>>>()?,
        None => Vec::new(),
    };

    match node.child(2) {
        Value::Nil | Value::Bool(_) => {}
        rest if rest.is_symbol(special::NO_REST_KEYWORD) => entries.push("**nil".to_string()),
        rest => entries.push(format!("**{}", un.render(rest, c)?)),
    }

    let entries = entries.join(", ");
    match constant {
        Some(constant) => Ok(format!("{constant}[{entries}]")),
        None if entries.is_empty() => Ok("{}".to_string()),
        None => Ok(format!("{{ {entries} }}")),
    }
}

/// From 3.1 call-like expressions inside a pattern are pinned as `^(expr)`.
pub fn render_pinned_expression(un: &Unparser, node: &Node, ctx: Context, parent: &Rule) -> UnparseResult {
    if ctx.pattern {
        Ok(format!("^({})", parent.apply(un, node, ctx.expression())?))
    } else {
        parent.apply(un, node, ctx)
    }
}

/// From 3.1 instance, class and global variables can be pinned.
pub fn render_pinned_variable(un: &Unparser, node: &Node, ctx: Context, parent: &Rule) -> UnparseResult {
    let variable = parent.apply(un, node, ctx)?;
    if ctx.pattern { Ok(format!("^{variable}")) } else { Ok(variable) }
}
