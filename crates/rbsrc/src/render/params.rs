//! Parameter lists rebuilt from `ARGS` and the scope's local table.
//!
//! `ARGS` keeps each parameter group apart and stores only counts for the
//! plain names, which live in the flat local table of the enclosing `SCOPE`.
//! Assembly walks that table front to back, claiming slots group by group.
use std::collections::VecDeque;

use crate::{Binding, Context, Node, NodeKind, Unparser, UnparseResult, Value, node::special};

/// A rendered `SCOPE`: its parameter list and its body.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScopeParts {
    pub params: String,
    pub body: String,
}

/// Renders a `SCOPE` node into its parts.
///
/// The body keeps the caller's statement style, so a class body stays bare.
pub(crate) fn scope(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult<ScopeParts> {
    let body_ctx = ctx.descend().without_destructure().with_statements(ctx.statements);
    let body = un.child(node, 2, body_ctx)?;
    let tbl = node.child(0).as_list().unwrap_or_default();

    let params = match node.child_node(1) {
        Some(args) => parameters(un, tbl, args, ctx.descend())?,
        None => String::new(),
    };

    Ok(ScopeParts { params, body })
}

fn count(value: &Value) -> usize {
    value.as_int().and_then(|n| usize::try_from(n).ok()).unwrap_or(0)
}

/// Rendered destructuring groups from `pre_init` or `post_init`.
fn initializers(un: &Unparser, value: &Value, ctx: Context) -> UnparseResult<VecDeque<String>> {
    let ctx = ctx.in_destructure();
    match value.as_node() {
        None => Ok(VecDeque::new()),
        Some(block) if block.is(NodeKind::Block) => Ok(un.render_all(block.children(), ctx)?.into()),
        Some(_) => Ok(VecDeque::from([un.render(value, ctx)?])),
    }
}

/// Heads of an `OPT_ARG` or `KW_ARG` chain.
fn chain(value: &Value) -> Vec<&Value> {
    let mut heads = Vec::new();
    let mut link = value.as_node();
    while let Some(node) = link {
        heads.push(node.child(0));
        link = node.child_node(1);
    }
    heads
}

fn chain_entries(un: &Unparser, value: &Value, ctx: Context) -> UnparseResult<Vec<String>> {
    chain(value).into_iter().map(|head| un.render(head, ctx)).collect()
}

/// Claims `count` slots; a nil slot is filled by the next destructuring group.
fn take_required(
    tbl: &mut VecDeque<&Value>,
    count: usize,
    inits: &mut VecDeque<String>,
    out: &mut Vec<String>,
) {
    for _ in 0..count {
        match tbl.pop_front() {
            Some(Value::Nil) | None => out.extend(inits.pop_front()),
            Some(name) => out.push(name.to_text()),
        }
    }
}

fn skip(tbl: &mut VecDeque<&Value>, n: usize) {
    tbl.drain(..n.min(tbl.len()));
}

/// Assembles the parameter list of `args` against the local table `tbl`.
pub(crate) fn parameters(un: &Unparser, tbl: &[Value], args: &Node, ctx: Context) -> UnparseResult<String> {
    let kwrest = match args.child(8) {
        Value::Nil => None,
        value => Some(format!("**{}", un.render(value, ctx)?)),
    };

    // proc { |**| }
    if kwrest.is_some() && matches!(tbl, [Value::Nil]) {
        return Ok("**".to_string());
    }

    let mut tbl: VecDeque<&Value> = tbl.iter().collect();
    let mut pre_init = initializers(un, args.child(1), ctx)?;
    let mut post_init = initializers(un, args.child(5), ctx)?;
    let optional = chain_entries(un, args.child(2), ctx.with_binding(Binding::Bare))?;
    let keywords = chain_entries(un, args.child(7), ctx.with_binding(Binding::Keyword))?;

    let rest = match args.child(6) {
        Value::Nil => None,
        comma if comma.is_symbol(special::EXCESSIVE_COMMA) => Some(" ".to_string()),
        value => Some(format!("*{}", un.render(value, ctx)?)),
    };

    let mut leading = Vec::new();
    let pre_count = count(args.child(0)).max(pre_init.len());
    take_required(&mut tbl, pre_count, &mut pre_init, &mut leading);

    skip(&mut tbl, optional.len());
    skip(&mut tbl, usize::from(rest.is_some()));

    let unnamed = tbl.iter().take_while(|slot| slot.is_nil()).count();
    let star = if post_init.len() < unnamed {
        tbl.pop_front();
        Some("*".to_string())
    } else {
        None
    };

    let mut trailing = Vec::new();
    let post_count = count(args.child(4)).max(post_init.len());
    take_required(&mut tbl, post_count, &mut post_init, &mut trailing);

    if !keywords.is_empty() {
        skip(&mut tbl, keywords.len() + 1);
    }

    let kwrest = kwrest.filter(|k| k != "**" || matches!(tbl.front(), Some(Value::Nil)));
    let block = match args.child(9) {
        Value::Nil => None,
        value => Some(format!("&{}", un.render(value, ctx)?)),
    };

    let groups = leading
        .into_iter()
        .chain([optional.join(", ")])
        .chain(rest)
        .chain(star)
        .chain(trailing)
        .chain([Vec::from(post_init).join(", "), keywords.join(", ")])
        .chain(kwrest)
        .chain(block)
        .filter(|group| !group.is_empty())
        .collect::<Vec<_>>();

    tracing::trace!(groups = groups.len(), "Assembled parameters");
    Ok(groups.join(", "))
}

pub fn render_scope(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let ScopeParts { params, body } = scope(un, node, ctx)?;
    if params.is_empty() {
        Ok(body)
    } else {
        Ok(format!("|{params}| {body}"))
    }
}

/// `ARGS` outside a scope: there is no local table to draw names from.
pub fn render_args(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    parameters(un, &[], node, ctx.descend())
}

pub fn render_opt_arg(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let ctx = ctx.descend().with_binding(Binding::Bare);
    Ok(chain_entries(un, &Value::from(node.clone()), ctx)?.join(", "))
}

pub fn render_kw_arg(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let ctx = ctx.descend().with_binding(Binding::Keyword);
    Ok(chain_entries(un, &Value::from(node.clone()), ctx)?.join(", "))
}

pub fn render_args_aux(_: &Unparser, _: &Node, _: Context) -> UnparseResult {
    Ok(String::new())
}
