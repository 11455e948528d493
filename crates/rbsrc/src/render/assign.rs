use crate::{
    Binding, Context, Node, NodeKind, Rule, Unparser, UnparseResult, Value,
    error::UnparseError,
    node::special,
    render::{self, name},
};

/// `LASGN` and `DASGN_CURR`, and `DASGN` from 3.1.
pub fn render_lasgn(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let vid = name(node, 0)?;
    let value = node.child(1);

    if value.is_symbol(special::REQUIRED_KEYWORD) {
        return Ok(format!("{vid}:"));
    }

    let rendered = un.render_opt(value, ctx.descend())?.filter(|v| !v.is_empty());
    match (ctx.binding, rendered) {
        (Binding::Keyword, Some(v)) => Ok(format!("{vid}: {v}")),
        (Binding::Keyword, None) => Ok(format!("{vid}:")),
        (_, None) => Ok(vid.to_string()),
        (Binding::Bare, Some(v)) => Ok(format!("{vid} = {v}")),
        (_, Some(_)) if value.is_kind(NodeKind::Errinfo) => Ok(format!("=> {vid}")),
        (_, Some(v)) if ctx.pattern => Ok(format!("{v} => {vid}")),
        (_, Some(v)) => Ok(format!("({vid} = {v})")),
    }
}

/// `IASGN`, `CVASGN`, `GASGN`, and `DASGN` before 3.1.
pub fn render_variable_assign(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let vid = name(node, 0)?;
    match un.render_opt(node.child(1), ctx.descend())? {
        Some(v) => Ok(format!("({vid} = {v})")),
        None => Ok(vid.to_string()),
    }
}

pub fn render_cdecl(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let c = ctx.descend();
    let target = un.child(node, 0, c)?;
    let value = match node.child(1) {
        Value::Symbol(_) => node.child(2),
        value => value,
    };

    match un.render_opt(value, c)? {
        Some(v) => Ok(format!("({target} = {v})")),
        None => Ok(target),
    }
}

pub fn render_op_asgn1(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let c = ctx.descend();
    let recv = un.child(node, 0, c)?;
    let op = name(node, 1)?;
    let index = un.child(node, 2, c.inline())?;
    let value = un.child(node, 3, c)?;

    Ok(format!("({recv}[{index}] {op}= {value})"))
}

/// From 2.7.2: `struct.field += foo`.
pub fn render_op_asgn2(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let c = ctx.descend();
    let recv = un.child(node, 0, c)?;
    let separator = if node.child(1).as_bool().unwrap_or(false) { "&." } else { "." };
    let attr = name(node, 2)?;
    let op = name(node, 3)?;
    let value = un.child(node, 4, c)?;

    Ok(format!("({recv}{separator}{attr} {op}= {value})"))
}

/// The value of `OP_ASGN_AND`/`OP_ASGN_OR` is an assignment whose target and right side are reused.
fn logical_assign(op: &str, un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let c = ctx.descend();
    let assignment = render::required(node, 2)?;
    let target = un.child(assignment, 0, c)?;
    let value = un.child(assignment, 1, c)?;

    Ok(format!("({target} {op} {value})"))
}

pub fn render_op_asgn_and(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    logical_assign("&&=", un, node, ctx)
}

pub fn render_op_asgn_or(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    logical_assign("||=", un, node, ctx)
}

pub fn render_op_cdecl(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let c = ctx.descend();
    let head = un.child(node, 0, c)?;
    let op = name(node, 1)?;
    let value = un.child(node, 2, c)?;

    Ok(format!("({head} {op}= {value})"))
}

pub fn render_attrasgn(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let c = ctx.descend();
    let recv = un.child(node, 0, c)?;
    let mid = name(node, 1)?;
    let args = node.child(2);

    if mid == "[]=" {
        let Some((value, index)) = render::elements(args).split_last() else {
            return Err(UnparseError::malformed("ATTRASGN `[]=` without arguments"));
        };
        let index = un.render_all(index, c)?.join(", ");
        let value = un.render(value, c.inline())?;
        return Ok(format!("{recv}[{index}] = {value}"));
    }

    match un.render_opt(args, c.inline())? {
        Some(args) => Ok(format!("{recv}.{mid}{args}")),
        // a, struct.field = ...
        None => Ok(format!("{recv}.{}", mid.strip_suffix('=').unwrap_or(mid))),
    }
}

/// The rest slot of a `MASGN`, without its `*`.
fn rest_name(un: &Unparser, rest: &Value, ctx: Context) -> UnparseResult<Option<String>> {
    match rest {
        Value::Nil => Ok(None),
        rest if rest.is_symbol(special::NO_NAME_REST) => Ok(Some(String::new())),
        rest => un.render(rest, ctx).map(Some),
    }
}

/// `MASGN` as the 2.6 grammar builds it: a missing rest slot is an anonymous `*`.
pub fn render_masgn(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let c = ctx.descend();
    // `for a, b in ...` has no right side; its names keep the `a, b, ` form.
    let right = match node.child(0) {
        Value::Nil => None,
        value if value.is_kind(NodeKind::ForMasgn) => None,
        value => Some(un.render(value, c)?),
    };
    let names = render::elements(node.child(1));

    let (left, inline) = match right.as_deref() {
        Some("") => (un.render_all(names, c)?.join(", "), true),
        _ if ctx.destructure && names.len() == 1 => (un.render_all(names, c)?.join(", "), true),
        _ if names.is_empty() => (String::new(), true),
        _ => (format!("{}, ", un.render_all(names, c)?.join(", ")), false),
    };

    let rest = if node.len() < 3 {
        Some(String::new())
    } else {
        rest_name(un, node.child(2), c)?
    };

    let left = match rest {
        None => left,
        Some(rest) if left.is_empty() => format!("*{rest}"),
        Some(rest) if inline => format!("{left}, *{rest}"),
        Some(rest) => format!("{left}*{rest}"),
    };
    let right = right
        .filter(|r| !r.is_empty())
        .map(|r| format!(" = {r}"))
        .unwrap_or_default();

    Ok(format!("({left}){right}"))
}

/// From 2.7 the rest slot is always present; pad older-shaped nodes before delegating.
pub fn render_masgn_padded(un: &Unparser, node: &Node, ctx: Context, parent: &Rule) -> UnparseResult {
    if node.len() < 3 {
        parent.apply(un, &node.with_child(2, Value::Nil), ctx)
    } else {
        parent.apply(un, node, ctx)
    }
}

/// `rest, post` inside a multiple assignment, after the caller's `*`.
pub fn render_postarg(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let c = ctx.descend();
    let rest = rest_name(un, node.child(0), c)?.unwrap_or_default();
    let post = un.child(node, 1, c.inline())?;

    Ok(format!("{rest}, {post}"))
}
