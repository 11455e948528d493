use itertools::Itertools;

use crate::{Context, HashStyle, ListStyle, Node, NodeKind, Rule, Unparser, UnparseResult, Value, quote};

/// `ARRAY` before 2.7, `LIST` after.
pub fn render_list(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let c = ctx.descend();
    let elements = node.elements();

    let rendered = match (ctx.list, elements.split_last()) {
        (ListStyle::Arguments, Some((last, init))) => {
            let mut rendered = un.render_all(init, c)?;
            rendered.push(un.render(last, c.with_hash(HashStyle::Keywords))?);
            rendered
        }
        _ => un.render_all(elements, c)?,
    };

    if ctx.list.is_inline() {
        Ok(rendered.join(", "))
    } else {
        Ok(format!("[{}]", rendered.join(", ")))
    }
}

pub fn render_zlist(_: &Unparser, _: &Node, _: Context) -> UnparseResult {
    Ok("[]".to_string())
}

pub fn render_values(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    Ok(un.render_all(node.elements(), ctx.descend())?.join(", "))
}

/// Key and value pairs of a `HASH`. A `nil` key marks a `**` entry.
pub(crate) fn pairs(node: &Node) -> impl Iterator<Item = (&Value, &Value)> {
    crate::render::elements(node.child(0)).iter().tuples()
}

fn is_braced(node: &Node) -> bool {
    node.child(1).as_bool().unwrap_or(false)
}

pub fn render_hash(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    if node.child(0).is_nil() {
        return Ok("{}".to_string());
    }

    let c = ctx.descend();
    let mut splat_only = true;
    let entries = pairs(node)
        .map(|(key, value)| {
            let value = un.render(value, c)?;
            if key.is_nil() {
                Ok(format!("**{value}"))
            } else {
                splat_only = false;
                Ok(format!("{} => {value}", un.render(key, c)?))
            }
        })
        .collect::<UnparseResult<Vec<_>>>()?
        .join(", ");

    if splat_only && ctx.hash == HashStyle::Keywords && !is_braced(node) {
        Ok(entries)
    } else {
        Ok(format!("{{ {entries} }}"))
    }
}

/// From 3.0 a trailing argument hash renders as keyword arguments.
pub fn render_hash_keywords(un: &Unparser, node: &Node, ctx: Context, parent: &Rule) -> UnparseResult {
    if ctx.hash != HashStyle::Keywords || is_braced(node) || node.child(0).is_nil() {
        return parent.apply(un, node, ctx);
    }

    let c = ctx.descend();
    let entries = pairs(node)
        .map(|(key, value)| {
            let value = un.render(value, c)?;
            let label = key
                .as_node()
                .filter(|k| k.is(NodeKind::Lit))
                .and_then(|k| match k.child(0) {
                    Value::Symbol(name) => Some(quote::label(name)),
                    _ => None,
                });

            match (key, label) {
                (Value::Nil, _) => Ok(format!("**{value}")),
                (_, Some(label)) => Ok(format!("{label} {value}")),
                (key, None) => Ok(format!("{} => {value}", un.render(key, c)?)),
            }
        })
        .collect::<UnparseResult<Vec<_>>>()?;

    Ok(entries.join(", "))
}
