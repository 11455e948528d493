use crate::{Context, Node, NodeKind, Quoting, Rule, Unparser, UnparseResult, Value, quote};

pub fn render_lit(_: &Unparser, node: &Node, _: Context) -> UnparseResult {
    Ok(node.child(0).inspect())
}

pub fn render_str(_: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let text = node.child(0).to_text();
    Ok(match ctx.quoting {
        Quoting::Quoted => quote::dump(&text),
        Quoting::Escaped => quote::escape(&text),
        Quoting::Raw => text,
    })
}

pub fn render_xstr(_: &Unparser, node: &Node, _: Context) -> UnparseResult {
    Ok(format!("`{}`", node.child(0).to_text()))
}

/// The segments of an interpolated literal after its leading text.
///
/// Plain `STR` segments take `quoting`; anything else renders as an expression.
fn segments(un: &Unparser, node: &Node, quoting: Quoting, ctx: Context) -> UnparseResult {
    let first = std::slice::from_ref(node.child(1));
    let rest = node.child_node(2).map(Node::children).unwrap_or_default();

    first
        .iter()
        .chain(rest)
        .filter(|segment| !segment.is_nil())
        .map(|segment| {
            if segment.is_kind(NodeKind::Str) {
                un.render(segment, ctx.descend().with_quoting(quoting))
            } else {
                un.render(segment, ctx.descend())
            }
        })
        .collect()
}

/// Body of a `DSTR`-shaped node without its delimiters.
fn interpolated(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let prefix = quote::escape(&node.child(0).to_text());
    Ok(format!("{prefix}{}", segments(un, node, Quoting::Escaped, ctx)?))
}

pub fn render_dstr(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    Ok(format!("\"{}\"", interpolated(un, node, ctx)?))
}

/// From 3.0 a string built only from literal parts keeps its interpolation.
pub fn render_dstr_literal(un: &Unparser, node: &Node, ctx: Context, parent: &Rule) -> UnparseResult {
    if node.child(1).is_nil() && node.child(2).is_nil() {
        Ok(format!("\"#{{{}}}\"", quote::dump(&node.child(0).to_text())))
    } else {
        parent.apply(un, node, ctx)
    }
}

pub fn render_dxstr(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    Ok(format!("`{}`", interpolated(un, node, ctx)?))
}

pub fn render_dsym(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    Ok(format!(":\"{}\"", interpolated(un, node, ctx)?))
}

pub fn render_dregx(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    let source = node.child(0).to_text();
    let segments = segments(un, node, Quoting::Raw, ctx)?;
    let flags = match node.child(3) {
        Value::Integer(options) => quote::regexp_flags(u32::try_from(*options).unwrap_or_default()),
        Value::Nil => String::new(),
        other => other.to_text(),
    };

    Ok(format!("/{source}{segments}/{flags}"))
}

pub fn render_once(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    Ok(format!("{}o", un.child(node, 0, ctx.descend())?))
}

pub fn render_evstr(un: &Unparser, node: &Node, ctx: Context) -> UnparseResult {
    Ok(format!("#{{{}}}", un.child(node, 0, ctx.descend())?))
}

pub fn render_nil(_: &Unparser, _: &Node, _: Context) -> UnparseResult {
    Ok("nil".to_string())
}

pub fn render_true(_: &Unparser, _: &Node, _: Context) -> UnparseResult {
    Ok("true".to_string())
}

pub fn render_false(_: &Unparser, _: &Node, _: Context) -> UnparseResult {
    Ok("false".to_string())
}

pub fn render_self(_: &Unparser, _: &Node, _: Context) -> UnparseResult {
    Ok("self".to_string())
}
