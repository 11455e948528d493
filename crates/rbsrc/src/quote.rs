//! Ruby literal quoting: `String#dump`, `Symbol#inspect`, `Float#inspect` and `Regexp#inspect`.
use std::fmt::Write;

const OPERATOR_SYMBOLS: &[&str] = &[
    "+", "-", "*", "/", "%", "**", "==", "===", "!=", "=~", "!~", "!", "~", "+@", "-@", "[]", "[]=", "<",
    "<=", ">", ">=", "<=>", "<<", ">>", "&", "|", "^", "`",
];

pub const IGNORECASE: u32 = 1;
pub const EXTENDED: u32 = 2;
pub const MULTILINE: u32 = 4;

/// The body of `String#dump` without the surrounding quotes.
pub fn escape(s: &str) -> String {
    let mut buf = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => buf.push_str("\\\""),
            '\\' => buf.push_str("\\\\"),
            '\n' => buf.push_str("\\n"),
            '\r' => buf.push_str("\\r"),
            '\t' => buf.push_str("\\t"),
            '\x0c' => buf.push_str("\\f"),
            '\x0b' => buf.push_str("\\v"),
            '\x08' => buf.push_str("\\b"),
            '\x07' => buf.push_str("\\a"),
            '\x1b' => buf.push_str("\\e"),
            '#' if matches!(chars.peek(), Some('{' | '$' | '@')) => buf.push_str("\\#"),
            c if c.is_ascii_control() => {
                let _ = write!(buf, "\\x{:02X}", c as u32);
            }
            c if c.is_ascii() => buf.push(c),
            c if (c as u32) <= 0xFFFF => {
                let _ = write!(buf, "\\u{:04X}", c as u32);
            }
            c => {
                let _ = write!(buf, "\\u{{{:X}}}", c as u32);
            }
        }
    }

    buf
}

/// `String#dump`: a double-quoted literal that reads back to `s`.
pub fn dump(s: &str) -> String {
    format!("\"{}\"", escape(s))
}

fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

fn is_ident_char(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(is_ident_start) && chars.all(is_ident_char)
}

fn is_method_name(s: &str) -> bool {
    match s.strip_suffix(['?', '!', '=']) {
        Some(stem) => is_identifier(stem),
        None => is_identifier(s),
    }
}

fn is_global_name(s: &str) -> bool {
    match s.strip_prefix('$') {
        Some(rest) if is_identifier(rest) => true,
        Some(rest) if !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()) => true,
        Some(rest) => {
            let mut chars = rest.chars();
            match (chars.next(), chars.next(), chars.next()) {
                (Some(c), None, None) => "~*$?!@/\\;,.=:<>\"&`'+0".contains(c),
                (Some('-'), Some(c), None) => is_ident_char(c),
                _ => false,
            }
        }
        None => false,
    }
}

fn is_plain_symbol(s: &str) -> bool {
    OPERATOR_SYMBOLS.contains(&s)
        || is_method_name(s)
        || s.strip_prefix("@@").is_some_and(is_identifier)
        || s.strip_prefix('@').is_some_and(is_identifier)
        || is_global_name(s)
}

/// `Symbol#inspect`.
pub fn inspect_symbol(name: &str) -> String {
    if is_plain_symbol(name) {
        format!(":{name}")
    } else {
        format!(":{}", dump(name))
    }
}

/// A hash key written in label form, as in `{ a: 1 }` or `{ "a b": 1 }`.
pub fn label(name: &str) -> String {
    let plain = match name.strip_suffix(['?', '!']) {
        Some(stem) => is_identifier(stem),
        None => is_identifier(name),
    };
    if plain { format!("{name}:") } else { format!("{}:", dump(name)) }
}

/// `Float#inspect`.
pub fn inspect_float(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        return if v.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let sci = format!("{:e}", v);
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let decpt = exponent + 1;

    if !(-3..=16).contains(&decpt) {
        let mantissa = if mantissa.contains('.') {
            mantissa.to_string()
        } else {
            format!("{mantissa}.0")
        };
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.abs())
    } else {
        let fixed = v.to_string();
        if fixed.contains('.') { fixed } else { format!("{fixed}.0") }
    }
}

/// Parses `imx`-style option letters into a bitmask.
pub fn regexp_options(flags: &str) -> u32 {
    flags.chars().fold(0, |acc, c| match c {
        'i' => acc | IGNORECASE,
        'x' => acc | EXTENDED,
        'm' => acc | MULTILINE,
        _ => acc,
    })
}

/// Option suffix in `Regexp#inspect` order.
pub fn regexp_flags(options: u32) -> String {
    [(MULTILINE, 'm'), (IGNORECASE, 'i'), (EXTENDED, 'x')]
        .iter()
        .filter(|(bit, _)| options & bit != 0)
        .map(|(_, c)| *c)
        .collect()
}

/// Escapes unescaped `/` so the source can sit between slashes.
pub fn regexp_source(source: &str) -> String {
    let mut buf = String::with_capacity(source.len());
    let mut escaped = false;

    for c in source.chars() {
        if c == '/' && !escaped {
            buf.push('\\');
        }
        escaped = c == '\\' && !escaped;
        buf.push(c);
    }

    buf
}

/// `Regexp#inspect`.
pub fn inspect_regexp(source: &str, options: u32) -> String {
    format!("/{}/{}", regexp_source(source), regexp_flags(options))
}
