//! Identifier conversions shared by the loader and the code generators.

/// Words that cannot be used as plain Rust identifiers.
const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern", "false",
    "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use", "where",
    "while", "abstract", "become", "box", "do", "final", "macro", "override", "priv", "try",
    "typeof", "unsized", "virtual", "yield",
];

/// Keywords that are not accepted as raw identifiers either.
const RESERVED: &[&str] = &["self", "Self", "super", "crate", "_"];

/// Converts a string to snake_case.
///
/// Runs of capitals are kept together, so `MDEntryPx` becomes
/// `md_entry_px` and `createdAt` becomes `created_at`.
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == ' ' {
            if !result.ends_with('_') {
                result.push('_');
            }
            continue;
        }
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary && !result.ends_with('_') {
                result.push('_');
            }
        }
        result.extend(c.to_lowercase());
    }

    result
}

/// Escapes an identifier so it can be emitted verbatim in Rust source.
#[must_use]
pub fn escape_ident(ident: &str) -> String {
    if RESERVED.contains(&ident) {
        format!("{ident}_")
    } else if KEYWORDS.contains(&ident) {
        format!("r#{ident}")
    } else {
        ident.to_string()
    }
}

/// Returns the module name generated for an item.
#[must_use]
pub fn module_name(item: &str) -> String {
    escape_ident(&to_snake_case(item))
}

/// Returns the field and getter identifier for a property.
#[must_use]
pub fn field_ident(property: &str) -> String {
    escape_ident(&to_snake_case(property))
}

/// Returns the setter identifier for a property.
#[must_use]
pub fn setter_ident(property: &str) -> String {
    format!("set_{}", to_snake_case(property))
}

/// Returns the dispatch function name generated for a union.
#[must_use]
pub fn dispatch_fn_name(union: &str) -> String {
    format!("{}_from_json", to_snake_case(union))
}
