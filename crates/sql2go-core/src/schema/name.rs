//! Conversion of SQL identifiers into Go identifiers.

/// Returns `ident` unchanged when `lower` is set, otherwise its Go name.
pub fn normalize(ident: &str, lower: bool) -> String {
    if lower {
        ident.to_string()
    } else {
        go_name(ident)
    }
}

/// Capitalizes the first letter of every `_`-separated word and drops the
/// underscores. The remaining letters keep their case, so `user_ID` becomes
/// `UserID`.
pub fn go_name(ident: &str) -> String {
    ident.split('_').map(upper_first).collect()
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
