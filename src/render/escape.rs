//! Escaping of raw text for LaTeX.

/// Characters with special meaning in LaTeX and their escaped forms.
///
/// The backslash comes first: it is the character every other escape introduces, so it
/// must be handled before anything else. [`escape_latex`] walks the input once, which
/// means text produced by one entry is never fed through the table again.
pub const LATEX_ESCAPES: &[(char, &str)] = &[
    ('\\', r"\textbackslash{}"),
    ('{', r"\{"),
    ('}', r"\}"),
    ('$', r"\$"),
    ('&', r"\&"),
    ('%', r"\%"),
    ('#', r"\#"),
    ('_', r"\_"),
    ('~', r"\textasciitilde{}"),
    ('^', r"\textasciicircum{}"),
];

/// Escape every special character in `text` using [`LATEX_ESCAPES`]
pub fn escape_latex(text: &str) -> String {
    escape_with(text, LATEX_ESCAPES)
}

/// Escape `text` with an arbitrary ordered table
pub fn escape_with(text: &str, table: &[(char, &str)]) -> String {
    let mut escaped = String::with_capacity(text.len() + text.len() / 8);

    for ch in text.chars() {
        match table.iter().find(|(special, _)| *special == ch) {
            Some((_, replacement)) => escaped.push_str(replacement),
            None => escaped.push(ch),
        }
    }

    escaped
}
