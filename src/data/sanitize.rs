/// Literal replacements applied in order; later rules see earlier output.
const REPLACEMENTS: [(&str, &str); 7] = [
    (".", ""),
    (", ", "_"),
    (",", "_"),
    (" ", "_"),
    ("(", ""),
    (")", ""),
    ("/", "_"),
];

/// Turn a row label into an identifier-like map key.
pub fn sanitize_key(raw: &str) -> String {
    REPLACEMENTS
        .iter()
        .fold(raw.to_string(), |acc, (from, to)| acc.replace(from, to))
}
