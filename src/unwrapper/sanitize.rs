/// Escape literal line breaks (`\r\n`, `\n`, `\r`) as the two-character sequence `\n`,
/// then trim surrounding whitespace.
///
/// A literal newline is illegal inside a JSON string, which is exactly where
/// generation services tend to leave them.
pub fn escape_line_breaks(candidate: &str) -> String {
    candidate
        .replace("\r\n", "\\n")
        .replace(['\r', '\n'], "\\n")
        .trim()
        .to_string()
}

/// Replace every single quote with a double quote.
///
/// Last-resort heuristic: it also rewrites apostrophes inside text values.
pub fn normalize_quotes(candidate: &str) -> String {
    candidate.replace('\'', "\"")
}
