//! Token helpers shared by the header and trace scanners.
//!
//! The solver writes attributes either joined (`ITERATION="3"`) or with the
//! value split into the next whitespace token (`ITERATION=" 3"`). Both forms
//! are accepted everywhere.

/// Value of the first `key` attribute on the line, quotes stripped
///
/// The key must open its token (optionally after `<`), so `MAX_ITERATION=`
/// never answers for `ITERATION=`. Returns `None` when the key is absent or
/// carries no value.
pub(crate) fn keyed_value<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let mut tokens = line.split_whitespace();

    while let Some(token) = tokens.next() {
        let Some(rest) = token.trim_start_matches('<').strip_prefix(key) else {
            continue;
        };

        let inline = trim_value(rest);
        if !inline.is_empty() {
            return Some(inline);
        }

        return tokens.next().map(trim_value).filter(|value| !value.is_empty());
    }

    None
}

/// 0-based column declared immediately before `marker` on the line
///
/// The outer `Option` is `None` when the marker is absent; the inner one is
/// `None` when the marker is present but the declaration is malformed.
pub(crate) fn declared_column(line: &str, marker: &str) -> Option<Option<usize>> {
    let pos = line.find(marker)?;
    let prefix = line[..pos].trim_end().trim_end_matches('>');

    let column = prefix
        .split_whitespace()
        .next_back()
        .map(|token| trim_value(token.rsplit('=').next().unwrap_or(token)))
        .and_then(|number| number.parse::<usize>().ok())
        .and_then(|one_based| one_based.checked_sub(1));

    Some(column)
}

fn trim_value(raw: &str) -> &str {
    raw.trim_matches(|c| matches!(c, '"' | '\'' | '>' | '/'))
}
