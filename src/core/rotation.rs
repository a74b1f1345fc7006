use regex::Regex;
use std::sync::OnceLock;

// A rotation string reads like "Shanghai - Ningbo > Busan, Qingdao".
// Commas, hyphens, and the '>' of arrow glyphs all act as boundaries;
// a run of them counts as one.
static DELIMITERS: OnceLock<Regex> = OnceLock::new();

fn delimiters() -> &'static Regex {
    DELIMITERS.get_or_init(|| Regex::new(r"[,\->]+").unwrap())
}

/// Splits a raw rotation string into ordered, trimmed port-name tokens.
///
/// Duplicates survive (a rotation may revisit a port) and order is
/// preserved. A missing or empty rotation yields an empty vec; a
/// malformed one degrades to however many tokens it still contains.
/// Never an error.
pub fn parse_rotation(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    delimiters()
        .split(raw)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
