use crate::domain::model::{RouteDetail, TerminalCall};

/// All proforma calls of a route ordered by call sequence. The wire
/// order is not guaranteed.
pub fn ordered_calls(detail: &RouteDetail) -> Vec<&TerminalCall> {
    let mut calls: Vec<&TerminalCall> = detail.proforma.iter().collect();
    calls.sort_by_key(|c| c.seq);
    calls
}

/// Calls made at one terminal, ordered by sequence. Lookup is a
/// case-insensitive exact name match; an unknown terminal yields an
/// empty vec, never an error.
pub fn terminal_calls<'a>(detail: &'a RouteDetail, terminal_name: &str) -> Vec<&'a TerminalCall> {
    let key = terminal_name.trim().to_lowercase();
    let mut calls: Vec<&TerminalCall> = detail
        .proforma
        .iter()
        .filter(|c| c.terminal_name.trim().to_lowercase() == key)
        .collect();
    calls.sort_by_key(|c| c.seq);
    calls
}
