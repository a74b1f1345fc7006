use crate::core::rotation::parse_rotation;
use crate::domain::model::{MatchResult, MatchedPort, PortRecord};

/// Lookup key for a rotation token: the text before the first
/// parenthetical qualifier, trimmed and lowercased.
/// `"Busan (Pusan)"` and `"PUSAN (BUSAN)"` become `"busan"` and
/// `"pusan"` respectively.
pub fn normalize_name(token: &str) -> String {
    token
        .split('(')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}

/// Resolves ordered rotation tokens against a port snapshot.
///
/// Pure and stateless: every recomputation starts from scratch on the
/// latest inputs. For each token the first exact `port_name` match
/// wins, then the first alias match, with candidates visited in
/// ascending `port_code` order so the outcome never depends on the
/// incidental ordering of the snapshot. A candidate without usable
/// coordinates counts as a miss. Misses keep the original token text
/// for display and for the fix workflow.
pub fn match_rotation(tokens: &[String], ports: &[PortRecord]) -> MatchResult {
    let mut candidates: Vec<&PortRecord> = ports.iter().collect();
    candidates.sort_by(|a, b| a.port_code.cmp(&b.port_code));

    let mut matched = Vec::new();
    let mut unmatched = Vec::new();

    for token in tokens {
        let key = normalize_name(token);

        let candidate = candidates
            .iter()
            .find(|p| p.port_name.to_lowercase() == key)
            .or_else(|| {
                candidates
                    .iter()
                    .find(|p| p.aliases.iter().any(|a| a.trim().to_lowercase() == key))
            });

        match candidate {
            Some(port) if port.has_valid_coordinates() => {
                matched.push(MatchedPort {
                    port: (*port).clone(),
                    token: token.clone(),
                });
            }
            _ => unmatched.push(token.clone()),
        }
    }

    let matched_count = matched.len();
    MatchResult {
        total: matched_count + unmatched.len(),
        matched,
        unmatched,
        matched_count,
    }
}

/// Parser + matcher in one step, for callers holding the raw rotation.
pub fn match_rotation_str(raw: Option<&str>, ports: &[PortRecord]) -> MatchResult {
    match_rotation(&parse_rotation(raw), ports)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn port(code: &str, name: &str, aliases: &[&str], lat: Option<f64>, lng: Option<f64>) -> PortRecord {
        PortRecord {
            port_code: code.to_string(),
            port_name: name.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            nation_name: String::new(),
            lat,
            lng,
        }
    }

    fn reference_set() -> Vec<PortRecord> {
        vec![
            port("CNSHA", "Shanghai", &[], Some(31.2), Some(121.5)),
            port("CNNGB", "Ningbo", &[], Some(29.9), Some(121.6)),
            port("KRPUS", "Busan", &["Pusan"], Some(35.1), Some(129.0)),
        ]
    }

    #[test]
    fn resolves_names_aliases_and_records_misses_in_order() {
        let result =
            match_rotation_str(Some("Shanghai - Ningbo - Busan(Pusan) - Qingdao"), &reference_set());

        assert_eq!(result.total, 4);
        assert_eq!(result.matched_count, 3);
        assert_eq!(result.unmatched, vec!["Qingdao"]);
        assert_eq!(result.matched[0].port.port_code, "CNSHA");
        assert_eq!(result.matched[2].port.port_code, "KRPUS");
        assert_eq!(result.matched[2].token, "Busan(Pusan)");
    }

    #[test]
    fn alias_match_is_case_insensitive_after_normalization() {
        let result = match_rotation_str(Some("PUSAN (BUSAN)"), &reference_set());
        assert_eq!(result.matched_count, 1);
        assert_eq!(result.matched[0].port.port_code, "KRPUS");
        assert_eq!(result.matched[0].token, "PUSAN (BUSAN)");
    }

    #[test]
    fn counts_always_balance() {
        let ports = reference_set();
        for rotation in [
            None,
            Some(""),
            Some("Shanghai"),
            Some("Nowhere, Shanghai, Nowhere Else"),
            Some("Busan - Busan - Busan"),
        ] {
            let result = match_rotation_str(rotation, &ports);
            assert_eq!(result.matched_count, result.matched.len());
            assert_eq!(result.total, result.matched.len() + result.unmatched.len());
        }
    }

    #[test]
    fn unusable_coordinates_count_as_a_miss() {
        let ports = vec![
            port("AAAAA", "Ghostport", &[], None, Some(10.0)),
            port("BBBBB", "Ghostport2", &[], Some(f64::NAN), Some(10.0)),
        ];
        let result = match_rotation_str(Some("Ghostport, Ghostport2"), &ports);
        assert_eq!(result.matched_count, 0);
        assert_eq!(result.unmatched, vec!["Ghostport", "Ghostport2"]);
    }

    #[test]
    fn candidate_order_follows_port_code_not_snapshot_order() {
        // Two records share a name; the lower port_code must win no
        // matter how the snapshot is ordered.
        let a = port("AAA", "Twinport", &[], Some(1.0), Some(1.0));
        let b = port("ZZZ", "Twinport", &[], Some(2.0), Some(2.0));

        let forward = match_rotation_str(Some("Twinport"), &[a.clone(), b.clone()]);
        let reversed = match_rotation_str(Some("Twinport"), &[b, a]);

        assert_eq!(forward.matched[0].port.port_code, "AAA");
        assert_eq!(reversed.matched[0].port.port_code, "AAA");
    }

    #[test]
    fn exact_name_match_beats_alias_match() {
        let ports = vec![
            port("AAA", "Other", &["Busan"], Some(1.0), Some(1.0)),
            port("KRPUS", "Busan", &[], Some(35.1), Some(129.0)),
        ];
        let result = match_rotation_str(Some("Busan"), &ports);
        assert_eq!(result.matched[0].port.port_code, "KRPUS");
    }

    #[test]
    fn identical_inputs_yield_identical_results() {
        let ports = reference_set();
        let first = match_rotation_str(Some("Busan, Qingdao, Shanghai"), &ports);
        let second = match_rotation_str(Some("Busan, Qingdao, Shanghai"), &ports);

        let codes = |r: &MatchResult| {
            r.matched.iter().map(|m| m.port.port_code.clone()).collect::<Vec<_>>()
        };
        assert_eq!(codes(&first), codes(&second));
        assert_eq!(first.unmatched, second.unmatched);
    }
}
