use crate::scenario::ScenarioError;

/// Split a TLE block into an optional name line and the two element lines.
/// `index` identifies the satellite in error messages.
pub fn parse_tle_lines(
    tle: &str,
    index: usize,
) -> Result<(Option<String>, String, String), ScenarioError> {
    let lines: Vec<String> = tle
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect();

    match lines.as_slice() {
        [l1, l2] if is_element_pair(l1, l2) => Ok((None, l1.clone(), l2.clone())),
        [name, l1, l2] if is_element_pair(l1, l2) => {
            let name = name.strip_prefix("0 ").unwrap_or(name).trim();
            Ok((Some(name.to_string()), l1.clone(), l2.clone()))
        }
        _ => Err(ScenarioError::InvalidTleFormat(index)),
    }
}

fn is_element_pair(line1: &str, line2: &str) -> bool {
    line1.starts_with("1 ") && line2.starts_with("2 ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const L1: &str = "1 25544U 98067A   20194.88612269 -.00002218  00000-0 -31515-4 0  9992";
    const L2: &str = "2 25544  51.6461 221.2784 0001413  89.1723 280.4612 15.49507896236008";

    #[test]
    fn two_line_block() {
        let (name, l1, l2) = parse_tle_lines(&format!("{L1}\n{L2}\n"), 0).unwrap();
        assert_eq!(name, None);
        assert_eq!(l1, L1);
        assert_eq!(l2, L2);
    }

    #[test]
    fn three_line_block_with_indent() {
        let block = format!("  0 ISS (ZARYA)\n  {L1}\n\n  {L2}\n");
        let (name, l1, _) = parse_tle_lines(&block, 0).unwrap();
        assert_eq!(name.as_deref(), Some("ISS (ZARYA)"));
        assert_eq!(l1, L1);
    }

    #[test]
    fn rejects_swapped_lines() {
        let err = parse_tle_lines(&format!("{L2}\n{L1}"), 3).unwrap_err();
        assert!(matches!(err, ScenarioError::InvalidTleFormat(3)));
    }

    #[test]
    fn rejects_single_line() {
        assert!(parse_tle_lines(L1, 0).is_err());
    }
}
