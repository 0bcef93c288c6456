//! Fidelity scoring shared by every converter
//!
//! A warning is lossy when it says content was dropped or could not be
//! expressed; informational notices are not. The classification rule and
//! the 10-point decrement are shared so that scores stay comparable across
//! ecosystems: a 90 means the same thing coming out of any converter.

/// Points deducted per detected loss.
pub const LOSSY_PENALTY: u8 = 10;

/// Classify a single warning as lossy or cosmetic.
///
/// Lossy means the warning indicates skipped or unsupported content. The
/// match is a substring check, folded to lowercase so converters do not
/// have to agree on capitalization.
pub fn is_lossy(warning: &str) -> bool {
    let folded = warning.to_lowercase();
    folded.contains("not supported") || folded.contains("skipped")
}

/// Whether any warning in the list is lossy.
pub fn any_lossy(warnings: &[String]) -> bool {
    warnings.iter().any(|w| is_lossy(w))
}

/// Flat scoring: full marks, minus one fixed penalty if anything was lost.
///
/// Returns (lossy_conversion, quality_score).
pub fn flat_score(warnings: &[String]) -> (bool, u8) {
    if any_lossy(warnings) {
        (true, 100 - LOSSY_PENALTY)
    } else {
        (false, 100)
    }
}

/// Stepped scoring: one penalty per lossy warning, clamped to 0.
///
/// Returns (lossy_conversion, quality_score).
pub fn stepped_score(warnings: &[String]) -> (bool, u8) {
    let losses = warnings.iter().filter(|w| is_lossy(w)).count();
    if losses == 0 {
        return (false, 100);
    }
    let penalty = (losses as u32).saturating_mul(LOSSY_PENALTY as u32);
    (true, 100u32.saturating_sub(penalty) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Tools section skipped (claude-specific)", true)]
    #[case("Persona sections are not supported in kiro steering files", true)]
    #[case("Front matter could not be parsed; treated as absent", false)]
    #[case("Converted with default glob patterns", false)]
    #[case("Custom section SKIPPED (windsurf-specific)", true)]
    fn test_lossy_classification(#[case] warning: &str, #[case] lossy: bool) {
        assert_eq!(is_lossy(warning), lossy);
    }

    #[test]
    fn test_flat_score_clean() {
        let warnings = vec!["informational notice".to_string()];
        assert_eq!(flat_score(&warnings), (false, 100));
        assert_eq!(flat_score(&[]), (false, 100));
    }

    #[test]
    fn test_flat_score_lossy_is_single_penalty() {
        let warnings = vec![
            "Tools section skipped (claude-specific)".to_string(),
            "Custom section skipped (windsurf-specific)".to_string(),
        ];
        // Flat scoring does not stack
        assert_eq!(flat_score(&warnings), (true, 90));
    }

    #[test]
    fn test_stepped_score_stacks_and_clamps() {
        let one = vec!["Persona section skipped".to_string()];
        assert_eq!(stepped_score(&one), (true, 90));

        let many: Vec<String> = (0..12).map(|i| format!("Section {i} skipped")).collect();
        assert_eq!(stepped_score(&many), (true, 0));
    }

    #[test]
    fn test_monotonic_contract() {
        // lossy == false implies score == 100 for both scoring shapes
        for warnings in [vec![], vec!["note".to_string()]] {
            let (lossy, score) = flat_score(&warnings);
            assert!(!lossy && score == 100);
            let (lossy, score) = stepped_score(&warnings);
            assert!(!lossy && score == 100);
        }
    }
}
