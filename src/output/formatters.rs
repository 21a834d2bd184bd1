//! Formatting utilities for terminal output

use crate::core::InputFlags;
use crate::game::TurnReport;

/// Notices for raised input flags, in reporting order
#[must_use]
pub fn flag_notices(flags: InputFlags) -> Vec<&'static str> {
    let mut notices = Vec::new();

    if flags.too_long {
        notices.push("input too long");
    }
    if flags.too_short {
        notices.push("input too short");
    }
    if flags.improper {
        notices.push("improper input");
    }

    notices
}

/// One attempt's complete feedback line
///
/// Markers first (`+` before `-`, nothing for misses), then the input
/// notices when extended feedback is on. A total miss with clean input
/// renders as an empty line.
#[must_use]
pub fn turn_line(report: &TurnReport, extended: bool) -> String {
    let mut parts: Vec<String> = Vec::new();

    let markers = report.feedback.markers();
    if !markers.is_empty() {
        parts.push(markers);
    }

    if extended {
        parts.extend(
            flag_notices(report.flags)
                .iter()
                .map(|notice| format!("({notice})")),
        );
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Code, Feedback, sanitize};
    use crate::game::{GameConfig, Outcome, Session};

    fn report_for(secret: [u8; 4], raw: &str) -> TurnReport {
        let mut session = Session::with_secret(GameConfig::default(), Code::new(secret).unwrap());
        session.play_turn(raw).unwrap()
    }

    #[test]
    fn notices_empty_for_clean_input() {
        let input = sanitize("1234");
        assert!(flag_notices(input.flags).is_empty());
    }

    #[test]
    fn notices_in_reporting_order() {
        let input = sanitize("x1");
        assert_eq!(
            flag_notices(input.flags),
            vec!["input too short", "improper input"]
        );

        let input = sanitize("123456x");
        assert_eq!(flag_notices(input.flags), vec!["input too long"]);
    }

    #[test]
    fn turn_line_markers_only() {
        let report = report_for([1, 2, 3, 4], "1 3 2 6");
        assert_eq!(turn_line(&report, true), "+--");
    }

    #[test]
    fn turn_line_appends_notices_when_extended() {
        let report = report_for([1, 2, 3, 4], "12");
        assert_eq!(turn_line(&report, true), "++ (input too short)");
    }

    #[test]
    fn turn_line_brief_mode_drops_notices() {
        let report = report_for([1, 2, 3, 4], "12");
        assert_eq!(turn_line(&report, false), "++");
    }

    #[test]
    fn turn_line_total_miss_clean_input_is_empty() {
        let report = report_for([1, 1, 1, 1], "2222");
        assert_eq!(report.outcome, Outcome::InProgress);
        assert_eq!(turn_line(&report, true), "");
    }

    #[test]
    fn turn_line_win_is_all_exact_markers() {
        let report = report_for([1, 2, 3, 4], "1234");
        assert_eq!(report.feedback, Feedback::PERFECT);
        assert_eq!(turn_line(&report, true), "++++");
    }
}
