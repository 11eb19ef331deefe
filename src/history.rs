use crate::model::{AnalysisRecord, SwingPath, Tempo};
use chrono::NaiveDate;

/// Past analysis runs shown on the home screen. In-memory demo data; there
/// is no persistence behind it.
#[must_use]
pub fn analysis_history() -> Vec<AnalysisRecord> {
    vec![
        AnalysisRecord {
            id: 1,
            date: date(2024, 1, 15),
            head_speed: 42.5,
            tempo: Tempo::Medium,
            swing_path: SwingPath::SlightOutToIn,
            recommended_club: "Titleist TSR3 Driver".to_string(),
            recommended_shaft: "Project X S-Flex".to_string(),
        },
        AnalysisRecord {
            id: 2,
            date: date(2024, 1, 10),
            head_speed: 44.2,
            tempo: Tempo::Fast,
            swing_path: SwingPath::Square,
            recommended_club: "TaylorMade Stealth 2 Driver".to_string(),
            recommended_shaft: "KBS Tour S-Flex".to_string(),
        },
        AnalysisRecord {
            id: 3,
            date: date(2024, 1, 5),
            head_speed: 41.8,
            tempo: Tempo::Slow,
            swing_path: SwingPath::SlightInToOut,
            recommended_club: "Callaway Paradym Driver".to_string(),
            recommended_shaft: "Graphite Design R-Flex".to_string(),
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_is_stable_and_dated() {
        let history = analysis_history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].date, date(2024, 1, 15));
        assert!(history.windows(2).all(|w| w[0].date > w[1].date));
    }
}
