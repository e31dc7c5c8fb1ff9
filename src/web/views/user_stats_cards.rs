//! View model for the statistics card region.

use chrono::Duration;

use crate::domain::entities::{SessionSpan, UserStats};

/// Card region of the statistics page.
///
/// Holds the user's statistics exactly as fetched; everything shown is
/// derived on demand by the methods below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStatsCards {
    pub user_stats: UserStats,
}

/// One session formatted for display (UTC).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRow {
    pub date: String,
    pub start: String,
    pub end: String,
    pub duration: String,
}

impl From<&SessionSpan> for SessionRow {
    fn from(span: &SessionSpan) -> Self {
        Self {
            date: span.start_time.format("%Y-%m-%d").to_string(),
            start: span.start_time.format("%H:%M").to_string(),
            end: span.end_time.format("%H:%M").to_string(),
            duration: format_duration(span.duration()),
        }
    }
}

/// One bar of the hour-of-day histogram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourBar {
    pub label: String,
    pub count: i64,
    /// Height relative to the busiest hour, 0..=100.
    pub percent: i64,
}

impl UserStatsCards {
    pub fn new(user_stats: UserStats) -> Self {
        Self { user_stats }
    }

    pub fn longest_session(&self) -> Option<SessionRow> {
        self.user_stats.longest_session.as_ref().map(SessionRow::from)
    }

    pub fn recent_sessions(&self) -> Vec<SessionRow> {
        self.user_stats
            .recent_sessions
            .iter()
            .map(SessionRow::from)
            .collect()
    }

    /// Combined length of the recent sessions.
    pub fn recent_total(&self) -> String {
        let total = self
            .user_stats
            .recent_sessions
            .iter()
            .fold(Duration::zero(), |acc, s| acc + s.duration());
        format_duration(total)
    }

    pub fn has_hour_stats(&self) -> bool {
        !self.user_stats.hour_stats.is_empty()
    }

    pub fn hour_bars(&self) -> Vec<HourBar> {
        let max = self
            .user_stats
            .hour_stats
            .iter()
            .copied()
            .max()
            .unwrap_or(0)
            .max(0);

        self.user_stats
            .hour_stats
            .iter()
            .enumerate()
            .map(|(hour, &count)| {
                let count = count.max(0);
                HourBar {
                    label: format!("{hour:02}"),
                    count,
                    percent: scale_percent(count, max),
                }
            })
            .collect()
    }
}

/// `count` as a share of `max` in whole percent. Computed in `i128` so
/// upstream counts near `i64::MAX` cannot overflow.
fn scale_percent(count: i64, max: i64) -> i64 {
    if max <= 0 {
        return 0;
    }
    let percent = i128::from(count) * 100 / i128::from(max);
    i64::try_from(percent).unwrap_or(100)
}

/// Formats a duration as `"{h}h {mm}m"`, or `"{m}m"` below one hour.
pub fn format_duration(duration: Duration) -> String {
    let minutes = duration.num_minutes().max(0);
    let (hours, minutes) = (minutes / 60, minutes % 60);

    if hours == 0 {
        format!("{minutes}m")
    } else {
        format!("{hours}h {minutes:02}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn span(start_hour: u32, minutes: i64) -> SessionSpan {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, start_hour, 0, 0).unwrap();
        SessionSpan::new(start, start + Duration::minutes(minutes))
    }

    fn stats() -> UserStats {
        UserStats {
            longest_session: Some(span(8, 245)),
            recent_sessions: vec![span(9, 30), span(13, 90)],
            hour_stats: vec![0, 5, 10, -3],
            cid: "abc123".to_string(),
        }
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::minutes(0)), "0m");
        assert_eq!(format_duration(Duration::minutes(45)), "45m");
        assert_eq!(format_duration(Duration::minutes(60)), "1h 00m");
        assert_eq!(format_duration(Duration::minutes(245)), "4h 05m");
        assert_eq!(format_duration(Duration::minutes(-10)), "0m");
    }

    #[test]
    fn test_longest_session_row() {
        let cards = UserStatsCards::new(stats());
        let row = cards.longest_session().unwrap();

        assert_eq!(row.date, "2024-03-01");
        assert_eq!(row.start, "08:00");
        assert_eq!(row.end, "12:05");
        assert_eq!(row.duration, "4h 05m");
    }

    #[test]
    fn test_recent_sessions_and_total() {
        let cards = UserStatsCards::new(stats());

        assert_eq!(cards.recent_sessions().len(), 2);
        assert_eq!(cards.recent_total(), "2h 00m");
    }

    #[test]
    fn test_hour_bars_scale_to_busiest_hour() {
        let cards = UserStatsCards::new(stats());
        let bars = cards.hour_bars();

        assert_eq!(bars.len(), 4);
        assert_eq!(bars[0].percent, 0);
        assert_eq!(bars[1].percent, 50);
        assert_eq!(bars[2].percent, 100);
        assert_eq!(bars[3].count, 0);
        assert_eq!(bars[2].label, "02");
    }

    #[test]
    fn test_hour_bars_all_zero() {
        let mut user_stats = stats();
        user_stats.hour_stats = vec![0; 24];

        let bars = UserStatsCards::new(user_stats).hour_bars();
        assert_eq!(bars.len(), 24);
        assert!(bars.iter().all(|b| b.percent == 0));
    }

    #[test]
    fn test_hour_bars_with_huge_counts() {
        let mut user_stats = stats();
        user_stats.hour_stats = vec![i64::MAX, i64::MAX / 2, 0];

        let bars = UserStatsCards::new(user_stats).hour_bars();
        assert_eq!(bars[0].percent, 100);
        assert_eq!(bars[1].percent, 49);
        assert_eq!(bars[2].percent, 0);
    }
}
