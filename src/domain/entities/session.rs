//! Session time span as reported by the statistics API.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A single presence session, bounded by its start and end time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSpan {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl SessionSpan {
    pub fn new(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        Self {
            start_time,
            end_time,
        }
    }

    /// Length of the session. Spans ending before they start count as zero.
    pub fn duration(&self) -> Duration {
        (self.end_time - self.start_time).max(Duration::zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_duration() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let span = SessionSpan::new(start, start + Duration::minutes(95));
        assert_eq!(span.duration(), Duration::minutes(95));
    }

    #[test]
    fn test_inverted_span_is_zero() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let span = SessionSpan::new(start, start - Duration::minutes(5));
        assert_eq!(span.duration(), Duration::zero());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let span: SessionSpan = serde_json::from_str(
            r#"{"startTime":"2024-03-01T08:00:00Z","endTime":"2024-03-01T09:30:00+00:00"}"#,
        )
        .unwrap();
        assert_eq!(span.duration(), Duration::minutes(90));
    }
}
