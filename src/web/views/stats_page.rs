//! Statistics page view.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::{Html, IntoResponse, Response};

use super::user_stats_cards::UserStatsCards;
use crate::domain::entities::{PageData, Viewer};
use crate::error::AppError;

/// Template for a populated statistics page.
///
/// Renders `templates/stats.html`: the viewer's nickname as heading, then
/// the card region from `templates/partials/user_stats_cards.html`.
#[derive(Template, WebTemplate)]
#[template(path = "stats.html")]
pub struct StatsTemplate {
    pub me: Viewer,
    pub cards: UserStatsCards,
}

impl StatsTemplate {
    pub fn new(data: PageData) -> Self {
        Self {
            me: data.me,
            cards: UserStatsCards::new(data.user),
        }
    }
}

/// What the statistics route renders.
///
/// A missing [`PageData`] renders an empty body rather than an error.
pub enum StatsPage {
    Empty,
    Stats(StatsTemplate),
}

impl StatsPage {
    pub fn from_data(data: Option<PageData>) -> Self {
        match data {
            Some(data) => Self::Stats(StatsTemplate::new(data)),
            None => Self::Empty,
        }
    }

    /// Renders the page body to a string.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the template fails to render.
    pub fn render_html(&self) -> Result<String, AppError> {
        match self {
            StatsPage::Empty => Ok(String::new()),
            StatsPage::Stats(template) => Ok(template.render()?),
        }
    }
}

impl IntoResponse for StatsPage {
    fn into_response(self) -> Response {
        match self {
            StatsPage::Empty => Html(String::new()).into_response(),
            StatsPage::Stats(template) => template.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{SessionSpan, UserStats};
    use chrono::{TimeZone, Utc};

    fn page_data(nick: &str) -> PageData {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap();

        PageData {
            me: Viewer {
                cid: "viewer1".to_string(),
                nick: nick.to_string(),
            },
            user: UserStats {
                longest_session: Some(SessionSpan::new(start, end)),
                recent_sessions: vec![SessionSpan::new(start, end)],
                hour_stats: (0..24).collect(),
                cid: "abc123".to_string(),
            },
        }
    }

    #[test]
    fn test_absent_data_renders_nothing() {
        let page = StatsPage::from_data(None);
        assert!(matches!(page, StatsPage::Empty));
        assert_eq!(page.render_html().unwrap(), "");
    }

    #[test]
    fn test_renders_nick_heading_and_cards() {
        let html = StatsPage::from_data(Some(page_data("Kalle")))
            .render_html()
            .unwrap();

        assert!(html.contains("<h1>Kalle</h1>"));
        assert!(html.contains("stats-cards"));
        assert!(html.contains("data-cid=\"abc123\""));
        assert!(html.contains("2h 30m"));
    }

    #[test]
    fn test_card_region_receives_user_stats_unchanged() {
        let data = page_data("Kalle");
        let template = StatsTemplate::new(data.clone());

        assert_eq!(template.cards.user_stats, data.user);
        assert_eq!(template.me, data.me);
    }

    #[test]
    fn test_nick_is_escaped() {
        let html = StatsPage::from_data(Some(page_data("<script>x</script>")))
            .render_html()
            .unwrap();

        assert!(!html.contains("<script>x</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
