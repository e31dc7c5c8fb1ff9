//! Viewer credentials forwarded to the statistics API.

/// Authentication material copied from the incoming request.
///
/// The page never inspects these values; they are passed through so the
/// upstream API can resolve who "me" is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewerCredentials {
    pub cookie: Option<String>,
    pub authorization: Option<String>,
}

impl ViewerCredentials {
    pub fn new(cookie: Option<String>, authorization: Option<String>) -> Self {
        Self {
            cookie,
            authorization,
        }
    }

    /// Credentials for requests made outside a viewer's context (health probes).
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_anonymous(&self) -> bool {
        self.cookie.is_none() && self.authorization.is_none()
    }
}
