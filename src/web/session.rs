use axum::http::{header, HeaderMap, HeaderValue};
use axum::response::Response;
use uuid::Uuid;

use crate::utils::validation::validate_session_id;

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "clock_session";

/// Browser session resolved from the request cookies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    /// True when the id was minted for this request and must be sent back.
    pub fresh: bool,
}

impl Session {
    /// Reuses a well-formed session cookie or mints a new id.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let existing = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == SESSION_COOKIE)
            .and_then(|(_, value)| validate_session_id(value).ok());

        match existing {
            Some(id) => Self {
                id: id.to_string(),
                fresh: false,
            },
            None => Self {
                id: Uuid::new_v4().to_string(),
                fresh: true,
            },
        }
    }

    pub fn cookie(&self) -> String {
        format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, self.id)
    }

    /// Attaches `Set-Cookie` when the session is new.
    pub fn attach(&self, mut response: Response) -> Response {
        if self.fresh {
            if let Ok(value) = HeaderValue::from_str(&self.cookie()) {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
        }
        response
    }
}
