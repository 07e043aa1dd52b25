//! One-shot notice carried from a mutating request to the next list page.
//!
//! The notice travels as a short code in the `agenda_notice` cookie. The list
//! page shows it once and clears the cookie.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;

pub const NOTICE_COOKIE: &str = "agenda_notice";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Added,
    Updated,
    Deleted,
    RequestError,
}

impl Notice {
    /// Text shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Added => "New entry was successfully posted",
            Notice::Updated => "Entry was successfully updated",
            Notice::Deleted => "Entry was successfully deleted",
            Notice::RequestError => "Request error",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Notice::Added => "added",
            Notice::Updated => "updated",
            Notice::Deleted => "deleted",
            Notice::RequestError => "request_error",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "added" => Some(Notice::Added),
            "updated" => Some(Notice::Updated),
            "deleted" => Some(Notice::Deleted),
            "request_error" => Some(Notice::RequestError),
            _ => None,
        }
    }

    /// `Set-Cookie` value that stores this notice.
    pub fn set_cookie(&self) -> String {
        format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            NOTICE_COOKIE,
            self.code()
        )
    }

    /// Notice stored in the request's cookies, if any. Unknown codes are ignored.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == NOTICE_COOKIE)
            .and_then(|(_, code)| Self::from_code(code))
    }
}

/// `Set-Cookie` value that removes the notice.
pub fn clear_cookie() -> String {
    format!("{}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax", NOTICE_COOKIE)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers_with_cookie(cookie: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static(cookie));
        headers
    }

    #[test]
    fn set_cookie_round_trips_through_request_header() {
        for notice in [
            Notice::Added,
            Notice::Updated,
            Notice::Deleted,
            Notice::RequestError,
        ] {
            let set_cookie = notice.set_cookie();
            let pair = set_cookie.split(';').next().expect("name=value");
            let mut headers = HeaderMap::new();
            headers.insert(COOKIE, HeaderValue::from_str(pair).expect("header"));
            assert_eq!(Notice::from_headers(&headers), Some(notice));
        }
    }

    #[test]
    fn finds_notice_among_other_cookies() {
        let headers = headers_with_cookie("theme=dark; agenda_notice=deleted; lang=en");
        assert_eq!(Notice::from_headers(&headers), Some(Notice::Deleted));
    }

    #[test]
    fn unknown_or_missing_notice_is_none() {
        assert_eq!(Notice::from_headers(&HeaderMap::new()), None);
        assert_eq!(
            Notice::from_headers(&headers_with_cookie("agenda_notice=hacked")),
            None
        );
    }

    #[test]
    fn request_error_message_is_generic() {
        assert_eq!(Notice::RequestError.message(), "Request error");
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        assert!(clear_cookie().contains("Max-Age=0"));
        assert!(clear_cookie().starts_with("agenda_notice=;"));
    }
}
