//! One-time flash messages carried across a redirect in a cookie.

use actix_web::cookie::Cookie;
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

pub const FLASH_COOKIE_NAME: &str = "_flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Error,
}

/// A notice shown once on the page a redirect lands on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub kind: FlashKind,
    pub message: String,
}

impl FlashMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }
}

/// Plain 302 redirect.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// 302 redirect that leaves a flash message for the next page.
pub fn redirect_with(location: &str, flash: FlashMessage) -> HttpResponse {
    let mut res = HttpResponse::Found();
    res.insert_header((header::LOCATION, location));

    match serde_json::to_string(&flash) {
        Ok(value) => {
            let cookie = Cookie::build(FLASH_COOKIE_NAME, value)
                .path("/")
                .http_only(true)
                .finish();
            res.append_header((header::SET_COOKIE, cookie.encoded().to_string()));
        }
        Err(e) => tracing::warn!(error = %e, "Dropping unserializable flash message"),
    }

    res.finish()
}

/// Read the pending flash message, if any.
pub fn take(req: &HttpRequest) -> Option<FlashMessage> {
    let cookie = req.cookie(FLASH_COOKIE_NAME)?;
    serde_json::from_str(cookie.value()).ok()
}

/// Cookie that clears a consumed flash message.
pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(FLASH_COOKIE_NAME, "").path("/").finish();
    cookie.make_removal();
    cookie
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;

    use super::*;

    #[test]
    fn test_redirect_with_round_trips_through_cookie_header() {
        let res = redirect_with("/users/new", FlashMessage::error("Name; required"));

        assert_eq!(res.status(), actix_web::http::StatusCode::FOUND);
        assert_eq!(res.headers().get(header::LOCATION).unwrap(), "/users/new");

        // What a browser would send back: the name=value part of Set-Cookie.
        let set_cookie = res.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
        let pair = set_cookie.split(';').next().unwrap().to_string();
        let req = TestRequest::default()
            .insert_header((header::COOKIE, pair))
            .to_http_request();

        assert_eq!(take(&req), Some(FlashMessage::error("Name; required")));
    }

    #[test]
    fn test_take_reads_cookie() {
        let flash = FlashMessage::success("Saved.");
        let req = TestRequest::default()
            .cookie(Cookie::new(
                FLASH_COOKIE_NAME,
                serde_json::to_string(&flash).unwrap(),
            ))
            .to_http_request();

        assert_eq!(take(&req), Some(flash));
    }

    #[test]
    fn test_take_ignores_garbage() {
        let req = TestRequest::default()
            .cookie(Cookie::new(FLASH_COOKIE_NAME, "not json"))
            .to_http_request();

        assert_eq!(take(&req), None);
    }
}
