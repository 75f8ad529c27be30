use axum::http::{header, HeaderMap};
use base64ct::{Base64UrlUnpadded, Encoding};

pub const COOKIE_NAME: &str = "flash";

/// One-time notice carried to the next rendered page through a cookie.
///
/// Contract: queued as a `Set-Cookie` on the redirect response, read and
/// displayed by the next rendered page, which clears it in the same response.
/// A notice is shown at most once; a malformed cookie yields nothing and is
/// cleared the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub category: String,
    pub message: String,
}

impl Flash {
    pub fn new(category: &str, message: &str) -> Self {
        Self {
            category: category.to_owned(),
            message: message.to_owned(),
        }
    }

    pub fn success(message: &str) -> Self {
        Self::new("success", message)
    }
}

/// `Set-Cookie` value queueing a notice for the next rendered page.
pub fn set_cookie(flash: &Flash) -> String {
    let raw = format!("{}\n{}", flash.category, flash.message);
    let encoded = Base64UrlUnpadded::encode_string(raw.as_bytes());
    format!("{COOKIE_NAME}={encoded}; Path=/; HttpOnly; SameSite=Lax")
}

/// `Set-Cookie` value expiring the notice cookie.
pub fn clear_cookie() -> String {
    format!("{COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

pub fn cookie_present(headers: &HeaderMap) -> bool {
    cookie_value(headers).is_some()
}

/// Read the queued notice from the request cookies, if any.
pub fn take(headers: &HeaderMap) -> Option<Flash> {
    let encoded = cookie_value(headers)?;
    let raw = Base64UrlUnpadded::decode_vec(encoded).ok()?;
    let raw = String::from_utf8(raw).ok()?;
    let (category, message) = raw.split_once('\n')?;
    Some(Flash::new(category, message))
}

fn cookie_value(headers: &HeaderMap) -> Option<&str> {
    for value in headers.get_all(header::COOKIE) {
        let Ok(value) = value.to_str() else { continue };
        for pair in value.split(';') {
            let candidate = pair
                .trim()
                .strip_prefix(COOKIE_NAME)
                .and_then(|rest| rest.strip_prefix('='));
            if let Some(v) = candidate {
                if !v.is_empty() {
                    return Some(v);
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn request_headers(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn set_then_take_roundtrips_category_and_message() {
        let notice = Flash::success("Vous êtes inscrit avec succès");
        let set = set_cookie(&notice);
        let cookie = set.split(';').next().unwrap();

        let headers = request_headers(cookie);
        assert_eq!(take(&headers), Some(notice));
    }

    #[test]
    fn take_finds_cookie_among_others() {
        let set = set_cookie(&Flash::new("success", "ok"));
        let value = set.split(';').next().unwrap();
        let headers = request_headers(&format!("theme=dark; {value}; lang=fr"));

        let notice = take(&headers).expect("notice present");
        assert_eq!(notice.category, "success");
        assert_eq!(notice.message, "ok");
    }

    #[test]
    fn take_ignores_missing_or_malformed_cookie() {
        assert_eq!(take(&HeaderMap::new()), None);
        assert_eq!(take(&request_headers("theme=dark")), None);
        assert_eq!(take(&request_headers("flash=%%%not-base64%%%")), None);
        // Cleared cookie (empty value) carries no notice.
        assert_eq!(take(&request_headers("flash=")), None);
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        let clear = clear_cookie();
        assert!(clear.starts_with("flash=;"));
        assert!(clear.contains("Max-Age=0"));
    }

    #[test]
    fn cookie_present_tracks_cookie_header() {
        let set = set_cookie(&Flash::success("ok"));
        let value = set.split(';').next().unwrap();
        assert!(cookie_present(&request_headers(value)));
        assert!(!cookie_present(&HeaderMap::new()));
    }
}
