// src/check.rs
//
// Header-only accessibility probe. Classification never raises: every
// outcome is an accessible flag plus a human-readable reason, and the run
// moves on to the next item either way.

use reqwest::blocking::Client;

use crate::config::consts::IMAGE_MIME_TYPES;
use crate::core::net;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub accessible: bool,
    pub reason: String,
}

impl Verdict {
    fn ok() -> Self {
        Self { accessible: true, reason: "OK".to_string() }
    }

    fn bad(reason: String) -> Self {
        Self { accessible: false, reason }
    }
}

/// Accessible only when the status is exactly 200 and the declared content
/// type is on the image allow-list.
pub fn classify(status: u16, content_type: Option<&str>) -> Verdict {
    if status != 200 {
        return Verdict::bad(format!("HTTP {}", status));
    }
    match content_type {
        Some(ct) if IMAGE_MIME_TYPES.iter().any(|t| ct.contains(t)) => Verdict::ok(),
        Some(ct) => Verdict::bad(format!("Invalid content type: {}", ct)),
        None => Verdict::bad("Invalid content type: none declared".to_string()),
    }
}

/// HEAD the URL and classify. Transport failure becomes a verdict too.
pub fn check_image(client: &Client, url: &str) -> Verdict {
    match net::head(client, url) {
        Ok(h) => classify(h.status, h.content_type.as_deref()),
        Err(e) => Verdict::bad(format!("Request failed: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_status_and_image_type_is_accessible() {
        let v = classify(200, Some("image/jpeg"));
        assert!(v.accessible);
        assert_eq!(v.reason, "OK");
    }

    #[test]
    fn charset_suffix_still_counts() {
        assert!(classify(200, Some("image/png; charset=binary")).accessible);
    }

    #[test]
    fn not_found_reports_the_status() {
        let v = classify(404, Some("image/jpeg"));
        assert!(!v.accessible);
        assert!(v.reason.contains("404"));
    }

    #[test]
    fn html_masquerading_as_an_image_is_rejected() {
        let v = classify(200, Some("text/html"));
        assert!(!v.accessible);
        assert!(v.reason.contains("text/html"));
        assert!(v.reason.contains("Invalid content type"));
    }

    #[test]
    fn missing_content_type_is_rejected() {
        let v = classify(200, None);
        assert!(!v.accessible);
        assert!(v.reason.contains("Invalid content type"));
    }

    #[test]
    fn redirect_status_is_not_accessible() {
        assert!(!classify(301, Some("image/jpeg")).accessible);
    }
}
