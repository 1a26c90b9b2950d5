//! Security header middleware
//!
//! Every response leaving the server passes through [`security_headers`],
//! which stamps a fixed header set and picks a `Cache-Control` value from the
//! request path. Status and body are never touched.

use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, HeaderValue, header};
use axum::middleware::Next;
use axum::response::Response;

/// Default policy: self plus the calendar embedding origin.
///
/// `'wasm-unsafe-eval'` lets the hydrate bundle compile; it does not allow
/// `eval` of JavaScript.
pub const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
style-src 'self' 'unsafe-inline' https://fonts.googleapis.com https://calendar.google.com; \
font-src 'self' https://fonts.gstatic.com; \
img-src 'self' data: https://calendar.google.com; \
script-src 'self' 'wasm-unsafe-eval' https://calendar.google.com; \
connect-src 'self' https://calendar.google.com; \
frame-src https://calendar.google.com; \
frame-ancestors 'self'; \
base-uri 'self'; \
form-action 'none'";

/// Locked-down policy for PDF documents
pub const PDF_CONTENT_SECURITY_POLICY: &str = "default-src 'none'; style-src 'unsafe-inline'; sandbox";

pub const FRAME_OPTIONS: &str = "SAMEORIGIN";
pub const CONTENT_TYPE_OPTIONS: &str = "nosniff";
pub const XSS_PROTECTION: &str = "1; mode=block";
pub const REFERRER_POLICY: &str = "strict-origin-when-cross-origin";
pub const PERMISSIONS_POLICY: &str = "geolocation=(), microphone=(), camera=(), payment=(), usb=(), magnetometer=(), gyroscope=(), accelerometer=()";

/// Only sent when [`SecurityPolicy::hsts`] is on.
pub const STRICT_TRANSPORT_SECURITY: &str = "max-age=31536000; includeSubDomains; preload";

const STATIC_EXTENSIONS: &[&str] = &[
    "js", "css", "png", "jpg", "jpeg", "gif", "svg", "ico", "woff", "woff2", "ttf", "eot", "wasm",
];

/// Caching class of a request path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheRule {
    /// Scripts, styles, images, fonts
    StaticAsset,
    /// HTML documents and the site root
    Document,
    /// PDF downloads
    Pdf,
}

impl CacheRule {
    /// Classify a path. Rules are checked in order; `None` means the
    /// response keeps whatever caching the downstream chose.
    pub fn for_path(path: &str) -> Option<Self> {
        let file = path.rsplit('/').next().unwrap_or(path);
        let extension = file.rsplit_once('.').map(|(_, ext)| ext);

        if extension.is_some_and(|ext| STATIC_EXTENSIONS.contains(&ext)) {
            Some(CacheRule::StaticAsset)
        } else if path.ends_with(".html") || path == "/" {
            Some(CacheRule::Document)
        } else if path.ends_with(".pdf") {
            Some(CacheRule::Pdf)
        } else {
            None
        }
    }

    pub fn cache_control(&self) -> &'static str {
        match self {
            CacheRule::StaticAsset => "public, max-age=31536000, immutable",
            CacheRule::Document => "public, max-age=3600, must-revalidate",
            CacheRule::Pdf => "public, max-age=86400",
        }
    }

    /// CSP override for this class, if any
    pub fn content_security_policy(&self) -> Option<&'static str> {
        match self {
            CacheRule::Pdf => Some(PDF_CONTENT_SECURITY_POLICY),
            _ => None,
        }
    }
}

/// Middleware settings
#[derive(Debug, Clone, Copy, Default)]
pub struct SecurityPolicy {
    pub hsts: bool,
}

impl SecurityPolicy {
    /// Rewrite `headers` for a response to `path`
    pub fn apply(&self, path: &str, headers: &mut HeaderMap) {
        set(headers, header::CONTENT_SECURITY_POLICY, CONTENT_SECURITY_POLICY);
        set(headers, header::X_FRAME_OPTIONS, FRAME_OPTIONS);
        set(headers, header::X_CONTENT_TYPE_OPTIONS, CONTENT_TYPE_OPTIONS);
        set(headers, header::X_XSS_PROTECTION, XSS_PROTECTION);
        set(headers, header::REFERRER_POLICY, REFERRER_POLICY);
        set(
            headers,
            HeaderName::from_static("permissions-policy"),
            PERMISSIONS_POLICY,
        );

        if self.hsts {
            set(
                headers,
                header::STRICT_TRANSPORT_SECURITY,
                STRICT_TRANSPORT_SECURITY,
            );
        }

        if let Some(rule) = CacheRule::for_path(path) {
            if let Some(csp) = rule.content_security_policy() {
                set(headers, header::CONTENT_SECURITY_POLICY, csp);
            }
            set(headers, header::CACHE_CONTROL, rule.cache_control());
        }
    }
}

fn set(headers: &mut HeaderMap, name: HeaderName, value: &'static str) {
    headers.insert(name, HeaderValue::from_static(value));
}

/// Axum middleware applying [`SecurityPolicy`] to the downstream response
pub async fn security_headers(
    State(policy): State<SecurityPolicy>,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path().to_owned();

    let mut response = next.run(req).await;
    policy.apply(&path, response.headers_mut());

    tracing::trace!(path = %path, status = %response.status(), "security headers applied");

    response
}
