//! Header field names as constants.
//!
//! Covers the standard, provisional and widely used non-standard request and
//! response fields. Values are the canonical wire spelling, so
//! `headers::CONTENT_TYPE` is `"Content-Type"`.

// Standard request fields.

/// Acceptable instance-manipulations for the request (RFC 3229).
pub const A_IM: &str = "A-IM";
/// Media types acceptable for the response.
pub const ACCEPT: &str = "Accept";
pub const ACCEPT_CHARSET: &str = "Accept-Charset";
/// Provisional. Acceptable version in time (RFC 7089).
pub const ACCEPT_DATETIME: &str = "Accept-Datetime";
pub const ACCEPT_ENCODING: &str = "Accept-Encoding";
pub const ACCEPT_LANGUAGE: &str = "Accept-Language";
/// CORS preflight: the method the actual request will use.
pub const ACCESS_CONTROL_REQUEST_METHOD: &str = "Access-Control-Request-Method";
/// CORS preflight: the headers the actual request will send.
pub const ACCESS_CONTROL_REQUEST_HEADERS: &str = "Access-Control-Request-Headers";
pub const AUTHORIZATION: &str = "Authorization";
pub const COOKIE: &str = "Cookie";
pub const EXPECT: &str = "Expect";
/// Disclosed proxy information (RFC 7239).
pub const FORWARDED: &str = "Forwarded";
pub const FROM: &str = "From";
pub const HOST: &str = "Host";
/// Sent with an `Upgrade: h2c` request (RFC 7540).
pub const HTTP2_SETTINGS: &str = "HTTP2-Settings";
pub const IF_MATCH: &str = "If-Match";
pub const IF_MODIFIED_SINCE: &str = "If-Modified-Since";
pub const IF_NONE_MATCH: &str = "If-None-Match";
pub const IF_RANGE: &str = "If-Range";
pub const IF_UNMODIFIED_SINCE: &str = "If-Unmodified-Since";
pub const MAX_FORWARDS: &str = "Max-Forwards";
pub const ORIGIN: &str = "Origin";
/// Preferred server behaviors (RFC 7240).
pub const PREFER: &str = "Prefer";
pub const PROXY_AUTHORIZATION: &str = "Proxy-Authorization";
pub const RANGE: &str = "Range";
pub const REFERER: &str = "Referer";
/// Transfer encodings the client accepts, including `trailers`.
pub const TE: &str = "TE";
pub const USER_AGENT: &str = "User-Agent";

// Non-standard request fields.

pub const CORRELATION_ID: &str = "Correlation-ID";
/// Do Not Track.
pub const DNT: &str = "DNT";
/// Used by Microsoft load balancers for SSL offloading.
pub const FRONT_END_HTTPS: &str = "Front-End-Https";
pub const PROXY_CONNECTION: &str = "Proxy-Connection";
pub const SAVE_DATA: &str = "Save-Data";
pub const UPGRADE_INSECURE_REQUESTS: &str = "Upgrade-Insecure-Requests";
pub const X_ATT_DEVICE_ID: &str = "X-ATT-DeviceId";
pub const X_CSRF_TOKEN: &str = "X-Csrf-Token";
pub const X_FORWARDED_FOR: &str = "X-Forwarded-For";
pub const X_FORWARDED_HOST: &str = "X-Forwarded-Host";
pub const X_FORWARDED_PROTO: &str = "X-Forwarded-Proto";
pub const X_HTTP_METHOD_OVERRIDE: &str = "X-Http-Method-Override";
/// Mostly `XMLHttpRequest`, sent by JavaScript libraries.
pub const X_REQUESTED_WITH: &str = "X-Requested-With";
/// Unique subscriber identifier injected by some mobile carriers.
pub const X_UIDH: &str = "X-UIDH";
pub const X_WAP_PROFILE: &str = "X-Wap-Profile";

// Fields used in both directions.

pub const CACHE_CONTROL: &str = "Cache-Control";
pub const CONNECTION: &str = "Connection";
pub const CONTENT_ENCODING: &str = "Content-Encoding";
pub const CONTENT_LENGTH: &str = "Content-Length";
/// Obsolete.
pub const CONTENT_MD5: &str = "Content-MD5";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const DATE: &str = "Date";
pub const PRAGMA: &str = "Pragma";
pub const TRAILER: &str = "Trailer";
pub const TRANSFER_ENCODING: &str = "Transfer-Encoding";
pub const UPGRADE: &str = "Upgrade";
pub const VIA: &str = "Via";
/// Obsolete.
pub const WARNING: &str = "Warning";
pub const X_CORRELATION_ID: &str = "X-Correlation-ID";
pub const X_REQUEST_ID: &str = "X-Request-ID";

// Standard response fields.

/// Client hints the server wants to receive.
pub const ACCEPT_CH: &str = "Accept-CH";
pub const ACCEPT_PATCH: &str = "Accept-Patch";
pub const ACCEPT_RANGES: &str = "Accept-Ranges";
pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const ACCESS_CONTROL_EXPOSE_HEADERS: &str = "Access-Control-Expose-Headers";
pub const ACCESS_CONTROL_MAX_AGE: &str = "Access-Control-Max-Age";
pub const AGE: &str = "Age";
pub const ALLOW: &str = "Allow";
pub const ALT_SVC: &str = "Alt-Svc";
pub const CONTENT_DISPOSITION: &str = "Content-Disposition";
pub const CONTENT_LANGUAGE: &str = "Content-Language";
pub const CONTENT_LOCATION: &str = "Content-Location";
pub const CONTENT_RANGE: &str = "Content-Range";
pub const CONTENT_SECURITY_POLICY: &str = "Content-Security-Policy";
/// Delta encoding base (RFC 3229).
pub const DELTA_BASE: &str = "Delta-Base";
pub const ETAG: &str = "ETag";
pub const EXPIRES: &str = "Expires";
/// Instance-manipulations applied to the response (RFC 3229).
pub const IM: &str = "IM";
pub const LAST_MODIFIED: &str = "Last-Modified";
pub const LINK: &str = "Link";
pub const LOCATION: &str = "Location";
/// P3P policy. Not widely used.
pub const P3P: &str = "P3P";
pub const PREFERENCE_APPLIED: &str = "Preference-Applied";
pub const PROXY_AUTHENTICATE: &str = "Proxy-Authenticate";
pub const PUBLIC_KEY_PINS: &str = "Public-Key-Pins";
pub const RETRY_AFTER: &str = "Retry-After";
pub const SERVER: &str = "Server";
pub const SET_COOKIE: &str = "Set-Cookie";
/// HSTS policy.
pub const STRICT_TRANSPORT_SECURITY: &str = "Strict-Transport-Security";
/// Tracking status, for Do Not Track.
pub const TK: &str = "Tk";
pub const VARY: &str = "Vary";
pub const WWW_AUTHENTICATE: &str = "WWW-Authenticate";
/// Obsolete in favor of `Content-Security-Policy: frame-ancestors`.
pub const X_FRAME_OPTIONS: &str = "X-Frame-Options";

// Non-standard response fields.

/// Network error logging policy.
pub const NEL: &str = "NEL";
pub const PERMISSIONS_POLICY: &str = "Permissions-Policy";
/// Redirect or refresh after a delay.
pub const REFRESH: &str = "Refresh";
pub const REPORT_TO: &str = "Report-To";
/// CGI status line.
pub const STATUS: &str = "Status";
pub const TIMING_ALLOW_ORIGIN: &str = "Timing-Allow-Origin";
pub const X_CONTENT_DURATION: &str = "X-Content-Duration";
pub const X_CONTENT_SECURITY_POLICY: &str = "X-Content-Security-Policy";
pub const X_CONTENT_TYPE_OPTIONS: &str = "X-Content-Type-Options";
pub const X_POWERED_BY: &str = "X-Powered-By";
pub const X_REDIRECT_BY: &str = "X-Redirect-By";
pub const X_UA_COMPATIBLE: &str = "X-UA-Compatible";
pub const X_WEBKIT_CSP: &str = "X-WebKit-CSP";
pub const X_XSS_PROTECTION: &str = "X-XSS-Protection";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_valid_header_tokens() {
        for name in [A_IM, CONTENT_TYPE, HTTP2_SETTINGS, X_ATT_DEVICE_ID, WWW_AUTHENTICATE, ETAG] {
            assert!(http::HeaderName::from_bytes(name.as_bytes()).is_ok(), "{name}");
        }
    }

    #[test]
    fn canonical_names_survive_canonicalization() {
        for name in [CONTENT_TYPE, USER_AGENT, X_FORWARDED_FOR, ACCESS_CONTROL_ALLOW_ORIGIN] {
            assert_eq!(crate::http::canonical_header_name(name), name);
        }
    }
}
