use axum::http::{header, HeaderName, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

/// Security header values
const NOSNIFF: &str = "nosniff";
const DENY: &str = "DENY";
const HSTS_VALUE: &str = "max-age=31536000; includeSubDomains";
// Pages load artist/venue images from anywhere and carry one inline script
const CSP_PAGES_VALUE: &str = "default-src 'self'; img-src * data:; \
     script-src 'self' 'unsafe-inline'; style-src 'self' 'unsafe-inline'; \
     frame-ancestors 'none'";
const REFERRER_POLICY_VALUE: &str = "strict-origin-when-cross-origin";
const PERMISSIONS_POLICY: &str = "permissions-policy";
const PERMISSIONS_POLICY_VALUE: &str = "geolocation=(), microphone=(), camera=()";

/// Response headers added to every page; HSTS only in production.
#[derive(Debug, Clone, Copy)]
pub struct SecurityHeaders {
    include_hsts: bool,
}

impl SecurityHeaders {
    pub fn new(include_hsts: bool) -> Self {
        if include_hsts {
            tracing::info!("Security: HSTS header enabled (production mode)");
        } else {
            tracing::info!("Security: HSTS header disabled (development mode)");
        }
        Self { include_hsts }
    }

    pub fn headers(&self) -> Vec<(HeaderName, HeaderValue)> {
        let mut headers = vec![
            (
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static(NOSNIFF),
            ),
            (header::X_FRAME_OPTIONS, HeaderValue::from_static(DENY)),
            (
                header::CONTENT_SECURITY_POLICY,
                HeaderValue::from_static(CSP_PAGES_VALUE),
            ),
            (
                header::REFERRER_POLICY,
                HeaderValue::from_static(REFERRER_POLICY_VALUE),
            ),
            (
                HeaderName::from_static(PERMISSIONS_POLICY),
                HeaderValue::from_static(PERMISSIONS_POLICY_VALUE),
            ),
        ];
        if self.include_hsts {
            headers.push((
                header::STRICT_TRANSPORT_SECURITY,
                HeaderValue::from_static(HSTS_VALUE),
            ));
        }
        headers
    }

    pub fn apply<S>(&self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        self.headers().into_iter().fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::if_not_present(name, value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsts_only_in_production() {
        let dev = SecurityHeaders::new(false).headers();
        assert!(!dev
            .iter()
            .any(|(name, _)| name == header::STRICT_TRANSPORT_SECURITY));

        let prod = SecurityHeaders::new(true).headers();
        assert!(prod
            .iter()
            .any(|(name, _)| name == header::STRICT_TRANSPORT_SECURITY));
        assert_eq!(prod.len(), dev.len() + 1);
    }

    #[test]
    fn test_frame_options_deny() {
        let headers = SecurityHeaders::new(false).headers();
        let (_, value) = headers
            .iter()
            .find(|(name, _)| name == header::X_FRAME_OPTIONS)
            .unwrap();
        assert_eq!(value, "DENY");
    }
}
