//! Security middleware for enforcing HTTPS and response hardening headers.
//!
//! In production, plain-HTTP requests are rejected unless a trusted proxy
//! reports the original scheme as HTTPS, and every response carries HSTS and
//! related headers. HTML responses (the public profile card) get a content
//! security policy that still permits inline styles and data URI images.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::{self, HeaderValue},
    Error, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

use hl_shared::{error_codes, Environment, ErrorResponse};

const API_CSP: &str = "default-src 'none'; frame-ancestors 'none'";
const HTML_CSP: &str =
    "default-src 'none'; style-src 'unsafe-inline'; img-src data: https:; frame-ancestors 'none'";

/// Security middleware factory
#[derive(Debug, Clone)]
pub struct SecurityMiddleware {
    enforce_https: bool,
    add_security_headers: bool,
    trusted_proxies: Vec<String>,
}

impl SecurityMiddleware {
    /// Configuration for an environment; only production enforces HTTPS
    pub fn for_environment(environment: Environment) -> Self {
        let production = environment.is_production();
        let trusted_proxies = std::env::var("TRUSTED_PROXIES")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let middleware = Self {
            enforce_https: production,
            add_security_headers: production,
            trusted_proxies,
        };
        log::info!(
            "Security middleware configured: enforce_https={}, add_headers={}, trusted_proxies={:?}",
            middleware.enforce_https,
            middleware.add_security_headers,
            middleware.trusted_proxies
        );
        middleware
    }

    /// No HTTPS enforcement, no extra headers
    pub fn development() -> Self {
        Self {
            enforce_https: false,
            add_security_headers: false,
            trusted_proxies: vec!["127.0.0.1".to_string(), "::1".to_string()],
        }
    }

    /// Headers without HTTPS enforcement
    pub fn headers_only() -> Self {
        Self {
            enforce_https: false,
            add_security_headers: true,
            trusted_proxies: vec![],
        }
    }

    pub fn with_trusted_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.trusted_proxies.push(proxy.into());
        self
    }
}

impl<S, B> Transform<S, ServiceRequest> for SecurityMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SecurityMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SecurityMiddlewareService {
            service: Rc::new(service),
            enforce_https: self.enforce_https,
            add_security_headers: self.add_security_headers,
            trusted_proxies: Rc::new(self.trusted_proxies.clone()),
        }))
    }
}

pub struct SecurityMiddlewareService<S> {
    service: Rc<S>,
    enforce_https: bool,
    add_security_headers: bool,
    trusted_proxies: Rc<Vec<String>>,
}

impl<S, B> Service<ServiceRequest> for SecurityMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let enforce_https = self.enforce_https;
        let add_security_headers = self.add_security_headers;
        let trusted_proxies = Rc::clone(&self.trusted_proxies);

        Box::pin(async move {
            if enforce_https && !is_secure_request(&req, &trusted_proxies) {
                log::warn!("Insecure request blocked: {} {}", req.method(), req.path());
                let response = HttpResponse::Forbidden().json(ErrorResponse::new(
                    error_codes::HTTPS_REQUIRED,
                    "HTTPS required",
                ));
                return Err(InternalError::from_response("HTTPS required", response).into());
            }

            let mut response = service.call(req).await?;

            if add_security_headers {
                add_security_response_headers(&mut response);
            }

            Ok(response)
        })
    }
}

fn is_secure_request(req: &ServiceRequest, trusted_proxies: &[String]) -> bool {
    let conn_info = req.connection_info();
    if conn_info.scheme() == "https" {
        return true;
    }

    // X-Forwarded-Proto only counts when set by a trusted proxy
    if let Some(proto) = req
        .headers()
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
    {
        let peer_addr = req
            .peer_addr()
            .map(|addr| addr.ip().to_string())
            .unwrap_or_default();
        if proto == "https" && trusted_proxies.iter().any(|p| p == &peer_addr) {
            return true;
        }
    }

    let host = conn_info.host();
    host == "localhost"
        || host.starts_with("localhost:")
        || host.starts_with("127.0.0.1")
        || host.starts_with("[::1]")
}

fn is_html<B>(response: &ServiceResponse<B>) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("text/html"))
        .unwrap_or(false)
}

fn add_security_response_headers<B>(response: &mut ServiceResponse<B>) {
    let csp = if is_html(response) { HTML_CSP } else { API_CSP };
    let headers = response.headers_mut();

    headers.insert(
        header::STRICT_TRANSPORT_SECURITY,
        HeaderValue::from_static("max-age=31536000; includeSubDomains"),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(csp),
    );
    headers.insert(
        header::HeaderName::from_static("permissions-policy"),
        HeaderValue::from_static("camera=(), geolocation=(), microphone=(), payment=()"),
    );
}
