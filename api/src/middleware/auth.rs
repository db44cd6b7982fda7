//! JWT authentication middleware for protecting API endpoints.
//!
//! Extracts the bearer token from the Authorization header, validates it with
//! the core `TokenService` and injects an [`AuthContext`] into the request
//! extensions. Rejections are JSON `ErrorResponse` bodies with status 401.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use uuid::Uuid;

use hl_core::{
    domain::entities::token::Claims,
    errors::{DomainError, TokenError},
    services::{Identity, TokenService},
    Role,
};

use crate::handlers::handle_domain_error;

/// Authenticated caller injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub account_id: Uuid,
    pub email: String,
    pub role: Role,
    /// JWT ID of the presented token
    pub jti: String,
}

impl AuthContext {
    /// Creates a new authentication context from JWT claims
    pub fn from_claims(claims: Claims) -> Result<Self, DomainError> {
        let account_id = claims
            .account_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidToken))?;
        Ok(Self {
            account_id,
            email: claims.email,
            role: claims.role,
            jti: claims.jti,
        })
    }

    pub fn identity(&self) -> Identity {
        Identity {
            account_id: self.account_id,
            email: self.email.clone(),
            role: self.role,
        }
    }
}

fn unauthorized(error: TokenError) -> Error {
    let domain_error = DomainError::Token(error);
    let response = handle_domain_error(&domain_error);
    InternalError::from_response(domain_error, response).into()
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    token_service: Arc<TokenService>,
}

impl JwtAuth {
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
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
        let token_service = Arc::clone(&self.token_service);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => return Err(unauthorized(TokenError::MissingToken)),
            };

            let auth_context = match token_service
                .validate(&token)
                .and_then(AuthContext::from_claims)
            {
                Ok(context) => context,
                Err(DomainError::Token(TokenError::TokenExpired)) => {
                    log::debug!("Expired token on {} {}", req.method(), req.path());
                    return Err(unauthorized(TokenError::TokenExpired));
                }
                Err(e) => {
                    log::debug!("Rejected token on {} {}: {}", req.method(), req.path(), e);
                    return Err(unauthorized(TokenError::InvalidToken));
                }
            };

            req.extensions_mut().insert(auth_context);
            service.call(req).await
        })
    }
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| unauthorized(TokenError::MissingToken));

        ready(result)
    }
}
