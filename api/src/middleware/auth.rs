//! JWT authentication middleware for protecting API endpoints.
//!
//! Validates the bearer access token and injects an [`AuthContext`] into
//! the request extensions. Rejected requests get the uniform 401 body.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
};
use uuid::Uuid;

use chirpy_core::errors::DomainError;
use chirpy_core::services::credentials::parse_bearer;
use chirpy_core::services::token::TokenSigner;

use super::authorization_header;
use crate::handlers::unauthorized;

/// User authentication context injected into requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    /// Subject of the validated access token
    pub user_id: Uuid,
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    signer: Arc<TokenSigner>,
}

impl JwtAuth {
    pub fn new(signer: Arc<TokenSigner>) -> Self {
        Self { signer }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            signer: Arc::clone(&self.signer),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    signer: Arc<TokenSigner>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        let user_id = match authenticate(&req, &self.signer) {
            Ok(user_id) => user_id,
            Err(e) => {
                tracing::debug!(reason = %e, path = %req.path(), "Rejected access token");
                return Box::pin(async move {
                    Ok(req.into_response(unauthorized()).map_into_right_body())
                });
            }
        };

        req.extensions_mut().insert(AuthContext { user_id });

        Box::pin(async move {
            service
                .call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        })
    }
}

fn authenticate(req: &ServiceRequest, signer: &TokenSigner) -> Result<Uuid, DomainError> {
    let header = authorization_header(req.headers())?;
    let token = parse_bearer(header)?;
    Ok(signer.validate(&token)?)
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .copied()
            .ok_or_else(|| InternalError::from_response("missing auth context", unauthorized()).into());

        ready(result)
    }
}
