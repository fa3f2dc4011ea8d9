use crate::core::AppError;
use crate::core::Result as AppResult;
use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use async_trait::async_trait;
use chrono::Utc;
use futures_util::future::LocalBoxFuture;
use sha2::{Digest, Sha256};
use sqlx::MySqlPool;
use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

/// Role attached to a console account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    Advertiser,
    Partner,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "admin"),
            UserRole::Advertiser => write!(f, "advertiser"),
            UserRole::Partner => write!(f, "partner"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "admin" => Ok(UserRole::Admin),
            "advertiser" => Ok(UserRole::Advertiser),
            "partner" => Ok(UserRole::Partner),
            _ => Err(format!("Invalid user role: {}", s)),
        }
    }
}

/// Authenticated identity resolved from a session token
///
/// Inserted into request extensions by [`SessionAuth`]; handlers enforce
/// role requirements themselves.
#[derive(Debug, Clone)]
pub struct AdminIdentity {
    pub user_id: String,
    pub email: String,
    pub role: UserRole,
}

/// Lookup of bearer tokens against the account store
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Resolve a token to the identity it belongs to, if the session
    /// exists and has not expired.
    async fn identity_for_token(&self, token: &str) -> AppResult<Option<AdminIdentity>>;
}

/// Session tokens are stored as SHA-256 hex digests, never in the clear.
pub fn hash_session_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

#[derive(Debug, sqlx::FromRow)]
struct SessionRow {
    user_id: String,
    email: String,
    role: String,
}

pub struct MySqlSessionStore {
    pool: MySqlPool,
}

impl MySqlSessionStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionStore for MySqlSessionStore {
    async fn identity_for_token(&self, token: &str) -> AppResult<Option<AdminIdentity>> {
        let digest = hash_session_token(token);

        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT u.id AS user_id, u.email, u.role
            FROM sessions s
            INNER JOIN users u ON u.id = s.user_id
            WHERE s.token_hash = ? AND s.expires_at > ?
            LIMIT 1
            "#,
        )
        .bind(&digest)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let role = row.role.parse().map_err(|_| {
            AppError::internal(format!("Unknown role '{}' for user {}", row.role, row.user_id))
        })?;

        Ok(Some(AdminIdentity {
            user_id: row.user_id,
            email: row.email,
            role,
        }))
    }
}

/// Bearer-token authentication middleware
///
/// Rejects requests without a resolvable session (401) and stores the
/// resolved [`AdminIdentity`] in request extensions for handlers.
pub struct SessionAuth {
    store: Arc<dyn SessionStore>,
}

impl SessionAuth {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionAuthMiddleware<S>;
    type Future = Ready<std::result::Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionAuthMiddleware {
            service: Rc::new(service),
            store: self.store.clone(),
        }))
    }
}

pub struct SessionAuthMiddleware<S> {
    service: Rc<S>,
    store: Arc<dyn SessionStore>,
}

impl<S, B> Service<ServiceRequest> for SessionAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, std::result::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();
        let store = self.store.clone();

        Box::pin(async move {
            // The liveness probe stays open
            let path = req.path();
            if path == "/health" || path == "/" {
                return svc.call(req).await;
            }

            let token = req
                .headers()
                .get("Authorization")
                .and_then(|h| h.to_str().ok())
                .and_then(|h| h.strip_prefix("Bearer "))
                .map(|t| t.to_string())
                .ok_or_else(|| Error::from(AppError::unauthorized("Missing session token")))?;

            let identity = store
                .identity_for_token(&token)
                .await
                .map_err(Error::from)?
                .ok_or_else(|| Error::from(AppError::unauthorized("Invalid or expired session")))?;

            req.extensions_mut().insert(identity);

            svc.call(req).await
        })
    }
}
