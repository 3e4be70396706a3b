//! # HTTP Entry Point
//!
//! The axum router over the Store. Handlers never touch user data directly: every
//! read and write goes through the [`UserClient`] held in [`AppState`].
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET | `/health` | [`handlers::health`] |
//! | POST | `/users` | [`handlers::create_user`] |
//! | GET | `/technologies` | [`handlers::list_technologies`] |
//! | POST | `/technologies` | [`handlers::create_technology`] |
//! | PUT | `/technologies/{id}` | [`handlers::update_technology`] |
//! | PATCH | `/technologies/{id}/studied` | [`handlers::mark_studied`] |
//! | DELETE | `/technologies/{id}` | [`handlers::delete_technology`] |
//!
//! Technology routes take the caller from the `username` header via the
//! [`CurrentUser`] extractor.

pub mod error;
pub mod handlers;
pub mod identity;
pub mod payload;

pub use error::ApiError;
pub use identity::{CurrentUser, USERNAME_HEADER};

use axum::routing::{get, patch, post, put};
use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::clients::UserClient;
use crate::model::Deadline;

/// Shared state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub users: UserClient,
    /// Reject unparseable deadlines instead of storing them as null.
    pub strict_deadlines: bool,
}

impl AppState {
    pub fn new(users: UserClient, strict_deadlines: bool) -> Self {
        Self {
            users,
            strict_deadlines,
        }
    }

    pub fn parse_deadline(&self, raw: &str) -> Result<Deadline, ApiError> {
        let deadline = Deadline::parse(raw);
        if !deadline.is_valid() {
            if self.strict_deadlines {
                return Err(ApiError::InvalidDeadline);
            }
            warn!(raw, "Storing unparseable deadline as null");
        }
        Ok(deadline)
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/users", post(handlers::create_user))
        .route(
            "/technologies",
            get(handlers::list_technologies).post(handlers::create_technology),
        )
        .route(
            "/technologies/{id}",
            put(handlers::update_technology).delete(handlers::delete_technology),
        )
        .route("/technologies/{id}/studied", patch(handlers::mark_studied))
        .with_state(state)
}

/// Serves the API on `listener` until `shutdown` completes, then lets in-flight
/// requests finish.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(%addr, "Listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
