//! Route table and request handlers.
//!
//! | Method | Path | |
//! |---|---|---|
//! | GET | `/` | landing page |
//! | GET, POST | `/add_flavor` | form / create |
//! | GET | `/list_flavors` | list |
//! | POST | `/delete_flavor/{id}` | delete, then redirect |
//! | GET, POST | `/update_flavor/{id}` | prefilled form / rename |
//! | GET, POST | `/add_ingredient` | form / create |
//! | GET | `/list_ingredients` | list |
//! | POST | `/delete_ingredient/{id}` | delete, then redirect |
//! | GET, POST | `/update_ingredient/{id}` | prefilled form / update |
//! | GET, POST | `/add_suggestion` | form / create |
//! | GET | `/list_suggestions` | list |
//! | POST | `/delete_suggestion/{id}` | delete, then redirect |
//! | GET | `/healthz`, `/readyz` | health checks |
//!
//! Rejected input re-renders the originating form with `200 OK`. Unknown ids
//! answer `404` with a plain-text message.

mod flavors;
mod ingredients;
mod suggestions;

use thiserror::Error;
use tokio::task::JoinError;
use tracing::error;

use crate::health;
use crate::method::Method;
use crate::request::Request;
use crate::response::{IntoResponse, Response};
use crate::router::Router;
use crate::status::Status;
use crate::store::{Store, StoreError};
use crate::views;

/// Application context, built once at startup and handed to every handler.
#[derive(Clone, Debug)]
pub struct App {
    store: Store,
}

impl App {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Runs a store operation on the blocking pool.
    pub(crate) async fn run<T, F>(&self, op: F) -> Result<T, AppError>
    where
        T: Send + 'static,
        F: FnOnce(&Store) -> Result<T, StoreError> + Send + 'static,
    {
        let store = self.store.clone();
        Ok(tokio::task::spawn_blocking(move || op(&store)).await??)
    }
}

/// Failures a handler cannot recover from; answered with `500`.
///
/// [`StoreError::Duplicate`] and [`StoreError::UnknownId`] also travel
/// through here, and handlers match them out before bubbling up the rest.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("blocking task failed: {0}")]
    Join(#[from] JoinError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("request failed: {self}");
        Response::status(Status::InternalServerError)
    }
}

/// Builds the full route table around `app`.
pub fn router(app: App) -> Router<App> {
    Router::with_state(app)
        .on(Method::Get,  "/",                        index)
        .on(Method::Get,  "/add_flavor",              flavors::add_form)
        .on(Method::Post, "/add_flavor",              flavors::add)
        .on(Method::Get,  "/list_flavors",            flavors::list)
        .on(Method::Post, "/delete_flavor/{id}",      flavors::delete)
        .on(Method::Get,  "/update_flavor/{id}",      flavors::edit_form)
        .on(Method::Post, "/update_flavor/{id}",      flavors::update)
        .on(Method::Get,  "/add_ingredient",          ingredients::add_form)
        .on(Method::Post, "/add_ingredient",          ingredients::add)
        .on(Method::Get,  "/list_ingredients",        ingredients::list)
        .on(Method::Post, "/delete_ingredient/{id}",  ingredients::delete)
        .on(Method::Get,  "/update_ingredient/{id}",  ingredients::edit_form)
        .on(Method::Post, "/update_ingredient/{id}",  ingredients::update)
        .on(Method::Get,  "/add_suggestion",          suggestions::add_form)
        .on(Method::Post, "/add_suggestion",          suggestions::add)
        .on(Method::Get,  "/list_suggestions",        suggestions::list)
        .on(Method::Post, "/delete_suggestion/{id}",  suggestions::delete)
        .on(Method::Get,  "/healthz",                 health::liveness)
        .on(Method::Get,  "/readyz",                  health::readiness)
}

async fn index(_req: Request, _app: App) -> Response {
    Response::html(views::index())
}

/// The `{id}` path segment, if it is a plain non-negative decimal number.
///
/// Anything else (`-1`, `+1`, `abc`) is treated as an unknown route.
fn path_id(req: &Request) -> Option<i64> {
    req.param("id")
        .filter(|raw| !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|raw| raw.parse().ok())
}

fn not_found(message: &str) -> Response {
    Response::builder().status(Status::NotFound).text(message)
}
