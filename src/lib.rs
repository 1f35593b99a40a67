//! # scoop
//!
//! Back office for an ice-cream shop: seasonal flavors, ingredient stock, and
//! flavor ideas from customers, kept in one SQLite file and managed through
//! plain HTML forms.
//!
//! ## Layout
//!
//! - [`Router`] / [`Server`]: radix-tree routing via [`matchit`] and hyper
//!   connections on tokio, with graceful shutdown on SIGTERM / Ctrl-C.
//! - [`store::Store`]: one table per record type, one transaction per operation.
//! - [`model`]: records, plus typed form inputs that either parse or name a
//!   [`model::Rejection`].
//! - [`views`]: HTML pages. [`routes`]: the handlers tying it together.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use scoop::{Server, routes, store::Store};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), scoop::Error> {
//!     let store = Store::open("database.db")?;
//!     let app = routes::router(routes::App::new(store));
//!
//!     Server::bind("127.0.0.1:5000".parse().unwrap()).await?.serve(app).await
//! }
//! ```

mod error;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;
mod status;

pub mod config;
pub mod form;
pub mod health;
pub mod model;
pub mod routes;
pub mod store;
pub mod views;

pub use error::Error;
pub use handler::Handler;
pub use method::Method;
pub use request::Request;
pub use response::{IntoResponse, Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
pub use status::Status;
