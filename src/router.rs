//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. You register a path, you
//! get a handler, and the handler gets the application state.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use bytes::Bytes;
use matchit::Router as MatchitRouter;
use tracing::debug;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// The application router.
///
/// Build it once at startup with the application state, then pass it to
/// [`Server::serve`](crate::Server::serve). Each [`Router::on`] call returns
/// `self` so registrations chain naturally.
pub struct Router<S> {
    routes: HashMap<Method, MatchitRouter<BoxedHandler<S>>>,
    state: S,
}

pub(crate) enum Lookup<S> {
    Found(BoxedHandler<S>, HashMap<String, String>),
    /// The path exists, but not for this method. Carries the `allow` list.
    WrongMethod(Vec<Method>),
    Missing,
}

impl<S> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn with_state(state: S) -> Self {
        Self { routes: HashMap::new(), state }
    }

    /// Register a handler for a method + path pair. Returns `self` for chaining.
    ///
    /// Path parameters use `{name}` syntax; `req.param("name")` retrieves them.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler<S>) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    pub fn state(&self) -> &S { &self.state }

    pub(crate) fn lookup(&self, method: Method, path: &str) -> Lookup<S> {
        if let Some(matched) = self.routes.get(&method).and_then(|tree| tree.at(path).ok()) {
            let handler = Arc::clone(matched.value);
            let params = matched.params.iter()
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect();
            return Lookup::Found(handler, params);
        }

        let allowed = self.allowed(path);
        if allowed.is_empty() { Lookup::Missing } else { Lookup::WrongMethod(allowed) }
    }

    /// Every method with a route matching `path`, sorted for the `allow` header.
    /// A `GET` route also answers `HEAD`.
    fn allowed(&self, path: &str) -> Vec<Method> {
        let mut allowed: Vec<Method> = self.routes.iter()
            .filter(|(_, tree)| tree.at(path).is_ok())
            .map(|(m, _)| *m)
            .collect();
        if allowed.contains(&Method::Get) {
            allowed.push(Method::Head);
        }
        allowed.sort_by_key(|m| m.as_str());
        allowed
    }

    /// Routes one request with a fully collected body and produces one response.
    ///
    /// Every failure is turned into a response here (404, 405, …), so callers
    /// never see an error. `HEAD` runs the `GET` handler and drops its body.
    pub async fn respond(&self, req: http::Request<Bytes>) -> Response {
        let started = Instant::now();
        let (parts, body) = req.into_parts();
        let path = parts.uri.path().to_owned();

        let response = match parts.method.as_str().parse::<Method>() {
            Ok(method) => match self.lookup(method.route_as(), &path) {
                Lookup::Found(handler, params) => {
                    let req = Request::new(parts.headers, body, params);
                    let mut response = handler.call(req, self.state.clone()).await;
                    if method == Method::Head {
                        response.body = Bytes::new();
                    }
                    response
                }
                Lookup::WrongMethod(allowed) => method_not_allowed(&allowed),
                Lookup::Missing => Response::status(Status::NotFound),
            },
            Err(()) => {
                let allowed = self.allowed(&path);
                if allowed.is_empty() {
                    Response::status(Status::NotFound)
                } else {
                    method_not_allowed(&allowed)
                }
            }
        };

        debug!(
            method = %parts.method,
            path = %path,
            status = response.status_code(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request",
        );
        response
    }
}

fn method_not_allowed(allowed: &[Method]) -> Response {
    let allow = allowed.iter().map(|m| m.as_str()).collect::<Vec<_>>().join(", ");
    Response::builder()
        .status(Status::MethodNotAllowed)
        .header("allow", &allow)
        .text(Status::MethodNotAllowed.reason())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn hello(_req: Request, greeting: &'static str) -> Response {
        Response::text(greeting)
    }

    async fn echo_id(req: Request, _: &'static str) -> String {
        req.param("id").unwrap_or("none").to_owned()
    }

    fn router() -> Router<&'static str> {
        Router::with_state("hello")
            .on(Method::Get, "/", hello)
            .on(Method::Get, "/items/{id}", echo_id)
            .on(Method::Post, "/items/{id}", echo_id)
            .on(Method::Post, "/submit", hello)
    }

    fn request(method: &str, path: &str) -> http::Request<Bytes> {
        http::Request::builder()
            .method(method)
            .uri(path)
            .body(Bytes::new())
            .expect("valid request")
    }

    #[tokio::test]
    async fn passes_state_to_handler() {
        let res = router().respond(request("GET", "/")).await;
        assert_eq!(res.status_code(), 200);
        assert_eq!(res.body(), b"hello");
    }

    #[tokio::test]
    async fn extracts_path_params() {
        let res = router().respond(request("POST", "/items/42")).await;
        assert_eq!(res.body(), b"42");
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let res = router().respond(request("GET", "/nope")).await;
        assert_eq!(res.status_code(), 404);
    }

    #[tokio::test]
    async fn wrong_method_lists_allowed_methods() {
        let res = router().respond(request("GET", "/submit")).await;
        assert_eq!(res.status_code(), 405);
        assert_eq!(res.header("allow"), Some("POST"));

        let res = router().respond(request("DELETE", "/items/1")).await;
        assert_eq!(res.status_code(), 405);
        assert_eq!(res.header("allow"), Some("GET, HEAD, POST"));
    }

    #[tokio::test]
    async fn head_runs_the_get_route_without_a_body() {
        let res = router().respond(request("HEAD", "/")).await;
        assert_eq!(res.status_code(), 200);
        assert!(res.body().is_empty());

        let res = router().respond(request("HEAD", "/items/7")).await;
        assert_eq!(res.status_code(), 200);
        assert!(res.body().is_empty());
    }

    #[tokio::test]
    async fn head_on_a_post_only_path_is_not_allowed() {
        let res = router().respond(request("HEAD", "/submit")).await;
        assert_eq!(res.status_code(), 405);
        assert_eq!(res.header("allow"), Some("POST"));
    }

    #[tokio::test]
    async fn unknown_method_on_unknown_path_is_not_found() {
        let res = router().respond(request("DELETE", "/nope")).await;
        assert_eq!(res.status_code(), 404);
    }
}
