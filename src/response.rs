//! Outgoing HTTP response type and the [`IntoResponse`] conversion trait.
//!
//! Handlers build a [`Response`] and return it. Pages are HTML, errors are
//! plain text, and successful form submissions that change a list redirect
//! back to it.

use bytes::Bytes;
use http_body_util::Full;

use crate::status::Status;

const HTML: &str = "text/html; charset=utf-8";
const TEXT: &str = "text/plain; charset=utf-8";

// ── Response ─────────────────────────────────────────────────────────────────

/// An outgoing HTTP response.
///
/// # Shortcuts
///
/// ```rust
/// use scoop::{Response, Status};
///
/// Response::html("<h1>Flavors</h1>");
/// Response::text("ok");
/// Response::redirect("/list_flavors");
/// Response::status(Status::NotFound);
/// ```
///
/// # Builder (custom status or headers)
///
/// ```rust
/// use scoop::{Response, Status};
///
/// Response::builder()
///     .status(Status::NotFound)
///     .text("Flavor not found");
/// ```
#[derive(Debug)]
pub struct Response {
    pub(crate) body: Bytes,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) status: u16,
}

impl Response {
    /// `200 OK` — `text/html; charset=utf-8`.
    pub fn html(body: impl Into<String>) -> Self {
        Self::builder().finish(HTML, body.into().into_bytes())
    }

    /// `200 OK` — `text/plain; charset=utf-8`.
    pub fn text(body: impl Into<String>) -> Self {
        Self::builder().finish(TEXT, body.into().into_bytes())
    }

    /// `302 Found` pointing the browser at `location`.
    pub fn redirect(location: &str) -> Self {
        Self::builder()
            .status(Status::Found)
            .header("location", location)
            .no_body()
    }

    /// Plain-text response whose body is the status reason phrase.
    pub fn status(code: Status) -> Self {
        Self::builder().status(code).text(code.reason())
    }

    /// Builder for responses that need a custom status or extra headers.
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder { headers: Vec::new(), status: Status::Ok.into() }
    }

    pub fn status_code(&self) -> u16 { self.status }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Converts into the `http` type hyper writes to the wire.
    pub(crate) fn into_inner(self) -> http::Response<Full<Bytes>> {
        let mut builder = http::Response::builder().status(self.status);
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder.body(Full::new(self.body)).unwrap_or_else(|e| {
            tracing::error!("invalid response head: {e}");
            let mut fallback = http::Response::new(Full::new(Bytes::from_static(b"Internal Server Error")));
            *fallback.status_mut() = http::StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        })
    }
}

// ── ResponseBuilder ───────────────────────────────────────────────────────────

/// Fluent builder for [`Response`].
///
/// Obtain via [`Response::builder()`]. Defaults to `Status::Ok` (200).
/// Terminated by a typed body method.
pub struct ResponseBuilder {
    headers: Vec<(String, String)>,
    status: u16,
}

impl ResponseBuilder {
    pub fn status(mut self, code: Status) -> Self {
        self.status = code.into();
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    /// Terminate with a plain-text body.
    pub fn text(self, body: impl Into<String>) -> Response {
        self.finish(TEXT, body.into().into_bytes())
    }

    /// Terminate with no body (e.g. redirects).
    pub fn no_body(self) -> Response {
        Response { body: Bytes::new(), headers: self.headers, status: self.status }
    }

    fn finish(self, content_type: &str, body: Vec<u8>) -> Response {
        let mut headers = vec![("content-type".to_owned(), content_type.to_owned())];
        headers.extend(self.headers);
        Response { body: Bytes::from(body), headers, status: self.status }
    }
}

// ── IntoResponse ──────────────────────────────────────────────────────────────

/// Conversion into an HTTP [`Response`].
///
/// Implemented for handler error types so a handler can return
/// `Result<Response, E>` and use `?`.
pub trait IntoResponse {
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response { self }
}

impl IntoResponse for String {
    fn into_response(self) -> Response { Response::text(self) }
}

impl<T: IntoResponse, E: IntoResponse> IntoResponse for Result<T, E> {
    fn into_response(self) -> Response {
        match self {
            Ok(ok) => ok.into_response(),
            Err(err) => err.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_sets_location_and_found() {
        let res = Response::redirect("/list_flavors");
        assert_eq!(res.status_code(), 302);
        assert_eq!(res.header("Location"), Some("/list_flavors"));
        assert!(res.body().is_empty());
    }

    #[test]
    fn status_shortcut_uses_reason_phrase() {
        let res = Response::status(Status::NotFound);
        assert_eq!(res.status_code(), 404);
        assert_eq!(res.body(), b"Not Found");
        assert_eq!(res.header("content-type"), Some(TEXT));
    }

    #[test]
    fn result_picks_the_matching_side() {
        let ok: Result<Response, String> = Ok(Response::html("<p>hi</p>"));
        assert_eq!(ok.into_response().header("content-type"), Some(HTML));

        let err: Result<Response, String> = Err("oops".to_owned());
        let res = err.into_response();
        assert_eq!(res.header("content-type"), Some(TEXT));
        assert_eq!(res.body(), b"oops");
    }

    #[test]
    fn into_inner_carries_status_and_headers() {
        let inner = Response::builder()
            .status(Status::NotFound)
            .text("Flavor not found")
            .into_inner();
        assert_eq!(inner.status(), http::StatusCode::NOT_FOUND);
        assert_eq!(inner.headers()["content-type"], TEXT);
    }
}
