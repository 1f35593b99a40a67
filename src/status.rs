//! HTTP status codes as a typed enum.
//!
//! Only the codes the shop actually answers with. Use [`Status`] anywhere a
//! status code is accepted: `Response::status()` or `Response::builder().status()`.

/// Status codes produced by the router and the shop's handlers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    Ok,                  // 200
    Found,               // 302
    BadRequest,          // 400
    NotFound,            // 404
    MethodNotAllowed,    // 405
    PayloadTooLarge,     // 413
    InternalServerError, // 500
    ServiceUnavailable,  // 503
}

impl Status {
    /// Reason phrase, also used as the body of bare error responses.
    pub fn reason(self) -> &'static str {
        match self {
            Self::Ok                  => "OK",
            Self::Found               => "Found",
            Self::BadRequest          => "Bad Request",
            Self::NotFound            => "Not Found",
            Self::MethodNotAllowed    => "Method Not Allowed",
            Self::PayloadTooLarge     => "Payload Too Large",
            Self::InternalServerError => "Internal Server Error",
            Self::ServiceUnavailable  => "Service Unavailable",
        }
    }
}

impl From<Status> for u16 {
    fn from(s: Status) -> u16 {
        match s {
            Status::Ok                  => 200,
            Status::Found               => 302,
            Status::BadRequest          => 400,
            Status::NotFound            => 404,
            Status::MethodNotAllowed    => 405,
            Status::PayloadTooLarge     => 413,
            Status::InternalServerError => 500,
            Status::ServiceUnavailable  => 503,
        }
    }
}
