//! Incoming HTTP request type.

use std::collections::HashMap;
use std::convert::Infallible;

use bytes::Bytes;
use http::HeaderMap;
use http::header::CONTENT_TYPE;
use tracing::debug;

use crate::form::{self, Form};

const MULTIPART: &str = "multipart/form-data";

/// An incoming HTTP request with its body already collected.
pub struct Request {
    pub(crate) headers: HeaderMap,
    pub(crate) body: Bytes,
    pub(crate) params: HashMap<String, String>,
}

impl Request {
    pub(crate) fn new(headers: HeaderMap, body: Bytes, params: HashMap<String, String>) -> Self {
        Self { headers, body, params }
    }

    /// Case-insensitive header lookup. Non-UTF-8 values read as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/update_flavor/{id}`, `req.param("id")` on
    /// `/update_flavor/42` returns `Some("42")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Decoded form fields from an `application/x-www-form-urlencoded` or
    /// `multipart/form-data` body.
    ///
    /// Uploaded files are not form fields and are skipped. Any other content
    /// type, or a multipart body that fails to parse, yields an empty form.
    pub async fn form(&self) -> Form {
        let Some(content_type) = self.header(CONTENT_TYPE.as_str()) else {
            return Form::default();
        };
        let mime = content_type.split(';').next().unwrap_or_default().trim();

        if mime.eq_ignore_ascii_case(form::URLENCODED) {
            Form::parse(&self.body)
        } else if mime.eq_ignore_ascii_case(MULTIPART) {
            match multipart_fields(content_type, self.body.clone()).await {
                Ok(form) => form,
                Err(e) => {
                    debug!("malformed multipart body: {e}");
                    Form::default()
                }
            }
        } else {
            Form::default()
        }
    }
}

async fn multipart_fields(content_type: &str, body: Bytes) -> Result<Form, multer::Error> {
    let boundary = multer::parse_boundary(content_type)?;
    let stream = futures_util::stream::once(async move { Ok::<_, Infallible>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut fields = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_owned) else { continue };
        fields.push((name, field.text().await?));
    }
    Ok(fields.into_iter().collect())
}
