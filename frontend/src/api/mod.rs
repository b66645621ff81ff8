//! HTTP resource clients for the two backends.
//!
//! One function per remote operation: build one request, send it once, and
//! either hand back the decoded body or fail with a [`RequestError`] naming
//! the operation. No retries, no timeouts, no state beyond the call itself.

use std::fmt;

use gloo_net::http::Response;
use serde::de::DeserializeOwned;

pub mod members;
pub mod session;
pub mod shop;

/// What went wrong with a request. The presentation layer never branches on
/// this; it only exists so the logged message says whether the network, the
/// server, or the body was at fault.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    /// The request could not complete at all.
    Network(String),
    /// The server answered with a non-2xx status.
    Server(u16),
    /// The body could not be decoded into the expected shape.
    Decode(String),
}

/// Failure of one client operation.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestError {
    pub operation: &'static str,
    pub kind: ErrorKind,
}

impl RequestError {
    fn network(operation: &'static str, err: gloo_net::Error) -> Self {
        Self {
            operation,
            kind: ErrorKind::Network(err.to_string()),
        }
    }

    fn server(operation: &'static str, status: u16) -> Self {
        Self {
            operation,
            kind: ErrorKind::Server(status),
        }
    }

    fn decode(operation: &'static str, err: gloo_net::Error) -> Self {
        Self {
            operation,
            kind: ErrorKind::Decode(err.to_string()),
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::Network(detail) => {
                write!(f, "{}: request failed: {detail}", self.operation)
            }
            ErrorKind::Server(status) => {
                write!(f, "{}: server answered {status}", self.operation)
            }
            ErrorKind::Decode(detail) => {
                write!(f, "{}: unexpected response body: {detail}", self.operation)
            }
        }
    }
}

impl std::error::Error for RequestError {}

/// Fails with [`ErrorKind::Server`] unless the response status is 2xx.
fn check_status(operation: &'static str, response: &Response) -> Result<(), RequestError> {
    if response.ok() {
        Ok(())
    } else {
        Err(RequestError::server(operation, response.status()))
    }
}

/// Decodes the response body, folding malformed JSON into
/// [`ErrorKind::Decode`].
async fn read_json<T: DeserializeOwned>(
    operation: &'static str,
    response: Response,
) -> Result<T, RequestError> {
    response
        .json::<T>()
        .await
        .map_err(|err| RequestError::decode(operation, err))
}
