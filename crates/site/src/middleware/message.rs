//! Attaches the `msg` request attribute.

use axum::{
    body::Body,
    extract::Query,
    http::Request,
    middleware::Next,
    response::Response,
};
use serde::Deserialize;

/// Message attached to the request for the page handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message(pub String);

#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    msg: Option<String>,
}

/// Read `msg` from the query string and attach it as a [`Message`] extension.
///
/// Requests without the parameter (or with an unparsable query) pass
/// through untouched.
pub async fn message_middleware(
    query: Option<Query<MessageQuery>>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    if let Some(msg) = query.and_then(|Query(query)| query.msg) {
        request.extensions_mut().insert(Message(msg));
    }

    next.run(request).await
}
