//! Middleware for request attributes and error display.

mod error_details;
mod message;

pub use error_details::error_details_middleware;
pub use message::{message_middleware, Message};
