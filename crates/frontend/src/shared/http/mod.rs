//! HTTP plumbing shared by every API call

pub mod error;
pub mod transport;

pub use error::ApiError;
pub use transport::{GlooTransport, HttpRequest, HttpResponse, Method, Transport};
