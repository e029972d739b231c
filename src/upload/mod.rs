//! Multipart upload layer
//!
//! Turns a set of files into a multipart form and submits it with one
//! blocking HTTP request. Field naming is deterministic: a single file or
//! ordered sequence gets `file0`, `file1`, ... and caller-named fields
//! are used verbatim. The response comes back unmodified - this layer
//! never interprets status codes.

pub mod error;
pub mod form;
pub mod request;

pub use error::{Result, UploadError};
pub use form::{FormPart, FormSpec, UploadSource};
pub use request::{RequestConfig, RequestOptions, UploadMethod, send};
