//! Nexus Dashboard REST client core
//!
//! Request execution and response reconciliation against an ND-style
//! management controller API.

pub mod client;
pub mod config;
pub mod container;
pub mod diag;
pub mod payload;
pub mod rest;
pub mod utils;

// Re-export commonly used items
pub use client::{Exchange, HttpBackend, Method, NdClient, RestRequest};
pub use config::NdConfig;
pub use container::{Container, ContainerError};
pub use diag::{Diagnostic, Diagnostics};
pub use payload::delete_json_payload;
pub use rest::{classify, do_rest_request, do_rest_request_escape_html, Outcome, ToleranceSet};
pub use utils::{init_tracing, mo_name, strip_quotes, strip_square_brackets};
