//! Common utilities for the ND REST core

mod dn;
mod logging;
mod strings;

pub use dn::mo_name;
pub use logging::init_tracing;
pub use strings::{strip_quotes, strip_square_brackets};
