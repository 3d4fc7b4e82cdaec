//! Common test utilities for ND integration tests

/// Check if required environment variables are set for acceptance tests
pub fn has_nd_credentials() -> bool {
    std::env::var("ND_URL").is_ok()
        && std::env::var("ND_USERNAME").is_ok()
        && std::env::var("ND_PASSWORD").is_ok()
}

/// Skip test if credentials are not available
#[macro_export]
macro_rules! skip_if_no_credentials {
    () => {
        if !crate::common::has_nd_credentials() {
            println!("Skipping test: ND credentials not available");
            println!("Set ND_URL, ND_USERNAME, ND_PASSWORD");
            return;
        }
    };
}
