#![doc(test(attr(deny(warnings))))]

//! budget_watch tracks category spending against monthly limits and decides
//! which reminders and limit notifications to raise.

pub mod app;
pub mod cli;
pub mod errors;
pub mod utils;

pub use app::App;
pub use errors::AppError;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes tracing with the built-in default filter.
pub fn init() {
    init_with_filter(&bw_config::Config::default_log_filter());
}

/// Initializes tracing once, using `directive` unless `RUST_LOG` is set.
pub fn init_with_filter(directive: &str) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(directive);
        tracing::debug!("budget_watch tracing initialized");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init_with_filter("budget_watch=debug");
    }
}
