//! Template rendering handlers.

mod home;
mod stats;

pub use home::home_handler;
pub use stats::stats_handler;
