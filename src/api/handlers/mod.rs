//! REST API handlers.

mod health;
mod links;
mod redirect;
mod stats;

pub use health::health_handler;
pub use links::{create_handler, delete_handler};
pub use redirect::redirect_handler;
pub use stats::stats_handler;
