//! Core business entities.

mod link;
mod visit;

pub use link::{Link, LinkDetails, NewLink};
pub use visit::{NewVisit, Visit};
