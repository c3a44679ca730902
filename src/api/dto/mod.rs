//! Wire-format request/response types.

pub mod links;
