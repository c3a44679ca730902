//! API layer: handlers and wire-format DTOs.

pub mod dto;
pub mod handlers;
