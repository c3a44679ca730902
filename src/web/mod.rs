//! Web layer: server-rendered HTML views.
//!
//! Uses Askama templates; currently a single statistics page.

pub mod handlers;
