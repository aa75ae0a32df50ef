#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod api;
pub mod backend;
pub mod google_oauth;
