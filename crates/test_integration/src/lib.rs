#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

#[cfg(test)]
pub mod helpers;
#[cfg(test)]
pub mod tests;
