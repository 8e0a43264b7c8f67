//! Word-of-the-day proxy over the Jisho dictionary search.

pub mod client;
pub mod routes;

pub use routes::routes;
