//! Where listings come from: the sheet CSV export and, optionally, an upstream README.

pub mod http;
pub mod sheet;
pub mod upstream;

pub use http::HttpFetcher;
