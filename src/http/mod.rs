//! HTTP client layer — `BooksHttp`, a thin request wrapper.

pub mod client;

pub use client::BooksHttp;
