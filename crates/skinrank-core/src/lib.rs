//! Core types and the recommendation engine for skinrank.
//!
//! This crate is deliberately free of HTTP and database dependencies. It
//! defines the [`store::CatalogStore`] abstraction and the two analyses built
//! on top of it: the science-basics ingredient guide and product suggestions.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod catalog;
pub mod effect;
pub mod error;
pub mod id;
pub mod intersect;
pub mod mapping;
pub mod messages;
pub mod resolve;
pub mod science;
pub mod selection;
pub mod store;
pub mod suggest;

pub use error::{Error, Result};

#[cfg(test)]
pub(crate) mod testing;
