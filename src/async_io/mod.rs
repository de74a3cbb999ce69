//! Async checksum support.
//!
//! This module provides asynchronous checksumming using the
//! `futures-io::AsyncRead` trait, making it runtime-agnostic and compatible
//! with tokio, async-std, smol, and other async runtimes.
//!
//! - [`checksum_async`] - Creates a future resolving to the checksum of an async reader
//!
//! This module requires the `async-io` feature to be enabled.

mod future;

pub use future::{ChecksumFuture, checksum_async};
