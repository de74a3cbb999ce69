//! Internal read buffer management.
//!
//! This module provides a thread-local buffer pool so that checksumming many
//! sources on one thread reuses the same scratch memory. It is an
//! implementation detail and not part of the public API.

mod pool;

pub(crate) use pool::Buffer;
