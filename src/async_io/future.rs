//! Async future adapter for checksumming.
//!
//! # Example
//!
//! ```ignore
//! use s3crc::{checksum_async, EngineConfig};
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead + Unpin>(reader: R) -> Result<(), s3crc::ChecksumError> {
//!     let sum = checksum_async(reader, EngineConfig::default()).await?;
//!     println!("{}", sum.to_base64());
//!     Ok(())
//! }
//! ```

use std::future::Future;
use std::io::ErrorKind;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_io::AsyncRead;
use pin_project_lite::pin_project;

use crate::checksum::Checksum;
use crate::config::EngineConfig;
use crate::crc::Crc64;
use crate::error::ChecksumError;

pin_project! {
    /// A future that reads an async reader to exhaustion and yields its checksum.
    ///
    /// This uses `futures_io::AsyncRead` which is runtime-agnostic.
    /// An invalid config resolves to an error on the first poll.
    /// Polling again after it has resolved panics.
    pub struct ChecksumFuture<R> {
        #[pin]
        reader: R,
        buffer: Vec<u8>,
        invalid: Option<ChecksumError>,
        crc: Crc64,
        finished: bool,
    }
}

impl<R> ChecksumFuture<R> {
    /// Creates a new checksum future from an async reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - An async reader implementing `AsyncRead`
    /// * `config` - The engine configuration (read buffer size)
    pub fn new(reader: R, config: EngineConfig) -> Self {
        let (buffer, invalid) = match config.validate() {
            Ok(()) => (vec![0u8; config.buffer_size()], None),
            Err(e) => (Vec::new(), Some(e)),
        };

        Self {
            reader,
            buffer,
            invalid,
            crc: Crc64::new(),
            finished: false,
        }
    }
}

impl<R: AsyncRead> Future for ChecksumFuture<R> {
    type Output = Result<Checksum, ChecksumError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        assert!(!*this.finished, "ChecksumFuture polled after completion");

        if let Some(err) = this.invalid.take() {
            *this.finished = true;
            return Poll::Ready(Err(err));
        }

        loop {
            match this.reader.as_mut().poll_read(cx, &mut this.buffer[..]) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Ok(0)) => {
                    *this.finished = true;
                    return Poll::Ready(Ok(this.crc.finalize()));
                }
                Poll::Ready(Ok(n)) => this.crc.update(&this.buffer[..n]),
                Poll::Ready(Err(e)) if e.kind() == ErrorKind::Interrupted => continue,
                Poll::Ready(Err(e)) => {
                    *this.finished = true;
                    return Poll::Ready(Err(ChecksumError::Io(e)));
                }
            }
        }
    }
}

/// Creates a future resolving to the checksum of an async reader.
///
/// Uses `futures_io::AsyncRead` for runtime-agnostic async I/O.
///
/// # Runtime Compatibility
///
/// For tokio users, you can use `tokio_util::compat` to convert
/// `tokio::io::AsyncRead` to `futures_io::AsyncRead`:
///
/// ```ignore
/// use tokio_util::compat::TokioAsyncReadCompatExt;
/// use s3crc::{checksum_async, EngineConfig};
///
/// let file = tokio::fs::File::open("file").await?;
/// let sum = checksum_async(file.compat(), EngineConfig::default()).await?;
/// ```
pub fn checksum_async<R: AsyncRead>(reader: R, config: EngineConfig) -> ChecksumFuture<R> {
    ChecksumFuture::new(reader, config)
}
