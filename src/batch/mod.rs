//! Checksumming many sources with per-source outcomes.
//!
//! A batch is an ordered list of sources; its result is an equally ordered
//! list of [`Outcome`]s. A failing source becomes an `Err` entry attributed
//! to its label and never stops the remaining sources.
//!
//! # Example
//!
//! ```no_run
//! use s3crc::batch;
//! use s3crc::source::expand_patterns;
//! use s3crc::Crc64Engine;
//!
//! let engine = Crc64Engine::default();
//! let outcomes = batch::checksum_all(&engine, expand_patterns(&["*.bin"]));
//! for outcome in &outcomes {
//!     match outcome {
//!         Ok(entry) => println!("{}  {}", entry.checksum.to_base64(), entry.label),
//!         Err(e) => eprintln!("{e}"),
//!     }
//! }
//! ```

use std::num::NonZeroUsize;
use std::sync::{Mutex, PoisonError};
use std::thread;

use tracing::debug;

use crate::checksum::Checksum;
use crate::engine::Crc64Engine;
use crate::error::ChecksumError;
use crate::source::InputSource;

/// A successful checksum, attributed to the source it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Source label (path or `stdin`).
    pub label: String,
    /// The computed checksum.
    pub checksum: Checksum,
}

/// The result of checksumming one source.
pub type Outcome = Result<Entry, ChecksumError>;

/// Computes one outcome; already-failed entries pass through unchanged.
fn run_one(engine: &Crc64Engine, source: Result<InputSource, ChecksumError>) -> Outcome {
    let source = source?;
    let checksum = source.checksum(engine)?;
    Ok(Entry {
        label: source.label(),
        checksum,
    })
}

/// Checksums every source in order on the calling thread.
///
/// Accepts the output of [`expand_patterns`](crate::source::expand_patterns)
/// directly; expansion failures are carried into the result in place.
pub fn checksum_all<I>(engine: &Crc64Engine, sources: I) -> Vec<Outcome>
where
    I: IntoIterator<Item = Result<InputSource, ChecksumError>>,
{
    sources
        .into_iter()
        .map(|source| run_one(engine, source))
        .collect()
}

/// Checksums sources on up to `jobs` scoped worker threads.
///
/// Outcomes are returned in input order regardless of completion order.
/// Each worker owns its accumulator and read buffer; only the immutable
/// lookup table is shared. With `jobs == 1` this is [`checksum_all`].
pub fn checksum_all_parallel<I>(
    engine: &Crc64Engine,
    sources: I,
    jobs: NonZeroUsize,
) -> Vec<Outcome>
where
    I: IntoIterator<Item = Result<InputSource, ChecksumError>>,
{
    let queue: Vec<_> = sources.into_iter().enumerate().collect();
    let workers = jobs.get().min(queue.len());
    if workers <= 1 {
        return checksum_all(engine, queue.into_iter().map(|(_, source)| source));
    }

    debug!(sources = queue.len(), workers, "starting parallel batch");

    let total = queue.len();
    let queue = &Mutex::new(queue.into_iter());
    let mut slots: Vec<Option<Outcome>> = (0..total).map(|_| None).collect();

    let finished: Vec<Vec<(usize, Outcome)>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|_| {
                scope.spawn(move || {
                    let mut done = Vec::new();
                    loop {
                        let next = queue.lock().unwrap_or_else(PoisonError::into_inner).next();
                        let Some((index, source)) = next else {
                            break;
                        };
                        done.push((index, run_one(engine, source)));
                    }
                    done
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
            .collect()
    });

    for (index, outcome) in finished.into_iter().flatten() {
        slots[index] = Some(outcome);
    }

    slots.into_iter().flatten().collect()
}
