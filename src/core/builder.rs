//! # Index Builder
//!
//! Builds the [`IndexSet`] for a whole library as one unit of background work,
//! started eagerly and never retried. The result comes back over a channel:
//!
//! ```text
//! spawn() ──► spawn_blocking(build_index) ──► tx.send(IndexSet)
//!                                                  │
//! UI thread:  poll()        (try_recv, never blocks)
//!             await_done()  (recv, blocks until the build is in)
//! ```
//!
//! Once the set has been received it is cached and every later call is
//! immediate. The set is only ever handed out whole.

use std::fmt;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::core::alphabet::Alphabet;
use crate::core::index::{IndexSet, build_index};
use crate::core::library::Library;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// The build task ended without sending a result (it panicked).
    WorkerLost,
    /// A bounded wait ran out before the build finished.
    TimedOut(Duration),
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::WorkerLost => write!(f, "index build task ended without a result"),
            IndexError::TimedOut(d) => write!(f, "index build not finished after {d:?}"),
        }
    }
}

impl std::error::Error for IndexError {}

pub struct IndexBuilder {
    receiver: Receiver<IndexSet>,
    index: Option<IndexSet>,
}

impl IndexBuilder {
    /// Starts building on tokio's blocking pool. Must be called from within
    /// a tokio runtime.
    pub fn spawn(library: Arc<Library>, alphabet: Alphabet) -> Self {
        let (tx, rx) = mpsc::channel();

        tokio::task::spawn_blocking(move || {
            let started = Instant::now();
            let set = build_index(&library.systems, &alphabet);
            info!(
                "Jump index built for {} systems in {:?}",
                set.collection_count(),
                started.elapsed()
            );
            // Receiver gone means the owner was dropped before we finished.
            let _ = tx.send(set);
        });

        Self {
            receiver: rx,
            index: None,
        }
    }

    pub fn is_done(&self) -> bool {
        self.index.is_some()
    }

    /// Checks for completion without blocking.
    pub fn poll(&mut self) -> Result<bool, IndexError> {
        if self.index.is_some() {
            return Ok(true);
        }
        match self.receiver.try_recv() {
            Ok(set) => {
                self.index = Some(set);
                Ok(true)
            }
            Err(TryRecvError::Empty) => Ok(false),
            Err(TryRecvError::Disconnected) => Err(IndexError::WorkerLost),
        }
    }

    /// Blocks until the build has finished. Immediate once it has.
    pub fn await_done(&mut self) -> Result<&IndexSet, IndexError> {
        if self.index.is_none() {
            debug!("Waiting for jump index build");
            let set = self.receiver.recv().map_err(|_| IndexError::WorkerLost)?;
            self.index = Some(set);
        }
        self.index.as_ref().ok_or(IndexError::WorkerLost)
    }

    /// Like [`await_done`](Self::await_done) but gives up after `timeout`.
    /// A timeout leaves the build running; a later call can still succeed.
    pub fn await_done_timeout(&mut self, timeout: Duration) -> Result<&IndexSet, IndexError> {
        if self.index.is_none() {
            let set = self.receiver.recv_timeout(timeout).map_err(|e| match e {
                RecvTimeoutError::Timeout => IndexError::TimedOut(timeout),
                RecvTimeoutError::Disconnected => IndexError::WorkerLost,
            })?;
            self.index = Some(set);
        }
        self.index.as_ref().ok_or(IndexError::WorkerLost)
    }

    /// The finished index, if it has been received.
    pub fn index(&self) -> Option<&IndexSet> {
        self.index.as_ref()
    }
}
