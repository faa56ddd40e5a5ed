//! Compute client: owner of the random source and the cancellation token.
//!
//! The algorithm families are written once in their `impl_generic` modules
//! against [`RuntimeClient`] and bound to [`CpuClient`] in their `cpu`
//! modules. The client is the only place randomness comes from, so a client
//! built with [`CpuClient::with_seed`] makes PCA starting vectors and
//! k-means++ draws reproducible.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::error::{Error, Result};

/// Shared flag a caller flips to stop a long-running operation.
///
/// Clones share the same flag, so one clone can live on the caller side
/// while another is handed to a worker thread.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Services every algorithm implementation needs from its client.
pub trait RuntimeClient {
    /// Run `f` with exclusive access to the client's random source.
    fn with_rng<T>(&self, f: impl FnOnce(&mut dyn RngCore) -> T) -> T;

    /// The token checked between iterations of long-running operations.
    fn cancellation(&self) -> &CancellationToken;

    /// Fail with [`Error::Cancelled`] if cancellation was requested.
    fn check_cancelled(&self, op: &'static str) -> Result<()> {
        if self.cancellation().is_cancelled() {
            info!(op, "operation cancelled");
            return Err(Error::Cancelled { op });
        }
        Ok(())
    }
}

/// Single-threaded CPU client.
///
/// # Example
///
/// ```ignore
/// use tabclust::{CpuClient, KMeansAlgorithms, KMeansOptions};
///
/// let client = CpuClient::with_seed(42);
/// let result = client.kmeans(&data, &KMeansOptions::with_k(3))?;
/// ```
#[derive(Debug)]
pub struct CpuClient {
    rng: Mutex<ChaCha8Rng>,
    cancel: CancellationToken,
}

impl CpuClient {
    /// Client seeded from OS entropy.
    pub fn new() -> Self {
        Self::from_rng(ChaCha8Rng::from_entropy())
    }

    /// Client with a fixed seed; identical calls give identical results.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_rng(rng: ChaCha8Rng) -> Self {
        Self {
            rng: Mutex::new(rng),
            cancel: CancellationToken::new(),
        }
    }

    /// Replace the client's cancellation token.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Re-seed the random source.
    pub fn reseed(&self, seed: u64) {
        *self.rng.lock() = ChaCha8Rng::seed_from_u64(seed);
    }
}

impl Default for CpuClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RuntimeClient for CpuClient {
    fn with_rng<T>(&self, f: impl FnOnce(&mut dyn RngCore) -> T) -> T {
        let mut rng = self.rng.lock();
        f(&mut *rng)
    }

    fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }
}
