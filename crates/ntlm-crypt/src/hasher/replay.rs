//! Replay-based hasher for digest implementations without a copy operation

use std::fmt;
use std::marker::PhantomData;

use digest::Digest;

use super::MessageHasher;

/// Hasher that buffers the message and re-hashes it on every digest
///
/// Works with any [`Digest`], including implementations that are not `Clone`.
/// Memory use grows with the message.
pub struct ReplayHasher<D> {
    buffer: Vec<u8>,
    _digest: PhantomData<fn() -> D>,
}

impl<D: Digest> ReplayHasher<D> {
    /// Create an empty hasher
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
            _digest: PhantomData,
        }
    }

    /// Number of message bytes buffered so far
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }
}

impl<D: Digest> Default for ReplayHasher<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Digest> MessageHasher for ReplayHasher<D> {
    fn update(&mut self, data: &[u8]) -> &mut Self {
        self.buffer.extend_from_slice(data);
        self
    }

    fn digest(&mut self) -> Vec<u8> {
        D::digest(&self.buffer).to_vec()
    }

    fn output_size(&self) -> usize {
        <D as Digest>::output_size()
    }
}

impl<D> fmt::Debug for ReplayHasher<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReplayHasher")
            .field("buffered_len", &self.buffer.len())
            .finish_non_exhaustive()
    }
}
