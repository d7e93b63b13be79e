//! Random key sampling over a `Dict` keyspace.

use crate::dict::Dict;
use core::fmt;
use core::hash::BuildHasher;
use rand::seq::index;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleError {
    /// With-replacement sampling was requested from an empty dictionary.
    Empty,
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::Empty => f.write_str("cannot sample keys from an empty dictionary"),
        }
    }
}

impl std::error::Error for SampleError {}

impl<V, S> Dict<V, S>
where
    S: BuildHasher,
{
    /// Returns exactly `limit` keys sampled independently with replacement,
    /// each draw uniform over the current keys. Duplicates are expected
    /// whenever `limit` approaches or exceeds `len()`.
    ///
    /// `limit == 0` yields an empty vector. Sampling from an empty
    /// dictionary with `limit > 0` fails with [`SampleError::Empty`].
    pub fn random_keys(&self, limit: usize) -> Result<Vec<String>, SampleError> {
        self.random_keys_with(&mut rand::rng(), limit)
    }

    /// `random_keys` with a caller-supplied RNG, for seeded reproducibility.
    pub fn random_keys_with<R>(&self, rng: &mut R, limit: usize) -> Result<Vec<String>, SampleError>
    where
        R: Rng + ?Sized,
    {
        if limit == 0 {
            return Ok(Vec::new());
        }
        if self.is_empty() {
            return Err(SampleError::Empty);
        }
        // Snapshot the keyspace once so each draw is O(1).
        let pool = self.keys_borrowed();
        let mut out = Vec::with_capacity(limit);
        for _ in 0..limit {
            out.push(pool[rng.random_range(0..pool.len())].clone());
        }
        Ok(out)
    }

    /// Returns `min(limit, len())` distinct keys as a uniform sample
    /// without replacement: every subset of that size is equally likely.
    /// An empty dictionary yields an empty vector for any `limit`.
    pub fn random_distinct_keys(&self, limit: usize) -> Vec<String> {
        self.random_distinct_keys_with(&mut rand::rng(), limit)
    }

    /// `random_distinct_keys` with a caller-supplied RNG, for seeded
    /// reproducibility.
    pub fn random_distinct_keys_with<R>(&self, rng: &mut R, limit: usize) -> Vec<String>
    where
        R: Rng + ?Sized,
    {
        let pool = self.keys_borrowed();
        let amount = limit.min(pool.len());
        index::sample(rng, pool.len(), amount)
            .into_iter()
            .map(|i| pool[i].clone())
            .collect()
    }
}
