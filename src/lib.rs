//! sampled-dict: A single-threaded, string-keyed map with conditional
//! inserts and uniform random key sampling.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small dictionary for keyspace-style workloads (sets of named
//!   entries that occasionally need random members picked, e.g. for
//!   spot-checks or probabilistic maintenance sweeps), built as a thin
//!   layer over `hashbrown::HashMap`.
//! - Layers:
//!   - `Dict<V, S>`: the public container. Point operations (`get`,
//!     `put`, `put_if_absent`, `put_if_exists`, `remove`, `take`) plus
//!     traversal (`for_each`, `iter`, `iter_mut`, `keys`) and `clear`.
//!   - Sampling (`random_keys`, `random_distinct_keys` and their
//!     `_with` variants): uniform draws over the current keyspace,
//!     layered on top of the container without touching its internals
//!     beyond key iteration.
//!
//! Constraints
//! - Single-threaded use; no interior mutability, no atomics. Sharing
//!   follows the usual `&`/`&mut` rules, so concurrent mutation is a
//!   compile error rather than a documented hazard.
//! - Keys are owned `String`s; lookups accept `&str` via `Borrow`.
//! - Values are a free type parameter `V`. For genuinely heterogeneous
//!   values use `Dict<Box<dyn Any>>` and downcast at the call site; the
//!   container imposes no constraint on `V` and never inspects it.
//! - Every constructor produces valid empty storage; there is no
//!   "uninitialized container" state and no guard for one.
//!
//! Conditional mutation results
//! - `put`/`put_if_absent`/`put_if_exists`/`remove` report the number of
//!   entries affected (`1` or `0`) so callers can sum them over batches.
//!
//! Sampling semantics
//! - `random_keys(limit)` draws `limit` keys independently with
//!   replacement, each draw uniform over the current keys. Sampling from
//!   an empty dictionary with `limit > 0` is an explicit
//!   [`SampleError::Empty`], never a vector of placeholder values.
//! - `random_distinct_keys(limit)` draws `min(limit, len())` distinct
//!   keys as a uniform sample without replacement, not an iteration
//!   prefix.
//! - Both cost O(n + limit): one pass to snapshot the keyspace, then
//!   O(1) per draw.
//!
//! Notes and non-goals
//! - `clear` empties the map in place and keeps its capacity; it does
//!   not swap in a fresh backing store.
//! - No ordering guarantees anywhere: `keys`, `for_each` and the
//!   iterators visit entries in the backing table's order, which may
//!   change across mutations.
//! - No persistence, no eviction, no expiry. Embedding systems build
//!   those on top.
//! - Public API surface is `Dict`, its iterators, and `SampleError`.

mod dict;
mod sample;

// Public surface
pub use dict::{Dict, Iter, IterMut};
pub use sample::SampleError;
