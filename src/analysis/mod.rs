/// Analysis transforms over disaster record batches.
///
/// Each submodule is a pure, single-pass transform: no I/O, no shared
/// state, safe to call concurrently on independent collections.

pub mod severity;
pub mod stats;
pub mod summary;
pub mod views;
