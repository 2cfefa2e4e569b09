//! Public library API for decoding IFF-style chunk containers.

/// Chunk decoding, FORM traversal, and file loading helpers.
pub mod iff;
