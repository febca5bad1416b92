//! Zobrist hashing: a deterministic 64-bit fingerprint of a position, used
//! as the transposition-table key.

pub mod zobrist;

pub use zobrist::ZobristHasher;
