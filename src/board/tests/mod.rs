//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Perft counts for move generation
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests

mod proptest;
