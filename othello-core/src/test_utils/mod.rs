//! Utilities used for testing and benchmarking.

pub mod perft;
