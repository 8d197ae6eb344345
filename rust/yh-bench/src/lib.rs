//! yh-bench: criterion benchmarks for the Yahtzee rules engine.
//!
//! Run with `cargo bench -p yh-bench`.
