//! Per-player score keeping.
//!
//! Total = committed scores + bonus, where the bonus (35) is earned once the
//! six number categories sum to at least 63. A board is complete when all 13
//! names are committed, cancelled ones included.

mod board;

pub use board::ScoreBoard;
