//! Wire type definitions for the trading backend's HTTP API

pub mod info;
pub mod quotes;
pub mod swap;
