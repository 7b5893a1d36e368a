//! Core domain types and logic.

pub mod bar;
pub mod timeframe;
pub mod returns;
pub mod outliers;
pub mod scan;
pub mod error;
