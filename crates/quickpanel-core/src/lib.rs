//! # quickpanel-core
//!
//! Error handling and configuration shared by the quickpanel crates.

pub mod config;
pub mod error;
