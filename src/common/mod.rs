//! Common types and utilities shared across pagesim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants and [`SimulationConfig`](config::SimulationConfig)
//! - Error types
//! - Identifiers (PageId, FrameId) and slot contents

pub mod config;
pub mod error;
mod frame_id;
mod page_id;
mod slot;

pub use error::{Error, ErrorKind, Result};
pub use frame_id::FrameId;
pub use page_id::PageId;
pub use slot::Slot;
