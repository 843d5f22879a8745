//! Core module for satlens
//!
//! This module contains the typed school record and the pipeline events.

mod types;

pub use types::*;
