//! Common test infrastructure for archcheck-registry tests
//!
//! # Usage
//!
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Modules
//!
//! - `constants`: Repositories, tags, tokens and digests
//! - `fixtures`: JSON manifest and config blob fixtures
//! - `mock_registry`: Wiremock helpers for token, manifest and blob endpoints

// Each test binary uses a different subset of the helpers
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod constants;
pub mod fixtures;
pub mod mock_registry;

pub use constants::*;
pub use fixtures::*;
pub use mock_registry::*;
