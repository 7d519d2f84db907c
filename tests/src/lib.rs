//! # Message Signer Test Suite
//!
//! Unified test crate containing:
//!
//! ```text
//! tests/src/
//! └── integration/      # Cross-crate choreography
//!     ├── gateway_e2e.rs   # Wire contract through the real router
//!     └── client_e2e.rs    # Client flows against the real router
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p signer-tests
//!
//! # By category
//! cargo test -p signer-tests integration::
//! ```

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;
