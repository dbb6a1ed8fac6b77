//! Test utilities for Pixkit.
//!
//! - An in-memory [`ChargeBackend`](crate::charge::ChargeBackend) with a
//!   switch to simulate an unreachable backend
//! - Fixtures for keys, merchants and known payloads
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pixkit_lib::charge::ChargeService;
//! use pixkit_lib::test_utils::{InMemoryBackend, TestFixtures};
//!
//! let backend = InMemoryBackend::new();
//! backend.insert_merchant("loja-1", TestFixtures::merchant());
//! let service = ChargeService::new(backend);
//! ```

mod backend;
mod fixtures;

pub use backend::InMemoryBackend;
pub use fixtures::TestFixtures;
