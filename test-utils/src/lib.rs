//! SeAT Role Sync Test Utils
//!
//! Provides shared testing utilities for the role sync service. This crate offers a builder
//! pattern for creating test contexts with in-memory SQLite databases, factories for host
//! records and a mock SeAT API server.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **factory**: Insert host records (users, metadata, roles) with sensible defaults
//! - **seat::MockSeat**: Local HTTP server answering the SeAT endpoints and counting hits
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, seat::MockSeat};
//!
//! #[tokio::test]
//! async fn syncs_roles() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_host_tables().build().await?;
//!     let seat = MockSeat::start().await;
//!     seat.set_roles(&[(1, "Fleet Commander")]);
//!
//!     let db = test.db.unwrap();
//!     // Run the sync against `seat.base_url()`...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod seat;
