//! Chatvault Test Utils
//!
//! Shared testing utilities for the archive's unit and integration tests.
//! Offers a builder pattern for creating test contexts with in-memory SQLite
//! databases, entity factories with sensible defaults, and factories for mock
//! Serenity objects built from Discord-API-shaped JSON.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Message;
//!
//! #[tokio::test]
//! async fn test_message_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Message)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
