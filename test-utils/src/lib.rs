//! Carberretta Test Utils
//!
//! Provides shared testing utilities for the carberretta bot. This crate
//! offers a builder for test contexts backed by temporary data directories,
//! and factories for Serenity models.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment owning the temporary data directories
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the files the database
//! expects:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_database() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_build_script("CREATE TABLE example (id INTEGER PRIMARY KEY);")
//!         .build()?;
//!
//!     let dynamic_dir = test.dynamic_dir();
//!     // Connect a database to the directories...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod serenity;
