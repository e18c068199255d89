//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON,
//! simulating what Discord's gateway would deliver, so event handlers can be
//! exercised without a live connection.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_message;
//!
//! #[test]
//! fn test_direct_message() {
//!     // A direct message from a human user
//!     let message = create_test_message(123456789, false, None);
//!
//!     // A guild message from a bot
//!     let message = create_test_message(987654321, true, Some(111111111));
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user::create_test_user` - Create Serenity User objects
//! - `message::create_test_message` - Create Serenity Message objects

pub mod message;
pub mod user;

// Re-export commonly used functions for convenience
pub use message::create_test_message;
pub use user::create_test_user;
