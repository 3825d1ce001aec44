//! Factory methods for creating test data.
//!
//! Each host table has its own factory module with a builder struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::create_user(&db).await?;
//!     factory::create_character_image(&db, user.id, 654321).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `user_meta` - Create user metadata entries (profile image URLs)
//! - `role` - Create host role entities
//! - `user_role` - Create user role memberships

pub mod helpers;
pub mod role;
pub mod user;
pub mod user_meta;
pub mod user_role;

pub use role::create_role;
pub use user::{create_admin, create_user};
pub use user_meta::{create_character_image, create_user_meta};
pub use user_role::create_user_role;
