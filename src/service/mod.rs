//! Service layer for the role sync.
//!
//! Services sit between the hooks/controllers and the host capabilities:
//!
//! - **seat**: authenticated, cached SeAT API client
//! - **role_catalog**: mirrors the SeAT role catalog as host roles
//! - **character**: resolves a host user's EVE character
//! - **role_sync**: reconciles a user's host roles with SeAT membership
//! - **settings**: loads and stores the SeAT connection settings

pub mod character;
pub mod role_catalog;
pub mod role_sync;
pub mod seat;
pub mod settings;

#[cfg(test)]
mod test;
