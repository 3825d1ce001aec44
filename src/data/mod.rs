//! Database repository layer for the host tables.
//!
//! Repositories use SeaORM entity models internally and return plain values or domain
//! models, keeping database-specific structures out of the service layer.

pub mod role;
pub mod site_option;
pub mod transient;
pub mod user;
pub mod user_meta;
pub mod user_role;

#[cfg(test)]
mod test;
