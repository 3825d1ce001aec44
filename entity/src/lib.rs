//! SeaORM entities for the host tables the role sync reads and writes.

pub mod prelude;

pub mod role;
pub mod site_option;
pub mod transient;
pub mod user;
pub mod user_meta;
pub mod user_role;
