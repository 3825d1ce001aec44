pub use super::role::Entity as Role;
pub use super::site_option::Entity as SiteOption;
pub use super::transient::Entity as Transient;
pub use super::user::Entity as User;
pub use super::user_meta::Entity as UserMeta;
pub use super::user_role::Entity as UserRole;
