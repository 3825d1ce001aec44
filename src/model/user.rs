//! Host user domain model.

/// A user of the host application.
#[derive(Debug, Clone, PartialEq)]
pub struct HostUser {
    pub id: i32,
    pub login: String,
    pub display_name: String,
    /// Whether the user may access the administration pages.
    pub admin: bool,
}

impl HostUser {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            login: entity.login,
            display_name: entity.display_name,
            admin: entity.admin,
        }
    }
}
