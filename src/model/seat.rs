//! SeAT API domain models.

use serde::Deserialize;
use std::collections::BTreeMap;

/// A role as defined in SeAT.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SeatRole {
    pub id: i64,
    pub title: String,
}

/// Role catalog keyed by SeAT role ID, valued by role title.
pub type SeatRoleCatalog = BTreeMap<i64, String>;

/// Role membership of one character keyed by SeAT role title.
pub type CharacterRoles = BTreeMap<String, bool>;
