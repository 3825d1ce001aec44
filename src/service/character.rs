//! EVE character resolution for host users.
//!
//! The social login plugin stores the character portrait URL on the user record, e.g.
//! `https://images.evetech.net/Character/654321_128.jpg`. The numeric segment of that URL
//! is the character ID used by SeAT.

use regex::Regex;
use std::sync::LazyLock;

use crate::{
    error::AppError,
    host::{HostPlatform, UserId},
};

/// User metadata key holding the character portrait URL.
pub const CHARACTER_IMAGE_META_KEY: &str = "wsl_current_user_image";

static CHARACTER_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/(\d+)_128\.jpg$").expect("valid character image pattern")
});

/// Extracts the character ID from a portrait URL.
///
/// # Returns
/// - `Some(id)` - URL ends in `/<digits>_128.jpg` with a non-zero ID
/// - `None` - Empty, non-matching, zero or out-of-range
pub fn parse_character_id(image_url: &str) -> Option<u64> {
    CHARACTER_IMAGE
        .captures(image_url.trim())
        .and_then(|captures| captures.get(1))
        .and_then(|id| id.as_str().parse::<u64>().ok())
        .filter(|id| *id != 0)
}

pub struct CharacterResolver<'a> {
    host: &'a dyn HostPlatform,
}

impl<'a> CharacterResolver<'a> {
    pub fn new(host: &'a dyn HostPlatform) -> Self {
        Self { host }
    }

    /// Resolves the character ID of a user.
    ///
    /// # Arguments
    /// - `user_id` - Host user, or `None` for the user of the current request
    ///
    /// # Returns
    /// - `Ok(Some(id))` - Character resolved
    /// - `Ok(None)` - No user, no portrait URL, or the URL does not identify a character
    /// - `Err(AppError)` - Host failed to read the user metadata
    pub async fn get_character_id(&self, user_id: Option<UserId>) -> Result<Option<u64>, AppError> {
        let Some(user_id) = user_id.or_else(|| self.host.current_user_id()) else {
            return Ok(None);
        };

        let image_url = self
            .host
            .get_user_metadata(user_id, CHARACTER_IMAGE_META_KEY)
            .await?;

        Ok(image_url.as_deref().and_then(parse_character_id))
    }
}
