//! Shared helper utilities for factory methods.

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Builds the EVE image server portrait URL the login plugin stores for a character.
pub fn character_image_url(character_id: u64) -> String {
    format!(
        "https://images.evetech.net/Character/{}_128.jpg",
        character_id
    )
}
