//! Unique names for test isolation.
//!
//! Game names are unique across the store and player names must fit the
//! 3..=20 character rule, so suffixes stay short.

use uuid::Uuid;

/// `{prefix}-{8 hex chars}`. Keep `prefix` at 11 characters or fewer.
///
/// ```
/// use contamina_test_support::unique_helpers::unique_name;
///
/// let a = unique_name("game");
/// let b = unique_name("game");
/// assert_ne!(a, b);
/// assert!(a.starts_with("game-"));
/// assert_eq!(a.len(), "game-".len() + 8);
/// ```
pub fn unique_name(prefix: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{prefix}-{}", &suffix[..8])
}
