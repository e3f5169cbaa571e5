//! Case-insensitive substring filter over a [`Directory`].

use crate::user::{Directory, UserRecord};

/// Records whose name or username contains `query`, ignoring case.
///
/// The empty query matches everything. Directory order is preserved and the
/// query is not trimmed. This is a full re-scan on every call.
pub fn filter<'a>(directory: &'a Directory, query: &str) -> Vec<&'a UserRecord> {
  if query.is_empty() {
    return directory.iter().collect();
  }
  let needle = query.to_lowercase();
  directory
    .iter()
    .filter(|user| matches(user, &needle))
    .collect()
}

/// `needle` must already be lower-cased.
fn matches(user: &UserRecord, needle: &str) -> bool {
  user.name.to_lowercase().contains(needle)
    || user.username.to_lowercase().contains(needle)
}
