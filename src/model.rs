use serde::{Deserialize, Serialize};

/// A single to-do entry.
///
/// `id` and `text` are fixed at creation; only `tags` and `priority` may be
/// overwritten afterwards (by the edit command).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique within the store, assigned by the add command. The smallest
    /// unused non-negative integer, kept as a string.
    pub id: String,
    /// Free-form description.
    pub text: String,
    /// Opaque tag string. `"-"` means "no tags"; no delimiter is enforced,
    /// filtering is plain substring search over this field.
    pub tags: String,
    /// Compared lexicographically, not numerically, so `"9"` sorts above
    /// `"10"`. Single digits are the intended usage.
    pub priority: String,
}

impl Task {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        tags: impl Into<String>,
        priority: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            tags: tags.into(),
            priority: priority.into(),
        }
    }
}
