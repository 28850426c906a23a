use crate::sort::SortValue;

/// A resource that per-user policies can target, e.g. a bot.
pub trait PolicyTarget {
    /// The identifier a `UserPolicy` refers to in its `bot_id`.
    fn target_id(&self) -> i64;
}

/// Anything carrying a public/private switch.
pub trait PublicFlag {
    fn is_public(&self) -> bool;

    /// The `"true"`/`"false"` tag the status filter matches against.
    fn public_tag(&self) -> &'static str {
        if self.is_public() { "true" } else { "false" }
    }
}

/// A table row whose columns can be looked up by key for sorting.
pub trait SortableRow {
    /// The value of column `key`, classified for comparison.
    fn sort_value(&self, key: &str) -> SortValue<'_>;
}
