//! Traits for output formatting

/// Trait for objects that can be formatted for porcelain output
pub(crate) trait Formattable {
    /// Format as stable `key: value` lines meant to be parsed by scripts.
    fn format_porcelain(&self) -> String;
}
