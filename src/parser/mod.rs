pub mod fields;
pub mod php_dump;

use crate::types::RawRecord;

pub use php_dump::PhpDumpExtractor;

/// Locates timestamped forecast records inside raw page text.
///
/// Records are yielded in document order; callers sort them. Finding nothing
/// is not an error at this level.
pub trait RecordExtractor {
    fn extract_records<'t>(&'t self, text: &'t str) -> Box<dyn Iterator<Item = RawRecord<'t>> + 't>;

    /// Identifier used in logs.
    fn name(&self) -> &'static str;
}
