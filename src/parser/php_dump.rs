use super::RecordExtractor;
use crate::types::RawRecord;
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ["2025-06-01 09:00:00"]=> object(stdClass)#12 (9) { ... \n }
static ENTRY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?s)\["(?P<dt>[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2})"\]\s*=>\s*object\(stdClass\)#[0-9]+\s*\([0-9]+\)\s*\{\s*(?P<body>.*?)\n\s*\}"#,
    )
    .expect("entry pattern is valid")
});

/// Extracts forecast records from a PHP `var_dump` block embedded in the page.
///
/// The body of each record runs from the opening brace to the first line that
/// starts with a closing brace.
#[derive(Debug, Default, Clone, Copy)]
pub struct PhpDumpExtractor;

impl PhpDumpExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl RecordExtractor for PhpDumpExtractor {
    fn extract_records<'t>(&'t self, text: &'t str) -> Box<dyn Iterator<Item = RawRecord<'t>> + 't> {
        Box::new(ENTRY_PATTERN.captures_iter(text).filter_map(|caps| {
            let dt = caps.name("dt")?.as_str();
            let body = caps.name("body")?.as_str();
            match NaiveDateTime::parse_from_str(dt, TIMESTAMP_FORMAT) {
                Ok(timestamp) => Some(RawRecord { timestamp, body }),
                Err(e) => {
                    warn!("Skipping record with invalid timestamp {}: {}", dt, e);
                    None
                }
            }
        }))
    }

    fn name(&self) -> &'static str {
        "php_dump"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    const PAGE: &str = r#"<div style="display:none"><pre>array(3) {
  ["2025-06-01 06:00:00"]=>
  object(stdClass)#101 (4) {
    ["houle"]=>
    string(3) "0.8"
    ["houleMax"]=>
    string(3) "1.2"
  }
  ["2025-06-01 07:00:00"]=>
  object(stdClass)#102 (4) {
    ["houle"]=>
    string(3) "0.9"
  }
  ["2025-13-01 09:00:00"]=>
  object(stdClass)#103 (4) {
    ["houle"]=>
    string(3) "1.0"
  }
}
</pre></div>"#;

    #[test]
    fn test_extracts_records_in_document_order() {
        let extractor = PhpDumpExtractor::new();
        let records: Vec<_> = extractor.extract_records(PAGE).collect();

        // The third block has an impossible month and is skipped
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].timestamp.hour(), 6);
        assert_eq!(records[1].timestamp.hour(), 7);
    }

    #[test]
    fn test_body_stops_at_closing_brace_line() {
        let extractor = PhpDumpExtractor::new();
        let first = extractor.extract_records(PAGE).next().unwrap();

        assert!(first.body.contains(r#"["houleMax"]"#));
        assert!(!first.body.contains("2025-06-01 07:00:00"));
        assert!(!first.body.contains('}'));
    }

    #[test]
    fn test_no_match_yields_empty_sequence() {
        let extractor = PhpDumpExtractor::new();
        assert_eq!(extractor.extract_records("<html><body>Rien</body></html>").count(), 0);
        assert_eq!(extractor.extract_records("").count(), 0);
    }

    #[test]
    fn test_tolerates_compact_spacing() {
        let text = r#"["2025-06-02 12:00:00"]=>object(stdClass)#7 (2) {["houle"]=> string(3) "1.5"
}"#;
        let extractor = PhpDumpExtractor::new();
        let records: Vec<_> = extractor.extract_records(text).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].body, r#"["houle"]=> string(3) "1.5""#);
    }
}
