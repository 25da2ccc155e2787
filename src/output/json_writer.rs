use crate::output::traits::{OutputResult, RecordWriter};
use crate::record::ArticleRecord;
use std::io::Write;

/// Writes records as an indented JSON array
///
/// Output is UTF-8 with non-ASCII characters kept as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonWriter;

impl RecordWriter for JsonWriter {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn write_records(&self, records: &[ArticleRecord], out: &mut dyn Write) -> OutputResult<()> {
        serde_json::to_writer_pretty(&mut *out, records)?;
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::tests::sample_records;

    #[test]
    fn test_json_array_of_objects() {
        let mut buffer = Vec::new();
        JsonWriter
            .write_records(&sample_records(), &mut buffer)
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        let items = parsed.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["title"], "Rust 所有权");
        assert_eq!(items[0]["read_count"], "1024");
        assert!(items[1]["author_link"].is_null());
    }

    #[test]
    fn test_json_keeps_non_ascii_and_indents() {
        let mut buffer = Vec::new();
        JsonWriter
            .write_records(&sample_records(), &mut buffer)
            .unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("Rust 所有权"));
        assert!(text.contains("博客园"));
        assert!(!text.contains("\\u"));
        assert!(text.contains("\n  {"));
    }

    #[test]
    fn test_json_round_trip() {
        let records = sample_records();
        let mut buffer = Vec::new();
        JsonWriter.write_records(&records, &mut buffer).unwrap();

        let parsed: Vec<ArticleRecord> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, records);
    }
}
