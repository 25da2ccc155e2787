use crate::output::traits::{OutputResult, RecordWriter};
use crate::record::ArticleRecord;
use std::io::Write;

/// Writes records as CSV with a header row
///
/// Columns follow the field order of [`ArticleRecord`]. A missing author
/// link is written as an empty cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvWriter;

impl RecordWriter for CsvWriter {
    fn extension(&self) -> &'static str {
        "csv"
    }

    fn write_records(&self, records: &[ArticleRecord], out: &mut dyn Write) -> OutputResult<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(true)
            .from_writer(out);

        for record in records {
            writer.serialize(record)?;
        }

        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::tests::sample_records;

    const HEADER: &str = "title,publish_date,link,author,author_link,category,summary,\
                          content,read_count,comment_count,retweet_count,like_count";

    fn render(records: &[ArticleRecord]) -> String {
        let mut buffer = Vec::new();
        CsvWriter.write_records(records, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_header_matches_record_order() {
        let text = render(&sample_records());
        assert_eq!(text.lines().next(), Some(HEADER));
    }

    #[test]
    fn test_one_row_per_record() {
        let text = render(&sample_records());
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_rows_read_back() {
        let text = render(&sample_records());
        let mut reader = csv::Reader::from_reader(text.as_bytes());

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][0], "Rust 所有权");
        assert_eq!(&rows[0][4], "https://www.cnblogs.com/u/alice");
        assert_eq!(&rows[1][4], "");
        assert_eq!(&rows[1][8], "0");
    }
}
