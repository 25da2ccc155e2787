use crate::record::ArticleRecord;

/// Longest title shown in the terminal table, in characters
const TITLE_WIDTH: usize = 40;

/// Formats records as a numbered title/author/link table
pub fn format_records(records: &[&ArticleRecord]) -> String {
    let mut out = String::new();

    for (index, record) in records.iter().enumerate() {
        out.push_str(&format!(
            "{:>4}. {} | {} | {}\n",
            index + 1,
            clip(&record.title, TITLE_WIDTH),
            if record.author.is_empty() { "-" } else { record.author.as_str() },
            record.link
        ));
    }

    out
}

/// Prints the result table and a one-line summary to stdout
pub fn print_records(records: &[&ArticleRecord], total: usize) {
    println!("=== Harvested Articles ===\n");
    print!("{}", format_records(records));
    println!();

    if records.len() == total {
        println!("{} articles", total);
    } else {
        println!("{} of {} articles match", records.len(), total);
    }
}

fn clip(text: &str, width: usize) -> String {
    match text.char_indices().nth(width) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}
