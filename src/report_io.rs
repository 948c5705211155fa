//*** START FILE: src/report_io.rs ***//
use crate::types::book_data::{AlignedBook, BookReport};
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Saves the processing summary for one book to a JSON file next to the
/// sentence outputs.
pub fn save_book_report(
    source_file: &str,
    book: &AlignedBook,
    file_path: &Path,
) -> Result<(), Box<dyn Error>> {
    let report = BookReport {
        source_file: source_file.to_string(),
        num_chapters: book.chapters.len(),
        chapters: book.chapters.clone(),
        total_sentence_pairs: book.english_sentences.len(),
    };

    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create report file at {:?}: {}", file_path, e))?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, &report)
        .map_err(|e| format!("Failed to serialize report to {:?}: {}", file_path, e))?;

    Ok(())
}

/// Loads a previously saved book report.
pub fn load_book_report(file_path: &Path) -> Result<BookReport, Box<dyn Error>> {
    let file = File::open(file_path)
        .map_err(|e| format!("Failed to open report file at {:?}: {}", file_path, e))?;
    let reader = BufReader::new(file);

    let report: BookReport = serde_json::from_reader(reader)
        .map_err(|e| format!("Failed to deserialize report from {:?}: {}", file_path, e))?;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::book_data::ChapterReport;

    #[test]
    fn report_round_trips_through_json() {
        let book = AlignedBook {
            english_sentences: vec!["English-one.".to_string()],
            quenya_sentences: vec!["Quenya-one.".to_string()],
            chapters: vec![ChapterReport {
                index: 0,
                english_sentences: 1,
                quenya_sentences: 1,
            }],
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Matthew_report.json");

        save_book_report("Matthew.txt", &book, &path).unwrap();
        let report = load_book_report(&path).unwrap();

        assert_eq!(report.source_file, "Matthew.txt");
        assert_eq!(report.num_chapters, 1);
        assert_eq!(report.total_sentence_pairs, 1);
        assert_eq!(report.chapters[0].index, 0);
    }
}
//*** END FILE: src/report_io.rs ***//
