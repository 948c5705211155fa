//*** START FILE: src/corpus_generator.rs ***//
use crate::book_processor::process_book;
use crate::config::Config;
use crate::error::CorpusError;
use crate::report_io::save_book_report;
use crate::types::book_data::AlignedBook;

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

/// Read the raw text of one source document. The source documents are
/// plain-text exports of the bilingual books; a read or decode failure is
/// fatal for the run.
pub fn read_document(path: &Path) -> Result<String, CorpusError> {
    fs::read_to_string(path).map_err(|e| CorpusError::DocumentRead {
        path: path.to_path_buf(),
        source: e,
    })
}

fn write_sentences(path: &Path, sentences: &[String]) -> Result<(), CorpusError> {
    let mut contents = String::new();
    for sentence in sentences {
        contents.push_str(sentence);
        contents.push('\n');
    }
    fs::write(path, contents).map_err(|e| CorpusError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Check that the two sentence lists line up at all, then print a handful of
/// pairs for manual inspection. Pairs are taken at evenly spaced indices so
/// repeated runs show the same ones.
pub fn sanity_check(book: &AlignedBook, num_samples: usize) -> Result<(), CorpusError> {
    if book.english_sentences.len() != book.quenya_sentences.len() {
        return Err(CorpusError::BookMismatch {
            english: book.english_sentences.len(),
            quenya: book.quenya_sentences.len(),
        });
    }
    println!("Number of sentences in both lists match.");

    if book.english_sentences.is_empty() || num_samples == 0 {
        return Ok(());
    }

    let step = (book.english_sentences.len() / num_samples).max(1);
    println!("\nSelected sentence pairs:");
    for index in (0..book.english_sentences.len())
        .step_by(step)
        .take(num_samples)
    {
        println!("\nPair {}:", index + 1);
        println!("English: {}", book.english_sentences[index]);
        println!("Quenya: {}", book.quenya_sentences[index]);
    }
    Ok(())
}

/// Process every configured book: read it, rebuild the two aligned sentence
/// lists, and write them out one sentence per line, together with a JSON
/// processing report.
pub fn run_corpus_generation(config: &Config) -> Result<(), Box<dyn Error>> {
    println!("Starting corpus generation run...");

    fs::create_dir_all(&config.output_path).map_err(|e| {
        format!(
            "Failed to create output directory {:?}: {}",
            config.output_path, e
        )
    })?;

    for filename in &config.filenames {
        let file_inpath = PathBuf::from(&config.input_path).join(filename);
        let stem = filename.split('.').next().unwrap_or(filename.as_str());

        println!("\n--- Processing book: {} ---", filename);
        let text = read_document(&file_inpath)?;
        let book = process_book(&text)?;

        let english_outpath =
            PathBuf::from(&config.output_path).join(format!("{}_english_sentences.txt", stem));
        let quenya_outpath =
            PathBuf::from(&config.output_path).join(format!("{}_quenya_sentences.txt", stem));
        write_sentences(&english_outpath, &book.english_sentences)?;
        write_sentences(&quenya_outpath, &book.quenya_sentences)?;
        println!(
            "  Saved {} english sentences to: {}",
            book.english_sentences.len(),
            english_outpath.display()
        );
        println!(
            "  Saved {} quenya sentences to: {}",
            book.quenya_sentences.len(),
            quenya_outpath.display()
        );

        let report_path = PathBuf::from(&config.output_path).join(format!("{}_report.json", stem));
        if let Err(e) = save_book_report(filename, &book, &report_path) {
            eprintln!(
                "  ERROR: Failed to save report for {}: {}. Continuing without it.",
                filename, e
            );
        } else {
            println!("  Saved report to: {}", report_path.display());
        }

        sanity_check(&book, 5)?;
    }

    println!("\nCorpus generation run finished.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanity_check_rejects_lists_of_different_lengths() {
        let book = AlignedBook {
            english_sentences: vec!["One.".to_string(), "Two.".to_string()],
            quenya_sentences: vec!["Min.".to_string()],
            chapters: Vec::new(),
        };
        let err = sanity_check(&book, 5).unwrap_err();
        assert!(matches!(
            err,
            CorpusError::BookMismatch {
                english: 2,
                quenya: 1
            }
        ));
    }

    #[test]
    fn sanity_check_accepts_matching_lists() {
        let book = AlignedBook {
            english_sentences: vec!["One.".to_string()],
            quenya_sentences: vec!["Min.".to_string()],
            chapters: Vec::new(),
        };
        sanity_check(&book, 5).unwrap();
    }

    #[test]
    fn sanity_check_accepts_empty_books() {
        sanity_check(&AlignedBook::default(), 5).unwrap();
    }

    #[test]
    fn read_document_fails_for_a_missing_file() {
        let err = read_document(Path::new("/no/such/book.txt")).unwrap_err();
        assert!(matches!(err, CorpusError::DocumentRead { .. }));
    }
}
//*** END FILE: src/corpus_generator.rs ***//
