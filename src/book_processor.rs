//*** START FILE: src/book_processor.rs ***//
use log::info;

use crate::error::CorpusError;
use crate::parsing::chapter_extractor::{extract_chapters, find_chapter_start};
use crate::parsing::sentence_splitter::split_sentences;
use crate::parsing::text_cleaner::{collapse_line_breaks, remove_bracketed_content};
use crate::parsing::verse_aligner::separate_languages;
use crate::types::book_data::{AlignedBook, ChapterReport};

/// Process a single Bible book: clean the raw text, cut it into chapters,
/// rebuild the two language streams per chapter and split them into
/// sentences. The two output lists are index-aligned; a per-chapter count
/// mismatch aborts the whole book, since every pair after the divergence
/// would be shifted.
pub fn process_book(text: &str) -> Result<AlignedBook, CorpusError> {
    let text = find_chapter_start(text);
    let text = remove_bracketed_content(&text);
    let text = collapse_line_breaks(&text);

    let chapters = extract_chapters(&text);

    let mut chapter_results: Vec<(usize, Vec<String>, Vec<String>)> = Vec::new();

    for (i, chapter) in chapters.iter().enumerate() {
        info!("Processing chapter {}", i + 1);
        let (english_string, quenya_string) = separate_languages(chapter);
        let english = split_sentences(&english_string);
        let quenya = split_sentences(&quenya_string);
        if english.len() != quenya.len() {
            return Err(CorpusError::ChapterMismatch {
                chapter: i,
                english: english.len(),
                quenya: quenya.len(),
            });
        }
        chapter_results.push((i, english, quenya));
    }

    // Malformed books can in principle define chapters out of numeric order;
    // concatenate by ascending index, not discovery order.
    chapter_results.sort_by_key(|(index, _, _)| *index);

    let mut book = AlignedBook::default();
    for (index, english, quenya) in chapter_results {
        book.chapters.push(ChapterReport {
            index,
            english_sentences: english.len(),
            quenya_sentences: quenya.len(),
        });
        book.english_sentences.extend(english);
        book.quenya_sentences.extend(quenya);
    }
    Ok(book)
}

//*** END FILE: src/book_processor.rs ***//
