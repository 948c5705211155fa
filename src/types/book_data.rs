//*** START FILE: src/types/book_data.rs ***//
use serde::{Deserialize, Serialize};

/// Per-chapter sentence counts, recorded while a book is processed.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ChapterReport {
    pub index: usize,
    pub english_sentences: usize,
    pub quenya_sentences: usize,
}

/// The result of processing one book: two sentence lists of equal length,
/// where element i of one language pairs with element i of the other, in
/// chapter-ascending order.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct AlignedBook {
    pub english_sentences: Vec<String>,
    pub quenya_sentences: Vec<String>,
    pub chapters: Vec<ChapterReport>,
}

/// Summary written next to the sentence files after a book is processed.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct BookReport {
    pub source_file: String,
    pub num_chapters: usize,
    pub chapters: Vec<ChapterReport>,
    pub total_sentence_pairs: usize,
}
//*** END FILE: src/types/book_data.rs ***//
