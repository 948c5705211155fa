//*** START FILE: src/parsing/sentence_splitter.rs ***//
use regex::Regex;

/// Split running text into sentences after terminal punctuation. The
/// punctuation stays with the preceding sentence; the spaces after it are
/// discarded.
pub fn split_sentences(text: &str) -> Vec<String> {
    let boundary_re = Regex::new(r"[.!?] *").unwrap();
    let mut fragments: Vec<&str> = Vec::new();
    let mut last_end = 0;
    for m in boundary_re.find_iter(text) {
        // The terminal punctuation is a single ASCII character.
        let cut = m.start() + 1;
        fragments.push(&text[last_end..cut]);
        last_end = m.end();
    }
    fragments.push(&text[last_end..]);

    fragments
        .into_iter()
        .map(clean_sentence)
        .filter(|s| is_valid_sentence(s))
        .collect()
}

/// Clean a single sentence.
// TODO: decide whether the quote and star characters (" ' ” “ *) should be
// stripped here too; the published corpus keeps them for now.
pub fn clean_sentence(text: &str) -> String {
    text.trim().to_string()
}

/// A sentence is worth keeping only if it contains at least one alphanumeric
/// character; lone quotes and stray punctuation are dropped.
pub fn is_valid_sentence(sentence: &str) -> bool {
    sentence.trim().chars().any(|c| c.is_alphanumeric())
}

//*** END FILE: src/parsing/sentence_splitter.rs ***//
