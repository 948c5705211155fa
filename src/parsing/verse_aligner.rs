//*** START FILE: src/parsing/verse_aligner.rs ***//
use log::warn;
use regex::Regex;

/// Split chapter text on runs of digits while keeping the digit runs, so the
/// result alternates between text spans and the verse numbers that follow
/// them: [text_0, num_0, text_1, num_1, ..., text_k].
fn split_on_verse_numbers(text: &str) -> Vec<&str> {
    let number_re = Regex::new(r"\d+").unwrap();
    let mut elements = Vec::new();
    let mut last_end = 0;
    for m in number_re.find_iter(text) {
        elements.push(&text[last_end..m.start()]);
        elements.push(m.as_str());
        last_end = m.end();
    }
    elements.push(&text[last_end..]);
    elements
}

/// Read the verse number that follows the span at `cursor`. A number equal to
/// the one currently expected is a malformed marker; recover by advancing the
/// expected number one verse instead.
fn next_verse_number(elements: &[&str], cursor: usize, curr_num: u64) -> u64 {
    match elements.get(cursor + 1) {
        Some(token) => {
            let next_num: u64 = token.parse().unwrap_or(0);
            if next_num == curr_num {
                warn!(
                    "duplicate marker for verse {}; treating the following span as verse {}",
                    next_num,
                    curr_num + 1
                );
                curr_num + 1
            } else {
                next_num
            }
        }
        None => curr_num,
    }
}

/// Rebuild the two language streams of one chapter from its interleaved,
/// verse-numbered text. Returns (english, quenya).
///
/// Each chapter lists a run of Quenya verses first, then the English verses
/// for the same range, with the verse numbers as the only segmentation
/// signal. The Quenya pass consumes spans while the expected verse number
/// keeps climbing; the English pass then rewinds the expected number and
/// catches up to the last verse Quenya reached, never past it. Repeating the
/// two passes walks the whole chapter, however the runs are grouped.
pub fn separate_languages(text: &str) -> (String, String) {
    let elements = split_on_verse_numbers(text);
    let num_elements = elements.len();

    let mut english_string = String::new();
    let mut quenya_string = String::new();
    let mut english_num: u64 = 0;
    let mut quenya_num: u64 = 0;
    let mut curr_num: u64 = 1;
    let mut cursor = 0;

    while cursor < num_elements {
        let round_start = cursor;
        let old_curr_num = curr_num;

        while curr_num > quenya_num && cursor < num_elements {
            quenya_string.push_str(elements[cursor].trim());
            quenya_string.push(' ');
            quenya_num = curr_num;
            curr_num = next_verse_number(&elements, cursor, curr_num);
            cursor += 2;
        }

        curr_num = old_curr_num;
        while curr_num > english_num && curr_num <= quenya_num && cursor < num_elements {
            english_string.push_str(elements[cursor].trim_matches(|c: char| c == '"' || c == ' '));
            english_string.push(' ');
            english_num = curr_num;
            curr_num = next_verse_number(&elements, cursor, curr_num);
            cursor += 2;
        }

        // Verse numbering that runs backwards would leave both passes unable
        // to consume anything; stop instead of spinning.
        if cursor == round_start {
            warn!(
                "verse numbering went backwards at element {}; dropping the rest of the chapter",
                cursor
            );
            break;
        }
    }

    (
        english_string.trim().to_string(),
        quenya_string.trim().to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_digit_runs_as_separate_elements() {
        let elements = split_on_verse_numbers("a 1 b 23 c");
        assert_eq!(elements, vec!["a ", "1", " b ", "23", " c"]);
    }

    #[test]
    fn tokenization_handles_text_without_numbers() {
        assert_eq!(split_on_verse_numbers("no numbers"), vec!["no numbers"]);
    }

    #[test]
    fn separates_a_chapter_with_explicit_verse_one_markers() {
        let text = " 1 Quenya-one. 2 Quenya-two. 1 English-one. 2 English-two.";
        let (english, quenya) = separate_languages(text);
        assert_eq!(quenya, "Quenya-one. Quenya-two.");
        assert_eq!(english, "English-one. English-two.");
    }

    #[test]
    fn separates_a_chapter_whose_first_verse_is_unmarked() {
        // The usual shape after chapter extraction: the heading consumed the
        // chapter number, so verse 1 text starts the block unmarked.
        let text = " Quenya-one. 2 Quenya-two. 1 English-one. 2 English-two.";
        let (english, quenya) = separate_languages(text);
        assert_eq!(quenya, "Quenya-one. Quenya-two.");
        assert_eq!(english, "English-one. English-two.");
    }

    #[test]
    fn english_spans_lose_surrounding_quotes() {
        let text = " 1 Quenya. 1 \"English.\" ";
        let (english, quenya) = separate_languages(text);
        assert_eq!(quenya, "Quenya.");
        assert_eq!(english, "English.");
    }

    #[test]
    fn duplicate_verse_markers_are_recovered() {
        let text = " Quenya-one. 2 Quenya-two. 2 Quenya-three. 1 English-one. 2 English-two. 3 English-three.";
        let (english, quenya) = separate_languages(text);
        assert_eq!(quenya, "Quenya-one. Quenya-two. Quenya-three.");
        assert_eq!(english, "English-one. English-two. English-three.");
    }

    #[test]
    fn alternating_verse_runs_stay_aligned() {
        // Two Quenya/English rounds inside one chapter.
        let text = " Q-one. 2 Q-two. 1 E-one. 2 E-two. 3 Q-three. 4 Q-four. 3 E-three. 4 E-four.";
        let (english, quenya) = separate_languages(text);
        assert_eq!(quenya, "Q-one. Q-two. Q-three. Q-four.");
        assert_eq!(english, "E-one. E-two. E-three. E-four.");
    }

    #[test]
    fn yields_one_concatenation_per_verse() {
        let text = " Qa. 2 Qb. 3 Qc. 1 Ea. 2 Eb. 3 Ec.";
        let (english, quenya) = separate_languages(text);
        assert_eq!(quenya.split(' ').count(), 3);
        assert_eq!(english.split(' ').count(), 3);
    }

    #[test]
    fn stops_when_verse_numbering_goes_backwards() {
        let text = " Qa. 2 Qb. 1 Ea. 2 Eb. 1 Xa. 2 Xb.";
        let (english, quenya) = separate_languages(text);
        assert_eq!(quenya, "Qa. Qb.");
        assert_eq!(english, "Ea. Eb.");
    }

    #[test]
    fn empty_chapter_yields_empty_streams() {
        let (english, quenya) = separate_languages("");
        assert_eq!(english, "");
        assert_eq!(quenya, "");
    }
}
//*** END FILE: src/parsing/verse_aligner.rs ***//
