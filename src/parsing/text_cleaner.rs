//*** START FILE: src/parsing/text_cleaner.rs ***//
use regex::Regex;

/// Remove all content within square brackets, including one level of nested
/// brackets and bracketed spans that cross line breaks. Unmatched brackets
/// are left untouched.
///
/// Each pass removes every balanced span the pattern can see; repeating the
/// pass peels off outer spans whose inner spans were removed first. The loop
/// terminates because every replacement strictly shrinks the text.
pub fn remove_bracketed_content(text: &str) -> String {
    let bracket_re = Regex::new(r"\[([^\[\]]|\[[^\[\]]*\])*\]").unwrap();
    let mut cleaned = text.to_string();
    while bracket_re.is_match(&cleaned) {
        cleaned = bracket_re.replace_all(&cleaned, "").into_owned();
    }
    cleaned
}

/// Replace every line break with a single space. Run this after bracket
/// removal so multi-line bracketed spans are still intact when matched.
pub fn collapse_line_breaks(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

//*** END FILE: src/parsing/text_cleaner.rs ***//
