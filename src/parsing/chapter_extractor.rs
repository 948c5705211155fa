//*** START FILE: src/parsing/chapter_extractor.rs ***//
use log::{info, warn};
use regex::Regex;

/// Drop any front matter before the first chapter heading. Both the Quenya
/// heading (RANTA) and the English heading (CHAPTER) are recognized,
/// case-insensitively. If neither appears, the text passes through unchanged
/// so downstream stages still see the whole document.
pub fn find_chapter_start(text: &str) -> String {
    let marker_re = Regex::new(r"(?i)RANTA|CHAPTER").unwrap();
    match marker_re.find(text) {
        Some(m) => text[m.start()..].to_string(),
        None => {
            warn!("no chapter marker found; keeping the whole text unsegmented");
            text.to_string()
        }
    }
}

/// Split the text into per-chapter blocks at `RANTA <n>` headings. Each block
/// is the text following its heading, up to the next heading; blocks that are
/// only whitespace are dropped. Any `CHAPTER <n>` heading remaining inside a
/// block marks where the English half of a chapter begins, so it is rewritten
/// to the verse marker "1 ".
// TODO: the rewrite emits "1 " even when the matched heading number is not 1;
// confirm against the source documents whether that number is ever needed.
pub fn extract_chapters(text: &str) -> Vec<String> {
    let chapter_re = Regex::new(r"RANTA (\d+)").unwrap();
    let english_heading_re = Regex::new(r"\bCHAPTER\s+\d+").unwrap();

    let mut segments: Vec<&str> = Vec::new();
    let mut last_end = 0;
    for caps in chapter_re.captures_iter(text) {
        let heading = caps.get(0).unwrap();
        info!("chapter {}", &caps[1]);
        segments.push(&text[last_end..heading.start()]);
        last_end = heading.end();
    }
    segments.push(&text[last_end..]);

    segments
        .into_iter()
        .filter(|segment| !segment.trim().is_empty())
        .map(|segment| english_heading_re.replace_all(segment, "1 ").into_owned())
        .collect()
}

//*** END FILE: src/parsing/chapter_extractor.rs ***//
