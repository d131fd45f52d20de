const WORDS_PER_LINE: usize = 8;

/// Shortens long review text for the small preview cards.
///
/// Keeps at most `max_lines * 8` space-separated words and appends `...`
/// when something was cut. Stored content is never truncated.
pub fn truncate_text(text: &str, max_lines: usize) -> String {
    let max_words = max_lines * WORDS_PER_LINE;
    let words: Vec<&str> = text.split(' ').collect();
    if words.len() <= max_words {
        return text.to_string();
    }
    format!("{}...", words[..max_words].join(" "))
}
