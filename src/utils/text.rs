/// First `max_chars` characters of `text` followed by " . . ." (char boundaries respected)
pub fn preview(text: &str, max_chars: usize) -> String {
    let head: String = text.chars().take(max_chars).collect();
    format!("{} . . .", head)
}
