/// Split text into words on the ASCII space character.
///
/// Runs of spaces collapse, nothing else is treated as a separator: tabs and
/// newlines stay inside the word they appear in.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(' ')
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}
