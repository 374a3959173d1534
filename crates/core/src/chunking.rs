pub const PREVIEW_MARKER: &str = "...";

pub fn split_into_chunks(text: &str, chunk_size: usize) -> Vec<String> {
    if chunk_size == 0 {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(chunk_size)
        .map(|piece| piece.iter().collect())
        .collect()
}

// The marker is appended even when nothing was cut off.
pub fn preview_snippet(text: &str, limit: usize) -> String {
    let mut preview: String = text.chars().take(limit).collect();
    preview.push_str(PREVIEW_MARKER);
    preview
}
