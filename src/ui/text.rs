/// Text helpers shared by the views

/// Ellipsis appended to clamped text
const ELLIPSIS: char = '…';

/// Clamp text to roughly `max_lines` lines of `line_chars` characters.
///
/// iced has no max-lines option, so the grid approximates one from the
/// cell width. Whitespace is collapsed; long text is cut at a word
/// boundary where possible and ends with an ellipsis.
pub fn clamp_lines(text: &str, line_chars: usize, max_lines: usize) -> String {
    let budget = line_chars * max_lines;
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= budget {
        return collapsed;
    }
    if budget == 0 {
        return String::new();
    }

    // Leave room for the ellipsis
    let cut: String = collapsed.chars().take(budget - 1).collect();
    let trimmed = match cut.rfind(' ') {
        Some(space) if space > 0 => &cut[..space],
        _ => cut.as_str(),
    };

    let mut clamped = trimmed.trim_end_matches([',', '.', ' ']).to_string();
    clamped.push(ELLIPSIS);
    clamped
}
