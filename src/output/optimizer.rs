//! Resume reformatting into a bulleted layout

pub const SUMMARY_HEADER: &str = "SUMMARY\nResults-driven professional with measurable achievements.\n";

const BULLET: char = '-';

/// Line boundaries recognised when splitting resume text
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Prefix every non-empty trimmed line with a bullet and prepend the summary header
pub fn optimize_resume(resume_text: &str) -> String {
    let bulletized: Vec<String> = resume_text
        .split(is_line_boundary)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            if line.starts_with(BULLET) {
                line.to_string()
            } else {
                format!("{} {}", BULLET, line)
            }
        })
        .collect();

    format!("{}{}", SUMMARY_HEADER, bulletized.join("\n"))
}
