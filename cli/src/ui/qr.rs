//! QR code rendering for the terminal.

use qrcode::types::QrError;
use qrcode::{Color, QrCode};

/// Quiet zone in modules around the symbol
const QUIET_ZONE: usize = 4;

/// Each text line holds two module rows
const QUIET_LINES: usize = QUIET_ZONE / 2;

/// Render `data` as a QR code made of Unicode half blocks.
///
/// Each character covers two vertically stacked modules, so the symbol
/// keeps roughly square proportions in a terminal.
pub fn render_qr_code(data: &str) -> Result<String, QrError> {
    let code = QrCode::new(data.as_bytes())?;
    let width = code.width();
    let colors = code.to_colors();
    let dark = |x: usize, y: usize| y < width && colors[y * width + x] == Color::Dark;

    let margin = " ".repeat(QUIET_ZONE);
    let blank_line = " ".repeat(width + 2 * QUIET_ZONE);

    let mut out = String::new();
    for _ in 0..QUIET_LINES {
        out.push_str(&blank_line);
        out.push('\n');
    }

    for y in (0..width).step_by(2) {
        out.push_str(&margin);
        for x in 0..width {
            out.push(match (dark(x, y), dark(x, y + 1)) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            });
        }
        out.push_str(&margin);
        out.push('\n');
    }

    for _ in 0..QUIET_LINES {
        out.push_str(&blank_line);
        out.push('\n');
    }
    Ok(out)
}

/// Print a QR code to the terminal.
pub fn print_qr_code(data: &str) {
    match render_qr_code(data) {
        Ok(rendered) => print!("{}", rendered),
        Err(e) => eprintln!("Failed to generate QR code: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_dimensions() {
        let data = "https://wa.me/15551540430";
        let width = QrCode::new(data.as_bytes()).unwrap().width();
        let rendered = render_qr_code(data).unwrap();

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), width.div_ceil(2) + 2 * QUIET_LINES);
        for line in &lines {
            assert_eq!(line.chars().count(), width + 2 * QUIET_ZONE);
        }
        for line in lines.iter().take(QUIET_LINES).chain(lines.iter().rev().take(QUIET_LINES)) {
            assert!(line.trim().is_empty());
        }
    }

    #[test]
    fn test_finder_pattern_top_row() {
        let rendered = render_qr_code("https://wa.me/15551540430").unwrap();
        let first_row = rendered.lines().nth(QUIET_LINES).unwrap();
        // Top two module rows of the finder pattern: full row, then dark edges
        assert!(first_row.starts_with(&" ".repeat(QUIET_ZONE)));
        assert!(first_row[QUIET_ZONE..].starts_with("█▀▀▀▀▀█"));
    }
}
