//! Terminal output utilities.
//!
//! Box drawing, strength meter, ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const BOLD: &str = "\x1b[1m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[38;5;11m";
pub const GREEN: &str = "\x1b[38;5;10m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("\x1b[0m");
    flush();
}

// ============================================================================
// Styled Output Helpers
// ============================================================================

/// Print error message in red.
pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

/// Print success message in green.
pub fn print_success(msg: &str) {
    println!("{GREEN}{msg}{RESET}");
}

/// Print a horizontal rule (box style).
pub fn print_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let padding = inner_width - display_len;
        println!("│ {}{} │", content, " ".repeat(padding));
    } else {
        println!("│ {} │", content);
    }
}

/// Print centered box content line: │          content          │
pub fn box_line_center(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let total_padding = inner_width - display_len;
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        println!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        );
    } else {
        println!("│ {} │", content);
    }
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Print a help option with flag and description, auto-wrapping if needed.
pub fn box_opt(flag: &str, desc: &str) {
    let inner_width = BOX_WIDTH - 4;
    let flag_col = 27;
    let desc_col = inner_width - flag_col;

    let flag_padded = if flag.len() < flag_col {
        format!("{}{}", flag, " ".repeat(flag_col - flag.len()))
    } else {
        flag[..flag_col].to_string()
    };

    let lines = wrap_words(desc, desc_col);

    if let Some(first) = lines.first() {
        let padding = desc_col.saturating_sub(first.len());
        println!("│ {}{}{} │", flag_padded, first, " ".repeat(padding));
    } else {
        println!("│ {}{} │", flag_padded, " ".repeat(desc_col));
    }

    let indent = " ".repeat(flag_col);
    for line in lines.iter().skip(1) {
        let padding = desc_col.saturating_sub(line.len());
        println!("│ {}{}{} │", indent, line, " ".repeat(padding));
    }
}

/// Print a bulleted entry, wrapping long text under the bullet.
pub fn box_bullet(bullet: &str, text: &str) {
    let inner_width = BOX_WIDTH - 4;
    let bullet_col = console_width(bullet) + 1;
    let lines = wrap_words(text, inner_width - bullet_col);

    for (i, line) in lines.iter().enumerate() {
        if i == 0 {
            box_line(&format!("{bullet} {line}"));
        } else {
            box_line(&format!("{}{line}", " ".repeat(bullet_col)));
        }
    }
}

/// Greedy word wrap at `width` columns.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(current_line);
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }
    lines
}

/// Calculate display width accounting for ANSI escape codes.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Strength Meter
// ============================================================================

/// Render a meter inside a box with centered text (3 lines).
/// `fraction` is clamped to [0, 1].
pub fn meter_box(fraction: f32, text: &str, color: &str) {
    let inner_width = BOX_WIDTH - 2;
    let filled = meter_fill(fraction, inner_width);

    let text_chars: Vec<char> = text.chars().collect();
    let padding = inner_width.saturating_sub(text_chars.len()) / 2;

    let mut content: Vec<char> = vec![' '; inner_width];
    for (i, ch) in text_chars.iter().enumerate() {
        if padding + i < inner_width {
            content[padding + i] = *ch;
        }
    }

    // Top border
    if filled > 0 {
        print!("{color}▗{}{RESET}", "▄".repeat(filled));
    } else {
        print!("┌");
    }
    if filled < inner_width {
        println!("{}┐", "─".repeat(inner_width - filled));
    } else {
        println!("{color}▖{RESET}");
    }

    // Middle
    if filled > 0 {
        let filled_str: String = content[..filled].iter().collect();
        print!("{color}▐\x1b[7m{filled_str}{RESET}");
    } else {
        print!("│");
    }
    if filled < inner_width {
        let unfilled_str: String = content[filled..].iter().collect();
        println!("{unfilled_str}│");
    } else {
        println!("{color}▌{RESET}");
    }

    // Bottom border
    if filled > 0 {
        print!("{color}▝{}{RESET}", "▀".repeat(filled));
    } else {
        print!("└");
    }
    if filled < inner_width {
        println!("{}┘", "─".repeat(inner_width - filled));
    } else {
        println!("{color}▘{RESET}");
    }

    flush();
}

fn meter_fill(fraction: f32, inner_width: usize) -> usize {
    if fraction >= 1.0 {
        inner_width
    } else if fraction <= 0.0 {
        0
    } else {
        (fraction * inner_width as f32) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_width_skips_ansi_sequences() {
        assert_eq!(console_width("plain"), 5);
        assert_eq!(console_width(&format!("{RED}red{RESET}")), 3);
        assert_eq!(console_width(&format!("{UNDERLINE}General{RESET}:")), 8);
    }

    #[test]
    fn wrap_words_respects_width() {
        let lines = wrap_words("Add symbols like @, #, $, etc.", 12);
        assert_eq!(lines, vec!["Add symbols", "like @, #,", "$, etc."]);
        assert!(wrap_words("   ", 10).is_empty());
    }

    #[test]
    fn meter_fill_is_clamped() {
        assert_eq!(meter_fill(-0.5, 72), 0);
        assert_eq!(meter_fill(0.0, 72), 0);
        assert_eq!(meter_fill(0.4, 70), 28);
        assert_eq!(meter_fill(1.0, 72), 72);
        assert_eq!(meter_fill(3.0, 72), 72);
    }
}
