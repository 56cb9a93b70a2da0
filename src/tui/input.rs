use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// What a key press did to the line being edited.
#[derive(Debug, PartialEq, Eq)]
enum Edit {
    Continue,
    Submit,
    Cancel,
    Interrupt,
}

/// Single-line editor state. Cursor is a char index into `chars`.
#[derive(Debug, Default)]
struct LineEditor {
    chars: Vec<char>,
    cursor: usize,
}

impl LineEditor {
    fn new(initial: &str) -> Self {
        let chars: Vec<char> = initial.chars().collect();
        let cursor = chars.len();
        Self { chars, cursor }
    }

    fn apply(&mut self, key: KeyEvent, accept: impl Fn(char) -> bool) -> Edit {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => return Edit::Interrupt,
            KeyCode::Char('q') if ctrl => return Edit::Cancel,
            KeyCode::Char('u') if ctrl => {
                self.chars.clear();
                self.cursor = 0;
            }
            KeyCode::Esc => return Edit::Cancel,
            KeyCode::Enter => return Edit::Submit,
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.chars.remove(self.cursor);
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.chars.len() {
                    self.chars.remove(self.cursor);
                }
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.chars.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.chars.len(),
            KeyCode::Char(c) if !ctrl && accept(c) => {
                self.chars.insert(self.cursor, c);
                self.cursor += 1;
            }
            _ => {}
        }
        Edit::Continue
    }

    fn render(&self, masked: bool) -> String {
        if masked {
            "*".repeat(self.chars.len())
        } else {
            self.chars.iter().collect()
        }
    }

    fn take(&mut self) -> String {
        let s: String = self.chars.iter().collect();
        // wipe the edit buffer, it may hold a password
        self.chars.iter_mut().for_each(|c| *c = '\0');
        self.chars.clear();
        s
    }
}

fn read_line(
    prompt: &str,
    initial_value: &str,
    masked: bool,
    accept: impl Fn(char) -> bool,
) -> Option<String> {
    let mut editor = LineEditor::new(initial_value);

    // RawModeGuard ensures raw mode is disabled even if we panic or return early
    let mut guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(initial_value.to_string()),
    };

    print!("{}: {}", prompt, editor.render(masked));
    flush();
    let mut last_len = editor.chars.len();

    let outcome = loop {
        match read() {
            Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                match editor.apply(key, &accept) {
                    Edit::Continue => {}
                    done => break done,
                }

                // Redraw the input line, then place the cursor
                print!("\r{}: {}", prompt, " ".repeat(last_len + 1));
                print!("\r{}: {}", prompt, editor.render(masked));
                print!("\x1b[{}G", prompt.chars().count() + 3 + editor.cursor);
                flush();
                last_len = editor.chars.len();
            }
            Ok(_) => {}
            Err(_) => break Edit::Submit,
        }
    };

    // Disable raw mode BEFORE println
    guard.release();
    println!();

    match outcome {
        Edit::Interrupt => {
            // process::exit skips destructors
            editor.take();
            reset_terminal();
            std::process::exit(0);
        }
        Edit::Cancel => {
            editor.take();
            None
        }
        _ => Some(editor.take()),
    }
}

/// Read a line of free text. `None` when cancelled with Esc or CTRL+Q.
pub fn get_editable_input(prompt: &str, initial_value: &str) -> Option<String> {
    read_line(prompt, initial_value, false, |_| true)
}

/// Read a password, echoing `*` per character when `masked`.
pub fn get_password_input(prompt: &str, masked: bool) -> Option<String> {
    read_line(prompt, "", masked, |_| true)
}

/// Read an unsigned number. Empty input keeps `initial_value`.
pub fn get_numeric_input(prompt: &str, initial_value: usize) -> Option<usize> {
    let digits = read_line(prompt, &initial_value.to_string(), false, |c| {
        c.is_ascii_digit()
    })?;
    if digits.is_empty() {
        Some(initial_value)
    } else {
        digits.parse().ok()
    }
}
