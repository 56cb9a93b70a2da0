//! CLI context - bundles settings, flags, and the session used for output.

use std::io::{BufRead, Write};

use clap::Parser;
use tracing::{debug, info};
use zeroize::Zeroize;

use super::{CliFlags, prompts, quiet};
use crate::error::CliError;
use crate::pass::{self, Password};
use crate::session::Session;
use crate::settings::Settings;
use crate::tui::{print_help, print_report};

/// Application context for CLI mode.
pub struct Context {
    session: Session,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    pub fn new(args: Vec<String>) -> Result<Self, clap::Error> {
        let flags = CliFlags::try_parse_from(args)?;

        let base = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        } else {
            Settings::default()
        };

        Ok(Self::with_settings(flags, base))
    }

    pub fn with_settings(flags: CliFlags, base: Settings) -> Self {
        let mut ctx = Self {
            session: Session::new(base),
            flags,
        };
        ctx.apply_flags();
        ctx
    }

    pub fn settings(&self) -> &Settings {
        &self.session.settings
    }

    /// Run CLI: print info, score a password, or generate.
    pub fn run(&mut self) -> Result<(), CliError> {
        quiet::set(self.flags.quiet);

        if self.flags.help {
            print_help();
            return Ok(());
        }
        if self.flags.version {
            println!("strongpass {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }

        match self.flags.evaluate.take() {
            Some(value) => self.evaluate(value),
            None => self.generate_output(),
        }
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) {
        let settings = &mut self.session.settings;

        if let Some(len) = self.flags.length {
            settings.pass_length = len;
        }
        if let Some(num) = self.flags.number {
            settings.number_of_passwords = num;
        }

        // --no-* only ever turn categories off
        if self.flags.no_uppercase {
            settings.use_uppercase = false;
        }
        if self.flags.no_lowercase {
            settings.use_lowercase = false;
        }
        if self.flags.no_digits {
            settings.use_digits = false;
        }
        if self.flags.no_special {
            settings.use_special = false;
        }

        settings.to_clipboard = self.flags.clipboard;
    }

    fn evaluate(&mut self, value: Option<String>) -> Result<(), CliError> {
        if value.is_none() {
            prompts::evaluate_prompt();
        }
        let mut password = password_input(value, std::io::stdin().lock())?;

        let report = self.session.evaluate(&password);
        password.zeroize();
        debug!(score = report.score, "scored password");

        if quiet::enabled() {
            println!("{}/{} {}", report.score, pass::strength::MAX_SCORE, report.verdict.label());
        } else {
            print_report(&report);
        }
        Ok(())
    }

    /// Generate passwords and handle output.
    fn generate_output(&mut self) -> Result<(), CliError> {
        let settings = self.session.settings.clone();
        let count = settings.number_of_passwords.max(1);
        let passwords =
            pass::generate_batch(count, settings.pass_length, &settings.categories())?;
        info!(count, length = settings.pass_length, "generated passwords");

        if settings.to_clipboard {
            let mut joined = join_lines(&passwords);
            let copied = self.session.copy_to_clipboard(&joined);
            match copied {
                Ok(()) => {
                    joined.zeroize();
                    prompts::clipboard_copied(count);
                    return Ok(());
                }
                Err(e) => {
                    joined.zeroize();
                    if !prompts::clipboard_fallback_prompt() {
                        return Err(CliError::Clipboard(e));
                    }
                }
            }
        }

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for password in &passwords {
            writeln!(out, "{password}")?;
        }
        out.flush()?;
        Ok(())
    }
}

/// The password given on the command line, or one line read from `input`.
fn password_input(value: Option<String>, mut input: impl BufRead) -> std::io::Result<String> {
    if let Some(password) = value {
        return Ok(password);
    }
    let mut password = String::new();
    input.read_line(&mut password)?;
    let trimmed = password.trim_end_matches(['\n', '\r']).len();
    password.truncate(trimmed);
    Ok(password)
}

fn join_lines(passwords: &[Password]) -> String {
    let mut joined = String::new();
    for (i, password) in passwords.iter().enumerate() {
        if i > 0 {
            joined.push('\n');
        }
        joined.push_str(password.as_str());
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(args: &[&str], base: Settings) -> Context {
        let flags =
            CliFlags::try_parse_from(std::iter::once("strongpass").chain(args.iter().copied()))
                .unwrap();
        Context::with_settings(flags, base)
    }

    #[test]
    fn flags_override_base_settings() {
        let ctx = context(
            &["-l", "18", "-n", "4", "--no-uppercase", "-b"],
            Settings::default(),
        );
        let settings = ctx.settings();
        assert_eq!(settings.pass_length, 18);
        assert_eq!(settings.number_of_passwords, 4);
        assert!(!settings.use_uppercase);
        assert!(settings.use_lowercase && settings.use_digits && settings.use_special);
        assert!(settings.to_clipboard);
    }

    #[test]
    fn unset_flags_keep_saved_values() {
        let saved = Settings {
            pass_length: 9,
            use_special: false,
            ..Settings::default()
        };
        let ctx = context(&["-s"], saved.clone());
        assert_eq!(ctx.settings().pass_length, 9);
        assert!(!ctx.settings().use_special);
    }

    #[test]
    fn all_categories_off_surfaces_generate_error() {
        let mut ctx = context(
            &[
                "-q",
                "--no-uppercase",
                "--no-lowercase",
                "--no-digits",
                "--no-special",
            ],
            Settings::default(),
        );
        let err = ctx.run().unwrap_err();
        assert!(matches!(err, CliError::Generate(_)));
        assert_eq!(err.to_string(), "no character categories selected");
    }

    #[test]
    fn empty_evaluate_value_is_scored_without_reading_input() {
        let ctx = context(&["-e", ""], Settings::default());
        let value = ctx.flags.evaluate.clone().unwrap();
        // a reader that would hand back a different password if consulted
        let password = password_input(value, "Abcdefg1!\n".as_bytes()).unwrap();
        assert_eq!(password, "");
        assert_eq!(ctx.session.evaluate(&password).score, 0);
    }

    #[test]
    fn missing_evaluate_value_reads_one_line() {
        let password = password_input(None, "Abcdefgh1\r\nnext\n".as_bytes()).unwrap();
        assert_eq!(password, "Abcdefgh1");
        let password = password_input(None, "".as_bytes()).unwrap();
        assert_eq!(password, "");
    }

    #[test]
    fn join_lines_separates_with_newlines() {
        let passwords = vec![Password::from("one"), Password::from("two")];
        assert_eq!(join_lines(&passwords), "one\ntwo");
        assert_eq!(join_lines(&[]), "");
    }
}
