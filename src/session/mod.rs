//! Per-session state: settings in effect, last password, history, clipboard.

pub mod history;

use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::{info, warn};
use zeroize::Zeroize;

pub use history::History;

use crate::error::GenerateError;
use crate::pass::{self, Password, StrengthReport};
use crate::settings::Settings;

/// Everything one interactive session owns. Sessions never share state.
pub struct Session {
    pub settings: Settings,
    last: Option<Password>,
    history: History,
    clipboard: Option<ClipboardContext>,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            last: None,
            history: History::new(),
            clipboard: None,
        }
    }

    /// Generate with the current settings, remember it and record it in history.
    pub fn generate(&mut self) -> Result<&Password, GenerateError> {
        let password = pass::generate(self.settings.pass_length, &self.settings.categories())?;
        self.history.record(&password);
        info!(
            length = password.len(),
            history = self.history.len(),
            "password generated"
        );
        Ok(&*self.last.insert(password))
    }

    pub fn evaluate(&self, password: &str) -> StrengthReport {
        pass::evaluate(password)
    }

    pub fn last(&self) -> Option<&Password> {
        self.last.as_ref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn copy_last_to_clipboard(&mut self) -> Result<(), String> {
        let Some(last) = self.last.clone() else {
            return Err("No password generated yet.".to_string());
        };
        self.copy_to_clipboard(last.as_str())
    }

    /// Copy `text` and wipe the read-back the clipboard hands us.
    pub fn copy_to_clipboard(&mut self, text: &str) -> Result<(), String> {
        if self.clipboard.is_none() {
            let ctx = ClipboardContext::new().map_err(|e| {
                warn!(error = %e, "clipboard unavailable");
                e.to_string()
            })?;
            self.clipboard = Some(ctx);
        }
        let Some(ctx) = self.clipboard.as_mut() else {
            return Err("Clipboard unavailable".to_string());
        };

        ctx.set_contents(text.to_string()).map_err(|e| {
            warn!(error = %e, "clipboard write failed");
            e.to_string()
        })?;
        if let Ok(mut retrieved) = ctx.get_contents() {
            retrieved.zeroize();
        }
        Ok(())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.history.clear();
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_records_into_history() {
        let mut session = Session::new(Settings::default());
        let first = session.generate().unwrap().clone();
        assert_eq!(first.len(), 12);
        assert_eq!(session.last(), Some(&first));
        assert!(session.history().contains(&first));
    }

    #[test]
    fn history_is_bounded_across_generations() {
        let mut session = Session::new(Settings::default());
        let mut generated = Vec::new();
        for _ in 0..5 {
            generated.push(session.generate().unwrap().clone());
        }
        let listed: Vec<_> = session.history().list().cloned().collect();
        assert_eq!(listed, generated[2..].to_vec());
    }

    #[test]
    fn empty_categories_fail_and_leave_state_untouched() {
        let settings = Settings {
            use_uppercase: false,
            use_lowercase: false,
            use_digits: false,
            use_special: false,
            ..Settings::default()
        };
        let mut session = Session::new(settings);
        assert_eq!(
            session.generate().unwrap_err(),
            GenerateError::EmptyCategoryPool
        );
        assert!(session.last().is_none());
        assert!(session.history().is_empty());
    }

    #[test]
    fn sessions_are_isolated() {
        let mut a = Session::new(Settings::default());
        let b = Session::new(Settings::default());
        a.generate().unwrap();
        assert_eq!(a.history().len(), 1);
        assert!(b.history().is_empty());
    }

    #[test]
    fn copy_without_password_is_an_error() {
        let mut session = Session::new(Settings::default());
        assert!(session.copy_last_to_clipboard().is_err());
    }

    #[test]
    fn evaluate_delegates_to_scorer() {
        let session = Session::new(Settings::default());
        assert_eq!(session.evaluate("Abcdefg1!").score, 5);
    }
}
