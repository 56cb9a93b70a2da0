//! Password generation settings.

mod file;

use crate::pass::Categories;

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub number_of_passwords: usize,
    pub use_uppercase: bool,
    pub use_lowercase: bool,
    pub use_digits: bool,
    pub use_special: bool,
    pub show_password: bool,
    pub to_clipboard: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&file::get_path(), &mut settings)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        file::save(&file::get_path(), self)
    }

    pub fn categories(&self) -> Categories {
        Categories {
            uppercase: self.use_uppercase,
            lowercase: self.use_lowercase,
            digits: self.use_digits,
            special: self.use_special,
        }
    }

    pub fn length_in_range(length: usize) -> bool {
        (MIN_LENGTH..=MAX_LENGTH).contains(&length)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 12,
            number_of_passwords: 1,
            use_uppercase: true,
            use_lowercase: true,
            use_digits: true,
            use_special: true,
            show_password: false,
            to_clipboard: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_every_category() {
        let settings = Settings::default();
        assert_eq!(settings.pass_length, 12);
        assert_eq!(settings.categories(), Categories::default());
    }

    #[test]
    fn length_bounds_are_inclusive() {
        assert!(!Settings::length_in_range(7));
        assert!(Settings::length_in_range(8));
        assert!(Settings::length_in_range(20));
        assert!(!Settings::length_in_range(21));
    }
}
