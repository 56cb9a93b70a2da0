//! Settings file persistence.
//!
//! One line, comma separated:
//! `length,number,uppercase,lowercase,digits,special,show_password`.
//! Only preferences are stored here, never passwords.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{MAX_LENGTH, MIN_LENGTH, Settings};

const FIELD_COUNT: usize = 7;

pub fn save(path: &Path, settings: &Settings) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let data = format!(
        "{},{},{},{},{},{},{}\n",
        settings.pass_length,
        settings.number_of_passwords,
        settings.use_uppercase,
        settings.use_lowercase,
        settings.use_digits,
        settings.use_special,
        settings.show_password,
    );

    file.write_all(data.as_bytes())?;
    debug!(path = %path.display(), "saved settings");
    Ok(())
}

pub fn load(path: &Path, settings: &mut Settings) -> std::io::Result<()> {
    if !path.exists() {
        save(path, settings)?;
        return Ok(());
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let parts: Vec<&str> = line.trim().split(',').collect();

    if parts.len() == FIELD_COUNT {
        settings.pass_length = parts[0]
            .parse::<usize>()
            .unwrap_or(settings.pass_length)
            .clamp(MIN_LENGTH, MAX_LENGTH);
        settings.number_of_passwords = parts[1]
            .parse::<usize>()
            .unwrap_or(settings.number_of_passwords)
            .max(1);
        settings.use_uppercase = parts[2].parse().unwrap_or(settings.use_uppercase);
        settings.use_lowercase = parts[3].parse().unwrap_or(settings.use_lowercase);
        settings.use_digits = parts[4].parse().unwrap_or(settings.use_digits);
        settings.use_special = parts[5].parse().unwrap_or(settings.use_special);
        settings.show_password = parts[6].parse().unwrap_or(settings.show_password);
        debug!(path = %path.display(), "loaded settings");
    } else {
        warn!(
            path = %path.display(),
            fields = parts.len(),
            "malformed settings file, rewriting with defaults"
        );
        save(path, settings)?;
    }

    Ok(())
}

#[inline]
pub fn get_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/strongpass/settings")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_restores_preferences() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strongpass/settings");

        let saved = Settings {
            pass_length: 16,
            number_of_passwords: 3,
            use_digits: false,
            show_password: true,
            ..Settings::default()
        };
        save(&path, &saved).unwrap();

        let mut loaded = Settings::default();
        load(&path, &mut loaded).unwrap();
        assert_eq!(loaded, saved);
    }

    #[test]
    fn missing_file_is_created_with_current_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");

        let mut settings = Settings::default();
        load(&path, &mut settings).unwrap();

        assert!(path.exists());
        assert_eq!(settings, Settings::default());
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "12,1,true,true,true,true,false\n");
    }

    #[test]
    fn out_of_range_length_is_clamped_and_bad_fields_keep_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        std::fs::write(&path, "99,0,nope,false,true,true,false\n").unwrap();

        let mut settings = Settings::default();
        load(&path, &mut settings).unwrap();

        assert_eq!(settings.pass_length, MAX_LENGTH);
        assert_eq!(settings.number_of_passwords, 1);
        assert!(settings.use_uppercase);
        assert!(!settings.use_lowercase);
    }

    #[test]
    fn malformed_file_is_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        std::fs::write(&path, "garbage\n").unwrap();

        let mut settings = Settings::default();
        load(&path, &mut settings).unwrap();

        assert_eq!(settings, Settings::default());
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "12,1,true,true,true,true,false\n");
    }
}
