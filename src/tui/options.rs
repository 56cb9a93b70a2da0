use tracing::warn;
use zeroize::Zeroize;

use crate::session::Session;
use crate::settings::Settings;
use crate::terminal::{clear, print_error, print_success, reset_terminal};

use super::{
    enter_prompt, get_editable_input, get_numeric_input, get_password_input, print_generated,
    print_help, print_history_menu, print_main_menu, print_report, print_settings_menu,
};

use LoopAction::*;
pub enum LoopAction {
    Break,
    Continue,
}

pub fn gen_main_menu() {
    reset_terminal();
    clear();

    let settings = Settings::load_from_file().unwrap_or_else(|e| {
        warn!(error = %e, "failed to load settings");
        println!("Error loading settings: {}", e);
        Settings::default()
    });
    let mut session = Session::new(settings);

    let mut print_invalid = false;

    loop {
        print_main_menu(session.history().len(), &mut print_invalid);

        let input = match get_editable_input(enter_prompt(), "") {
            Some(s) => s,
            None => {
                clear();
                continue;
            }
        };

        match input.trim() {
            "" => {
                clear();
                generate(&mut session);
            }
            "1" => {
                update_settings(&mut session.settings);
                clear();
            }
            "2" => {
                clear();
                check_strength(&session);
            }
            "3" => {
                history_menu(&mut session);
                clear();
            }
            "4" => {
                clear();
                match session.copy_last_to_clipboard() {
                    Ok(()) => print_success("*** -COPIED TO CLIPBOARD- ***"),
                    Err(e) => print_error(&format!("Clipboard error: {e}")),
                }
                println!();
            }
            "5" => {
                clear();
                print_help();
            }
            "6" => {
                clear();
                break;
            }
            _ => {
                clear();
                print_invalid = true;
            }
        }
    }
}

fn generate(session: &mut Session) {
    match session.generate().cloned() {
        Ok(password) => {
            print_generated(&password, &session.settings);
            print_success("Password generated successfully!");
        }
        Err(e) => {
            print_error(&format!("Cannot generate: {e}. Enable at least one in settings."));
        }
    }
    println!();
}

fn check_strength(session: &Session) {
    let masked = !session.settings.show_password;
    let Some(mut password) = get_password_input("Enter your password", masked) else {
        clear();
        return;
    };

    clear();
    if password.is_empty() {
        print_error("Nothing entered.");
        println!();
        return;
    }

    let report = session.evaluate(&password);
    password.zeroize();
    print_report(&report);
    println!();
}

pub fn update_settings(settings: &mut Settings) {
    let (mut print_error, mut error_txt) = (0, String::new());

    loop {
        print_settings_menu(settings, print_error, &error_txt);
        print_error = 0;

        let choice = match get_editable_input(enter_prompt(), "") {
            Some(s) => s,
            None => break, // ESC pressed - return to main menu
        };
        let choice = choice.trim();

        let action = match choice.parse::<i32>() {
            Ok(num) => menu_options(num, &mut print_error, settings),
            Err(_) => command_options(choice, &mut print_error, &mut error_txt, settings),
        };
        if let Break = action {
            break;
        }
    }
}

fn toggle(print_error: &mut i32, current: bool) -> bool {
    let new_bool = match get_editable_input("Enter 't' or 'f'", "") {
        Some(s) => s,
        None => return current,
    };
    match new_bool.trim() {
        "" => current,
        "t" => true,
        "f" => false,
        _ => {
            *print_error = 2;
            current
        }
    }
}

fn menu_options(choice: i32, print_error: &mut i32, settings: &mut Settings) -> LoopAction {
    match choice {
        1 => {
            if let Some(len) = get_numeric_input("Enter new password length", settings.pass_length)
            {
                if Settings::length_in_range(len) {
                    settings.pass_length = len;
                } else {
                    *print_error = 1;
                }
            }
        }
        2 => {
            // 't' hides, matching the label
            settings.show_password = !toggle(print_error, !settings.show_password);
        }
        3 => settings.use_uppercase = toggle(print_error, settings.use_uppercase),
        4 => settings.use_lowercase = toggle(print_error, settings.use_lowercase),
        5 => settings.use_digits = toggle(print_error, settings.use_digits),
        6 => settings.use_special = toggle(print_error, settings.use_special),
        _ => *print_error = 998,
    }
    Continue
}

fn command_options(
    choice: &str,
    print_error: &mut i32,
    error_txt: &mut String,
    settings: &mut Settings,
) -> LoopAction {
    if choice.is_empty() {
        return Break;
    }

    if choice == "help" {
        clear();
        print_help();
        return Break;
    }

    for ch in choice.chars() {
        match ch {
            's' => {
                if let Err(e) = settings.save_to_file() {
                    *print_error = 999;
                    *error_txt = format!("Error saving settings: {}", e);
                }
            }
            'e' => return Break,
            'r' => *settings = Settings::default(),
            'f' => match Settings::load_from_file() {
                Ok(s) => *settings = s,
                Err(e) => {
                    *print_error = 999;
                    *error_txt = format!("Error loading settings: {}", e);
                }
            },
            _ => {
                *print_error = 998;
                return Continue;
            }
        }
    }
    Continue
}

fn history_menu(session: &mut Session) {
    let (mut print_error, mut message) = (0, String::new());

    loop {
        print_history_menu(session.history(), print_error, &message);
        print_error = 0;
        message.clear();

        let choice = match get_editable_input("Enter option", "") {
            Some(s) => s,
            None => break,
        };
        let choice = choice.trim();
        if choice.is_empty() || choice == "e" {
            break;
        }

        let mut chars = choice.chars();
        let command = chars.next();
        let entry = chars
            .as_str()
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .filter(|&i| i < session.history().len());

        match (command, entry) {
            (Some('d'), Some(i)) => {
                if let Some(password) = session.history().get(i).cloned() {
                    session.history_mut().remove(password.as_str());
                }
                print_error = 2;
                message = format!("Deleted entry {}.", i + 1);
            }
            (Some('c'), Some(i)) => {
                let Some(password) = session.history().get(i).cloned() else {
                    continue;
                };
                match session.copy_to_clipboard(password.as_str()) {
                    Ok(()) => {
                        print_error = 2;
                        message = format!("Copied entry {} to clipboard.", i + 1);
                    }
                    Err(e) => {
                        print_error = 1;
                        message = format!("Clipboard error: {e}");
                    }
                }
            }
            _ => {
                print_error = 1;
                message = "Invalid selection, use d<N> or c<N>.".to_string();
            }
        }
    }
}
