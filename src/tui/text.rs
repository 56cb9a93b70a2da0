use crate::pass::strength::MAX_SCORE;
use crate::pass::{Password, StrengthReport, Verdict, charset};
use crate::session::History;
use crate::session::history::CAPACITY;
use crate::settings::{MAX_LENGTH, MIN_LENGTH, Settings};
use crate::terminal::{
    BOLD, GREEN, RED, RESET, UNDERLINE, YELLOW, box_bottom, box_bullet, box_line,
    box_line_center, box_opt, box_top, flush, meter_box, print_error, print_rule,
};

pub fn enter_prompt() -> &'static str {
    "Enter menu option (or press Enter to generate a password)"
}

pub fn print_help() {
    box_top("Strongpass");
    box_line_center("Password generator and strength checker");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments. Opens a menu to generate");
    box_line("     passwords, check strength and manage this session's history.");
    box_line("  2) Client: Pass flags directly (e.g., -l 16 --no-special) to");
    box_line("     generate, or -e to check a password, without the menu.");
    box_line("");
    box_line("USAGE:");
    box_line("  strongpass [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt(
        "  -l, --length <N>",
        &format!("Characters per password, {MIN_LENGTH} to {MAX_LENGTH} (default: 12)"),
    );
    box_opt("  -n, --number <N>", "How many passwords to generate");
    box_opt("      --no-uppercase", "Leave out uppercase letters");
    box_opt("      --no-lowercase", "Leave out lowercase letters");
    box_opt("      --no-digits", "Leave out digits");
    box_opt("      --no-special", "Leave out special characters");
    box_line("");
    box_line(" Strength:");
    box_opt(
        "  -e, --evaluate [PASS]",
        "Score a password instead of generating. Reads stdin if PASS is omitted.",
    );
    box_line("");
    box_line(" Output:");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Suppress all output except passwords");
    box_opt("  -s, --saved", "Start from saved settings instead of defaults");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display help");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  strongpass                     Interactive menu");
    box_line("  strongpass -l 16               One password, 16 characters");
    box_line("  strongpass -n 3 --no-special   Three alphanumeric passwords");
    box_line("  strongpass -e 'Abcdefg1!'      Check a password's strength");
    box_line("");
    box_bottom();
    println!();
}

pub fn print_main_menu(session_passwords: usize, print_invalid: &mut bool) {
    box_top("Main Menu");
    box_line("");
    box_line("  1) settings");
    box_line("  2) check password strength");
    box_line(&format!("  3) history ({session_passwords}/{CAPACITY})"));
    box_line("  4) copy last password to clipboard");
    box_line("  5) help");
    box_line("  6) quit");
    box_line("");
    box_bottom();

    // Error message (or blank line if no error)
    if *print_invalid {
        print_error("Invalid option.");
        *print_invalid = false;
    } else {
        println!();
    }
    flush();
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

pub fn print_settings_menu(settings: &Settings, print_error_code: i32, error_txt: &str) {
    crate::terminal::clear();
    box_top("Settings Menu");
    box_line_center("Esc/CTRL+Q: cancel | CTRL+U: clear input");
    box_line("");

    box_line(&format!("{UNDERLINE}General{RESET}:"));
    box_line(&format!("  1) Password Length: {}", settings.pass_length));
    box_line(&format!(
        "  2) Hide Password While Typing: {}",
        on_off(!settings.show_password)
    ));

    box_line("");
    box_line(&format!("{UNDERLINE}Character Categories{RESET}:"));
    box_line(&format!("  3) Uppercase (A-Z): {}", on_off(settings.use_uppercase)));
    box_line(&format!("  4) Lowercase (a-z): {}", on_off(settings.use_lowercase)));
    box_line(&format!("  5) Digits (0-9): {}", on_off(settings.use_digits)));
    box_line(&format!("  6) Special (!@#...): {}", on_off(settings.use_special)));
    box_line(&format!(
        "      - Pool size: {} characters",
        charset::size(&settings.categories())
    ));

    box_line("");
    print_rule();
    box_line("     r) load defaults  |  f) load saved  |  s) save  |  e) exit");
    box_bottom();

    // Error messages (or blank line if no error)
    match print_error_code {
        1 => print_error(&format!(
            "Invalid input, please enter a length from {MIN_LENGTH} to {MAX_LENGTH}..."
        )),
        2 => print_error("Invalid input, please enter 't' or 'f'..."),
        998 => print_error("Invalid input, please enter a valid menu option..."),
        999 => print_error(error_txt),
        _ => println!(),
    }
    flush();
}

pub fn print_generated(password: &Password, settings: &Settings) {
    let pool = charset::size(&settings.categories());
    let bits = charset::entropy_bits(password.len(), pool);

    box_top("Generated Password");
    box_line("");
    box_line_center(&format!("{BOLD}{password}{RESET}"));
    box_line("");
    box_line(&format!(
        "  Length: {}  |  Pool: {} chars  |  Entropy: {:.1} bits ({})",
        password.len(),
        pool,
        bits,
        charset::entropy_rating(bits)
    ));
    box_bottom();
}

pub fn verdict_color(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Weak => RED,
        Verdict::Improvable => YELLOW,
        Verdict::VeryStrong => GREEN,
    }
}

pub fn print_report(report: &StrengthReport) {
    let color = verdict_color(report.verdict);

    box_top("Password Strength");
    box_line_center(&format!("{color}{}{RESET}", report.verdict.label()));
    box_bottom();
    meter_box(
        report.fraction(),
        &format!("{}/{}", report.score, MAX_SCORE),
        color,
    );

    box_top("Feedback");
    for remark in &report.remarks {
        box_bullet(&format!("{color}*{RESET}"), remark);
    }
    box_bottom();

    if report.score < MAX_SCORE {
        box_top("Tips to Improve Your Password");
        for tip in &report.tips {
            box_bullet("->", tip);
        }
        box_bottom();
    }
    flush();
}

pub fn print_history_menu(history: &History, print_error_code: i32, error_txt: &str) {
    crate::terminal::clear();
    box_top("Last Generated Passwords");
    box_line_center("Esc/CTRL+Q: back");
    box_line("");
    if history.is_empty() {
        box_line("  (no passwords generated this session)");
    }
    for (i, password) in history.list().enumerate() {
        box_line(&format!("  {}) {}", i + 1, password));
    }
    box_line("");
    print_rule();
    box_line("     d<N>) delete entry N  |  c<N>) copy entry N  |  e) back");
    box_bottom();

    match print_error_code {
        0 => println!(),
        1 => print_error(error_txt),
        _ => println!("{GREEN}{error_txt}{RESET}"),
    }
    flush();
}
