use std::env;

mod cli;
mod error;
mod exits;
mod logging;
mod pass;
mod session;
mod settings;
mod terminal;
mod tui;

fn main() {
    exits::reset_terminal();
    exits::install_handlers();
    logging::init();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => tui::run(),
        _ => std::process::exit(cli::run(args)),
    }
}
