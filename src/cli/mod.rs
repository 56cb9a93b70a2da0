//! One-shot command-line mode.

mod context;
mod flags;
pub mod prompts;
mod quiet;

pub use context::Context;
pub use flags::CliFlags;

/// Run CLI mode. Returns the process exit code.
pub fn run(args: Vec<String>) -> i32 {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) if !e.use_stderr() => {
            let _ = e.print();
            return 0;
        }
        Err(e) => {
            prompts::error(&e.to_string());
            return 2;
        }
    };

    match ctx.run() {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!(error = %e, "cli run failed");
            prompts::error(&e.to_string());
            1
        }
    }
}
