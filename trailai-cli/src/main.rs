//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use trailai_cli::CliError;

#[expect(clippy::print_stderr, reason = "the binary reports fatal errors on stderr")]
fn main() {
    match trailai_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("trailai: {err}");
            std::process::exit(1);
        }
    }
}
