//! Termweb - Text-Mode Terminal Web Browser
//!
//! Entry point for the Termweb browser application.

use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    // An interrupt - at the prompt or mid-fetch - ends the whole process
    // with exit code 0; the session holds nothing that needs cleanup.
    if let Err(e) = ctrlc::set_handler(|| std::process::exit(0)) {
        log::warn!("could not install interrupt handler: {}", e);
    }

    // Single optional positional argument: the initial URL to open.
    let initial_url = env::args().nth(1);

    let mut session = match termweb::Session::new() {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Failed to start browser: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = session.run(initial_url.as_deref()) {
        eprintln!("Terminal error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
