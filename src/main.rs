use std::process::ExitCode;
use suite_runner::cli;

#[tokio::main]
async fn main() -> ExitCode {
    // Dispatch to the subcommand. Child exit codes are forwarded as our own.
    match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
