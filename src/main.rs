use std::process::ExitCode;

fn main() -> ExitCode {
    burrow_client::cli::execute()
}
