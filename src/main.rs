use std::process::ExitCode;

fn main() -> ExitCode {
    grafanactl::cli::run()
}
