use std::process::ExitCode;

fn main() -> ExitCode {
    lumilab_cli::run()
}
