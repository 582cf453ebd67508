use std::process::ExitCode;

fn main() -> ExitCode {
    coefficient_tables::cli::run()
}
