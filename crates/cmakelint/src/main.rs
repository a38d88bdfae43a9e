use std::process::ExitCode;

use clap::Parser;
use cmakelint::args::Args;
use cmakelint::status::ExitStatus;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // `--help` and `--version` also come through here and must not
            // be reported as usage errors.
            let status = if err.use_stderr() {
                ExitStatus::UsageError
            } else {
                ExitStatus::Success
            };
            let _ = err.print();
            return status.into();
        }
    };

    match cmakelint::run(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("error: {err}");
            ExitStatus::UsageError.into()
        }
    }
}
