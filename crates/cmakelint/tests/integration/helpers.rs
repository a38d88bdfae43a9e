use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub fn binary_path() -> PathBuf {
    assert_cmd::cargo::cargo_bin("cmakelint")
}

/// A `cmakelint` command running in `directory`, isolated from the user's
/// own configuration files.
pub fn cmakelint(directory: &Path) -> Command {
    let mut command = Command::new(binary_path());
    command
        .current_dir(directory)
        .env("HOME", directory)
        .env("NO_COLOR", "1")
        .env_remove("XDG_CONFIG_DIR");
    command
}

pub trait CommandExt {
    fn run(&mut self) -> CommandResult;
}

impl CommandExt for Command {
    fn run(&mut self) -> CommandResult {
        let output = self.output().expect("Failed to run cmakelint");
        CommandResult { output }
    }
}

pub struct CommandResult {
    output: Output,
}

impl CommandResult {
    pub fn code(&self) -> Option<i32> {
        self.output.status.code()
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "success: {}", self.output.status.success())?;
        match self.code() {
            Some(code) => writeln!(f, "exit_code: {code}")?,
            None => writeln!(f, "exit_code: none")?,
        }
        writeln!(f, "----- stdout -----")?;
        writeln!(f, "{}", self.stdout().trim_end())?;
        writeln!(f, "----- stderr -----")?;
        write!(f, "{}", self.stderr().trim_end())
    }
}
