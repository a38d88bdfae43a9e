use insta::assert_snapshot;
use tempfile::TempDir;

use crate::helpers::{CommandExt, cmakelint};

#[test]
fn test_no_findings() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::write(
        directory.path().join("CMakeLists.txt"),
        "cmake_minimum_required(VERSION 3.10)\nproject(demo)\n",
    )?;

    assert_snapshot!(
        cmakelint(directory.path()).arg("CMakeLists.txt").run(),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    Total Errors: 0
    "
    );
    Ok(())
}

#[test]
fn test_quiet_hides_summary_without_findings() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::write(directory.path().join("CMakeLists.txt"), "project(demo)\n")?;

    let result = cmakelint(directory.path()).arg("--quiet").arg("CMakeLists.txt").run();
    assert_eq!(result.code(), Some(0));
    assert_eq!(result.stderr(), "");
    Ok(())
}

#[test]
fn test_quiet_keeps_summary_with_findings() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::write(directory.path().join("CMakeLists.txt"), "\tproject(demo)\n")?;

    let result = cmakelint(directory.path()).arg("--quiet").arg("CMakeLists.txt").run();
    assert_eq!(result.code(), Some(1));
    assert_eq!(result.stderr(), "Total Errors: 1\n");
    Ok(())
}

#[test]
fn test_command_spacing() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::write(directory.path().join("CMakeLists.txt"), "  foo (a, b )\n")?;

    assert_snapshot!(
        cmakelint(directory.path()).arg("CMakeLists.txt").run(),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----
    CMakeLists.txt:1: Extra spaces between 'foo' and its () [whitespace/extra]
    CMakeLists.txt:1: Mismatching spaces inside () after command [whitespace/mismatch]
    ----- stderr -----
    Total Errors: 2
    "
    );
    Ok(())
}

#[test]
fn test_trailing_tab() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::write(directory.path().join("CMakeLists.txt"), "set(X 1)\t\n")?;

    assert_snapshot!(
        cmakelint(directory.path()).arg("CMakeLists.txt").run(),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----
    CMakeLists.txt:1: Tab found; please use spaces [whitespace/tabs]
    CMakeLists.txt:1: Line ends in whitespace [whitespace/eol]
    ----- stderr -----
    Total Errors: 2
    "
    );
    Ok(())
}

#[test]
fn test_find_module_stdargs() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::write(
        directory.path().join("FindFOO.cmake"),
        "include(FindPackageHandleStandardArgs)\nfind_package_handle_standard_args(BAR)\n",
    )?;

    assert_snapshot!(
        cmakelint(directory.path()).arg("FindFOO.cmake").run(),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----
    FindFOO.cmake:2: Weird variable passed to std args, should be FOO not BAR [package/stdargs]
    ----- stderr -----
    Total Errors: 1
    "
    );
    Ok(())
}

#[test]
fn test_line_length_option() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let line = format!("set(X {})\n", "a".repeat(78));
    std::fs::write(directory.path().join("CMakeLists.txt"), line)?;

    assert_snapshot!(
        cmakelint(directory.path()).arg("CMakeLists.txt").run(),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----
    CMakeLists.txt:1: Lines should be <= 80 characters long [linelength]
    ----- stderr -----
    Total Errors: 1
    "
    );

    let result = cmakelint(directory.path())
        .arg("--linelength=90")
        .arg("CMakeLists.txt")
        .run();
    assert_eq!(result.code(), Some(0));
    assert_eq!(result.stdout(), "");
    Ok(())
}

#[test]
fn test_pragma_is_scoped_to_its_file() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::write(
        directory.path().join("a.cmake"),
        "# lint_cmake: -whitespace/tabs\n\tset(X 1)\n",
    )?;
    std::fs::write(directory.path().join("b.cmake"), "\tset(X 1)\n")?;

    assert_snapshot!(
        cmakelint(directory.path()).arg("a.cmake").arg("b.cmake").run(),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----
    b.cmake:1: Tab found; please use spaces [whitespace/tabs]
    ----- stderr -----
    Total Errors: 1
    "
    );
    Ok(())
}

#[test]
fn test_ignored_and_missing_files() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::write(directory.path().join("main.cpp"), "int main() {}\n")?;
    std::fs::write(directory.path().join("CMakeLists.txt"), "project(demo)\n")?;

    let result = cmakelint(directory.path())
        .arg("main.cpp")
        .arg("missing.cmake")
        .arg("CMakeLists.txt")
        .run();

    assert_eq!(result.code(), Some(1));
    assert_eq!(result.stdout(), "Ignoring file: main.cpp\n");
    assert_eq!(
        result.stderr(),
        "Error: Failed to read file: missing.cmake\nTotal Errors: 0\n"
    );
    Ok(())
}

#[test]
fn test_default_file() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::write(directory.path().join("CMakeLists.txt"), "SET(X 1)\nset(Y 2)\n")?;

    assert_snapshot!(
        cmakelint(directory.path()).run(),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----
    CMakeLists.txt:2: Do not mix upper and lower case commands [readability/mixedcase]
    ----- stderr -----
    Total Errors: 1
    "
    );
    Ok(())
}

#[test]
fn test_no_files() -> anyhow::Result<()> {
    let directory = TempDir::new()?;

    assert_snapshot!(
        cmakelint(directory.path()).run(),
        @r"
    success: false
    exit_code: 32
    ----- stdout -----

    ----- stderr -----
    error: No files were specified!
    "
    );
    Ok(())
}

#[test]
fn test_invalid_argument() -> anyhow::Result<()> {
    let directory = TempDir::new()?;

    let result = cmakelint(directory.path()).arg("--spaces=two").run();
    assert_eq!(result.code(), Some(32));

    let result = cmakelint(directory.path()).arg("--unknown").run();
    assert_eq!(result.code(), Some(32));
    Ok(())
}

#[test]
fn test_help_and_version() -> anyhow::Result<()> {
    let directory = TempDir::new()?;

    let result = cmakelint(directory.path()).arg("--help").run();
    assert_eq!(result.code(), Some(0));
    assert!(result.stdout().contains("--linelength"));

    let result = cmakelint(directory.path()).arg("--version").run();
    assert_eq!(result.code(), Some(0));
    assert!(result.stdout().starts_with("cmakelint "));
    Ok(())
}
