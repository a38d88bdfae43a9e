use insta::assert_snapshot;
use tempfile::TempDir;

use crate::helpers::{CommandExt, cmakelint};

#[test]
fn test_filter_option() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::write(directory.path().join("CMakeLists.txt"), "  set(X 1)\t \n")?;

    assert_snapshot!(
        cmakelint(directory.path())
            .arg("--filter=-whitespace,+whitespace/tabs")
            .arg("CMakeLists.txt")
            .run(),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----
    CMakeLists.txt:1: Tab found; please use spaces [whitespace/tabs]
    ----- stderr -----
    Total Errors: 1
    "
    );
    Ok(())
}

#[test]
fn test_invalid_filter() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::write(directory.path().join("CMakeLists.txt"), "project(demo)\n")?;

    assert_snapshot!(
        cmakelint(directory.path())
            .arg("--filter=-nope")
            .arg("CMakeLists.txt")
            .run(),
        @r"
    success: false
    exit_code: 32
    ----- stdout -----

    ----- stderr -----
    error: Filter not allowed: -nope
    "
    );

    let result = cmakelint(directory.path())
        .arg("--filter=whitespace")
        .arg("CMakeLists.txt")
        .run();
    assert_eq!(result.code(), Some(32));
    assert_eq!(result.stderr(), "error: Filter should start with - or +\n");
    Ok(())
}

#[test]
fn test_empty_filter_lists_categories() -> anyhow::Result<()> {
    let directory = TempDir::new()?;

    assert_snapshot!(
        cmakelint(directory.path()).arg("--filter=").run(),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
      convention/filename
      linelength
      package/consistency
      package/stdargs
      readability/logic
      readability/mixedcase
      readability/wonkycase
      syntax
      whitespace/eol
      whitespace/extra
      whitespace/indent
      whitespace/mismatch
      whitespace/newline
      whitespace/tabs
    "
    );
    Ok(())
}
