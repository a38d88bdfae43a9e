use tempfile::TempDir;

use crate::helpers::{CommandExt, cmakelint};

#[test]
fn test_json_output() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    std::fs::write(directory.path().join("main.cpp"), "int main() {}\n")?;
    std::fs::write(directory.path().join("CMakeLists.txt"), "set(X 1) \n")?;

    let result = cmakelint(directory.path())
        .arg("--output-format=json")
        .arg("main.cpp")
        .arg("CMakeLists.txt")
        .run();
    assert_eq!(result.code(), Some(1));

    let value: serde_json::Value = serde_json::from_str(&result.stdout())?;
    assert_eq!(
        value,
        serde_json::json!([
            {
                "filename": "CMakeLists.txt",
                "line": 1,
                "category": "whitespace/eol",
                "message": "Line ends in whitespace"
            }
        ])
    );
    assert_eq!(result.stderr(), "Total Errors: 1\n");
    Ok(())
}
