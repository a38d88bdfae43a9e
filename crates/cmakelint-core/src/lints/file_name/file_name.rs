use crate::category::Category;
use crate::checker::Checker;

/// ## What it does
///
/// Checks the name of the file itself:
///
/// - Find modules (`Find<Package>.cmake`) must use an uppercase package name,
/// - `CMakeLists.txt` must be spelled exactly like this.
///
/// Findings are reported at line 0.
pub fn file_name(checker: &mut Checker) {
    let Some(name) = checker.filename.file_name().map(|name| name.to_string_lossy()) else {
        return;
    };
    let name: &str = &name;

    if let Some(package) = name
        .strip_prefix("Find")
        .and_then(|rest| rest.strip_suffix(".cmake"))
    {
        if !package.is_empty() && !is_uppercase(package) {
            let message = format!(
                "Find modules should use uppercase names; consider using Find{}.cmake",
                package.to_uppercase()
            );
            checker.report(0, Category::ConventionFilename, message);
        }
    } else if name.eq_ignore_ascii_case("cmakelists.txt") && name != "CMakeLists.txt" {
        checker.report(0, Category::ConventionFilename, "File should be called CMakeLists.txt");
    }
}

// At least one uppercase letter and no lowercase one.
fn is_uppercase(text: &str) -> bool {
    text.chars().any(char::is_uppercase) && !text.chars().any(char::is_lowercase)
}
