use std::path::Path;

/// Whether `path` is something cmakelint checks: a `.cmake` file or a
/// `CMakeLists.txt` (in any casing, so that misnamed files get reported).
pub fn is_cmake_file(path: &Path) -> bool {
    if path.to_string_lossy().ends_with(".cmake") {
        return true;
    }
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.eq_ignore_ascii_case("cmakelists.txt"))
}
