//! State of a CMake "Find" module with respect to the standard-args helper.
//!
//! A `Find<Package>.cmake` module is expected to both
//! `include(FindPackageHandleStandardArgs)` and call
//! `find_package_handle_standard_args(<PACKAGE> ...)`.

use std::path::Path;

pub const STDARGS_MODULE: &str = "FindPackageHandleStandardArgs";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackageState {
    pub included_stdargs: bool,
    pub used_stdargs: bool,
}

impl PackageState {
    /// Record an `include(<module>)`.
    pub fn include(&mut self, module: &str) {
        if module == STDARGS_MODULE {
            self.included_stdargs = true;
        }
    }

    /// Record a call to `find_package_handle_standard_args()`.
    pub fn use_stdargs(&mut self) {
        self.used_stdargs = true;
    }

    /// Messages for whatever the module failed to do.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = vec![];
        if !self.included_stdargs {
            missing.push("Package should include FindPackageHandleStandardArgs");
        }
        if !self.used_stdargs {
            missing.push("Package should use FIND_PACKAGE_HANDLE_STANDARD_ARGS");
        }
        missing
    }
}

fn basename(path: &Path) -> &str {
    path.file_name().and_then(|name| name.to_str()).unwrap_or_default()
}

pub fn is_find_module(path: &Path) -> bool {
    let name = basename(path);
    name.starts_with("Find") && name.ends_with(".cmake")
}

/// The package name a Find module is expected to pass to the standard-args
/// helper: `FindFoo.cmake` -> `FOO`.
pub fn expected_package_name(path: &Path) -> Option<String> {
    basename(path)
        .strip_prefix("Find")
        .and_then(|rest| rest.strip_suffix(".cmake"))
        .map(str::to_uppercase)
}
