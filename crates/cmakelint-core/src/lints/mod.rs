//! The checks. Each one lives in its own module and is re-exported here so
//! the driver can call them in order.

pub(crate) mod carriage_return;
pub(crate) mod command_case;
pub(crate) mod command_spaces;
pub(crate) mod file_name;
pub(crate) mod find_package;
pub(crate) mod indentation;
pub(crate) mod line_length;
pub(crate) mod repeated_logic;
pub(crate) mod tabs;
pub(crate) mod trailing_whitespace;

pub use carriage_return::carriage_return::carriage_return;
pub use command_case::command_case::command_case;
pub use command_spaces::command_spaces::command_spaces;
pub use file_name::file_name::file_name;
pub use find_package::find_package::{find_package, package_consistency};
pub use indentation::indentation::indentation;
pub use line_length::line_length::line_length;
pub use repeated_logic::repeated_logic::repeated_logic;
pub use tabs::tabs::tabs;
pub use trailing_whitespace::trailing_whitespace::trailing_whitespace;
