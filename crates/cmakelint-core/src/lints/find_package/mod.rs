pub(crate) mod find_package;
