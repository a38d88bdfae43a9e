pub(crate) mod file_name;
