pub(crate) mod command_spaces;
