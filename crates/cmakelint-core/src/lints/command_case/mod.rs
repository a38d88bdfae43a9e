pub(crate) mod command_case;
