pub(crate) mod indentation;
