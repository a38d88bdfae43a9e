pub(crate) mod tabs;
