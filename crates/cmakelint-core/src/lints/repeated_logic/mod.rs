pub(crate) mod repeated_logic;
