pub(crate) mod carriage_return;
