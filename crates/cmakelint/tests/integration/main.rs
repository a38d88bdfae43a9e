mod check;
mod filter;
mod helpers;
mod output_format;
