/// Formatter adapters for the supported chart output formats
mod dot_formatter;
mod json_formatter;

pub use dot_formatter::DotFormatter;
pub use json_formatter::JsonFormatter;
