pub mod formatter;
pub mod simple_formatter;

pub use formatter::MarkerFormatter;
pub use simple_formatter::SimpleFormatter;
