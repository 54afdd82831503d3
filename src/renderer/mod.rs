mod __tests__;
pub(crate) mod condition;
mod config;
mod format;
pub(crate) mod select;
pub(crate) mod writer;

pub use config::{OutputFormat, RenderOptions};
pub use format::{format_sql, format_sql_with, FormatOptions};
