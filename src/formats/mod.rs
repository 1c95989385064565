//! Output format implementations

pub mod html;

pub use html::HtmlFormat;
