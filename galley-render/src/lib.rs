//! # galley-render
//!
//! Markdown-to-HTML conversion with an optional Tera page-template stage.
//!
//! The converter is stateless between files: load templates once with
//! [`Converter::new`], then call [`Converter::convert`] per document.

pub mod engine;
pub mod error;
pub mod html;

pub use engine::Converter;
pub use error::RenderError;
pub use html::render_html;
