//! Render pipeline: markdown body, template source and stylesheet in, an
//! executable page out.
//!
//! The pipeline is pure: identical inputs produce identical pages, and every
//! failure surfaces as a typed [`RenderError`] rather than a panic. Execution is
//! left to the caller so the same page can target stdout or an HTTP response.

mod service;
mod types;

pub use service::{RenderPipeline, render_pipeline};
pub use types::{CompiledTemplate, MarkupError, RenderError, RenderedPage, TemplateError};
