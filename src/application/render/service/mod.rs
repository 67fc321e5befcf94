mod config;

use std::{
    sync::{Arc, LazyLock},
    time::Instant,
};

use comrak::{Arena, format_html, parse_document};
use metrics::{counter, histogram};
use tracing::debug;

use crate::application::render::types::{
    CompiledTemplate, MarkupError, RenderError, RenderedPage, TemplateError,
};
use crate::domain::content::{PageSlots, RawContent};

use config::default_options;

pub(crate) const METRIC_RENDER_TOTAL: &str = "folio_render_total";
pub(crate) const METRIC_RENDER_FAILED_TOTAL: &str = "folio_render_failed_total";
pub(crate) const METRIC_RENDER_MS: &str = "folio_render_ms";

/// Comrak markdown conversion followed by Tera template parsing.
pub struct RenderPipeline {
    options: comrak::Options<'static>,
}

impl RenderPipeline {
    /// Construct a pipeline with tables, footnotes and the other GFM extensions enabled.
    pub fn new() -> Self {
        Self {
            options: default_options(),
        }
    }

    pub fn render_content(&self, content: &RawContent) -> Result<RenderedPage, RenderError> {
        self.render(
            &content.body,
            &content.template_source,
            &content.stylesheet,
        )
    }

    pub fn render(
        &self,
        body: &[u8],
        template_source: &str,
        stylesheet: &str,
    ) -> Result<RenderedPage, RenderError> {
        let started_at = Instant::now();
        counter!(METRIC_RENDER_TOTAL).increment(1);

        let content = markdown_stage(body, &self.options).inspect_err(|_| {
            counter!(METRIC_RENDER_FAILED_TOTAL, "stage" => "markup").increment(1);
        })?;

        let template = template_stage(template_source).inspect_err(|_| {
            counter!(METRIC_RENDER_FAILED_TOTAL, "stage" => "template").increment(1);
        })?;

        let slots = PageSlots {
            content,
            css: stylesheet.to_owned(),
        };

        let elapsed_ms = started_at.elapsed().as_secs_f64() * 1000.0;
        histogram!(METRIC_RENDER_MS).record(elapsed_ms);
        debug!(
            target = "folio::render",
            body_bytes = body.len(),
            html_bytes = slots.content.len(),
            elapsed_ms,
            "rendered page"
        );

        Ok(RenderedPage { template, slots })
    }
}

impl Default for RenderPipeline {
    fn default() -> Self {
        Self::new()
    }
}

static RENDER_PIPELINE: LazyLock<Arc<RenderPipeline>> =
    LazyLock::new(|| Arc::new(RenderPipeline::new()));

/// Access the shared render pipeline instance, initialised on first use.
pub fn render_pipeline() -> Arc<RenderPipeline> {
    Arc::clone(&RENDER_PIPELINE)
}

fn markdown_stage(body: &[u8], options: &comrak::Options<'static>) -> Result<String, MarkupError> {
    let markdown = std::str::from_utf8(body)?;
    let arena = Arena::new();
    let root = parse_document(&arena, markdown, options);

    let mut html = String::new();
    format_html(root, options, &mut html)?;
    Ok(html)
}

fn template_stage(source: &str) -> Result<CompiledTemplate, TemplateError> {
    CompiledTemplate::parse(source)
}
