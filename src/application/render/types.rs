use std::io::Write;

use tera::{Context, Tera};
use thiserror::Error;

use crate::domain::content::{PAGE_TEMPLATE_NAME, PageSlots};

#[derive(Debug, Error)]
pub enum MarkupError {
    #[error("document body is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("failed to format HTML")]
    Format(#[from] std::fmt::Error),
}

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("unable to parse index.html: {0}")]
    Parse(#[source] tera::Error),
    #[error("unable to execute index.html: {0}")]
    Execute(#[source] tera::Error),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unable to render markdown: {0}")]
    Markup(#[from] MarkupError),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error("error writing template: {0}")]
    Execution(#[source] std::io::Error),
}

/// A parsed page template, registered under [`PAGE_TEMPLATE_NAME`].
#[derive(Debug)]
pub struct CompiledTemplate {
    tera: Tera,
}

impl CompiledTemplate {
    /// Parse `source` as the page template. Slot values are never escaped.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.autoescape_on(Vec::new());
        tera.add_raw_template(PAGE_TEMPLATE_NAME, source)
            .map_err(TemplateError::Parse)?;
        Ok(Self { tera })
    }

    fn render(&self, slots: &PageSlots) -> Result<String, TemplateError> {
        let context = Context::from_serialize(slots).map_err(TemplateError::Execute)?;
        self.tera
            .render(PAGE_TEMPLATE_NAME, &context)
            .map_err(TemplateError::Execute)
    }
}

/// Output of a single render call: the template plus the values it will be executed with.
#[derive(Debug)]
pub struct RenderedPage {
    pub template: CompiledTemplate,
    pub slots: PageSlots,
}

impl RenderedPage {
    /// Execute the template into a string.
    pub fn execute(&self) -> Result<String, RenderError> {
        Ok(self.template.render(&self.slots)?)
    }

    /// Execute the template and write the whole page to `out`.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> Result<(), RenderError> {
        let html = self.execute()?;
        out.write_all(html.as_bytes())
            .and_then(|()| out.flush())
            .map_err(RenderError::Execution)
    }
}
