//! Print sink: execute a rendered page once against a writer.

use std::io::Write;

use tracing::debug;

use crate::application::{error::AppError, render::RenderedPage};

/// Execute `page` into `out`. Any failure is returned to the caller, which treats it as fatal.
pub fn print_page<W: Write + ?Sized>(page: &RenderedPage, out: &mut W) -> Result<(), AppError> {
    page.write_to(out)?;
    debug!(target = "folio::print", "page written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::render::{RenderError, RenderPipeline};

    #[test]
    fn prints_the_composed_page() {
        let page = RenderPipeline::new()
            .render(b"hello", "<style>{{ Css }}</style>{{ Content }}", "body{color:red}")
            .expect("renders");

        let mut out = Vec::new();
        print_page(&page, &mut out).expect("prints");

        let html = String::from_utf8(out).expect("utf-8 output");
        assert_eq!(html, "<style>body{color:red}</style><p>hello</p>\n");
    }

    #[test]
    fn undefined_slot_is_reported() {
        let page = RenderPipeline::new()
            .render(b"hello", "{{ Missing }}", "")
            .expect("renders");

        let mut out = Vec::new();
        let err = print_page(&page, &mut out).unwrap_err();
        assert!(matches!(err, AppError::Render(RenderError::Template(_))));
        assert!(out.is_empty());
    }
}
