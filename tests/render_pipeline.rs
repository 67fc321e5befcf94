use folio::{
    application::render::{RenderError, render_pipeline},
    domain::content::RawContent,
    infra::content::EmbeddedContent,
};

const TEMPLATE: &str = "<!doctype html>
<style>{{ Css }}</style>
<main>
{{ Content }}</main>
";

#[test]
fn composed_page_matches_snapshot() {
    let content = RawContent::new(
        "# Notes\n\n| a | b |\n| - | - |\n| 1 | 2 |\n\nSee ~~above~~ below.\n",
        TEMPLATE,
        "main { max-width: 40rem; }",
    );

    let html = render_pipeline()
        .render_content(&content)
        .expect("renders")
        .execute()
        .expect("executes");

    insta::assert_snapshot!(html, @r#"
    <!doctype html>
    <style>main { max-width: 40rem; }</style>
    <main>
    <h1>Notes</h1>
    <table>
    <thead>
    <tr>
    <th>a</th>
    <th>b</th>
    </tr>
    </thead>
    <tbody>
    <tr>
    <td>1</td>
    <td>2</td>
    </tr>
    </tbody>
    </table>
    <p>See <del>above</del> below.</p>
    </main>
    "#);
}

#[test]
fn identical_inputs_render_identically() {
    let content = RawContent::new("# Same\n\n- one\n- two\n", TEMPLATE, "p{}");
    let pipeline = render_pipeline();

    let first = pipeline
        .render_content(&content)
        .and_then(|page| page.execute())
        .expect("first render");
    let second = pipeline
        .render_content(&content)
        .and_then(|page| page.execute())
        .expect("second render");

    assert_eq!(first, second);
}

#[test]
fn slot_values_are_not_escaped() {
    let html = render_pipeline()
        .render(b"hello", TEMPLATE, "body{color:red}")
        .and_then(|page| page.execute())
        .expect("renders");

    assert!(html.contains("<style>body{color:red}</style>"));
    assert!(html.contains("<p>hello</p>"));
}

#[test]
fn malformed_inputs_return_typed_errors() {
    let pipeline = render_pipeline();

    let markup = pipeline.render(&[0xc3, 0x28], TEMPLATE, "").unwrap_err();
    assert!(matches!(markup, RenderError::Markup(_)));

    let template = pipeline
        .render(b"ok", "{% block body %}unterminated", "")
        .unwrap_err();
    assert!(matches!(template, RenderError::Template(_)));
}

#[test]
fn embedded_snapshot_renders() {
    let html = render_pipeline()
        .render_content(&EmbeddedContent::snapshot())
        .and_then(|page| page.execute())
        .expect("embedded content renders");

    assert!(html.contains("<h1>folio</h1>"));
    assert!(html.contains("<table>"));
    assert!(html.contains("max-width: 42rem"));
}
