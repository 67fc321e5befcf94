use std::{fs, sync::Arc, time::Duration};

use folio::{
    application::{error::AppError, render::RenderPipeline},
    config::{ContentSettings, ServerSettings},
    infra::{
        assets::StaticAssets,
        content::FilesystemContent,
        error::InfraError,
        http::{self, HttpState, build_router, serve_until_cancelled, watch_interrupt},
    },
};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

fn site_state(root: &std::path::Path) -> HttpState {
    fs::write(root.join("index.md"), "# live").expect("write document");
    fs::write(root.join("index.html"), "{{ Content }}").expect("write template");
    fs::write(root.join("index.css"), "").expect("write stylesheet");

    let settings = ContentSettings::default();
    HttpState {
        content: Arc::new(FilesystemContent::rooted_at(root, &settings)),
        renderer: Arc::new(RenderPipeline::new()),
        assets: StaticAssets::new(root.join(&settings.assets_dir)),
    }
}

#[tokio::test]
async fn listener_serves_until_cancelled() {
    let dir = tempfile::tempdir().expect("tempdir");
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    let shutdown = CancellationToken::new();
    let server = tokio::spawn(serve_until_cancelled(
        listener,
        build_router(site_state(dir.path())),
        shutdown.clone(),
        Duration::from_secs(5),
    ));

    let body = reqwest::get(format!("http://{addr}/"))
        .await
        .expect("request succeeds")
        .text()
        .await
        .expect("body reads");
    assert_eq!(body, "<h1>live</h1>\n");

    fs::write(dir.path().join("index.md"), "# edited").expect("rewrite document");
    let body = reqwest::get(format!("http://{addr}/"))
        .await
        .expect("request succeeds")
        .text()
        .await
        .expect("body reads");
    assert_eq!(body, "<h1>edited</h1>\n");

    shutdown.cancel();
    let result = tokio::time::timeout(Duration::from_secs(10), server)
        .await
        .expect("server stops after cancellation")
        .expect("server task joins");
    assert!(result.is_ok());
}

#[tokio::test]
async fn listener_survives_failed_requests() {
    let dir = tempfile::tempdir().expect("tempdir");
    let state = site_state(dir.path());
    fs::write(dir.path().join("index.html"), "{% for %}").expect("break template");

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    let shutdown = CancellationToken::new();
    let server = tokio::spawn(serve_until_cancelled(
        listener,
        build_router(state),
        shutdown.clone(),
        Duration::from_secs(5),
    ));

    let response = reqwest::get(format!("http://{addr}/index"))
        .await
        .expect("request succeeds");
    assert_eq!(response.status().as_u16(), 500);

    fs::write(dir.path().join("index.html"), "{{ Content }}").expect("fix template");
    let response = reqwest::get(format!("http://{addr}/index"))
        .await
        .expect("request succeeds");
    assert_eq!(response.status().as_u16(), 200);

    shutdown.cancel();
    server
        .await
        .expect("server task joins")
        .expect("server stops cleanly");
}

#[tokio::test]
async fn interrupt_watcher_returns_once_cancelled() {
    let shutdown = CancellationToken::new();
    let watcher = tokio::spawn(watch_interrupt(shutdown.clone()));

    shutdown.cancel();
    tokio::time::timeout(Duration::from_secs(5), watcher)
        .await
        .expect("watcher stops")
        .expect("watcher task joins");
}

#[tokio::test]
async fn bind_conflict_is_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let occupied = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let settings = ServerSettings {
        addr: occupied.local_addr().expect("local addr"),
        graceful_shutdown: Duration::from_secs(1),
    };

    let err = http::run(&settings, site_state(dir.path()))
        .await
        .expect_err("second bind fails");
    assert!(matches!(err, AppError::Infra(InfraError::Bind { .. })));
}
