use std::{io, process, sync::Arc};

use folio::{
    application::{
        error::AppError,
        output::print_page,
        render::{RenderPipeline, RenderedPage, render_pipeline},
    },
    config,
    infra::{
        assets::StaticAssets,
        content::{EmbeddedContent, FilesystemContent},
        error::InfraError,
        http::{self, HttpState},
        telemetry,
    },
};
use tracing::{Dispatch, Level, debug, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    let message = error.detailed_message();
    if dispatcher::has_been_set() {
        error!(error = %message, "application error");
        return;
    }

    let subscriber = tracing_fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::ERROR)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %message, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli().map_err(|err| {
        InfraError::configuration(format!("failed to load configuration: {err}"))
    })?;

    telemetry::init(&settings.logging)?;

    // The embedded snapshot must render in every mode, including serve.
    let renderer = render_pipeline();
    let snapshot = renderer.render_content(&EmbeddedContent::snapshot())?;

    match cli_args.command {
        None | Some(config::Command::Render(_)) => run_print(&snapshot),
        Some(config::Command::Serve(_)) => run_serve(settings, renderer).await,
        Some(config::Command::Other(words)) => {
            debug!(target = "folio::cli", command = ?words, "ignoring unrecognized command");
            Ok(())
        }
    }
}

fn run_print(page: &RenderedPage) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_page(page, &mut out)
}

async fn run_serve(
    settings: config::Settings,
    renderer: Arc<RenderPipeline>,
) -> Result<(), AppError> {
    let content = &settings.content;
    let state = HttpState {
        content: Arc::new(FilesystemContent::from_settings(content)),
        renderer,
        assets: StaticAssets::new(content.assets_dir.clone()),
    };

    info!(
        target = "folio::serve",
        document = %content.document.display(),
        template = %content.template.display(),
        stylesheet = %content.stylesheet.display(),
        assets_dir = %state.assets.root().display(),
        "serving live content"
    );

    http::run(&settings.server, state).await
}
