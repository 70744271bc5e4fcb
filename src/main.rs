use std::{fs, path::PathBuf, sync::Arc};

use anyhow::{Context, bail};
use clap::{ArgAction, Parser};

use storysnap::{
    Config,
    camera::{CameraController, CaptureOutcome, PreviewState, StillImageCamera},
    notification::DesktopNotifier,
    screen::Screen,
    script::{self, Step},
    session::EditSession,
    share::{
        BasePhotoExporter, FallbackChoice, FixedPrompter, LocalFileStore, ShareDependencies,
        ShareOutcome, SharePlatform, XdgShareTarget,
    },
    util::color_to_name,
};

#[derive(Parser, Debug)]
#[command(name = "storysnap")]
#[command(version, about = "Selfie capture, annotation and story sharing")]
struct Cli {
    /// Still image acting as the camera
    #[arg(long, short = 'p', value_name = "PATH")]
    photo: Option<PathBuf>,

    /// JSON file of editing steps to replay on the captured photo
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Caption attached to the shared story
    #[arg(long, value_name = "TEXT")]
    caption: Option<String>,

    /// Hand the result off to the external app
    #[arg(long, action = ArgAction::SetTrue)]
    share: bool,

    /// Answer "Save Image" when the external app is not installed
    #[arg(long, action = ArgAction::SetTrue, requires = "share")]
    save_fallback: bool,

    /// Deep link flavour (ios or android)
    #[arg(long, value_name = "PLATFORM", value_parser = ["ios", "android"])]
    platform: Option<String>,

    /// Config file to use instead of ~/.config/storysnap/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(photo) = cli.photo.clone() else {
        // No photo: show usage
        println!("storysnap: Selfie capture, annotation and story sharing");
        println!();
        println!("Usage:");
        println!("  storysnap --photo <PATH>                   Print the composed layer stack");
        println!("  storysnap --photo <PATH> --script <FILE>   Replay editing steps first");
        println!("  storysnap --photo <PATH> --share           Share to the external app");
        println!("  storysnap --help                           Show help");
        return Ok(());
    };

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    match cli.platform.as_deref() {
        Some("ios") => config.share.platform = SharePlatform::Ios,
        Some("android") => config.share.platform = SharePlatform::Android,
        _ => {}
    }

    let steps = match &cli.script {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read script {}", path.display()))?;
            script::parse(&json)
                .with_context(|| format!("Failed to parse script {}", path.display()))?
        }
        None => Vec::new(),
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(async {
        let notifier = Arc::new(DesktopNotifier::new());
        let result = run(cli, photo, config, steps, Arc::clone(&notifier)).await;
        notifier.flush().await;
        result
    })
}

async fn run(
    cli: Cli,
    photo: PathBuf,
    config: Config,
    steps: Vec<Step>,
    notifier: Arc<DesktopNotifier>,
) -> anyhow::Result<()> {
    let camera = CameraController::new(
        Arc::new(StillImageCamera::new(Some(photo.clone()))),
        config.camera.facing,
    );
    let fallback = if cli.save_fallback {
        FallbackChoice::SaveImage
    } else {
        FallbackChoice::Cancel
    };
    let dependencies = ShareDependencies {
        exporter: Arc::new(BasePhotoExporter),
        files: Arc::new(LocalFileStore::new(config.gallery_config())),
        target: Arc::new(XdgShareTarget),
        prompter: Arc::new(FixedPrompter(fallback)),
    };
    let mut screen = Screen::new(
        camera,
        EditSession::new(config.session_settings()),
        config.share_settings(),
        Arc::new(dependencies),
        notifier,
    );

    if screen.start().await? == PreviewState::Blocked {
        bail!("Camera unavailable: cannot read {}", photo.display());
    }
    screen.on_camera_ready();

    match screen.take_picture().await? {
        CaptureOutcome::Captured(image) => log::info!("Editing {}", image),
        other => bail!("No photo captured ({:?})", other),
    }

    let catalog = config.sticker_catalog();
    let applied = script::replay(screen.session_mut(), &catalog, &steps);
    log::info!("Applied {} of {} script steps", applied, steps.len());
    if let Some(caption) = cli.caption {
        screen.session_mut().set_caption(caption);
    }

    print_summary(&screen);

    if cli.share {
        match screen.share().await? {
            ShareOutcome::Shared { url } => println!("Shared via {}", url),
            ShareOutcome::SavedToGallery(path) => {
                println!("Saved to gallery: {}", path.display())
            }
            ShareOutcome::Cancelled => println!("Share cancelled"),
        }
    }

    Ok(())
}

fn print_summary(screen: &Screen) {
    let session = screen.session();
    let composition = session.compose();

    if let Some(photo) = session.photo() {
        println!("Photo: {}", photo);
    }
    println!("Mode: {}", session.mode());
    println!("Color: {}", color_to_name(&session.current_color()));
    println!(
        "Strokes: {} ({} segments)",
        session.strokes().len(),
        composition.segment_count()
    );
    println!("Stickers: {}", session.stickers().len());
    println!("Caption: {:?}", session.caption());
    println!("Layers: {}", composition.layers.len());
}
