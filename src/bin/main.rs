//! Poster Studio CLI - render one poster and write it to disk

use clap::Parser;
use poster_studio::assets::ImageSource;
use poster_studio::export::ExportFormat;
use poster_studio::slots::SlotId;
use poster_studio::state::PosterContent;
use poster_studio::text::resolve_face;
use poster_studio::{PosterError, PosterResult, PosterSession, StudioConfig, TemplateId};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for poster-studio.
#[derive(Debug, Parser)]
#[command(name = "poster-studio")]
#[command(about = "Render a 1080x1350 news poster to PNG or JPEG")]
#[command(version)]
struct CliArgs {
    /// Studio config (username, site, masthead, ad pairs, fonts)
    #[arg(long, default_value = "poster-studio.json")]
    config: PathBuf,

    /// Poster content JSON (headline, summary, body, byline, colors, photos)
    #[arg(long)]
    content: Option<PathBuf>,

    /// Template id, e.g. classic or two_column
    #[arg(long)]
    template: Option<String>,

    /// png or jpeg
    #[arg(long, default_value = "png")]
    format: ExportFormat,

    /// Output file or directory; defaults to the generated file name
    #[arg(long)]
    out: Option<PathBuf>,

    #[arg(long)]
    headline: Option<String>,

    #[arg(long)]
    summary: Option<String>,

    #[arg(long)]
    body: Option<String>,

    #[arg(long)]
    byline: Option<String>,

    /// Primary photo reference (path, URL or data URI)
    #[arg(long)]
    primary: Option<String>,

    /// Secondary photo reference
    #[arg(long)]
    secondary: Option<String>,

    /// Font file overriding the configured regular face
    #[arg(long)]
    font: Option<PathBuf>,

    /// Print the template ids and exit
    #[arg(long)]
    list_templates: bool,
}

fn main() -> PosterResult<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "poster_studio=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CliArgs::parse();

    if args.list_templates {
        for id in TemplateId::ALL {
            println!("{:<12} {}", id.as_str(), id.label());
        }
        return Ok(());
    }

    let config = StudioConfig::load_or_default(Some(&args.config))?;
    let regular = args.font.clone().or_else(|| config.fonts.regular.clone());
    let bold = if args.font.is_some() { None } else { config.fonts.bold.clone() };
    let face = resolve_face(regular.as_deref(), bold.as_deref());

    let mut session = PosterSession::new(config, face);
    session.start();

    if let Some(path) = &args.content {
        let raw = std::fs::read_to_string(path)?;
        let content: PosterContent = serde_json::from_str(&raw)
            .map_err(|e| PosterError::Config(format!("{}: {e}", path.display())))?;
        session.apply_content(&content);
    }
    apply_overrides(&mut session, &args);

    let artifact = session.export(args.format)?;
    let target = match args.out {
        Some(out) if out.is_dir() => out.join(&artifact.file_name),
        Some(out) => out,
        None => PathBuf::from(&artifact.file_name),
    };
    std::fs::write(&target, &artifact.bytes)?;
    tracing::info!(status = session.status(), "done");
    println!("{}", target.display());
    Ok(())
}

fn apply_overrides(session: &mut PosterSession, args: &CliArgs) {
    if let Some(id) = &args.template {
        session.select_template(id);
    }
    if let Some(text) = &args.headline {
        session.set_headline(text.as_str());
    }
    if let Some(text) = &args.summary {
        session.set_summary(text.as_str());
    }
    if let Some(text) = &args.body {
        session.set_body(text.as_str());
    }
    if let Some(text) = &args.byline {
        session.set_byline(text.as_str());
    }
    if let Some(reference) = &args.primary {
        session.load_image(SlotId::PrimaryPhoto, ImageSource::from_reference(reference));
    }
    if let Some(reference) = &args.secondary {
        session.load_image(SlotId::SecondaryPhoto, ImageSource::from_reference(reference));
    }
}
