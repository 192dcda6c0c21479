use anyhow::{Context, Result};
use clap::Parser;
use manifest_core::config::{self, Profile};
use manifest_core::pipeline;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "asset-manifest")]
#[command(about = "Generate the front-end asset manifest from image folders", long_about = None)]
struct Cli {
    /// Path to config TOML
    #[arg(short, long)]
    config: Option<String>,

    /// Path convention: relative|web
    #[arg(long)]
    profile: Option<String>,

    /// Print the manifest instead of writing the output file
    #[arg(long, default_value_t = false)]
    stdout: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut cfg = config::load(cli.config.as_deref()).context("loading config")?;
    if let Some(profile) = cli.profile.as_deref() {
        cfg.profile = profile.parse::<Profile>()?;
    }
    let settings = cfg.settings();

    if cli.stdout {
        let manifest = pipeline::build_manifest(&settings)
            .with_context(|| format!("scanning {:?}", settings.assets_dir))?;
        println!("{}", pipeline::render(&manifest)?);
        return Ok(());
    }

    let summary = pipeline::generate(&settings)
        .with_context(|| format!("generating {:?}", settings.output))?;
    tracing::debug!(
        "{} images (faces {}/{} folders, clothes {}/{} folders, etc {}/{} folders)",
        summary.total_images(),
        summary.faces.images,
        summary.faces.folders,
        summary.clothes.images,
        summary.clothes.folders,
        summary.etc.images,
        summary.etc.folders
    );
    Ok(())
}
