use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use env_logger::{Builder, Target};
use log::LevelFilter;

use jhr_gallery::app::{self, DemoOptions};
use jhr_gallery::{FilterMessage, GalleryConfig, StaticCatalog};
use jhr_model::FilterField;

#[derive(Parser)]
#[command(name = "jhr-gallery", about = "Headless JHR listing gallery runner")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a listing's carousel on real timers and log every slide change
    Carousel {
        #[arg(long, default_value = "rehavia-2")]
        listing: String,
        #[arg(long, default_value_t = 10)]
        seconds: u64,
        /// Open the fullscreen overlay after this many seconds
        #[arg(long)]
        fullscreen_at: Option<u64>,
        #[arg(long, default_value_t = 3)]
        fullscreen_for: u64,
        /// Mount as if the visitor prefers reduced motion
        #[arg(long)]
        reduced_motion: bool,
        /// Print the final view snapshot as JSON
        #[arg(long)]
        dump_view: bool,
    },
    /// Print listings matching a listings-page query string, optionally
    /// after editing it through the filter panel
    Listings {
        #[arg(default_value = "")]
        query: String,
        /// Set a filter field, e.g. `--set minBeds=3`
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        set: Vec<String>,
        /// Toggle a neighborhood on or off
        #[arg(long)]
        toggle: Vec<String>,
        /// Clear every filter before applying edits
        #[arg(long)]
        clear: bool,
    },
}

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("jhr_gallery", LevelFilter::Debug)
        .init();
}

fn panel_edits(
    clear: bool,
    set: &[String],
    toggle: Vec<String>,
) -> anyhow::Result<Vec<FilterMessage>> {
    let mut edits = Vec::new();
    if clear {
        edits.push(FilterMessage::Clear);
    }
    for pair in set {
        let (field, value) = pair
            .split_once('=')
            .with_context(|| format!("expected FIELD=VALUE, got {pair:?}"))?;
        let field: FilterField = field.parse()?;
        edits.push(FilterMessage::Edit(field, value.to_owned()));
    }
    edits.extend(toggle.into_iter().map(FilterMessage::ToggleNeighborhood));
    Ok(edits)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let (config, source) = GalleryConfig::load_from_env()?;
    log::debug!("gallery config loaded from {source:?}");

    let cli = Cli::parse();
    let catalog = StaticCatalog::jerusalem();

    match cli.command {
        Command::Carousel {
            listing,
            seconds,
            fullscreen_at,
            fullscreen_for,
            reduced_motion,
            dump_view,
        } => {
            let mut options =
                DemoOptions::new(listing.as_str(), Duration::from_secs(seconds));
            options.fullscreen_at = fullscreen_at.map(Duration::from_secs);
            options.fullscreen_for = Duration::from_secs(fullscreen_for);
            options.reduced_motion = reduced_motion;

            let report = app::run_carousel(&catalog, &config, options).await?;
            println!(
                "{}: {} slides, {} changes, final slide {}",
                report.key,
                report.slides,
                report.transitions.len(),
                report.transitions.last().map_or(1, |i| i + 1)
            );
            if dump_view {
                let json = serde_json::to_string_pretty(&report.final_view)
                    .context("serializing view snapshot")?;
                println!("{json}");
            }
        }
        Command::Listings {
            query,
            set,
            toggle,
            clear,
        } => {
            let edits = panel_edits(clear, &set, toggle)?;
            let report =
                app::run_filter_session(&catalog, &config, "/listings", &query, edits)
                    .await?;
            if let Some(last) = report.navigations.last() {
                println!(
                    "{} (settled after {:?})",
                    last.target(),
                    report.settled_after
                );
            }
            if report.rows.is_empty() {
                println!("No listings match {:?}", report.query);
            }
            for row in report.rows {
                println!("{row}");
            }
        }
    }

    Ok(())
}
