//! PlotDesk - desktop plotting with canned formulas and custom X/Y data.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use plotdesk::data::export;
use plotdesk::data::plot_kind::generated_export_series;
use plotdesk::{custom_plot_request, run_plotdesk, Figure, PlotDeskConfig, PlotKind};

#[derive(Parser, Debug)]
#[command(name = "plotdesk")]
#[command(about = "Plot canned formulas or your own X/Y data", long_about = None)]
struct Args {
    /// Settings file (YAML). Defaults to ~/.plotdesk/config.yaml when present
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. "info" or "plotdesk=debug" (overrides RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a canned plot to an image file without opening a window
    Render {
        /// linear, sine, cosine, quadratic, exponential, logarithmic, scatter or random
        kind: PlotKind,
        /// Output path (.png, .jpg or .jpeg)
        out: PathBuf,
        /// Seed for the random kinds
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Write the CSV export (X = 0..10, Y = random) without opening a window
    Csv {
        out: PathBuf,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Plot comma-separated X/Y values to an image file
    Custom {
        #[arg(long, allow_hyphen_values = true)]
        x: String,
        #[arg(long, allow_hyphen_values = true)]
        y: String,
        out: PathBuf,
    },
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

fn init_logging(level: Option<&str>) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if let Some(level) = level {
        builder.parse_filters(level);
    }
    builder.init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_level.as_deref());

    let cfg = PlotDeskConfig::resolve(args.config.as_deref())
        .with_context(|| "failed to load configuration")?;
    let [w, h] = cfg.figure_size;

    match args.command {
        None => run_plotdesk(cfg).map_err(|e| anyhow!("window error: {e}")),
        Some(Command::Render { kind, out, seed }) => {
            let req = kind.generate(&mut rng_from(seed));
            let path = Figure::new(&req, w, h).with_grid(cfg.show_grid).save(&out)?;
            println!("{}", path.display());
            Ok(())
        }
        Some(Command::Csv { out, seed }) => {
            let series = generated_export_series(&mut rng_from(seed));
            export::write_csv_path(&out, &series)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("{}", out.display());
            Ok(())
        }
        Some(Command::Custom { x, y, out }) => match custom_plot_request(&x, &y) {
            Ok(req) => {
                let path = Figure::new(&req, w, h).with_grid(cfg.show_grid).save(&out)?;
                println!("{}", path.display());
                Ok(())
            }
            Err(e) => {
                log::warn!("{e}");
                eprintln!("{}", e.kind().user_message());
                std::process::exit(2);
            }
        },
    }
}
