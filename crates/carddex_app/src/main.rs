mod urls;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use carddex_engine::{FetchSettings, Pipeline, PipelineConfig, ReqwestFetcher};

#[derive(Parser)]
#[command(name = "carddex", about = "Scrape card detail pages into game-engine records")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Process a URL list file, one detail-page URL per line.
    Run(RunArgs),
}

#[derive(Args)]
struct RunArgs {
    /// Plain text file with one URL per line; blank lines are ignored.
    url_file: PathBuf,

    /// Where serialized card records are written.
    #[arg(long, default_value = "./output")]
    output_dir: PathBuf,

    /// Where card images are written.
    #[arg(long, default_value = "./image")]
    image_dir: PathBuf,

    /// Minimum milliseconds between requests to the source site.
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,

    /// Log at debug level.
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.command {
        Command::Run(args) => run(args),
    }
}

fn run(args: RunArgs) -> ExitCode {
    carddex_logging::init_terminal(args.verbose);

    let urls = match urls::read_url_list(&args.url_file) {
        Ok(urls) => urls,
        Err(err) => {
            log::error!("cannot read {}: {err}", args.url_file.display());
            return ExitCode::FAILURE;
        }
    };
    if urls.is_empty() {
        log::warn!("no URLs found in {}", args.url_file.display());
        return ExitCode::SUCCESS;
    }
    log::info!("{} URL(s) to process", urls.len());

    let settings = FetchSettings {
        courtesy_delay: Duration::from_millis(args.delay_ms),
        ..FetchSettings::default()
    };
    let pipeline = Pipeline::new(
        Box::new(ReqwestFetcher::new(settings)),
        PipelineConfig {
            output_dir: args.output_dir,
            image_dir: args.image_dir,
        },
    );

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            log::error!("failed to start runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(pipeline.run_batch(&urls)) {
        Ok(report) => {
            log::info!(
                "done: {} card(s) written, {} skipped",
                report.completed.len(),
                report.skipped.len()
            );
            if report.skipped.is_empty() {
                ExitCode::SUCCESS
            } else {
                // Not a full success: skips were already logged per URL.
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            log::error!("batch aborted: {err}");
            ExitCode::FAILURE
        }
    }
}
