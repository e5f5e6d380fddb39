//! A binary to generate an IGV session for multiple individuals.
//!
//! ```shell
//! cargo run --bin=igv-multi-session --features=binaries -- \
//!     --samples 200081,200082,200083 \
//!     --locus chr14:100826000-100827000 \
//!     --out trio_session.xml
//! ```
//!
//! Alignments are never included. Each individual contributes their phased
//! methylation and haplotype blocks, stacked in the order given.

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use igv_session::Config;
use igv_session::config::DEFAULT_BASE_URL;
use igv_session::config::DEFAULT_GENOME;
use igv_session::config::MethylationType;
use igv_session::input::Request;
use igv_session::output;
use tracing::debug;
use tracing::info;
use tracing_log::AsTrace as _;
use tracing_subscriber::EnvFilter;

/// Generates a multi-sample IGV session file without alignments.
#[derive(Parser)]
struct Args {
    /// A comma-separated list of sample IDs (e.g., `200081,200082`).
    #[arg(long)]
    samples: String,

    /// The initial locus to display (e.g., `chr14:100826000-100827000`).
    #[arg(long)]
    locus: String,

    /// The output file name within the `igv-sessions` directory.
    #[arg(long)]
    out: Option<String>,

    /// The genome build.
    #[arg(long, default_value = DEFAULT_GENOME)]
    genome: String,

    /// The base URL of the file server hosting the data.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// The methylation calls to display (`count` or `model`).
    #[arg(long, default_value = "count")]
    methylation_type: MethylationType,

    #[command(flatten)]
    verbose: Verbosity,
}

fn run(args: &Args) -> Result<()> {
    let request = Request::multiple(&args.samples, &args.locus, args.out.as_deref())
        .context("resolving the command line input")?;

    for sample in request.samples().iter() {
        debug!("sample: {sample}");
    }

    let config = Config::default()
        .with_genome(&args.genome)
        .with_base_url(&args.base_url)
        .with_methylation(args.methylation_type);

    let session = request
        .session(config)
        .context("building the session")?;
    info!(
        "built a session for {} samples with {} tracks at {}",
        request.samples().len(),
        session.tracks().len(),
        session.locus()
    );

    output::write_session(request.output(), &session)
        .with_context(|| format!("writing {}", request.output().display()))?;

    println!(
        "Multi-sample IGV session created: {}",
        request.output().display()
    );

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    match std::env::var("RUST_LOG") {
        Ok(_) => tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init(),
        Err(_) => tracing_subscriber::fmt()
            .with_max_level(args.verbose.log_level_filter().as_trace())
            .with_writer(std::io::stderr)
            .init(),
    };

    run(&args)
}
