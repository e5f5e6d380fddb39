//! A binary to generate an IGV session for a single individual.
//!
//! ```shell
//! cargo run --bin=igv-session --features=binaries 200081 chr14:100826000-100827000
//! ```
//!
//! The session is written to `igv-sessions/{individual}.{locus}.xml` and
//! includes the reference annotation, the phased methylation and haplotype
//! blocks, and (unless disabled) the haplotagged alignments.

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
use tracing::info;
use tracing_log::AsTrace as _;
use tracing_subscriber::EnvFilter;

/// Generates an IGV session file for a single individual with phased genomic
/// data.
#[derive(Parser)]
struct Args {
    /// The ID of the individual (e.g., `200081`).
    individual_id: String,

    /// The initial locus to display (e.g., `chr14:100826000-100827000`).
    locus: String,

    /// The genome build.
    #[arg(long, default_value = DEFAULT_GENOME)]
    genome: String,

    /// The base URL of the file server hosting the data.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// The methylation calls to display (`count` or `model`).
    #[arg(long, default_value = "count")]
    methylation_type: MethylationType,

    /// Leaves out the haplotagged alignments.
    #[arg(long, default_value_t = false)]
    no_alignments: bool,

    #[command(flatten)]
    verbose: Verbosity,
}

fn run(args: &Args) -> Result<()> {
    let request = Request::single(&args.individual_id, &args.locus)
        .context("resolving the command line input")?;

    let config = Config::default()
        .with_genome(&args.genome)
        .with_base_url(&args.base_url)
        .with_methylation(args.methylation_type)
        .with_alignments(!args.no_alignments);

    let session = request
        .session(config)
        .context("building the session")?;
    info!(
        "built a session with {} tracks at {}",
        session.tracks().len(),
        session.locus()
    );

    output::write_session(request.output(), &session)
        .with_context(|| format!("writing {}", request.output().display()))?;

    println!("IGV session file created: {}", request.output().display());

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
