mod dataset;
mod namegen;
mod records;

use clap::Parser;
use dataset::{Dataset, SeedPlan};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Cabinet seed generator — synthetic organizations for bulk loading.
#[derive(Parser)]
#[command(name = "seedgen")]
struct Args {
    /// Name of the organization to create
    #[arg(long)]
    name: String,

    /// Number of users to create
    #[arg(long, default_value_t = 100)]
    users: u64,

    /// Number of items (files and folders) to create
    #[arg(long, default_value_t = 10_000)]
    items: u64,

    /// Number of sharing links to create
    #[arg(long, default_value_t = 100_000)]
    sharing_links: u64,

    /// RNG seed; drawn from entropy and logged when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Output file for NDJSON records; stdout when omitted
    #[arg(long)]
    output: Option<PathBuf>,
}

fn write_ndjson<W: Write>(mut out: W, data: &Dataset) -> io::Result<()> {
    for record in data.records() {
        serde_json::to_writer(&mut out, &record)?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // Always log the seed so any run can be replayed exactly.
    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(
        seed,
        org = %args.name,
        users = args.users,
        items = args.items,
        sharing_links = args.sharing_links,
        "generating organization"
    );

    let plan = SeedPlan {
        org_name: args.name,
        users: args.users,
        items: args.items,
        sharing_links: args.sharing_links,
    };

    let mut rng = StdRng::seed_from_u64(seed);
    let data = match dataset::generate(&mut rng, &plan) {
        Ok(data) => data,
        Err(e) => {
            tracing::error!(error = %e, "generation failed");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        users = data.users.len(),
        items = data.items.len(),
        sharing_links = data.sharing_links.len(),
        records = data.record_count(),
        "dataset generated"
    );

    let result = match &args.output {
        Some(path) => File::create(path)
            .and_then(|file| write_ndjson(BufWriter::with_capacity(1 << 20, file), &data)),
        None => write_ndjson(BufWriter::with_capacity(1 << 20, io::stdout().lock()), &data),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "failed to write records");
        return ExitCode::FAILURE;
    }

    if let Some(path) = &args.output {
        tracing::info!(path = %path.display(), records = data.record_count(), "seed file written");
    }
    ExitCode::SUCCESS
}
