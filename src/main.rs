//! Ranks the pages of an HTML corpus twice: by sampling a random surfer and
//! by iterating the PageRank equation.

use anyhow::{Context, Result};
use clap::Parser;
use pagerank::{
    crawl,
    page_rank::{iterated, sampled, IteratedPageRank, PageRank, PageRankResult, SampledPageRank},
};
use rand::{rngs::StdRng, SeedableRng};
use std::path::PathBuf;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

#[derive(Parser)]
#[command(name = "pagerank", version, about = "PageRank of a directory of HTML pages")]
struct Cli {
    /// Directory holding the `*.html` pages
    corpus: PathBuf,

    /// Probability of following a link rather than jumping to a random page
    #[arg(long, env = "PAGERANK_DAMPING", default_value_t = 0.85)]
    damping: f64,

    /// Number of pages the random surfer visits
    #[arg(long, env = "PAGERANK_SAMPLES", default_value_t = 10_000)]
    samples: usize,

    /// Seed for the random surfer, for reproducible runs
    #[arg(long, env = "PAGERANK_SEED")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();
    let graph = crawl(&cli.corpus)
        .with_context(|| format!("failed to crawl {}", cli.corpus.display()))?;

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let cfg = sampled::Config {
        damping: cli.damping,
        samples: cli.samples,
    };
    let ranks = SampledPageRank::new(&graph, &cfg, rng)?.calc()?;
    println!("PageRank Results from Sampling (n = {})", ranks.samples);
    print!("{}", ranks.report(&graph));

    let cfg = iterated::Config {
        damping: cli.damping,
        ..iterated::Config::default()
    };
    let ranks = IteratedPageRank::new(&graph, &cfg)?.calc()?;
    println!("PageRank Results from Iteration");
    print!("{}", ranks.report(&graph));

    Ok(())
}
