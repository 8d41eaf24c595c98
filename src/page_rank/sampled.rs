use super::*;
use crate::{error::check_damping, *};
use rand::Rng;
use tracing::debug;

/// Random-surfer estimate of PageRank.
///
/// The estimate is the running mean of the transition distributions of the
/// pages the surfer stands on. With a single sample it is the point mass of
/// the starting page.
pub struct SampledPageRank<'a, R>
where
    R: Rng,
{
    graph: &'a LinkGraph,
    damping: f64,
    samples: usize,
    rng: R,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    pub samples: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            samples: 10_000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: Distribution,
    pub samples: usize,
}

impl<'a, R: Rng> SampledPageRank<'a, R> {
    pub fn new(g: &'a LinkGraph, config: &Config, rng: R) -> crate::Result<Self> {
        g.ensure_non_empty()?;
        check_damping(config.damping, false)?;
        if config.samples < 1 {
            return Err(Error::InvalidInput(format!("samples={}", config.samples)));
        }
        Ok(Self {
            graph: g,
            damping: config.damping,
            samples: config.samples,
            rng,
        })
    }
}

impl<R: Rng> PageRank for SampledPageRank<'_, R> {
    type Result = self::Result;

    fn calc(&mut self) -> crate::Result<Self::Result> {
        let g = self.graph;
        let pages: Vec<&str> = g.iter_pages().collect();
        let mut page = pages[self.rng.random_range(0..pages.len())];
        debug!(
            start = page,
            damping = self.damping,
            samples = self.samples,
            "sampling"
        );

        let mut avg = zeros(g);
        if self.samples == 1 {
            *avg.get_mut(page).unwrap() = 1.0;
            return Ok(Self::Result {
                page_rank: avg,
                samples: 1,
            });
        }

        for k in 1..self.samples {
            let step = transition_model(g, page, self.damping)?;
            let k_f = k as f64;
            for (v, a) in avg.iter_mut() {
                let x = step.get(v).unwrap();
                *a = ((k_f - 1.0) * *a + x) / k_f;
            }
            page = weighted_choice(g, &step, &mut self.rng);
        }
        Ok(Self::Result {
            page_rank: avg,
            samples: self.samples,
        })
    }
}

impl PageRankResult for self::Result {
    fn page_rank(&self) -> &Distribution {
        &self.page_rank
    }
}

/// Samples `sample_count` steps of a random surfer over `graph`.
pub fn sample_rank<R: Rng>(
    graph: &LinkGraph,
    damping: f64,
    sample_count: usize,
    rng: R,
) -> crate::Result<Distribution> {
    let cfg = Config {
        damping,
        samples: sample_count,
    };
    let mut spr = SampledPageRank::new(graph, &cfg, rng)?;
    Ok(spr.calc()?.page_rank)
}
