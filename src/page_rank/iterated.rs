use super::*;
use crate::{error::check_damping, *};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Fixed-point iteration of the PageRank equation.
///
/// Rounds sweep pages in graph order and overwrite each rank as soon as it is
/// computed, so a page later in the sweep already sees the new ranks of the
/// pages before it. Dangling pages hand out no rank at all.
pub struct IteratedPageRank<'a> {
    graph: &'a LinkGraph,
    damping: f64,
    threshold: f64,
    max_rounds: Option<usize>,
    // page -> [(page linking to it, 1 / out-degree of that page)]
    in_links: HashMap<&'a str, Vec<(&'a str, f64)>, ahash::RandomState>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    pub threshold: f64,
    pub max_rounds: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            threshold: 0.0005,
            max_rounds: Some(10_000),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: Distribution,
    /// Change of each page in the last round.
    pub delta: Distribution,
    pub rounds: usize,
}

impl<'a> IteratedPageRank<'a> {
    pub fn new(g: &'a LinkGraph, config: &Config) -> crate::Result<Self> {
        g.ensure_non_empty()?;
        check_damping(config.damping, false)?;
        let threshold = config.threshold;
        if !(threshold.is_finite() && threshold > 0.0) {
            return Err(Error::InvalidInput(format!("threshold={threshold}")));
        }
        let in_links = {
            let mut in_links: HashMap<_, Vec<_>, ahash::RandomState> =
                g.iter_pages().map(|v| (v, vec![])).collect();
            for (u, outs) in g.iter() {
                let unit = 1.0 / (outs.len() as f64);
                for v in outs.iter() {
                    in_links.get_mut(v.as_str()).unwrap().push((u, unit));
                }
            }
            in_links
        };
        Ok(Self {
            graph: g,
            damping: config.damping,
            threshold,
            max_rounds: config.max_rounds,
            in_links,
        })
    }
}

impl PageRank for IteratedPageRank<'_> {
    type Result = self::Result;

    fn calc(&mut self) -> crate::Result<Self::Result> {
        let damping = self.damping;
        let n = self.graph.page_size();
        let teleport = (1.0 - damping) / (n as f64);
        let mut p = uniform(self.graph);
        let mut delta = zeros(self.graph);
        let mut rounds = 0;
        loop {
            if let Some(max) = self.max_rounds {
                if rounds >= max {
                    return Err(Error::NonConvergence { rounds });
                }
            }
            rounds += 1;

            let mut settled = 0;
            for v in self.graph.iter_pages() {
                let sigma: f64 = self.in_links[v]
                    .iter()
                    .map(|(u, unit)| p.get(*u).unwrap() * unit)
                    .sum();
                let new = teleport + damping * sigma;
                let old = p.get_mut(v).unwrap();
                let d = (*old - new).abs();
                if d < self.threshold {
                    settled += 1;
                }
                *old = new;
                *delta.get_mut(v).unwrap() = d;
            }
            trace!(round = rounds, delta = norm_1(&delta), "iterated");

            if settled == n {
                debug!(rounds, "converged");
                return Ok(Self::Result {
                    page_rank: p,
                    delta,
                    rounds,
                });
            }
        }
    }
}

impl PageRankResult for self::Result {
    fn page_rank(&self) -> &Distribution {
        &self.page_rank
    }
}

/// Iterates PageRank over `graph` until no page moves by `0.0005` or more.
pub fn iterate_rank(graph: &LinkGraph, damping: f64) -> crate::Result<Distribution> {
    let cfg = Config {
        damping,
        ..Config::default()
    };
    let mut ipr = IteratedPageRank::new(graph, &cfg)?;
    Ok(ipr.calc()?.page_rank)
}
