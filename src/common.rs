use crate::graph::{LinkGraph, Page};
use rand::Rng;
use std::{collections::HashMap, hash::Hash};

/// Page → probability mass.
pub type Distribution = HashMap<Page, f64, ahash::RandomState>;

pub fn norm_1<K: Ord + Hash>(v: &HashMap<K, f64, ahash::RandomState>) -> f64 {
    v.values().map(|x| x.abs()).sum()
}

pub fn uniform(graph: &LinkGraph) -> Distribution {
    let n = graph.page_size() as f64;
    graph
        .iter_pages()
        .map(|p| (p.to_string(), 1.0 / n))
        .collect()
}

pub fn zeros(graph: &LinkGraph) -> Distribution {
    graph.iter_pages().map(|p| (p.to_string(), 0.0)).collect()
}

/// Picks a page with probability proportional to its mass in `dist`.
///
/// Cumulative mass is accumulated over `graph`'s page order and the first page
/// whose cumulative mass exceeds a uniform draw in `[0, 1)` wins. If rounding
/// leaves the draw beyond the total, the last page carrying mass is taken.
pub fn weighted_choice<'g, R>(graph: &'g LinkGraph, dist: &Distribution, rng: &mut R) -> &'g str
where
    R: Rng + ?Sized,
{
    let u: f64 = rng.random();
    let mut acc = 0.0;
    let mut last = None;
    for page in graph.iter_pages() {
        let w = dist.get(page).copied().unwrap_or(0.0);
        if w <= 0.0 {
            continue;
        }
        acc += w;
        if acc > u {
            return page;
        }
        last = Some(page);
    }
    last.or_else(|| graph.iter_pages().last())
        .expect("weighted choice over an empty graph")
}
