use crate::{Distribution, LinkGraph};
use std::fmt;

pub trait PageRank {
    type Result: PageRankResult;

    fn calc(&mut self) -> crate::Result<Self::Result>;
}

pub trait PageRankResult {
    fn page_rank(&self) -> &Distribution;

    /// One `  {page}: {rank:.4}` line per page of `graph`, in page order.
    fn report<'a>(&'a self, graph: &'a LinkGraph) -> Report<'a> {
        Report {
            graph,
            page_rank: self.page_rank(),
        }
    }
}

pub struct Report<'a> {
    graph: &'a LinkGraph,
    page_rank: &'a Distribution,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for page in self.graph.iter_pages() {
            let p = self.page_rank.get(page).copied().unwrap_or(0.0);
            writeln!(f, "  {page}: {p:.4}")?;
        }
        Ok(())
    }
}
