use crate::{Error, Result};
use std::collections::{BTreeMap, BTreeSet};

pub type Page = String;

/// An immutable hyperlink graph over a closed set of pages.
///
/// Pages iterate in ascending order of their identifiers, and every
/// order-dependent computation in this crate follows that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkGraph {
    links: BTreeMap<Page, BTreeSet<Page>>,
}

impl LinkGraph {
    /// Builds a graph from `(page, outgoing links)` pairs.
    ///
    /// Every link target must itself be one of the pages.
    /// Repeated pages have their links merged.
    pub fn new<I, P, L>(pages: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<Page>,
        L: IntoIterator,
        L::Item: Into<Page>,
    {
        let mut links: BTreeMap<Page, BTreeSet<Page>> = BTreeMap::new();
        for (page, outs) in pages {
            links
                .entry(page.into())
                .or_default()
                .extend(outs.into_iter().map(Into::into));
        }
        for (page, outs) in links.iter() {
            if let Some(missing) = outs.iter().find(|v| !links.contains_key(*v)) {
                return Err(Error::InvalidInput(format!(
                    "{page} links to {missing}, which is not in the graph"
                )));
            }
        }
        Ok(Self { links })
    }

    pub fn page_size(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn iter_pages(&self) -> impl Iterator<Item = &str> + '_ {
        self.links.keys().map(String::as_str)
    }

    pub fn out_links(&self, page: &str) -> Option<&BTreeSet<Page>> {
        self.links.get(page)
    }

    pub fn edge_size(&self) -> usize {
        self.links.values().map(BTreeSet::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<Page>)> + '_ {
        self.links.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub(crate) fn ensure_non_empty(&self) -> Result<()> {
        if self.is_empty() {
            Err(Error::InvalidInput("empty graph".to_string()))
        } else {
            Ok(())
        }
    }
}
