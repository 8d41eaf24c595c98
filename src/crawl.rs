//! Builds a [`LinkGraph`] out of a directory of HTML pages.

use crate::{LinkGraph, Result};
use regex::Regex;
use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::Path,
    sync::LazyLock,
};
use tracing::debug;

static HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).expect("Invalid regex"));

/// Reads every `*.html` file directly under `dir`.
///
/// A page keeps only the links pointing at other pages of the same directory.
pub fn crawl<P: AsRef<Path>>(dir: P) -> Result<LinkGraph> {
    let dir = dir.as_ref();
    let mut pages: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.ends_with(".html") || !entry.path().is_file() {
            continue;
        }
        let contents = fs::read_to_string(entry.path())?;
        let links = extract_links(&contents)
            .filter(|l| *l != name)
            .map(str::to_string)
            .collect();
        pages.insert(name, links);
    }

    let known: BTreeSet<String> = pages.keys().cloned().collect();
    for links in pages.values_mut() {
        links.retain(|l| known.contains(l));
    }
    let graph = LinkGraph::new(pages)?;
    debug!(
        dir = %dir.display(),
        pages = graph.page_size(),
        links = graph.edge_size(),
        "crawled"
    );
    Ok(graph)
}

fn extract_links(html: &str) -> impl Iterator<Item = &str> {
    HREF.captures_iter(html)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str()))
}
