use crate::{error::check_damping, Distribution, Error, LinkGraph, Result};

/// One step of the random surfer from `page`.
///
/// With probability `damping` the surfer follows one of `page`'s links picked
/// uniformly, otherwise it jumps to any page of the graph. A dangling page
/// jumps uniformly with certainty.
pub fn transition_model(graph: &LinkGraph, page: &str, damping: f64) -> Result<Distribution> {
    graph.ensure_non_empty()?;
    check_damping(damping, true)?;
    let links = graph
        .out_links(page)
        .ok_or_else(|| Error::UnknownPage(page.to_string()))?;

    let n = graph.page_size() as f64;
    if links.is_empty() {
        return Ok(crate::uniform(graph));
    }

    let base = (1.0 - damping) / n;
    let mut dist: Distribution = graph.iter_pages().map(|p| (p.to_string(), base)).collect();
    let unit = damping / (links.len() as f64);
    for v in links.iter() {
        *dist.get_mut(v).unwrap() += unit;
    }
    Ok(dist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::tests::RandomGraph;
    use crate::norm_1;
    use quickcheck_macros::quickcheck;

    #[test]
    fn dangling_page_is_uniform() {
        let g = LinkGraph::new([("1.html", vec![]), ("2.html", vec!["1.html"])]).unwrap();
        let d = transition_model(&g, "1.html", 0.85).unwrap();
        assert_eq!(d.len(), 2);
        assert!((d["1.html"] - 0.5).abs() < 1e-12, "{d:?}");
        assert!((d["2.html"] - 0.5).abs() < 1e-12, "{d:?}");
    }

    #[test]
    fn linked_pages_get_damped_share() {
        let g = LinkGraph::new([
            ("1.html", vec!["2.html", "3.html"]),
            ("2.html", vec!["3.html"]),
            ("3.html", vec!["2.html"]),
            ("4.html", vec![]),
        ])
        .unwrap();
        let d = transition_model(&g, "1.html", 0.85).unwrap();
        let base = 0.15 / 4.0;
        assert!((d["1.html"] - base).abs() < 1e-12);
        assert!((d["2.html"] - (base + 0.425)).abs() < 1e-12);
        assert!((d["3.html"] - (base + 0.425)).abs() < 1e-12);
        assert!((d["4.html"] - base).abs() < 1e-12);
    }

    #[test]
    fn self_link_counts() {
        let g = LinkGraph::new([("a", vec!["a"]), ("b", vec![])]).unwrap();
        let d = transition_model(&g, "a", 0.5).unwrap();
        assert!((d["a"] - 0.75).abs() < 1e-12);
        assert!((d["b"] - 0.25).abs() < 1e-12);
    }

    #[test]
    fn unknown_page() {
        let g = LinkGraph::new([("a", Vec::<&str>::new())]).unwrap();
        let res = transition_model(&g, "b", 0.85);
        assert!(matches!(res, Err(Error::UnknownPage(p)) if p == "b"));
    }

    #[test]
    fn invalid_input() {
        let empty = LinkGraph::default();
        assert!(matches!(
            transition_model(&empty, "a", 0.85),
            Err(Error::InvalidInput(_))
        ));
        let g = LinkGraph::new([("a", Vec::<&str>::new())]).unwrap();
        assert!(matches!(
            transition_model(&g, "a", 1.5),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            transition_model(&g, "a", f64::NAN),
            Err(Error::InvalidInput(_))
        ));
        assert!(transition_model(&g, "a", 1.0).is_ok());
    }

    #[quickcheck]
    fn sums_to_one(g: RandomGraph, d: u8) {
        let damping = f64::from(d) / 255.0;
        let g = &g.graph;
        for page in g.iter_pages() {
            let dist = transition_model(g, page, damping).unwrap();
            assert_eq!(dist.len(), g.page_size());
            assert!((norm_1(&dist) - 1.0).abs() < 1e-9, "{dist:?}");
            let links = g.out_links(page).unwrap();
            if links.is_empty() {
                continue;
            }
            let n = g.page_size() as f64;
            for (q, w) in dist.iter() {
                let mut expected = (1.0 - damping) / n;
                if links.contains(q) {
                    expected += damping / links.len() as f64;
                }
                assert!((w - expected).abs() < 1e-12, "{q}: {w} vs {expected}");
            }
        }
    }
}
