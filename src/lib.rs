mod common;
pub use self::common::*;
mod error;
pub use self::error::{Error, Result};
mod graph;
pub use self::graph::{LinkGraph, Page};
pub mod crawl;
pub use self::crawl::crawl;

pub mod page_rank;
pub use self::page_rank::{iterate_rank, sample_rank, transition_model};
