mod traits;
pub use self::traits::*;
pub mod iterated;
pub use self::iterated::{iterate_rank, IteratedPageRank};
pub mod sampled;
pub use self::sampled::{sample_rank, SampledPageRank};
mod transition;
pub use self::transition::transition_model;
