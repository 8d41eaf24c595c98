use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown page: {0}")]
    UnknownPage(String),

    #[error("no convergence after {rounds} rounds")]
    NonConvergence { rounds: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub(crate) fn check_damping(damping: f64, upper_inclusive: bool) -> Result<()> {
    let ok = if upper_inclusive {
        (0.0..=1.0).contains(&damping)
    } else {
        (0.0..1.0).contains(&damping)
    };
    if ok {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!("damping={damping}")))
    }
}
