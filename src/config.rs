//! Experiment configuration.

use crate::error::{PercolationError, Result};

/// Configuration for a Monte Carlo threshold experiment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsConfig {
    /// Grid size N (N×N sites).
    pub n: usize,
    /// Number of independent trials.
    pub trials: usize,
    /// Seed for reproducible runs. `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            n: 200,
            trials: 100,
            seed: None,
        }
    }
}

impl StatsConfig {
    /// Parse `<n> <trials> [seed]` (program name already stripped).
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();
        let n = parse_positional(args.next(), "n")?;
        let trials = parse_positional(args.next(), "trials")?;
        let seed = args
            .next()
            .map(|s| parse_value::<u64>(s.as_ref(), "seed"))
            .transpose()?;

        if let Some(extra) = args.next() {
            return Err(PercolationError::invalid(format!(
                "unexpected argument '{}'",
                extra.as_ref()
            )));
        }

        let config = Self { n, trials, seed };
        config.validate()?;
        Ok(config)
    }

    /// Both the grid size and the trial count must be positive.
    pub fn validate(&self) -> Result<()> {
        if self.n == 0 {
            return Err(PercolationError::invalid("grid size must be positive, got 0"));
        }
        if self.trials == 0 {
            return Err(PercolationError::invalid("trial count must be positive, got 0"));
        }
        Ok(())
    }
}

fn parse_positional<S: AsRef<str>>(arg: Option<S>, name: &str) -> Result<usize> {
    let arg = arg.ok_or_else(|| PercolationError::invalid(format!("missing <{}>", name)))?;
    parse_value(arg.as_ref(), name)
}

fn parse_value<T: std::str::FromStr>(raw: &str, name: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| PercolationError::invalid(format!("{} must be a non-negative integer, got '{}'", name, raw)))
}
