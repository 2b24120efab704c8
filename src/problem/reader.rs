//! Instance file parsing.
//!
//! The format is whitespace-tokenised and newline-insensitive:
//!
//! ```text
//! <n_items> <capacity> <n_conflicts>
//! <profit_1> ... <profit_n>
//! <weight_1> ... <weight_n>
//! <u_1> <v_1>
//! <u_2> <v_2>
//! ```
//!
//! Conflict endpoints are 1-based in the file and converted to 0-based
//! on read. The declared `n_conflicts` is informative only: edges are
//! read until end of input or the first token that fails to parse.

use std::fs;
use std::path::Path;

use thiserror::Error;

use super::instance::Instance;

/// Failure to load an instance file.
#[derive(Debug, Error)]
pub enum InstanceError {
    #[error("failed to read instance file")]
    Io(#[from] std::io::Error),

    #[error("missing {0} token")]
    MissingToken(&'static str),

    #[error("invalid {what} token '{token}'")]
    InvalidToken { what: &'static str, token: String },

    #[error("instance declares zero items")]
    NoItems,

    #[error("instance declares zero capacity")]
    NoCapacity,
}

fn next_u64<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &'static str,
) -> Result<u64, InstanceError> {
    let token = tokens.next().ok_or(InstanceError::MissingToken(what))?;
    token.parse().map_err(|_| InstanceError::InvalidToken {
        what,
        token: token.to_owned(),
    })
}

impl Instance {
    /// Parses an instance from text.
    ///
    /// Out-of-range or self-loop conflict pairs are silently discarded;
    /// everything else malformed is an error.
    pub fn parse(text: &str) -> Result<Self, InstanceError> {
        let mut tokens = text.split_whitespace();

        let n_items = next_u64(&mut tokens, "item count")? as usize;
        let capacity = next_u64(&mut tokens, "capacity")?;
        let _declared_conflicts = next_u64(&mut tokens, "conflict count")?;

        if n_items == 0 {
            return Err(InstanceError::NoItems);
        }
        if capacity == 0 {
            return Err(InstanceError::NoCapacity);
        }

        let mut profits = Vec::with_capacity(n_items);
        for _ in 0..n_items {
            profits.push(next_u64(&mut tokens, "profit")?);
        }
        let mut weights = Vec::with_capacity(n_items);
        for _ in 0..n_items {
            weights.push(next_u64(&mut tokens, "weight")?);
        }

        // Edge pairs until EOF; a token that is not an integer ends the
        // list, matching a stream read that stops on failure.
        let mut conflicts = Vec::new();
        loop {
            let Some(first) = tokens.next() else { break };
            let Ok(u) = first.parse::<usize>() else { break };
            let Some(second) = tokens.next() else { break };
            let Ok(v) = second.parse::<usize>() else { break };

            if u == 0 || v == 0 || u > n_items || v > n_items || u == v {
                continue;
            }
            conflicts.push((u - 1, v - 1));
        }

        Ok(Instance::from_parts(capacity, profits, weights, conflicts))
    }

    /// Loads an instance from a file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InstanceError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }
}
