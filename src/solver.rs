//! Dispatch LeetCode-format input to the solution crates.
//!
//! Input holds one JSON value per argument, separated by newlines (as in
//! LeetCode's example test cases) or by `;` for convenience on the command
//! line.

use log::debug;
use p1_two_sum::Solution as TwoSum;
use p217_contains_duplicate::Solution as ContainsDuplicate;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolveError {
    #[error("no local solution for problem {0}")]
    UnknownProblem(u32),
    #[error("missing argument `{name}`")]
    MissingArgument { name: &'static str },
    #[error("invalid argument `{name}`: {source}")]
    InvalidArgument {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("expected {expected} argument(s), found {found}")]
    TooManyArguments { expected: usize, found: usize },
}

/// Parsed arguments, consumed in declaration order.
struct Args<'a> {
    raw: Vec<&'a str>,
    next: usize,
}

impl<'a> Args<'a> {
    fn parse(input: &'a str) -> Self {
        let raw = input
            .split(['\n', ';'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        Self { raw, next: 0 }
    }

    fn take<T: DeserializeOwned>(&mut self, name: &'static str) -> Result<T, SolveError> {
        let raw = self
            .raw
            .get(self.next)
            .ok_or(SolveError::MissingArgument { name })?;
        self.next += 1;
        serde_json::from_str(raw).map_err(|source| SolveError::InvalidArgument { name, source })
    }

    fn finish(self) -> Result<(), SolveError> {
        if self.raw.len() > self.next {
            return Err(SolveError::TooManyArguments {
                expected: self.next,
                found: self.raw.len(),
            });
        }
        Ok(())
    }
}

/// Run the solution for `id` on `input` and return its answer as JSON.
pub fn solve(id: u32, input: &str) -> Result<Value, SolveError> {
    let mut args = Args::parse(input);

    let answer = match id {
        1 => {
            let nums: Vec<i32> = args.take("nums")?;
            let target: i32 = args.take("target")?;
            args.finish()?;
            debug!("two_sum(len={}, target={target})", nums.len());
            // usize indices, so no length bound applies
            let pair = TwoSum::two_sum(&nums, target).map_or_else(Vec::new, |(i, j)| vec![i, j]);
            Value::from(pair)
        }
        217 => {
            let nums: Vec<i32> = args.take("nums")?;
            args.finish()?;
            debug!("contains_duplicate(len={})", nums.len());
            Value::from(ContainsDuplicate::contains_duplicate(&nums))
        }
        other => return Err(SolveError::UnknownProblem(other)),
    };

    Ok(answer)
}
