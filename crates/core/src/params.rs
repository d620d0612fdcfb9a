use std::{fmt, num::IntErrorKind, ops::RangeInclusive, str::FromStr};

use crate::errors::ParamError;

pub const GENERATIONS_RANGE: RangeInclusive<u32> = 1..=40;
pub const LITTER_RANGE: RangeInclusive<u32> = 1..=5;

fn check(name: &'static str, value: i64, range: &RangeInclusive<u32>) -> Result<u32, ParamError> {
    if value < i64::from(*range.start()) || value > i64::from(*range.end()) {
        return Err(out_of_range(name, value.to_string(), range));
    }
    Ok(value as u32)
}

fn out_of_range(name: &'static str, value: String, range: &RangeInclusive<u32>) -> ParamError {
    ParamError::OutOfRange {
        name,
        value,
        min: *range.start(),
        max: *range.end(),
    }
}

fn parse(name: &'static str, input: &str, range: &RangeInclusive<u32>) -> Result<u32, ParamError> {
    let trimmed = input.trim();
    let value = trimmed.parse::<i64>().map_err(|e| match e.kind() {
        // still an integer, just too large to hold
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            out_of_range(name, trimmed.to_string(), range)
        }
        _ => ParamError::Malformed {
            name,
            input: input.to_string(),
        },
    })?;
    check(name, value, range)
}

/// Number of generations to evaluate, always within [`GENERATIONS_RANGE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generations(u32);

impl Generations {
    pub const NAME: &'static str = "generations";

    pub fn new(value: i64) -> Result<Self, ParamError> {
        check(Self::NAME, value, &GENERATIONS_RANGE).map(Generations)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl FromStr for Generations {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(Self::NAME, s, &GENERATIONS_RANGE).map(Generations)
    }
}

impl fmt::Display for Generations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Offspring pairs produced per mature pair each generation, always within [`LITTER_RANGE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Litter(u32);

impl Litter {
    pub const NAME: &'static str = "litter";

    pub fn new(value: i64) -> Result<Self, ParamError> {
        check(Self::NAME, value, &LITTER_RANGE).map(Litter)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl FromStr for Litter {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(Self::NAME, s, &LITTER_RANGE).map(Litter)
    }
}

impl fmt::Display for Litter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
