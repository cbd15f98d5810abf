use thiserror::Error;

/// Rejections raised while building a [`RarityTable`](crate::RarityTable).
#[derive(Debug, Error, PartialEq)]
pub enum ProbError {
    #[error("weights slice is empty")]
    Empty,
    #[error("weights contain a negative value at index {index}: {value}")]
    Negative { index: usize, value: f64 },
    #[error("weight at index {index} is not finite")]
    NonFinite { index: usize },
    #[error("sum of weights is zero")]
    ZeroSum,
}

/// Failures of [`CategoricalSampler::draw_until`](crate::CategoricalSampler::draw_until).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrawError {
    #[error("target `{target}` is not declared in the table")]
    UnknownTarget { target: String },
    #[error("gave up on `{target}` after {draws} draws")]
    Exhausted { target: String, draws: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    #[error("cannot compute percentages of an empty session")]
    EmptySession,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown rarity `{0}`")]
pub struct ParseRarityError(pub String);
