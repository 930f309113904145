use std::fmt;
use serde::Serialize;
use crate::processor::DataProcessor;

/// Outcome line chosen from the validity probe and the item count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    AllGood,
    NoData,
    SomethingWrong,
}

impl Status {
    #[must_use] 
    pub fn from_flags(is_valid: bool, is_empty: bool, count: usize) -> Self {
        if is_valid && count > 0 {
            Status::AllGood
        } else if is_empty {
            Status::NoData
        } else {
            Status::SomethingWrong
        }
    }

    #[must_use] 
    pub fn message(&self) -> &'static str {
        match self {
            Status::AllGood => "All good!",
            Status::NoData => "No data to process",
            Status::SomethingWrong => "Something went wrong",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Values derived from one processor run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub processor: String,
    pub processed: Option<String>,
    pub length: Option<usize>,
    pub count: usize,
    pub doubled: usize,
    pub remainder: usize,
    pub is_valid: bool,
    pub is_empty: bool,
    pub status: Status,
}

impl Report {
    /// Run `items` through the processor and `probe` through its validator
    #[must_use] 
    pub fn build<S: AsRef<str>>(processor: &DataProcessor, items: &[S], probe: &str) -> Self {
        let processed = processor.format_join(items);
        let length = processed.as_ref().map(|s| s.chars().count());

        let is_valid = processor.validate(probe);
        let is_empty = items.is_empty();

        let count = items.len();
        let doubled = count * 2;
        let remainder = count % 2;

        Report {
            processor: processor.name().to_string(),
            processed,
            length,
            count,
            doubled,
            remainder,
            is_valid,
            is_empty,
            status: Status::from_flags(is_valid, is_empty, count),
        }
    }

    /// An empty joined string counts as a failed run, same as no result
    #[must_use] 
    pub fn succeeded(&self) -> bool {
        self.processed.as_deref().is_some_and(|s| !s.is_empty())
    }
}
