pub mod constants;
pub mod processor;
pub mod report;
