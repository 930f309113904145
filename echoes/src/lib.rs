// CLI modules
pub mod cli;
pub mod output;
