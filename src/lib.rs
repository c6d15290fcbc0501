pub mod output;
pub mod parser;
pub mod ranker;
pub mod scoring;
pub mod stats;
