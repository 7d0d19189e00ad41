pub mod accumulator;
pub mod analyzer;

pub use accumulator::FrequencyRecord;
pub use analyzer::WordAnalyzer;
