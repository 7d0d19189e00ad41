pub mod config;
pub mod errors;
pub mod models;

pub use config::AnalyzerConfig;
pub use errors::LexError;
pub use models::{
    Category,
    FrequencyBand,
    LexicalKey,
    SummaryStats,
};
