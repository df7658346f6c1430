pub mod taxonomy;
pub mod types;

pub use taxonomy::{Category, Severity};
pub use types::{
    AnalysisResult, Metadata, SmellRecord, Summary, DEFAULT_CONFIDENCE, DEFAULT_DESCRIPTION,
    DEFAULT_SMELL_TYPE,
};
