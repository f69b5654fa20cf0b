mod analysis;

pub use analysis::AnalysisResult;
