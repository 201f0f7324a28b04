pub mod assessment;
pub mod catalog;
pub mod chat;
pub mod connections;
pub mod exploration;
pub mod llm;
pub mod search;
pub mod symptom;

pub use assessment::RiskScorer;
pub use catalog::ContentCatalog;
pub use chat::ChatStore;
pub use connections::ConnectionRegistry;
pub use exploration::PaperLibrary;
pub use llm::LlmClient;
pub use search::SearchIndex;
pub use symptom::SymptomAnalysisService;
