pub mod models;
pub mod report;
pub mod security;
pub mod services;

pub use models::{CheckResult, IssueKey, RiskLevel, RiskReport, ScanResult};
pub use security::WebformScanner;
