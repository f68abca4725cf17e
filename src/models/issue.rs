use serde::{Deserialize, Serialize};
use std::fmt;

/// 已检测问题的标识符
///
/// Serialized as the exact display string so it stays a stable join key
/// between checks, the compliance table and the risk engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueKey {
    #[serde(rename = "No HTTPS")]
    NoHttps,
    #[serde(rename = "Form not secure")]
    FormNotSecure,
    #[serde(rename = "Privacy policy missing")]
    PrivacyPolicyMissing,
    #[serde(rename = "Consent checkbox missing")]
    ConsentCheckboxMissing,
    #[serde(rename = "Missing Security Header")]
    MissingSecurityHeader,
    #[serde(rename = "Insecure Cookies")]
    InsecureCookies,
    #[serde(rename = "Trackers Detected")]
    TrackersDetected,
    #[serde(rename = "Missing CSRF Token")]
    MissingCsrfToken,
}

impl IssueKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKey::NoHttps => "No HTTPS",
            IssueKey::FormNotSecure => "Form not secure",
            IssueKey::PrivacyPolicyMissing => "Privacy policy missing",
            IssueKey::ConsentCheckboxMissing => "Consent checkbox missing",
            IssueKey::MissingSecurityHeader => "Missing Security Header",
            IssueKey::InsecureCookies => "Insecure Cookies",
            IssueKey::TrackersDetected => "Trackers Detected",
            IssueKey::MissingCsrfToken => "Missing CSRF Token",
        }
    }
}

impl fmt::Display for IssueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Likelihood/Impact 评级（5x5 风险矩阵的一个单元格）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRating {
    pub likelihood: u32,
    pub impact: u32,
}

impl IssueRating {
    pub const fn new(likelihood: u32, impact: u32) -> Self {
        Self { likelihood, impact }
    }
}

/// 按字段覆盖默认评级
#[derive(Debug, Clone, Copy, Default)]
pub struct RatingOverride {
    pub likelihood: Option<u32>,
    pub impact: Option<u32>,
}

/// 风险等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "LOW")]
    Low,
    #[serde(rename = "MEDIUM")]
    Medium,
    #[serde(rename = "HIGH")]
    High,
}

impl RiskLevel {
    /// 阈值映射：>= 0.66 HIGH，>= 0.33 MEDIUM，否则 LOW
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 0.66 {
            RiskLevel::High
        } else if percent >= 0.33 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
