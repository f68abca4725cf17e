use crate::models::issue::{IssueKey, RiskLevel};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 单项检查的结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub ok: bool,
    pub msg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl CheckResult {
    pub fn passed(msg: impl Into<String>) -> Self {
        Self {
            ok: true,
            msg: msg.into(),
            meta: None,
        }
    }

    pub fn failed(msg: impl Into<String>) -> Self {
        Self {
            ok: false,
            msg: msg.into(),
            meta: None,
        }
    }

    pub fn with_meta(mut self, meta: Value) -> Self {
        self.meta = Some(meta);
        self
    }
}

/// 全部检查结果，字段顺序即执行顺序（也是 JSON 输出顺序）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanChecks {
    pub https: CheckResult,
    pub forms: CheckResult,
    pub privacy_policy: CheckResult,
    pub consent: CheckResult,
    pub security_headers: CheckResult,
    pub cookies: CheckResult,
    pub trackers: CheckResult,
}

impl ScanChecks {
    /// 按执行顺序迭代（供报告输出使用）
    pub fn iter(&self) -> [(&'static str, &CheckResult); 7] {
        [
            ("https", &self.https),
            ("forms", &self.forms),
            ("privacy_policy", &self.privacy_policy),
            ("consent", &self.consent),
            ("security_headers", &self.security_headers),
            ("cookies", &self.cookies),
            ("trackers", &self.trackers),
        ]
    }
}

/// 单个问题的风险明细
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskEntry {
    pub issue: IssueKey,
    pub likelihood: u32,
    pub impact: u32,
    pub score: u32,
    pub laws: Vec<String>,
    pub recommendation: String,
}

/// 风险汇总报告，纯函数派生自 issue 列表
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskReport {
    pub breakdown: Vec<RiskEntry>,
    pub raw_total: u32,
    pub max_total: u32,
    pub percent: f64,
    pub normalized_score: u32,
    pub level: RiskLevel,
}

/// 单个 URL 的完整扫描结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    pub url: String,
    pub scanned_at: String,
    pub checks: ScanChecks,
    pub issues: Vec<IssueKey>,
    pub recommendations: Vec<String>,
    pub laws: Vec<String>,
    pub risk: RiskReport,
}
