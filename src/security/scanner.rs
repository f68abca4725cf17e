use crate::models::{IssueKey, ScanChecks, ScanResult};
use crate::security::{checks, risk};
use crate::services::{FetchResponse, Fetcher, Page};

/// 针对单个 URL 运行全部检查并汇总风险
pub struct WebformScanner {
    fetcher: Fetcher,
}

impl WebformScanner {
    pub fn new() -> Self {
        Self {
            fetcher: Fetcher::new(),
        }
    }

    /// 抓取并评估一个 URL；抓取失败时所有内容检查降级为失败状态
    pub async fn scan(&self, url: &str) -> ScanResult {
        let response = self.fetcher.fetch(url).await;
        Self::evaluate(url, response.as_ref())
    }

    /// 对已抓取（或抓取失败）的响应运行检查流水线
    ///
    /// 与网络解耦的纯函数，检查顺序即 issue 的插入顺序。
    pub fn evaluate(url: &str, response: Option<&FetchResponse>) -> ScanResult {
        let page = response
            .filter(|r| !r.body.is_empty())
            .map(|r| Page::parse(&r.body));

        let mut issues: Vec<IssueKey> = Vec::new();

        let https = checks::check_https(url);
        if !https.ok {
            issues.push(IssueKey::NoHttps);
        }

        let forms = match &page {
            Some(page) => checks::check_form_security(page),
            None => no_parse_result(),
        };
        if !forms.ok {
            issues.push(IssueKey::FormNotSecure);
        } else {
            // 表单存在但没有任何 CSRF 令牌字段，独立记一条问题
            let csrf_tokens = forms
                .meta
                .as_ref()
                .and_then(|m| m.get("csrf_tokens"))
                .and_then(|v| v.as_u64())
                .unwrap_or(0);
            if csrf_tokens == 0 {
                issues.push(IssueKey::MissingCsrfToken);
            }
        }

        let privacy_policy = match &page {
            Some(page) => checks::check_privacy_policy(page),
            None => no_parse_result(),
        };
        if !privacy_policy.ok {
            issues.push(IssueKey::PrivacyPolicyMissing);
        }

        let consent = match &page {
            Some(page) => checks::check_consent_checkbox(page),
            None => no_parse_result(),
        };
        if !consent.ok {
            issues.push(IssueKey::ConsentCheckboxMissing);
        }

        let security_headers = checks::check_security_headers(response);
        if !security_headers.ok {
            issues.push(IssueKey::MissingSecurityHeader);
        }

        let cookies = checks::check_cookies(response);
        let insecure_cookies = cookies
            .meta
            .as_ref()
            .and_then(|m| m.get("insecure_count"))
            .and_then(|v| v.as_u64())
            .unwrap_or(0);
        if !cookies.ok && insecure_cookies > 0 {
            issues.push(IssueKey::InsecureCookies);
        }

        let trackers = match &page {
            Some(page) => checks::detect_trackers(page),
            None => crate::models::CheckResult::failed("No response")
                .with_meta(serde_json::json!({"trackers": []})),
        };
        let has_trackers = trackers
            .meta
            .as_ref()
            .and_then(|m| m.get("trackers"))
            .and_then(|v| v.as_array())
            .map(|t| !t.is_empty())
            .unwrap_or(false);
        if has_trackers {
            issues.push(IssueKey::TrackersDetected);
        }

        let laws = risk::collect_laws(&issues);
        let recommendations = risk::collect_recommendations(&issues);
        let risk = risk::compute_risk(&issues);

        ScanResult {
            url: url.to_string(),
            scanned_at: chrono::Utc::now().to_rfc3339(),
            checks: ScanChecks {
                https,
                forms,
                privacy_policy,
                consent,
                security_headers,
                cookies,
                trackers,
            },
            issues,
            recommendations,
            laws,
            risk,
        }
    }
}

impl Default for WebformScanner {
    fn default() -> Self {
        Self::new()
    }
}

fn no_parse_result() -> crate::models::CheckResult {
    crate::models::CheckResult::failed("No response / cannot parse")
}
