use crate::models::{IssueKey, IssueRating};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// 防 CSRF 令牌字段的常见 name/id 模式
    pub static ref CSRF_FIELD_PATTERN: Regex =
        Regex::new(r"(?i)(csrf|token|authenticity_token|_csrf|csrfmiddlewaretoken)").unwrap();
}

/// 推荐的安全响应头（完整头名 -> 报告中的简称）
pub const REQUIRED_SECURITY_HEADERS: &[(&str, &str)] = &[
    ("Content-Security-Policy", "CSP"),
    ("Strict-Transport-Security", "HSTS"),
    ("X-Frame-Options", "X-Frame-Options"),
    ("X-Content-Type-Options", "X-Content-Type-Options"),
    ("Referrer-Policy", "Referrer-Policy"),
    ("Permissions-Policy", "Permissions-Policy"),
];

/// 已知追踪器关键词（名称 -> script src/内联文本中的子串，全部小写）
pub const TRACKER_KEYWORDS: &[(&str, &[&str])] = &[
    ("GoogleAnalytics", &["google-analytics", "gtag(", "analytics.js", "ga("]),
    ("GoogleTagManager", &["googletagmanager", "gtm.js"]),
    ("FacebookPixel", &["connect.facebook.net", "fbq("]),
    ("TikTok", &["tiktok", "analytics.tiktok"]),
    ("DoubleClick", &["doubleclick", "googlesyndication"]),
    ("Hotjar", &["hotjar"]),
];

/// 每类问题的默认 Likelihood/Impact 评级（1-5）
pub fn default_rating(issue: IssueKey) -> IssueRating {
    match issue {
        IssueKey::NoHttps => IssueRating::new(5, 4),
        IssueKey::FormNotSecure => IssueRating::new(4, 3),
        IssueKey::PrivacyPolicyMissing => IssueRating::new(3, 3),
        IssueKey::ConsentCheckboxMissing => IssueRating::new(3, 2),
        IssueKey::MissingSecurityHeader => IssueRating::new(3, 3),
        IssueKey::InsecureCookies => IssueRating::new(3, 3),
        IssueKey::TrackersDetected => IssueRating::new(4, 2),
        IssueKey::MissingCsrfToken => IssueRating::new(4, 3),
    }
}

/// 每类问题适用的法律法规
pub fn laws_for(issue: IssueKey) -> &'static [&'static str] {
    match issue {
        IssueKey::NoHttps => &["GDPR", "CCPA", "PDPA", "Bangladesh Data Protection Act 2023"],
        IssueKey::FormNotSecure => &["ISO 27001", "GDPR", "Bangladesh Digital Security Act"],
        IssueKey::PrivacyPolicyMissing => {
            &["GDPR", "CCPA", "PDPA", "Bangladesh Data Protection Act 2023"]
        }
        IssueKey::ConsentCheckboxMissing => &["GDPR", "CCPA", "PDPA", "COPPA"],
        IssueKey::MissingSecurityHeader => &["ISO 27001", "GDPR"],
        IssueKey::InsecureCookies => &["GDPR", "PDPA"],
        IssueKey::TrackersDetected => &["GDPR", "CCPA"],
        IssueKey::MissingCsrfToken => &["ISO 27001", "GDPR"],
    }
}

/// 每类问题的整改建议
pub fn recommendation_for(issue: IssueKey) -> &'static str {
    match issue {
        IssueKey::NoHttps => "Enable HTTPS/TLS to secure data in transit.",
        IssueKey::FormNotSecure => {
            "Validate and sanitize form inputs and enforce secure form handling (server-side)."
        }
        IssueKey::PrivacyPolicyMissing => {
            "Add a publicly accessible privacy policy detailing data collection and processing."
        }
        IssueKey::ConsentCheckboxMissing => {
            "Add explicit consent checkbox for data collection with proper labeling."
        }
        IssueKey::MissingSecurityHeader => {
            "Add recommended security headers (CSP, HSTS, X-Frame-Options, X-Content-Type-Options, Referrer-Policy)."
        }
        IssueKey::InsecureCookies => {
            "Set cookies with Secure, HttpOnly and SameSite attributes where appropriate."
        }
        IssueKey::TrackersDetected => {
            "Disclose trackers and obtain consent where required; consider limiting third-party trackers."
        }
        IssueKey::MissingCsrfToken => "Implement anti-CSRF tokens for form submissions.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csrf_pattern_matches_common_field_names() {
        for name in [
            "csrf_token",
            "CSRFToken",
            "authenticity_token",
            "_csrf",
            "csrfmiddlewaretoken",
            "api-token",
        ] {
            assert!(
                CSRF_FIELD_PATTERN.is_match(name),
                "Should recognize {name} as a CSRF token field"
            );
        }
        assert!(!CSRF_FIELD_PATTERN.is_match("email"));
    }

    #[test]
    fn test_default_ratings_are_within_matrix_bounds() {
        let issues = [
            IssueKey::NoHttps,
            IssueKey::FormNotSecure,
            IssueKey::PrivacyPolicyMissing,
            IssueKey::ConsentCheckboxMissing,
            IssueKey::MissingSecurityHeader,
            IssueKey::InsecureCookies,
            IssueKey::TrackersDetected,
            IssueKey::MissingCsrfToken,
        ];
        for issue in issues {
            let rating = default_rating(issue);
            assert!(
                (1..=5).contains(&rating.likelihood),
                "{issue}: likelihood out of range"
            );
            assert!((1..=5).contains(&rating.impact), "{issue}: impact out of range");
            assert!(!laws_for(issue).is_empty(), "{issue}: no laws mapped");
            assert!(
                !recommendation_for(issue).is_empty(),
                "{issue}: no recommendation"
            );
        }
    }
}
