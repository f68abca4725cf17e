use crate::models::ScanResult;
use crate::report::ReportError;
use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::path::Path;
use url::Url;

lazy_static! {
    static ref UNSAFE_CHARS: Regex = Regex::new(r"[^a-zA-Z0-9_\-.]").unwrap();
}

/// 由 URL 的 host+path 推导默认报告文件名
///
/// 非法字符替换为下划线；URL 无法解析时退回整个 URL 字符串。
pub fn default_report_filename(url: &str) -> String {
    let base = match Url::parse(url) {
        Ok(parsed) => format!("{}{}", parsed.host_str().unwrap_or(""), parsed.path()),
        Err(_) => url.to_string(),
    };
    let safe = UNSAFE_CHARS.replace_all(&base, "_");
    let safe = safe.trim_matches('_');
    format!("compliance_summary_{}.json", safe)
}

/// 写出单个 URL 的 JSON 报告，返回实际使用的文件名
///
/// 2 空格缩进，非 ASCII 字符原样保留（serde_json 不转义）。
pub fn generate_json_report(
    result: &ScanResult,
    filename: Option<&Path>,
) -> Result<String, ReportError> {
    let filename = match filename {
        Some(path) => path.to_string_lossy().into_owned(),
        None => default_report_filename(&result.url),
    };

    let json = serde_json::to_string_pretty(result)?;
    fs::write(&filename, json)?;

    Ok(filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::security::WebformScanner;
    use crate::services::FetchResponse;

    #[test]
    fn test_default_filename_sanitizes_host_and_path() {
        assert_eq!(
            default_report_filename("https://example.com/path/page?q=1"),
            "compliance_summary_example.com_path_page.json"
        );
        assert_eq!(
            default_report_filename("http://example.com"),
            "compliance_summary_example.com.json"
        );
    }

    #[test]
    fn test_default_filename_survives_unparseable_url() {
        let name = default_report_filename("not a url at all");
        assert!(name.starts_with("compliance_summary_"));
        assert!(name.ends_with(".json"));
        assert!(!name.contains(' '));
    }

    #[test]
    fn test_json_report_round_trips() {
        let resp = FetchResponse {
            status: 200,
            headers: vec![("set-cookie".to_string(), "session=abc; Path=/".to_string())],
            body: "<html><body>plain page</body></html>".to_string(),
        };
        let result = WebformScanner::evaluate("http://example.com", Some(&resp));

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("report.json");
        let written = generate_json_report(&result, Some(&path)).expect("write report");

        let raw = std::fs::read_to_string(written).expect("read report back");
        let restored: ScanResult = serde_json::from_str(&raw).expect("deserialize report");

        assert_eq!(restored.issues, result.issues);
        assert_eq!(restored.risk.raw_total, result.risk.raw_total);
        assert_eq!(restored.risk.level, result.risk.level);
        assert_eq!(restored.url, result.url);
    }

    #[test]
    fn test_json_report_preserves_non_ascii() {
        let result = WebformScanner::evaluate("http://example.com", None);
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("report.json");
        generate_json_report(&result, Some(&path)).expect("write report");

        let raw = std::fs::read_to_string(&path).expect("read report back");
        assert!(
            raw.contains('⚠'),
            "Warning glyph should be written unescaped"
        );
    }
}
