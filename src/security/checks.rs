use crate::models::CheckResult;
use crate::security::rules::{CSRF_FIELD_PATTERN, REQUIRED_SECURITY_HEADERS, TRACKER_KEYWORDS};
use crate::services::{FetchResponse, Page};
use serde_json::json;

/// URL 是否使用 HTTPS
pub fn check_https(url: &str) -> CheckResult {
    if url.to_lowercase().starts_with("https://") {
        CheckResult::passed("HTTPS enabled")
    } else {
        CheckResult::failed("⚠ Site does NOT use HTTPS")
    }
}

/// 表单安全：统计表单数、密码字段、CSRF 令牌字段、不安全的 action
pub fn check_form_security(page: &Page) -> CheckResult {
    if page.forms.is_empty() {
        return CheckResult::failed("⚠ No forms detected").with_meta(json!({}));
    }

    let mut password_fields = 0usize;
    let mut csrf_tokens = 0usize;
    let mut form_actions_insecure = 0usize;

    for form in &page.forms {
        for input in &form.inputs {
            if input.input_type.eq_ignore_ascii_case("password") {
                password_fields += 1;
            }
            if CSRF_FIELD_PATTERN.is_match(&input.name) || CSRF_FIELD_PATTERN.is_match(&input.id) {
                csrf_tokens += 1;
            }
        }

        // 只有绝对 http:// 的 action 算不安全；scheme 相对和相对路径无法判定
        if let Some(action) = &form.action {
            if action.starts_with("http://") {
                form_actions_insecure += 1;
            }
        }
    }

    let msg = format!(
        "{} form(s) detected — password fields: {}, csrf tokens: {}, insecure actions: {}",
        page.forms.len(),
        password_fields,
        csrf_tokens,
        form_actions_insecure
    );

    CheckResult::passed(msg).with_meta(json!({
        "forms_count": page.forms.len(),
        "password_fields": password_fields,
        "csrf_tokens": csrf_tokens,
        "form_actions_insecure": form_actions_insecure,
    }))
}

/// 是否存在隐私政策链接（href 或可见文本包含 "privacy"）
pub fn check_privacy_policy(page: &Page) -> CheckResult {
    let found = page.anchors.iter().any(|a| {
        a.href.to_lowercase().contains("privacy") || a.text.to_lowercase().contains("privacy")
    });

    if found {
        CheckResult::passed("Privacy policy link found")
    } else {
        CheckResult::failed("⚠ Privacy policy link NOT found")
    }
}

/// 是否存在同意复选框（type=checkbox 且 name/id 包含 consent 或 agree）
pub fn check_consent_checkbox(page: &Page) -> CheckResult {
    let found = page.inputs.iter().any(|input| {
        let name = input.name.to_lowercase();
        let id = input.id.to_lowercase();
        input.input_type.eq_ignore_ascii_case("checkbox")
            && (name.contains("consent")
                || id.contains("consent")
                || name.contains("agree")
                || id.contains("agree"))
    });

    if found {
        CheckResult::passed("Consent checkbox found")
    } else {
        CheckResult::failed("⚠ Consent checkbox NOT found")
    }
}

/// 推荐安全响应头是否齐全
pub fn check_security_headers(response: Option<&FetchResponse>) -> CheckResult {
    let Some(response) = response else {
        return CheckResult::failed("No HTTP response").with_meta(json!({}));
    };

    let mut found = serde_json::Map::new();
    let mut missing = Vec::new();

    for &(header, short_name) in REQUIRED_SECURITY_HEADERS {
        match response.header(header) {
            Some(value) => {
                found.insert(short_name.to_string(), json!(value));
            }
            None => missing.push(short_name),
        }
    }

    if missing.is_empty() {
        CheckResult::passed("All recommended security headers present")
            .with_meta(json!({"found": found, "missing": []}))
    } else {
        CheckResult::failed(format!("Missing headers: {}", missing.join(", ")))
            .with_meta(json!({"found": found, "missing": missing}))
    }
}

/// Set-Cookie 属性检查：每个 cookie 都应带 Secure 和 HttpOnly
///
/// 服务端不下发 cookie 不算问题；只有存在缺失属性的 cookie 时才失败。
pub fn check_cookies(response: Option<&FetchResponse>) -> CheckResult {
    let Some(response) = response else {
        return CheckResult::failed("No HTTP response").with_meta(json!({}));
    };

    let raw_cookies = response.header_all("Set-Cookie");
    if raw_cookies.is_empty() {
        return CheckResult::passed("No cookies set by server").with_meta(json!({"cookies": []}));
    }

    let mut cookies_info = Vec::new();
    let mut insecure_count = 0usize;

    for raw_cookie in &raw_cookies {
        let attrs: Vec<&str> = raw_cookie.split(';').map(str::trim).collect();
        let name_val = attrs.first().copied().unwrap_or(raw_cookie);

        let mut http_only = false;
        let mut secure = false;
        let mut same_site: Option<&str> = None;

        for attr in attrs.iter().skip(1) {
            if attr.eq_ignore_ascii_case("httponly") {
                http_only = true;
            } else if attr.eq_ignore_ascii_case("secure") {
                secure = true;
            } else if attr.to_lowercase().starts_with("samesite") {
                if let Some((_, value)) = attr.split_once('=') {
                    same_site = Some(value);
                }
            }
        }

        cookies_info.push(json!({
            "cookie": name_val,
            "flags": {"HttpOnly": http_only, "Secure": secure, "SameSite": same_site},
        }));

        if !secure || !http_only {
            insecure_count += 1;
        }
    }

    let msg = format!(
        "{} cookie(s) detected, {} cookie(s) missing Secure/HttpOnly",
        cookies_info.len(),
        insecure_count
    );
    let meta = json!({"cookies": cookies_info, "insecure_count": insecure_count});

    if insecure_count == 0 {
        CheckResult::passed(msg).with_meta(meta)
    } else {
        CheckResult::failed(msg).with_meta(meta)
    }
}

/// 已知追踪器脚本探测（script src 与内联文本的子串匹配）
///
/// 命中属于"信息性失败"：有追踪器时 ok=false，由调用方决定是否记为问题。
pub fn detect_trackers(page: &Page) -> CheckResult {
    let mut found: Vec<&str> = Vec::new();

    for script in &page.scripts {
        let combined = format!(
            "{} {}",
            script.src.to_lowercase(),
            script.inline.to_lowercase()
        );
        for &(name, keywords) in TRACKER_KEYWORDS {
            if keywords.iter().any(|kw| combined.contains(kw)) && !found.contains(&name) {
                found.push(name);
            }
        }
    }

    if found.is_empty() {
        CheckResult::passed("No common trackers auto-detected").with_meta(json!({"trackers": []}))
    } else {
        CheckResult::failed(format!("Trackers detected: {}", found.join(", ")))
            .with_meta(json!({"trackers": found}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(headers: Vec<(&str, &str)>) -> FetchResponse {
        FetchResponse {
            status: 200,
            headers: headers
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body: String::new(),
        }
    }

    #[test]
    fn test_check_https() {
        assert!(check_https("https://example.com").ok);
        assert!(check_https("HTTPS://EXAMPLE.COM").ok);
        assert!(!check_https("http://example.com").ok);
    }

    #[test]
    fn test_form_check_counts_fields() {
        let page = Page::parse(
            r#"
            <form action="http://old.example/login">
                <input type="password" name="pw">
                <input type="hidden" name="csrf_token">
            </form>
            <form action="/search"><input name="q"></form>
        "#,
        );

        let result = check_form_security(&page);
        assert!(result.ok);
        let meta = result.meta.unwrap();
        assert_eq!(meta["forms_count"], 2);
        assert_eq!(meta["password_fields"], 1);
        assert_eq!(meta["csrf_tokens"], 1);
        assert_eq!(meta["form_actions_insecure"], 1);
    }

    #[test]
    fn test_form_check_fails_without_forms() {
        let result = check_form_security(&Page::parse("<p>no forms here</p>"));
        assert!(!result.ok);
        assert_eq!(result.msg, "⚠ No forms detected");
    }

    #[test]
    fn test_privacy_policy_matches_href_or_text() {
        assert!(check_privacy_policy(&Page::parse(r#"<a href="/privacy">Legal</a>"#)).ok);
        assert!(check_privacy_policy(&Page::parse(r#"<a href="/legal">Privacy Policy</a>"#)).ok);
        assert!(!check_privacy_policy(&Page::parse(r#"<a href="/about">About</a>"#)).ok);
    }

    #[test]
    fn test_consent_checkbox_requires_checkbox_type() {
        let page = Page::parse(r#"<input type="checkbox" name="agree_consent">"#);
        assert!(check_consent_checkbox(&page).ok);

        // 名字匹配但不是 checkbox
        let page = Page::parse(r#"<input type="text" name="consent">"#);
        assert!(!check_consent_checkbox(&page).ok);
    }

    #[test]
    fn test_security_headers_all_present() {
        let resp = response(vec![
            ("Content-Security-Policy", "default-src 'self'"),
            ("Strict-Transport-Security", "max-age=63072000"),
            ("X-Frame-Options", "DENY"),
            ("X-Content-Type-Options", "nosniff"),
            ("Referrer-Policy", "no-referrer"),
            ("Permissions-Policy", "geolocation=()"),
        ]);
        let result = check_security_headers(Some(&resp));
        assert!(result.ok, "All six headers present should pass: {}", result.msg);
    }

    #[test]
    fn test_security_headers_reports_missing() {
        let resp = response(vec![("X-Frame-Options", "DENY")]);
        let result = check_security_headers(Some(&resp));
        assert!(!result.ok);
        assert!(result.msg.contains("CSP"), "Missing CSP should be named: {}", result.msg);
        let meta = result.meta.unwrap();
        assert_eq!(meta["missing"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_security_headers_without_response() {
        let result = check_security_headers(None);
        assert!(!result.ok);
        assert_eq!(result.msg, "No HTTP response");
    }

    #[test]
    fn test_cookies_insecure_when_flags_missing() {
        let resp = response(vec![("Set-Cookie", "session=abc; Path=/")]);
        let result = check_cookies(Some(&resp));
        assert!(!result.ok);
        assert_eq!(result.meta.unwrap()["insecure_count"], 1);
    }

    #[test]
    fn test_cookies_compliant_when_secure_and_httponly() {
        let resp = response(vec![(
            "Set-Cookie",
            "session=abc; Path=/; Secure; HttpOnly; SameSite=Lax",
        )]);
        let result = check_cookies(Some(&resp));
        assert!(result.ok, "Fully flagged cookie should pass: {}", result.msg);
        let meta = result.meta.unwrap();
        assert_eq!(meta["insecure_count"], 0);
        assert_eq!(meta["cookies"][0]["flags"]["SameSite"], "Lax");
    }

    #[test]
    fn test_cookies_absent_is_not_an_issue() {
        let result = check_cookies(Some(&response(vec![])));
        assert!(result.ok);
        assert_eq!(result.msg, "No cookies set by server");
    }

    #[test]
    fn test_trackers_detected_from_script_src() {
        let page = Page::parse(
            r#"<script src="https://www.googletagmanager.com/gtm.js?id=GTM-XXXX"></script>"#,
        );
        let result = detect_trackers(&page);
        assert!(!result.ok, "Tracker hit is an informational failure");
        assert_eq!(result.meta.unwrap()["trackers"], json!(["GoogleTagManager"]));
    }

    #[test]
    fn test_trackers_detected_from_inline_script() {
        let page = Page::parse(r#"<script>fbq('init', '123');</script>"#);
        let result = detect_trackers(&page);
        assert!(!result.ok);
        assert_eq!(result.meta.unwrap()["trackers"], json!(["FacebookPixel"]));
    }

    #[test]
    fn test_trackers_clean_page() {
        let result = detect_trackers(&Page::parse("<script>console.log('hi');</script>"));
        assert!(result.ok);
        assert_eq!(result.meta.unwrap()["trackers"], json!([]));
    }
}
