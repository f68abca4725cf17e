use crate::models::ScanResult;
use crate::report::ReportError;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// 写出合并的 Markdown 报告（所有扫描结果按扫描顺序），返回文件名
pub fn generate_markdown_report(
    all_results: &[ScanResult],
    filename: &Path,
) -> Result<String, ReportError> {
    let mut out = String::new();

    out.push_str("# WebForm Privacy Compliance - Combined Report\n\n");
    for result in all_results {
        let _ = writeln!(out, "## URL: {}\n", result.url);

        out.push_str("### Checks\n");
        for (name, check) in result.checks.iter() {
            let status = if check.ok { "OK" } else { "⚠ NOT OK" };
            let _ = writeln!(out, "- **{}**: {} — {}", name, status, check.msg);
        }

        out.push_str("\n### Issues Detected\n");
        if result.issues.is_empty() {
            out.push_str("- None\n");
        } else {
            for issue in &result.issues {
                let _ = writeln!(out, "- {}", issue);
            }
        }

        out.push_str("\n### Risk Breakdown\n");
        let _ = writeln!(
            out,
            "- Raw total (sum of Likelihood×Impact per issue): {}",
            result.risk.raw_total
        );
        let _ = writeln!(
            out,
            "- Max possible for detected issues: {}",
            result.risk.max_total
        );
        let _ = writeln!(out, "- Normalized (0-25): {}", result.risk.normalized_score);
        let _ = writeln!(out, "- Risk Level: {}\n", result.risk.level);

        out.push_str("#### Calculation details:\n");
        for entry in &result.risk.breakdown {
            let _ = writeln!(
                out,
                "- Issue: {}: Likelihood={} × Impact={} = {}",
                entry.issue, entry.likelihood, entry.impact, entry.score
            );
            if !entry.laws.is_empty() {
                let _ = writeln!(out, "  - Laws: {}", entry.laws.join(", "));
            }
            if !entry.recommendation.is_empty() {
                let _ = writeln!(out, "  - Recommendation: {}", entry.recommendation);
            }
        }

        out.push_str("\n### Recommendations (summary)\n");
        if result.recommendations.is_empty() {
            out.push_str("- No recommendations (site looks good)\n");
        } else {
            for rec in &result.recommendations {
                let _ = writeln!(out, "- {}", rec);
            }
        }
        out.push_str("\n---\n\n");
    }

    fs::write(filename, out)?;
    Ok(filename.to_string_lossy().into_owned())
}
