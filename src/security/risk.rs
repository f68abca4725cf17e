use crate::models::{IssueKey, RatingOverride, RiskEntry, RiskLevel, RiskReport};
use crate::security::rules;
use std::collections::BTreeSet;

/// 每个问题在 5x5 矩阵中的最大得分
const MAX_SCORE_PER_ISSUE: u32 = 25;

/// 计算单个问题的 (likelihood, impact, score)
///
/// score = likelihood × impact；override 可按字段覆盖默认评级。
pub fn rate(issue: IssueKey, override_rating: Option<&RatingOverride>) -> (u32, u32, u32) {
    let base = rules::default_rating(issue);
    let (likelihood, impact) = match override_rating {
        Some(o) => (
            o.likelihood.unwrap_or(base.likelihood),
            o.impact.unwrap_or(base.impact),
        ),
        None => (base.likelihood, base.impact),
    };
    (likelihood, impact, likelihood * impact)
}

/// 汇总问题列表为风险报告
///
/// 按输入顺序累加；无副作用，无 I/O。空列表得到全零的 LOW 报告。
pub fn compute_risk(issues: &[IssueKey]) -> RiskReport {
    let mut breakdown = Vec::with_capacity(issues.len());
    let mut raw_total = 0u32;
    let mut max_total = 0u32;

    for &issue in issues {
        let (likelihood, impact, score) = rate(issue, None);
        breakdown.push(RiskEntry {
            issue,
            likelihood,
            impact,
            score,
            laws: rules::laws_for(issue).iter().map(|s| s.to_string()).collect(),
            recommendation: rules::recommendation_for(issue).to_string(),
        });
        raw_total += score;
        max_total += MAX_SCORE_PER_ISSUE;
    }

    let percent = if max_total > 0 {
        f64::from(raw_total) / f64::from(max_total)
    } else {
        0.0
    };
    let normalized_score = (percent * 25.0).round() as u32;
    let level = RiskLevel::from_percent(percent);

    RiskReport {
        breakdown,
        raw_total,
        max_total,
        percent,
        normalized_score,
        level,
    }
}

/// 汇总适用法律：去重并排序，保证输出确定性
pub fn collect_laws(issues: &[IssueKey]) -> Vec<String> {
    issues
        .iter()
        .flat_map(|&issue| rules::laws_for(issue).iter().copied())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// 汇总整改建议：每个问题贡献一条，保持问题顺序
pub fn collect_recommendations(issues: &[IssueKey]) -> Vec<String> {
    issues
        .iter()
        .map(|&issue| rules::recommendation_for(issue).to_string())
        .collect()
}
