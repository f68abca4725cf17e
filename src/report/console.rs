use crate::models::{RiskLevel, ScanResult};
use colored::{ColoredString, Colorize};

fn level_colored(level: RiskLevel) -> ColoredString {
    match level {
        RiskLevel::Low => level.as_str().green().bold(),
        RiskLevel::Medium => level.as_str().yellow().bold(),
        RiskLevel::High => level.as_str().red().bold(),
    }
}

/// 启动横幅
pub fn print_header() {
    println!();
    println!("{}", "██████████████████████████████████████████████".magenta());
    println!("{}", "     WEBFORM PRIVACY COMPLIANCE CHECKER     ".bright_green().bold());
    println!("{}", "██████████████████████████████████████████████".magenta());
    println!();
    println!("{}", "Version : v1.0".bright_cyan());
    println!("{}", "License : MIT".bright_cyan());
    println!();
}

/// 打印单个 URL 的完整扫描结果
pub fn print_result(result: &ScanResult) {
    let separator = "=".repeat(70);
    println!();
    println!("{}", separator.blue());
    println!("{}", format!("Scan result for: {}", result.url).bold());
    println!("{}", separator.blue());

    for (name, check) in result.checks.iter() {
        let msg = if check.ok {
            check.msg.green()
        } else {
            check.msg.red()
        };
        println!("{}: {}", format!("{:<18}", name.to_uppercase()).bold(), msg);
    }

    println!();
    println!("{}", "--- Risk Calculation Breakdown (5x5 matrix style) ---".yellow());
    for entry in &result.risk.breakdown {
        println!(
            "- {}: {} × {} = {}",
            entry.issue,
            format!("L={}", entry.likelihood).bold(),
            format!("I={}", entry.impact).bold(),
            entry.score.to_string().bold()
        );
    }

    println!();
    println!(
        "Raw total: {} / {}",
        result.risk.raw_total.to_string().bold(),
        result.risk.max_total
    );
    println!(
        "Normalized (0-25): {}",
        result.risk.normalized_score.to_string().bold()
    );
    println!("Risk Level: {}", level_colored(result.risk.level));

    if result.issues.is_empty() {
        println!();
        println!("{}", "No major issues detected.".green());
    } else {
        println!();
        println!("{}", "Issues Identified:".red());
        for issue in &result.issues {
            println!(" - {}", issue);
        }
    }

    if !result.recommendations.is_empty() {
        println!();
        println!("{}", "Recommended Actions:".green());
        for rec in &result.recommendations {
            println!(" - {}", rec);
        }
    }

    if !result.laws.is_empty() {
        println!();
        println!("{}", "Relevant Laws:".magenta());
        for law in &result.laws {
            println!(" - {}", law);
        }
    }

    println!("{}", "-".repeat(70).blue());
    println!();
}
