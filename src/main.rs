use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::Path;
use webform_privacy_scanner::report::{console, json, markdown};
use webform_privacy_scanner::WebformScanner;

/// 交互式收集待扫描的 URL
///
/// 逐个输入 URL，`done` 结束，`file` 从文本文件批量加载（每行一个）。
/// 文件不存在时提示后继续循环；输入流 EOF 等同于 done。
fn collect_urls() -> Result<Vec<String>> {
    println!("{}", "Enter website URLs to scan (multiple allowed).".white());
    println!(
        "{}",
        "You can enter URLs one-by-one (type 'done' when finished) or type 'file' to read from a file."
            .yellow()
    );

    let stdin = io::stdin();
    let mut urls = Vec::new();

    loop {
        print!("{}", "Enter URL / file / done: ".bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("done") {
            break;
        }
        if input.eq_ignore_ascii_case("file") {
            print!("Enter filename with URLs (one per line): ");
            io::stdout().flush()?;

            let mut filename = String::new();
            if stdin.lock().read_line(&mut filename)? == 0 {
                break;
            }
            let filename = filename.trim();

            let content = match std::fs::read_to_string(filename) {
                Ok(content) => content,
                Err(e) => {
                    log::debug!("Could not read URL file {}: {}", filename, e);
                    println!("{}", "File not found.".red());
                    continue;
                }
            };
            for line in content.lines() {
                let line = line.trim();
                if !line.is_empty() {
                    urls.push(line.to_string());
                }
            }
            println!("{}", format!("{} URL(s) loaded from file.", urls.len()).green());
            break;
        }
        if !input.starts_with("http://") && !input.starts_with("https://") {
            println!("{}", "Please start URL with http:// or https://".red());
            continue;
        }
        urls.push(input.to_string());
    }

    Ok(urls)
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    console::print_header();

    let urls = collect_urls()?;
    if urls.is_empty() {
        println!("{}", "No URLs provided. Exiting.".red());
        return Ok(());
    }

    let scanner = WebformScanner::new();
    let mut all_results = Vec::with_capacity(urls.len());

    // 顺序扫描：每个 URL 恰好一次抓取，失败降级为最差合规状态
    for url in &urls {
        println!("{}", format!("\nScanning {} ...", url).cyan());
        let result = scanner.scan(url).await;
        console::print_result(&result);

        match json::generate_json_report(&result, None) {
            Ok(filename) => {
                println!("{}", format!("[+] JSON summary saved to: {}", filename).green())
            }
            Err(e) => log::warn!("Failed to write JSON report for {}: {}", url, e),
        }

        all_results.push(result);
    }

    let md_file = markdown::generate_markdown_report(&all_results, Path::new("report.md"))?;
    println!(
        "{}",
        format!("\n[+] Combined markdown report saved to: {}", md_file).green()
    );
    println!("{}", "\nAll scans complete.".green());

    Ok(())
}
