use reqwest::Client;
use std::time::Duration;

/// 固定的 User-Agent
pub const USER_AGENT: &str = "WebFormPrivacyScanner/1.0 (+https://example.com)";

/// 单次请求的超时时间
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(7);

/// 抓取到的响应快照
///
/// 头部以 (name, value) 列表保存而非 map，重复的 Set-Cookie 头不会丢失。
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl FetchResponse {
    /// 大小写不敏感地取第一个同名头
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// 大小写不敏感地取全部同名头
    pub fn header_all(&self, name: &str) -> Vec<&str> {
        self.headers
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn has_header(&self, name: &str) -> bool {
        self.header(name).is_some()
    }
}

/// HTTP 抓取器：每个 URL 执行一次 GET，跟随重定向
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .user_agent(USER_AGENT)
                .timeout(FETCH_TIMEOUT)
                .build()
                .unwrap(),
        }
    }

    /// 抓取 URL；任何传输错误（DNS、TLS、超时等）都记录日志并降级为 None
    pub async fn fetch(&self, url: &str) -> Option<FetchResponse> {
        match self.try_fetch(url).await {
            Ok(response) => Some(response),
            Err(e) => {
                log::warn!("Fetch failed for {}: {}", url, e);
                None
            }
        }
    }

    async fn try_fetch(&self, url: &str) -> Result<FetchResponse, reqwest::Error> {
        let response = self.client.get(url).send().await?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.text().await?;

        Ok(FetchResponse {
            status,
            headers,
            body,
        })
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}
