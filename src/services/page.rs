use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

lazy_static! {
    static ref FORM_SELECTOR: Selector = Selector::parse("form").unwrap();
    static ref INPUT_SELECTOR: Selector = Selector::parse("input").unwrap();
    static ref ANCHOR_SELECTOR: Selector = Selector::parse("a").unwrap();
    static ref SCRIPT_SELECTOR: Selector = Selector::parse("script").unwrap();
}

/// `<input>` 元素的相关属性
#[derive(Debug, Clone, Default)]
pub struct InputField {
    pub input_type: String,
    pub name: String,
    pub id: String,
}

/// `<form>` 元素及其内部的输入字段
#[derive(Debug, Clone)]
pub struct FormElement {
    pub action: Option<String>,
    pub inputs: Vec<InputField>,
}

/// `<a>` 元素的 href 与可见文本
#[derive(Debug, Clone)]
pub struct Anchor {
    pub href: String,
    pub text: String,
}

/// `<script>` 元素的 src 与内联内容
#[derive(Debug, Clone)]
pub struct ScriptTag {
    pub src: String,
    pub inline: String,
}

/// 页面模型：对 HTML 解析器的薄适配，只保留检查所需的元素
///
/// scraper 的解析是宽容的，残缺的 HTML 不会报错，最多得到空列表，
/// 与"解析失败等同于无响应"的降级策略一致。
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub forms: Vec<FormElement>,
    pub inputs: Vec<InputField>,
    pub anchors: Vec<Anchor>,
    pub scripts: Vec<ScriptTag>,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);

        let forms = document
            .select(&FORM_SELECTOR)
            .map(|form| FormElement {
                action: form.value().attr("action").map(str::to_string),
                inputs: form.select(&INPUT_SELECTOR).map(input_field).collect(),
            })
            .collect();

        // consent 检查遍历全文档的 input，不限于表单内部
        let inputs = document.select(&INPUT_SELECTOR).map(input_field).collect();

        let anchors = document
            .select(&ANCHOR_SELECTOR)
            .map(|a| Anchor {
                href: a.value().attr("href").unwrap_or("").to_string(),
                text: a.text().collect::<String>(),
            })
            .collect();

        let scripts = document
            .select(&SCRIPT_SELECTOR)
            .map(|s| ScriptTag {
                src: s.value().attr("src").unwrap_or("").to_string(),
                inline: s.text().collect::<String>(),
            })
            .collect();

        Self {
            forms,
            inputs,
            anchors,
            scripts,
        }
    }
}

fn input_field(el: ElementRef) -> InputField {
    InputField {
        input_type: el.value().attr("type").unwrap_or("").to_string(),
        name: el.value().attr("name").unwrap_or("").to_string(),
        id: el.value().attr("id").unwrap_or("").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extracts_forms_and_inputs() {
        let html = r#"
            <html><body>
            <form action="http://insecure.example/submit">
                <input type="password" name="pw">
                <input type="hidden" name="csrf_token" value="x">
            </form>
            <input type="checkbox" id="agree_terms">
            </body></html>
        "#;

        let page = Page::parse(html);
        assert_eq!(page.forms.len(), 1);
        assert_eq!(
            page.forms[0].action.as_deref(),
            Some("http://insecure.example/submit")
        );
        assert_eq!(page.forms[0].inputs.len(), 2);
        assert_eq!(page.inputs.len(), 3, "Document-level inputs include the loose checkbox");
    }

    #[test]
    fn test_parse_extracts_anchors_and_scripts() {
        let html = r#"
            <a href="/privacy-policy">Privacy</a>
            <script src="https://www.googletagmanager.com/gtm.js"></script>
            <script>console.log("inline");</script>
        "#;

        let page = Page::parse(html);
        assert_eq!(page.anchors.len(), 1);
        assert_eq!(page.anchors[0].href, "/privacy-policy");
        assert_eq!(page.scripts.len(), 2);
        assert!(page.scripts[1].inline.contains("inline"));
    }

    #[test]
    fn test_parse_tolerates_malformed_html() {
        let page = Page::parse("<form><input name='x'><div><<<not html");
        assert_eq!(page.forms.len(), 1);
    }
}
