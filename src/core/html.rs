// src/core/html.rs
use std::sync::OnceLock;

use scraper::{Html, Selector};

fn div_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse("div").expect("Invalid div selector"))
}

/// Text of every `div`, nested ones included, in document order.
///
/// Untrimmed: an outer `div` yields its whole subtree's text, so the same
/// row can show up more than once. The engine dedups and trims.
pub fn fragments(doc: &str) -> Vec<String> {
    let html = Html::parse_document(doc);
    html.select(div_selector()).map(|el| el.text().collect::<String>()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_divs_each_yield_a_fragment() {
        let doc = r#"<html><body>
            <div class="wrap"><div>AFC East:</div><div> BUF 9 3 0 </div></div>
            <p>not a div</p>
        </body></html>"#;
        let f = fragments(doc);
        assert_eq!(f.len(), 3);
        assert!(f[0].contains("AFC East:") && f[0].contains("BUF"));
        assert_eq!(f[1], "AFC East:");
        assert_eq!(f[2].trim(), "BUF 9 3 0");
    }

    #[test]
    fn no_divs_no_fragments() {
        assert!(fragments("<p>nothing</p>").is_empty());
        assert!(fragments("").is_empty());
    }
}
