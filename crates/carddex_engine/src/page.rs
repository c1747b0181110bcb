use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{Html, Selector};
use url::Url;

use crate::extract::is_stats_line;

/// Parsed snapshot of one card detail page.
///
/// Owned by the pipeline invocation that fetched it and dropped as soon
/// as extraction for that URL is done. All queries are pure reads.
pub struct CardPage {
    document: Html,
    url: Url,
}

impl CardPage {
    pub fn new(url: Url, markup: &str) -> Self {
        Self {
            document: Html::parse_document(markup),
            url,
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Full text of the card-description block, the region every
    /// category marker and stats line lives in.
    pub fn description_text(&self) -> Option<String> {
        let sel = Selector::parse("div.cardDescription").ok()?;
        let node = self.document.select(&sel).next()?;
        Some(node.text().collect::<String>())
    }

    /// Card name: the JSON-LD product block when present, otherwise the
    /// detail image's alt text.
    pub fn card_name(&self) -> Option<String> {
        if let Ok(sel) = Selector::parse(r#"script[type="application/ld+json"]"#) {
            for script in self.document.select(&sel) {
                let raw = script.text().collect::<String>();
                if let Ok(serde_json::Value::Object(data)) = serde_json::from_str(&raw) {
                    if let Some(name) = data.get("name").and_then(|value| value.as_str()) {
                        let name = name.trim();
                        if !name.is_empty() {
                            return Some(name.to_string());
                        }
                    }
                }
            }
        }

        let sel = Selector::parse("img#detail_def_img").ok()?;
        self.document
            .select(&sel)
            .next()
            .and_then(|img| img.value().attr("alt"))
            .map(|alt| alt.trim().to_string())
            .filter(|alt| !alt.is_empty())
    }

    /// Raw `src` of the detail image, as written in the markup.
    pub fn image_src(&self) -> Option<String> {
        let sel = Selector::parse("img#detail_def_img").ok()?;
        self.document
            .select(&sel)
            .next()
            .and_then(|img| img.value().attr("src"))
            .map(|src| src.trim().to_string())
            .filter(|src| !src.is_empty())
    }

    /// Cleaned lines of the card text paragraph.
    ///
    /// `<br>` becomes a line break, other whitespace collapses to single
    /// spaces. The category line (`【...】`), the stats line and the
    /// `(制限カード)` restriction marker are dropped; what remains is the
    /// card text (preceded by the materials line on extra-deck cards).
    pub fn card_text_lines(&self) -> Vec<String> {
        let sel = match Selector::parse("div.cardDescription p") {
            Ok(sel) => sel,
            Err(_) => return Vec::new(),
        };
        let Some(paragraph) = self.document.select(&sel).next() else {
            return Vec::new();
        };

        let mut flat = FlatText::default();
        for child in paragraph.children() {
            flatten_node(child, &mut flat);
        }

        flat.buffer
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter(|line| keep_line(line))
            .map(str::to_string)
            .collect()
    }
}

fn keep_line(line: &str) -> bool {
    if line.contains('【') && line.contains('】') {
        return false;
    }
    if line == "(制限カード)" || line == "（制限カード）" {
        return false;
    }
    !is_stats_line(line)
}

#[derive(Default)]
struct FlatText {
    buffer: String,
    last: Option<char>,
}

impl FlatText {
    fn push_text(&mut self, text: &str) {
        for ch in text.chars() {
            if ch.is_whitespace() {
                if self.last == Some(' ') || self.last == Some('\n') {
                    continue;
                }
                self.push(' ');
            } else {
                self.push(ch);
            }
        }
    }

    fn newline(&mut self) {
        if self.last == Some('\n') || self.buffer.is_empty() {
            return;
        }
        self.push('\n');
    }

    fn push(&mut self, ch: char) {
        self.buffer.push(ch);
        self.last = Some(ch);
    }
}

fn flatten_node(node: NodeRef<'_, Node>, out: &mut FlatText) {
    match node.value() {
        Node::Text(text) => out.push_text(text),
        Node::Element(element) => {
            if element.name() == "br" {
                out.newline();
            } else {
                for child in node.children() {
                    flatten_node(child, out);
                }
            }
        }
        _ => {}
    }
}
