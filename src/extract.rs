use std::sync::LazyLock;

use scraper::{ElementRef, Html, Node, Selector};

static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());
static BLOCKS: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p, h1, h2").unwrap());

/// Readable text pulled from one fetched page.
#[derive(Debug)]
pub struct PageContent {
    pub url: String,
    pub title: String,
    pub body: String,
}

/// Extracts the title and the readable text blocks from raw markup.
///
/// Paragraphs and level 1-2 headings are matched in document order; everything
/// else is ignored. Headings come out wrapped in newlines so they stay on
/// their own line downstream. Inside paragraphs every link is rewritten to
/// `text` plus the rendered `link_format` reference, at its original position.
/// A page without a `<title>` gets the single-space title.
pub fn extract_content(html: &str, url: &str, link_format: &str) -> PageContent {
    let document = Html::parse_document(html);

    let title = document
        .select(&TITLE)
        .next()
        .map(|el| el.text().collect::<String>())
        .unwrap_or_else(|| " ".to_string());

    let blocks: Vec<String> = document
        .select(&BLOCKS)
        .map(|el| render_block(el, link_format))
        .collect();

    PageContent {
        url: url.to_string(),
        title,
        body: blocks.join("\n\n"),
    }
}

fn render_block(element: ElementRef<'_>, link_format: &str) -> String {
    if element.value().name().starts_with('h') {
        let text: String = element.text().collect();
        format!("\n{}\n", text.trim())
    } else {
        let mut parts = Vec::new();
        let mut run = String::new();
        collect_inline(element, link_format, &mut run, &mut parts);
        flush_run(&mut run, &mut parts);
        format!("{} ", parts.join(" "))
    }
}

/// Walks an element's children in order, accumulating text runs and flushing
/// them at every link so the rendered reference lands in its source position.
fn collect_inline(
    element: ElementRef<'_>,
    link_format: &str,
    run: &mut String,
    parts: &mut Vec<String>,
) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => run.push_str(text),
            Node::Element(el) if el.name() == "a" => {
                if let Some(link) = ElementRef::wrap(child) {
                    flush_run(run, parts);
                    parts.push(render_link(link, link_format));
                }
            }
            Node::Element(_) => {
                if let Some(inner) = ElementRef::wrap(child) {
                    collect_inline(inner, link_format, run, parts);
                }
            }
            _ => {}
        }
    }
}

fn flush_run(run: &mut String, parts: &mut Vec<String>) {
    let collapsed = run.split_whitespace().collect::<Vec<_>>().join(" ");
    if !collapsed.is_empty() {
        parts.push(collapsed);
    }
    run.clear();
}

fn render_link(link: ElementRef<'_>, link_format: &str) -> String {
    let text: String = link.text().collect();
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    // a link with no href still leaves a visible, empty reference
    let href = link.value().attr("href").unwrap_or_default();
    let reference = link_format.replace("{url}", href);
    if text.is_empty() {
        reference
    } else {
        format!("{text} {reference}")
    }
}

// ── Tests ──
