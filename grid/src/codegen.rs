//! CSS and HTML text generation.
//!
//! Every function here is a pure function of the grid state passed in. Items
//! are emitted in store order. The standalone document produced by
//! [`generate_full_html`] is the export format, so its bytes only change when
//! the inputs do.

#[cfg(test)]
#[path = "codegen_test.rs"]
mod codegen_test;

use std::collections::BTreeMap;

use crate::doc::{GridConfig, GridItem, ItemId};

/// Derive a CSS class from an item name: lower-cased, with every run of
/// whitespace replaced by a single hyphen.
#[must_use]
pub fn class_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_space = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('-');
            }
            in_space = true;
        } else {
            out.extend(ch.to_lowercase());
            in_space = false;
        }
    }
    out
}

/// Groups of items whose names derive the same class, in first-seen order.
///
/// Only classes shared by two or more items are returned.
#[must_use]
pub fn class_collisions(items: &[GridItem]) -> Vec<(String, Vec<ItemId>)> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: BTreeMap<String, Vec<ItemId>> = BTreeMap::new();
    for item in items {
        let class = item.class_name();
        let ids = groups.entry(class.clone()).or_default();
        if ids.is_empty() {
            order.push(class);
        }
        ids.push(item.id);
    }
    order
        .into_iter()
        .filter_map(|class| {
            let ids = groups.remove(&class)?;
            (ids.len() > 1).then_some((class, ids))
        })
        .collect()
}

/// Stylesheet for the container and one rule per item.
#[must_use]
pub fn generate_css(config: &GridConfig, items: &[GridItem]) -> String {
    let mut css = format!(
        ".container {{\n  display: grid;\n  grid-template-columns: repeat({}, 1fr);\n  grid-template-rows: repeat({}, 1fr);\n  gap: {}px;\n  width: 100%;\n  height: 100%;\n}}\n\n",
        config.columns, config.rows, config.gap
    );
    for item in items {
        css.push_str(&format!(
            ".{} {{\n  grid-column: {} / {};\n  grid-row: {} / {};\n  background-color: {};\n}}\n\n",
            item.class_name(),
            item.col_start,
            item.col_end,
            item.row_start,
            item.row_end,
            item.color
        ));
    }
    css
}

/// Markup for the container `div` with one child per item.
///
/// Names are HTML-escaped (`& < > "`), so only names containing those
/// characters produce different bytes from the unescaped format.
#[must_use]
pub fn generate_html(items: &[GridItem]) -> String {
    let mut html = String::from("<div class=\"container\">\n");
    for item in items {
        html.push_str("  <div class=\"");
        html.push_str(&escape_html(&item.class_name()));
        html.push_str("\">");
        html.push_str(&escape_html(&item.name));
        html.push_str("</div>\n");
    }
    html.push_str("</div>");
    html
}

/// A complete document with the stylesheet inlined in `<style>` and the
/// markup in `<body>`. Stylesheet lines are indented four spaces and markup
/// lines two, including blank ones.
#[must_use]
pub fn generate_full_html(config: &GridConfig, items: &[GridItem]) -> String {
    let css = indent_lines(&generate_css(config, items), "    ");
    let html = indent_lines(&generate_html(items), "  ");
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"UTF-8\">\n  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n  <title>Grid Layout</title>\n  <style>\n    body {{ margin: 0; height: 100vh; }}\n{css}\n  </style>\n</head>\n<body>\n{html}\n</body>\n</html>"
    )
}

fn indent_lines(text: &str, indent: &str) -> String {
    text.split('\n').map(|line| format!("{indent}{line}")).collect::<Vec<_>>().join("\n")
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
