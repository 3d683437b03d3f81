//! # Rendering Module
//!
//! Paints a [`Document`] as plain terminal text. Everything returns a
//! `String`; callers decide where it goes.
//!
//! Layout math (width, truncation, padding) is Unicode-aware so names with
//! wide characters still line up.

use colored::*;
use tally::app::{CmdMessage, MessageLevel};
use tally::view::{Document, Element};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 60;
const ID_WIDTH: usize = 6;

/// Renders the list, the total, the form and the visible controls.
pub fn render_document(doc: &Document) -> String {
    let mut out = String::new();

    if doc.is_visible(Element::ItemList) && !doc.rows().is_empty() {
        let available = LINE_WIDTH.saturating_sub(ID_WIDTH + 2);
        for row in doc.rows() {
            let id = format!("[{}]", row.id);
            let label = truncate_to_width(&row.label, available);
            out.push_str(&format!(
                "  {}{}{}\n",
                id.dimmed(),
                " ".repeat(ID_WIDTH.saturating_sub(id.width())),
                label
            ));
        }
    } else {
        out.push_str(&format!("  {}\n", "No entries yet.".dimmed()));
    }

    let total = doc.text(Element::TotalDisplay).unwrap_or("0");
    out.push_str(&format!("{} {}\n", "Total:".bold(), total.bold()));

    let name = doc.value(Element::NameInput).unwrap_or_default();
    let quantity = doc.value(Element::QuantityInput).unwrap_or_default();
    if !name.is_empty() || !quantity.is_empty() {
        out.push_str(&format!(
            "{} name: {}  quantity: {}\n",
            "Form".dimmed(),
            name,
            quantity
        ));
    }

    let controls: Vec<&str> = Element::MODE_CONTROLS
        .iter()
        .chain(std::iter::once(&Element::ClearAllButton))
        .filter(|el| doc.is_visible(**el))
        .filter_map(|el| doc.text(*el))
        .collect();
    if !controls.is_empty() {
        out.push_str(&format!("{}\n", controls.join(" | ").dimmed()));
    }

    out
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let content = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
                MessageLevel::Error => message.content.red(),
            };
            format!("{}\n", content)
        })
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    if s.width() <= max_width {
        return s.to_string();
    }

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally::model::RecordId;
    use tally::view::{RenderSurface, RowNode};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_render_empty_document() {
        plain();
        let mut doc = Document::new();
        doc.set_visible(Element::ItemList, false).unwrap();
        let output = render_document(&doc);
        assert!(output.contains("No entries yet."));
        assert!(output.contains("Total: 0"));
    }

    #[test]
    fn test_render_rows_with_ids() {
        plain();
        let mut doc = Document::new();
        doc.append_child(Element::ItemList, RowNode::new(RecordId(0), "Eggs: 100"))
            .unwrap();
        doc.append_child(Element::ItemList, RowNode::new(RecordId(12), "Toast: 200"))
            .unwrap();
        doc.set_text(Element::TotalDisplay, "300").unwrap();

        let output = render_document(&doc);
        assert!(output.contains("  [0]   Eggs: 100\n"));
        assert!(output.contains("  [12]  Toast: 200\n"));
        assert!(output.contains("Total: 300"));
    }

    #[test]
    fn test_render_hidden_controls_are_skipped() {
        plain();
        let mut doc = Document::new();
        doc.set_visible(Element::UpdateButton, false).unwrap();
        doc.set_visible(Element::DeleteButton, false).unwrap();
        doc.set_visible(Element::BackButton, false).unwrap();
        let output = render_document(&doc);
        assert!(output.contains("Add | Clear All"));
        assert!(!output.contains("Update"));
    }

    #[test]
    fn test_render_form_values_when_present() {
        plain();
        let mut doc = Document::new();
        assert!(!render_document(&doc).contains("Form"));
        doc.write_value(Element::NameInput, "Eggs").unwrap();
        doc.write_value(Element::QuantityInput, "100").unwrap();
        assert!(render_document(&doc).contains("Form name: Eggs  quantity: 100"));
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
        // Wide characters count double.
        assert_eq!(truncate_to_width("日本語テキスト", 6), "日本…");
    }

    #[test]
    fn test_render_messages_plain() {
        plain();
        let output = render_messages(&[
            CmdMessage::success("Added Eggs: 100"),
            CmdMessage::warning("No entry with id 9"),
        ]);
        assert_eq!(output, "Added Eggs: 100\nNo entry with id 9\n");
    }
}
