//! Rendering of a [`CartReport`] for the terminal.

use std::fmt::Write;

use cartlink_core::CartReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    Text { items: bool },
    Json,
}

pub(crate) fn render(report: &CartReport, format: Format) -> anyhow::Result<String> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(report)?),
        Format::Text { items } => Ok(render_text(report, items)),
    }
}

fn render_text(report: &CartReport, show_items: bool) -> String {
    if report.links.is_empty() && report.errors.is_empty() {
        return "no products found in input".to_string();
    }

    let mut sections: Vec<String> = Vec::new();

    if !report.links.is_empty() {
        let mut s = String::from("Combined add-to-cart links:");
        for link in &report.links {
            let _ = write!(s, "\n{}", link.url);
        }
        sections.push(s);
    }

    if show_items && !report.items.is_empty() {
        let mut s = String::from("Items:");
        for item in &report.items {
            let _ = write!(s, "\n  {} x {} - {}", item.title, item.quantity, item.link);
        }
        sections.push(s);
    }

    if !report.errors.is_empty() {
        let mut s = String::from("Errors:");
        for err in &report.errors {
            let _ = write!(s, "\n  {err}");
        }
        sections.push(s);
    }

    sections.join("\n\n")
}
