// SPDX-FileCopyrightText: 2026 Squatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal rendering of tool results for the interactive shell.
//!
//! Known result shapes (contact, event, and opportunity listings) render as
//! compact cards; anything else falls back to pretty-printed JSON.

use colored::Colorize;
use serde_json::Value;

/// Render a tool result payload for the terminal.
pub fn render_data(data: &Value) -> String {
    if let Some(error) = data.get("error").and_then(Value::as_str) {
        return format!("{} {error}", "gateway error:".red());
    }

    if let Some(contacts) = data.get("contacts").and_then(Value::as_array) {
        return render_list("contacts", contacts, contact_line);
    }
    if let Some(events) = data.get("events").and_then(Value::as_array) {
        return render_list("events", events, event_line);
    }
    if let Some(opportunities) = data.get("opportunities").and_then(Value::as_array) {
        return render_list("opportunities", opportunities, opportunity_line);
    }

    serde_json::to_string_pretty(data)
        .unwrap_or_else(|_| data.to_string())
        .dimmed()
        .to_string()
}

fn render_list(label: &str, items: &[Value], line: fn(&Value) -> String) -> String {
    let mut out = format!("{} ({})", label.bold(), items.len());
    for item in items {
        out.push_str("\n  - ");
        out.push_str(&line(item));
    }
    out
}

fn field<'a>(item: &'a Value, key: &str) -> Option<&'a str> {
    item.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn contact_line(item: &Value) -> String {
    let name = match (field(item, "firstName"), field(item, "lastName")) {
        (Some(first), Some(last)) => format!("{first} {last}"),
        (Some(first), None) => first.to_string(),
        (None, Some(last)) => last.to_string(),
        (None, None) => field(item, "contactName")
            .unwrap_or("(unnamed)")
            .to_string(),
    };

    let mut line = name.bold().to_string();
    if let Some(email) = field(item, "email") {
        line.push_str(&format!("  <{email}>"));
    }
    if let Some(phone) = field(item, "phone") {
        line.push_str(&format!("  {phone}"));
    }
    line
}

fn event_line(item: &Value) -> String {
    let title = field(item, "title").unwrap_or("(untitled)");
    let mut line = title.bold().to_string();
    if let Some(start) = field(item, "startTime") {
        line.push_str(&format!("  {start}"));
    }
    line
}

fn opportunity_line(item: &Value) -> String {
    let name = field(item, "name").unwrap_or("(unnamed)");
    let mut line = name.bold().to_string();
    if let Some(status) = field(item, "status") {
        line.push_str(&format!("  [{status}]"));
    }
    if let Some(value) = item.get("monetaryValue").and_then(Value::as_f64) {
        line.push_str(&format!("  ${value:.2}"));
    }
    line
}
