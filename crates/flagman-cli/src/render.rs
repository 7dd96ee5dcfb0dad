//! Human and machine renderings of a manifest diff.

use colored::Colorize;
use serde_json::Value;

use flagman_diff::{change_breakdown, DiffReport, IgnoreSet, ManifestDiff};
use flagman_types::{Change, ChangeKind, FlagType};

/// One line per flag: `+ key`, `- key`, `~ key`, ordered by path.
pub fn render_flat(diff: &ManifestDiff) -> String {
    let mut changes: Vec<&Change> = diff.changes.iter().collect();
    changes.sort_by(|a, b| a.path.cmp(&b.path));

    let mut lines = header(diff);
    lines.extend(changes.into_iter().map(|change| {
        let line = format!("{} {}", marker(change.kind), change.flag_key());
        paint(change.kind, &line)
    }));
    finish(lines)
}

/// Grouped additions, removals, and modifications, with a field-level
/// breakdown for modified flags.
pub fn render_tree(diff: &ManifestDiff, ignore: &IgnoreSet) -> String {
    let report = DiffReport::from_diff(diff);
    let mut lines = header(diff);

    if !report.additions.is_empty() {
        lines.push("◆ Additions:".green().to_string());
        for change in &report.additions {
            lines.push(format!("  {}", flag_heading(change, change.new_value.as_ref())));
            push_value(&mut lines, change.new_value.as_ref(), "    ");
        }
        lines.push(String::new());
    }

    if !report.removals.is_empty() {
        lines.push("◆ Removals:".red().to_string());
        for change in &report.removals {
            lines.push(format!("  {}", flag_heading(change, change.old_value.as_ref())));
            push_value(&mut lines, change.old_value.as_ref(), "    ");
        }
        lines.push(String::new());
    }

    if !report.modifications.is_empty() {
        lines.push("◆ Modifications:".yellow().to_string());
        for change in &report.modifications {
            lines.push(format!("  {}", flag_heading(change, change.new_value.as_ref())));
            let fields = change_breakdown(change, ignore);
            if fields.is_empty() {
                lines.push("    Before:".to_string());
                push_value(&mut lines, change.old_value.as_ref(), "      ");
                lines.push("    After:".to_string());
                push_value(&mut lines, change.new_value.as_ref(), "      ");
            } else {
                lines.extend(fields.into_iter().map(|field| {
                    let old = field.old.as_ref().map_or_else(|| "(not set)".to_string(), format_field_value);
                    let new = field.new.as_ref().map_or_else(|| "(removed)".to_string(), format_field_value);
                    format!("    • {}: {} → {}", field.field, old, new)
                }));
            }
        }
    }

    finish(lines)
}

/// The grouped [`DiffReport`] as pretty JSON.
pub fn render_json(diff: &ManifestDiff) -> anyhow::Result<String> {
    Ok(DiffReport::from_diff(diff).to_json_pretty()?)
}

/// The grouped [`DiffReport`] as YAML.
pub fn render_yaml(diff: &ManifestDiff) -> anyhow::Result<String> {
    Ok(serde_yaml::to_string(&DiffReport::from_diff(diff))?)
}

/// Compact, human-readable form of a field value.
pub fn format_field_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(s) => format!("{s:?}"),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

fn header(diff: &ManifestDiff) -> Vec<String> {
    vec![
        format!("Found {} difference(s) between manifests:", diff.len()),
        String::new(),
    ]
}

/// Joins lines with a trailing newline.
fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn marker(kind: ChangeKind) -> char {
    match kind {
        ChangeKind::Add => '+',
        ChangeKind::Remove => '-',
        ChangeKind::Change => '~',
    }
}

fn paint(kind: ChangeKind, text: &str) -> String {
    match kind {
        ChangeKind::Add => text.green().to_string(),
        ChangeKind::Remove => text.red().to_string(),
        ChangeKind::Change => text.yellow().to_string(),
    }
}

/// `+ key (type)`; the type suffix is dropped when undeclared and flagged
/// when unrecognized.
fn flag_heading(change: &Change, definition: Option<&Value>) -> String {
    let suffix = match definition.map(FlagType::of) {
        Some(Ok(Some(ty))) => format!(" ({ty})"),
        Some(Err(_)) => " (unknown flagType)".to_string(),
        _ => String::new(),
    };
    let line = format!("{} {}{}", marker(change.kind), change.flag_key(), suffix);
    paint(change.kind, &line)
}

fn push_value(lines: &mut Vec<String>, value: Option<&Value>, indent: &str) {
    let text = value
        .and_then(|v| serde_json::to_string_pretty(v).ok())
        .unwrap_or_else(|| "null".to_string());
    lines.extend(text.lines().map(|line| format!("{indent}{line}")));
}
