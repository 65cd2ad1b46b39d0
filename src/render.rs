// src/render.rs

use crate::alerts::{is_out_of_range, AlertRange};
use crate::dosing;
use crate::models::{LogEntry, Parameter};

pub const EMPTY: &str = "No readings yet.";

const GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// 四条参数的文本趋势图，每条一行，按插入顺序
pub fn chart(entries: &[LogEntry]) -> String {
    let (Some(first), Some(last)) = (entries.first(), entries.last()) else {
        return EMPTY.to_string();
    };

    let mut out = format!(
        "Parameter Trends ({} .. {}, {} reading{})\n",
        first.date,
        last.date,
        entries.len(),
        if entries.len() == 1 { "" } else { "s" }
    );
    let rows: Vec<String> = Parameter::ALL
        .into_iter()
        .map(|param| {
            let series: Vec<f64> = entries.iter().map(|e| e.value(param)).collect();
            let (min, max) = bounds(&series);
            format!(
                "{:<8} {}  {} .. {}",
                param.label(),
                sparkline(&series, min, max),
                axis_value(min),
                axis_value(max)
            )
        })
        .collect();
    out.push_str(&rows.join("\n"));
    out
}

// 最多两位小数，去掉多余的 0
fn axis_value(v: f64) -> String {
    let text = format!("{:.2}", v);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn bounds(series: &[f64]) -> (f64, f64) {
    series
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}

fn sparkline(series: &[f64], min: f64, max: f64) -> String {
    let span = max - min;
    series
        .iter()
        .map(|&v| {
            if span <= 0.0 {
                // 平线画在中间
                GLYPHS[GLYPHS.len() / 2 - 1]
            } else {
                let idx = ((v - min) / span * (GLYPHS.len() - 1) as f64).round() as usize;
                GLYPHS[idx.min(GLYPHS.len() - 1)]
            }
        })
        .collect()
}

/// 日志表格；超出告警区间的单元格后缀 `!`
pub fn table(entries: &[LogEntry]) -> String {
    if entries.is_empty() {
        return EMPTY.to_string();
    }

    let mut header = vec!["Date".to_string()];
    header.extend(Parameter::ALL.iter().map(|p| p.label().to_string()));
    header.push("Notes".to_string());

    let mut rows = vec![header];
    for entry in entries {
        let mut row = vec![entry.date.clone()];
        for param in Parameter::ALL {
            row.push(cell(entry.value(param), AlertRange::for_parameter(param)));
        }
        row.push(entry.notes.as_deref().map(flatten_notes).unwrap_or_default());
        rows.push(row);
    }

    let columns = rows[0].len();
    let widths: Vec<usize> = (0..columns)
        .map(|c| rows.iter().map(|r| r[c].chars().count()).max().unwrap_or(0))
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    for (i, row) in rows.iter().enumerate() {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(text, &w)| format!("{:<w$}", text, w = w))
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line.trim_end().to_string());
        if i == 0 {
            lines.push("─".repeat(widths.iter().sum::<usize>() + 2 * (columns - 1)));
        }
    }
    lines.join("\n")
}

/// 多行备注在表格里合并成一行，用 ` / ` 分隔
fn flatten_notes(notes: &str) -> String {
    notes
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" / ")
}

fn cell(value: f64, range: AlertRange) -> String {
    if is_out_of_range(value, range.min, range.max) {
        format!("{}!", value)
    } else {
        value.to_string()
    }
}

pub fn recommendations(latest: Option<&LogEntry>) -> String {
    match latest {
        Some(_) => dosing::recommend(latest),
        None => EMPTY.to_string(),
    }
}
