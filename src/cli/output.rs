//! Rendering of character lists for the terminal

use crate::app::models::Character;
use crate::app::ranking::{abs_birth_year, bmi};
use crate::cli::args::OutputFormat;
use crate::errors::Result;

/// Extra column shown next to each character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    None,
    Bmi,
    Age,
}

impl Metric {
    fn header(&self) -> Option<&'static str> {
        match self {
            Metric::None => None,
            Metric::Bmi => Some("BMI"),
            Metric::Age => Some("Years"),
        }
    }

    fn value(&self, character: &Character) -> String {
        match self {
            Metric::None => String::new(),
            Metric::Bmi => bmi(character)
                .map(|value| format!("{:.1}", value))
                .unwrap_or_else(|| "-".to_string()),
            Metric::Age => character
                .birth_year
                .as_deref()
                .and_then(|raw| abs_birth_year(raw).ok())
                .map(|offset| format!("{:+}", offset))
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Render `characters` in the requested format
pub fn render(characters: &[Character], format: OutputFormat, metric: Metric) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(characters)?),
        OutputFormat::Table => Ok(render_table(characters, metric)),
    }
}

fn render_table(characters: &[Character], metric: Metric) -> String {
    if characters.is_empty() {
        return "No characters found.".to_string();
    }

    let name_width = characters
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4); // "Name"
    let rank_width = characters.len().to_string().len().max(1);

    let mut header = format!(
        "{:>rank_width$}  {:<name_width$} {:>8} {:>8} {:>10}",
        "#", "Name", "Height", "Mass", "Born",
    );
    if let Some(metric_header) = metric.header() {
        header.push_str(&format!(" {:>8}", metric_header));
    }

    let separator = "─".repeat(header.chars().count());
    let mut lines = vec![header, separator];

    for (index, character) in characters.iter().enumerate() {
        let mut line = format!(
            "{:>rank_width$}  {:<name_width$} {:>8} {:>8} {:>10}",
            index + 1,
            character.name,
            format_measure(character.height),
            format_measure(character.mass),
            character.birth_year.as_deref().unwrap_or("-"),
        );
        if metric != Metric::None {
            line.push_str(&format!(" {:>8}", metric.value(character)));
        }
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

fn format_measure(value: f64) -> String {
    if value > 0.0 {
        value.to_string()
    } else {
        "-".to_string()
    }
}
