//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use grove_domain::{AttentionTier, GardenTier, HealthTier};
use grove_engine::{AttentionItem, LayoutMode, LayoutResult, LayoutStats, TribeHealth};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a computed layout.
    pub fn format_layout(&self, layout: &LayoutResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(layout)?),
            OutputFormat::Table => Ok(self.format_layout_table(layout)),
        }
    }

    fn format_layout_table(&self, layout: &LayoutResult) -> String {
        if layout.is_empty() {
            return self.colorize("No contacts to lay out.", "yellow");
        }

        let tree = layout.mode == LayoutMode::Tree;
        let mut builder = Builder::default();
        let mut header = vec!["ID", "Tier", "Days", "X", "Y"];
        if tree {
            header.push("Cluster");
        }
        builder.push_record(header);

        for entry in &layout.entries {
            let mut row = vec![
                entry.id.clone(),
                entry.tier.to_string(),
                format_days(entry.days_since),
                format!("{:.1}", entry.position.x),
                format!("{:.1}", entry.position.y),
            ];
            if let Some(cluster) = entry.cluster {
                row.push(cluster.to_string());
            }
            builder.push_record(row);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!("{}\n{}", table, self.legend(layout.mode))
    }

    /// Format layout statistics.
    pub fn format_stats(&self, stats: &LayoutStats) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let per_tier: serde_json::Map<String, serde_json::Value> = stats
                    .per_tier
                    .iter()
                    .map(|(tier, count)| (tier.to_string(), (*count).into()))
                    .collect();
                Ok(serde_json::to_string_pretty(&serde_json::json!({
                    "mode": stats.mode,
                    "total": stats.total,
                    "neverContacted": stats.never_contacted,
                    "perTier": per_tier,
                }))?)
            }
            OutputFormat::Table => Ok(stats.summary()),
        }
    }

    /// Format tribe health, most neglected first.
    pub fn format_tribes(&self, tribes: &[TribeHealth]) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(tribes)?);
        }
        if tribes.is_empty() {
            return Ok(self.colorize("No tribes found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Tribe", "Members", "Avg days", "Max days", "Thirsty"]);
        for tribe in tribes {
            builder.push_record([
                tribe.tag_name.clone(),
                tribe.count.to_string(),
                format!("{:.1}", tribe.avg_days_since),
                tribe.max_days_since.to_string(),
                if tribe.is_thirsty { "yes" } else { "no" }.to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let thirsty = tribes.iter().filter(|t| t.is_thirsty).count();
        let footer = if thirsty > 0 {
            self.warning(&format!("{} of {} tribe(s) are thirsty", thirsty, tribes.len()))
        } else {
            self.success("All tribes are watered")
        };
        Ok(format!("{}\n{}", table, footer))
    }

    /// Format the needs-attention list.
    pub fn format_attention(&self, items: &[AttentionItem]) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(items)?);
        }
        if items.is_empty() {
            return Ok(self.success("Nobody needs attention right now"));
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Importance", "Days", "Threshold", "Overdue"]);
        for item in items {
            builder.push_record([
                item.id.clone(),
                item.importance.as_str().to_string(),
                format_days(item.days_since),
                item.threshold_days.to_string(),
                item.overdue_days
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// One swatch per tier of the mode's policy, in its render color.
    fn legend(&self, mode: LayoutMode) -> String {
        let tiers: Vec<HealthTier> = match mode {
            LayoutMode::Garden => GardenTier::ALL.iter().map(|&t| t.into()).collect(),
            LayoutMode::Tree => vec![
                AttentionTier::Healthy.into(),
                AttentionTier::NeedsAttention.into(),
            ],
        };
        tiers
            .iter()
            .map(|tier| self.paint(&format!("● {}", tier), tier.color()))
            .collect::<Vec<_>>()
            .join("  ")
    }

    /// Paint text with a `#rrggbb` color if color is enabled.
    fn paint(&self, text: &str, hex: &str) -> String {
        match (self.color_enabled, hex_rgb(hex)) {
            (true, Some((r, g, b))) => text.truecolor(r, g, b).to_string(),
            _ => text.to_string(),
        }
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn format_days(days: Option<i64>) -> String {
    days.map(|d| d.to_string()).unwrap_or_else(|| "never".to_string())
}

/// Parse a `#rrggbb` color.
fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
