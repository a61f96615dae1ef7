//! Stats Grid Section

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::components::style::{Background, Padding};
use crate::constants::STATS_GRID_DEFAULT_COLUMNS;
use crate::view::{self, RenderOnce, View, format_number};

/// A stat value, shown as given
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Number(n) => f.write_str(&format_number(*n)),
            StatValue::Text(text) => f.write_str(text),
        }
    }
}

/// One statistic card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StatItem {
    pub label: String,
    pub value: StatValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl StatItem {
    pub fn new(label: impl Into<String>, value: StatValue) -> Self {
        Self {
            label: label.into(),
            value,
            unit: None,
        }
    }
}

/// Grid of statistic cards
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsGrid {
    #[serde(default)]
    pub stats: Vec<StatItem>,
    /// 2, 3 or 4
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default)]
    pub show_hover: bool,
    #[serde(default)]
    pub no_border: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(flatten)]
    pub background: Background,
    #[serde(flatten)]
    pub padding: Padding,
}

impl StatsGrid {
    fn column_count(&self) -> u8 {
        match self.columns {
            None => STATS_GRID_DEFAULT_COLUMNS,
            Some(n @ 2..=4) => n,
            Some(n) => {
                warn!(columns = n, "Unsupported stats grid column count, using default");
                STATS_GRID_DEFAULT_COLUMNS
            }
        }
    }
}

impl RenderOnce for StatsGrid {
    fn render(self) -> View {
        let columns = self.column_count();
        let text_color = self.text_color;
        let border_color = self.border_color;
        let (show_hover, no_border) = (self.show_hover, self.no_border);

        let cards = self.stats.into_iter().map(|stat| {
            let unit = stat.unit.map(|unit| {
                view::span()
                    .class("stat-card-unit")
                    .style_opt("color", text_color.clone())
                    .style_opt("opacity", text_color.as_ref().map(|_| "0.7"))
                    .child(unit)
            });

            view::div()
                .class("stat-card")
                .class_if(!no_border, "has-border")
                .class_if(show_hover, "has-hover")
                .style_opt("border-color", border_color.clone())
                .child(
                    view::div()
                        .class("stat-card-value")
                        .style_opt("color", text_color.clone())
                        .child(stat.value.to_string())
                        .child(unit),
                )
                .child(
                    view::div()
                        .class("stat-card-label")
                        .style_opt("color", text_color.clone())
                        .style_opt("opacity", text_color.as_ref().map(|_| "0.7"))
                        .child(stat.label),
                )
        });

        view::section()
            .class("stats-grid")
            .class_opt(self.class_name)
            .styles(self.background.styles())
            .child(
                view::div()
                    .class("stats-grid-wrapper")
                    .class(format!("stats-grid-columns-{columns}"))
                    .styles(self.padding.vars())
                    .children(cards),
            )
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_card_per_stat_in_order() {
        let grid: StatsGrid = serde_json::from_value(serde_json::json!({
            "stats": [
                { "label": "Users", "value": 100 },
                { "label": "Uptime", "value": "99.9", "unit": "%" }
            ],
            "columns": 2,
            "paddingY": "4rem"
        }))
        .expect("valid stats grid");
        let view = grid.render();

        let wrapper = view.find_by_class("stats-grid-wrapper").expect("wrapper");
        assert!(wrapper.has_class("stats-grid-columns-2"));
        assert_eq!(wrapper.style_value("--padding-y"), Some("4rem"));

        let cards = view.find_all_by_class("stat-card");
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].text_content(), "100Users");
        assert_eq!(cards[1].text_content(), "99.9%Uptime");
        assert!(cards[0].has_class("has-border"));
        assert!(!cards[0].has_class("has-hover"));
    }

    #[test]
    fn test_unsupported_columns_fall_back() {
        let grid = StatsGrid {
            columns: Some(7),
            ..Default::default()
        };
        let view = grid.render();
        assert!(view
            .find_by_class("stats-grid-wrapper")
            .is_some_and(|w| w.has_class("stats-grid-columns-4")));
    }

    #[test]
    fn test_text_color_dims_labels() {
        let grid = StatsGrid {
            stats: vec![StatItem::new("Teams", StatValue::Number(12.0))],
            text_color: Some("#333".into()),
            no_border: true,
            ..Default::default()
        };
        let view = grid.render();

        let label = view.find_by_class("stat-card-label").expect("label");
        assert_eq!(label.style_value("color"), Some("#333"));
        assert_eq!(label.style_value("opacity"), Some("0.7"));
        assert!(!view.find_by_class("stat-card").is_some_and(|c| c.has_class("has-border")));
    }
}
