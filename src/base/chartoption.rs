use crate::base;

pub const TITLE: &str = "Spending by Category";
pub const SERIES_NAME: &str = "Spending";
pub const RADIUS: &str = "60%";

/// Pie chart description in the shape of an ECharts option object, so the
/// serialized form can be handed to `chart.setOption` as is.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ChartOption {
    pub title: Title,
    pub tooltip: Tooltip,
    pub legend: Legend,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Title {
    pub text: String,
    pub left: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Tooltip {
    pub trigger: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Legend {
    pub orient: &'static str,
    pub left: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Series {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub radius: &'static str,
    pub data: Vec<Slice>,
    pub emphasis: Emphasis,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Slice {
    pub name: String,
    #[serde(serialize_with = "base::Cents::serialize_units")]
    pub value: base::Cents,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Emphasis {
    pub item_style: ItemStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemStyle {
    pub shadow_blur: u32,
    pub shadow_offset_x: i32,
    pub shadow_color: &'static str,
}

impl ChartOption {
    /// A single pie series with one slice per category, in `totals` order.
    pub fn pie(totals: &base::Totals) -> Self {
        Self {
            title: Title {
                text: TITLE.to_string(),
                left: "center",
            },
            tooltip: Tooltip { trigger: "item" },
            legend: Legend {
                orient: "vertical",
                left: "left",
            },
            series: vec![Series {
                name: SERIES_NAME.to_string(),
                kind: "pie",
                radius: RADIUS,
                data: totals
                    .iter()
                    .map(|(name, value)| Slice {
                        name: name.to_string(),
                        value,
                    })
                    .collect(),
                emphasis: Emphasis {
                    item_style: ItemStyle {
                        shadow_blur: 10,
                        shadow_offset_x: 0,
                        shadow_color: "rgba(0,0,0,0.5)",
                    },
                },
            }],
        }
    }

    /// Slices of the first pie series.
    pub fn slices(&self) -> &[Slice] {
        self.series.first().map(|s| s.data.as_slice()).unwrap_or_default()
    }

    /// Pie radius as a fraction of half the chart's smaller side. Falls back
    /// to 60% when the series radius isn't a percentage.
    pub fn radius_ratio(&self) -> f64 {
        self.series
            .first()
            .and_then(|s| s.radius.strip_suffix('%'))
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|r| r.is_finite() && *r > 0.0)
            .map_or(0.6, |r| r / 100.0)
    }
}

impl std::fmt::Display for ChartOption {
    /// Pretty printed JSON. Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}
