/// Rows available to the pie chart when the config doesn't say otherwise.
pub const DEFAULT_CHART_HEIGHT: usize = 16;

/// Application config.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Config {
    pub use_colored_output: bool,
    pub use_unicode_symbols: bool,
    /// Print the aggregated totals as JSON before drawing the chart.
    pub show_debug: bool,
    pub chart_height: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            use_colored_output: false,
            use_unicode_symbols: false,
            show_debug: false,
            chart_height: DEFAULT_CHART_HEIGHT,
        }
    }
}

impl std::fmt::Display for Config {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

impl std::str::FromStr for Config {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl TryFrom<&str> for Config {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
