pub const FULLMATCH_HELP: &str = "Match category patterns against whole category names";
pub const FULLMATCH_HELP_LONG: &str = "Match category patterns against whole category names

By default a pattern matches any category containing it, so 'food' is treated as '*food*'. With this flag patterns are used as given. Matching is case-sensitive.";

#[derive(clap::Args)]
pub struct CategoriesOpts {
    /// Wildcard patterns to match categories of interest
    ///
    /// Use commas to separate multiple patterns. A category is included if
    /// it matches any pattern.
    #[arg(
        short,
        long,
        value_name = "PATTERNS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub categories: Vec<String>,

    /// Wildcard patterns to match categories to exclude
    ///
    /// Use commas to separate multiple patterns. A category is excluded if it
    /// matches any pattern. Takes precedence over '--categories'.
    #[arg(
        short = 'x',
        long,
        value_name = "PATTERNS",
        value_delimiter = ',',
        default_value = "",
        hide_default_value = true
    )]
    pub not_categories: Vec<String>,

    #[arg(long, help = FULLMATCH_HELP, long_help = FULLMATCH_HELP_LONG)]
    pub fullmatch: bool,
}
