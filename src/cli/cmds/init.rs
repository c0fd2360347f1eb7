use anyhow::Context;

use crate::base;
use crate::cli;

/// Write a configuration file in the current directory
///
/// A new configuration turns on colored output and Unicode symbols. Running
/// again keeps existing settings unless told otherwise, and prints the
/// configuration as written.
#[derive(clap::Parser)]
pub struct Init {
    /// Restore an existing configuration to defaults
    #[arg(long)]
    reset_config: bool,

    /// Rows available to the pie chart
    #[arg(long, value_name = "ROWS")]
    chart_height: Option<usize>,

    /// Draw with ASCII symbols and no color
    #[arg(long)]
    plain: bool,

    /// Turn on printing category totals as JSON before each chart
    #[arg(long)]
    debug: bool,
}

fn initial_config() -> base::Config {
    base::Config {
        use_colored_output: true,
        use_unicode_symbols: true,
        ..Default::default()
    }
}

impl Init {
    fn apply(&self, config: &mut base::Config) {
        if let Some(height) = self.chart_height {
            config.chart_height = height;
        }
        if self.plain {
            config.use_colored_output = false;
            config.use_unicode_symbols = false;
        }
        if self.debug {
            config.show_debug = true;
        }
    }

    pub fn run(&self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let already_configured = fs.has_config();
        let path = fs.path::<base::Config>();

        let mut config = if self.reset_config || !already_configured {
            initial_config()
        } else {
            fs.read::<base::Config>()
                .with_context(|| format!("failed to read '{}'", path.display()))?
        };
        self.apply(&mut config);
        fs.write(&config)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            reset = self.reset_config,
            chart_height = config.chart_height,
            show_debug = config.show_debug,
            "config written"
        );

        let heading = if !already_configured {
            format!("Configuration initialized in '{}'", fs.dir().display())
        } else if self.reset_config {
            format!("Configuration in '{}' reset to defaults", fs.dir().display())
        } else {
            format!("Configuration reinitialized in '{}'", fs.dir().display())
        };
        Ok(cli::Output::Str(format!("{}:\n{}", heading, config)))
    }
}
