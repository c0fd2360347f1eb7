use anyhow::Context;

use crate::base;
use crate::cli;

/// Draw a pie chart of spending per category
#[derive(clap::Parser)]
pub struct Pie {
    /// CSV file of transactions, with a header line naming the 'category' and
    /// 'amount' fields
    file: Option<std::path::PathBuf>,

    /// Print the chart option as ECharts JSON instead of drawing it
    #[arg(long)]
    echarts: bool,

    /// Print category totals as JSON before the chart
    #[arg(long)]
    debug: bool,

    /// Chart width in columns [default: terminal width]
    #[arg(long, value_name = "COLUMNS")]
    width: Option<usize>,

    #[command(flatten)]
    categories_opts: cli::sharedopts::CategoriesOpts,
}

impl Pie {
    pub fn run(&self, config: &base::Config, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let show_debug = self.debug || config.show_debug;
        let out = if self.echarts {
            let chart = base::JsonRenderer::new(Vec::new());
            self.draw(chart, show_debug, fs)?.into_inner()
        } else {
            let chart = base::TermRenderer::new(
                Vec::new(),
                cli::util::charset_from_config(config),
                self.width.unwrap_or_else(cli::util::term_width),
                config.chart_height,
            );
            self.draw(chart, show_debug, fs)?.into_inner()
        };
        if out.is_empty() {
            return Ok(cli::Output::None);
        }
        let s = String::from_utf8(out).context("chart is not valid utf-8")?;
        Ok(cli::Output::Str(s))
    }

    fn draw<R>(&self, chart: R, show_debug: bool, fs: &base::Fs) -> anyhow::Result<R>
    where
        R: base::Renderer,
    {
        let filter = cli::util::category_filter(&self.categories_opts);
        let mut tracker = base::Tracker::mount(chart, show_debug).with_filter(filter);
        cli::util::select(&mut tracker, fs, self.file.as_deref())?;
        Ok(tracker.unmount()?)
    }
}
