use anyhow::Context;

use crate::base;
use crate::cli;

/// Chart transaction files interactively
///
/// Reads one CSV file path per line from standard input and redraws the chart
/// after each. An empty line selects nothing. ':resize N' lays the chart out
/// again for N columns. ':q' or the end of input quits.
#[derive(clap::Parser)]
pub struct Browse {
    /// Chart width in columns [default: terminal width]
    #[arg(long, value_name = "COLUMNS")]
    width: Option<usize>,

    /// Print category totals as JSON before each chart
    #[arg(long)]
    debug: bool,

    #[command(flatten)]
    categories_opts: cli::sharedopts::CategoriesOpts,
}

const HEADING: &str = "Finance Tracker";

#[derive(Debug, PartialEq, Eq)]
enum Event<'a> {
    Select(Option<&'a std::path::Path>),
    Resize(usize),
    Quit,
}

fn parse_event(line: &str) -> anyhow::Result<Event<'_>> {
    let line = line.trim();
    if line == ":q" {
        return Ok(Event::Quit);
    }
    if let Some(arg) = line.strip_prefix(":resize") {
        let arg = arg.trim();
        let width = arg
            .parse::<usize>()
            .with_context(|| format!("invalid width '{}'", arg))?;
        return Ok(Event::Resize(width));
    }
    Ok(Event::Select(
        (!line.is_empty()).then(|| std::path::Path::new(line)),
    ))
}

impl Browse {
    /// Runs a session until `input` ends. Charts go to `out` and errors to
    /// `err`, neither of which ends the session.
    pub fn run<I, W, E>(
        &self,
        input: I,
        mut out: W,
        mut err: E,
        config: &base::Config,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output>
    where
        I: std::io::BufRead,
        W: std::io::Write,
        E: std::io::Write,
    {
        writeln!(out, "{}", HEADING)?;
        writeln!(out)?;

        let chart = base::TermRenderer::new(
            &mut out,
            cli::util::charset_from_config(config),
            self.width.unwrap_or_else(cli::util::term_width),
            config.chart_height,
        );
        let filter = cli::util::category_filter(&self.categories_opts);
        let mut tracker =
            base::Tracker::mount(chart, self.debug || config.show_debug).with_filter(filter);

        for line in input.lines() {
            let line = line.context("failed to read input")?;
            let res = match parse_event(&line) {
                Ok(Event::Quit) => break,
                Ok(Event::Resize(width)) => tracker.resize(width).map_err(anyhow::Error::from),
                Ok(Event::Select(path)) => cli::util::select(&mut tracker, fs, path),
                Err(e) => Err(e),
            };
            if let Err(e) = res {
                tracing::debug!(%line, "event failed");
                writeln!(err, "error: {:#}", e)?;
            }
        }

        tracker.unmount().context("failed to close chart")?;
        Ok(cli::Output::None)
    }
}
