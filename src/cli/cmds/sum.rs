use anyhow::Context;

use crate::base;
use crate::cli;

/// View spending totals per category
#[derive(clap::Parser)]
pub struct Sum {
    /// CSV file of transactions, with a header line naming the 'category' and
    /// 'amount' fields
    file: Option<std::path::PathBuf>,

    /// Print totals as JSON instead of a table
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    categories_opts: cli::sharedopts::CategoriesOpts,
}

impl Sum {
    pub fn run(&self, config: &base::Config, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let Some(path) = &self.file else {
            return Ok(cli::Output::None);
        };
        let file = cli::util::open_csv(fs, path)?;
        let rl = base::Rowlist::from_reader(file)
            .with_context(|| format!("failed to parse '{}'", path.display()))?;

        let filter = cli::util::category_filter(&self.categories_opts);
        let mut totals = base::aggregate(&rl);
        totals.retain(|c| filter.matches(c));

        Ok(if self.json {
            cli::Output::Str(totals.to_string())
        } else {
            cli::Output::Totalsprinter(base::totalsprinter::Config {
                charset: cli::util::charset_from_config(config),
                totals,
            })
        })
    }
}
