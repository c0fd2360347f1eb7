use anyhow::Context;

use crate::base;
use crate::cli;

/// Spending by category, from CSV exports of your transactions
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
pub struct Root {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Init(cli::cmds::init::Init),
    Sum(cli::cmds::sum::Sum),
    Pie(cli::cmds::pie::Pie),
    Browse(cli::cmds::browse::Browse),
}

impl Root {
    pub fn run(self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        if let Commands::Init(cmd) = self.command {
            return cmd.run(fs);
        }

        let config = fs
            .read::<base::Config>()
            .with_context(|| format!("failed to read '{}'", fs.path::<base::Config>().display()))?;

        match self.command {
            Commands::Init(_) => unreachable!(),
            Commands::Sum(cmd) => cmd.run(&config, fs),
            Commands::Pie(cmd) => cmd.run(&config, fs),
            Commands::Browse(cmd) => cmd.run(
                std::io::stdin().lock(),
                std::io::stdout().lock(),
                std::io::stderr().lock(),
                &config,
                fs,
            ),
        }
    }
}
