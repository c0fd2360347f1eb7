//! Command line front end. Each subcommand turns its arguments and the working
//! directory's config into an [`Output`] for `main` to print.

mod cmds;
mod output;
mod sharedopts;
mod util;

#[cfg(test)]
mod testing;

pub use cmds::root::Root;
use output::Output;
