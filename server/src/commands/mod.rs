use clap::Subcommand;

use crate::Result;

pub(crate) mod serve;
pub(crate) mod validate;

#[derive(Subcommand)]
pub(crate) enum Command {
    Serve,
    Validate,
}

impl Default for Command {
    fn default() -> Self {
        Self::Serve
    }
}

impl Command {
    pub(crate) async fn run(&self) -> Result<()> {
        match self {
            Command::Serve => serve::serve().await,
            Command::Validate => validate::validate().await,
        }
    }
}
