use crate::prelude::*;
use clap::Parser;

mod config;
mod error;
mod export;
mod markdown;
mod prelude;
mod site;
mod summary;
mod wordpress;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Migrate blog content from a Hugo build tree or a directory of \
                  Markdown files into WordPress, either by posting each entry to \
                  the content API or by writing a WXR export file"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "WPMIGRATE_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Migrate a rendered Hugo build tree
    Site(crate::site::App),

    /// Migrate Markdown files with front matter
    Markdown(crate::markdown::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Site(sub_app) => crate::site::run(sub_app, app.global).await,
        SubCommands::Markdown(sub_app) => crate::markdown::run(sub_app, app.global).await,
    }
}
