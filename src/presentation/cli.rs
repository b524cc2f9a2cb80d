// Command line arguments
use crate::infrastructure::config::DEFAULT_INI;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "board-deployer",
    version,
    about = "Deploy or audit boards between instances, matching content by slug"
)]
pub struct Cli {
    /// Instance to read boards from (a section of the ini file)
    #[arg(long)]
    pub source: String,

    /// Instance(s) to deploy to or audit against
    #[arg(long, required = true, num_args = 1..)]
    pub target: Vec<String>,

    /// Title(s) of the boards to deploy
    #[arg(long, required = true, num_args = 1..)]
    pub board: Vec<String>,

    /// Path to the ini file with instance credentials
    #[arg(long, default_value = DEFAULT_INI)]
    pub ini: PathBuf,

    /// Only report dashboards and looks missing on the target; write nothing
    #[arg(long)]
    pub audit: bool,

    /// Deploy even when some items have no match on the target, skipping them
    #[arg(long, conflicts_with = "audit")]
    pub allow_partial: bool,

    /// Print audit results as JSON
    #[arg(long, requires = "audit")]
    pub json: bool,

    /// Log every API call
    #[arg(short, long)]
    pub verbose: bool,
}
