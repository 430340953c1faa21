// src/cli/mod.rs — CLI definition (clap derive)

pub mod run;

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "secret-santa",
    about = "Draw Secret Santa assignments across one or more gift categories",
    version
)]
#[command(group(ArgGroup::new("people").required(true).args(["participants", "participants_file"])))]
pub struct Cli {
    /// Comma separated participants, e.g. "Alice <alice@example.com>,Bob"
    #[arg(short, long)]
    pub participants: Option<String>,

    /// File with one participant per line ("Name" or "Name,address")
    #[arg(long, conflicts_with = "participants")]
    pub participants_file: Option<PathBuf>,

    /// Comma separated categories (omit for a single gift each)
    #[arg(short, long)]
    pub categories: Option<String>,

    /// File with one category per line
    #[arg(long, conflicts_with = "categories")]
    pub categories_file: Option<PathBuf>,

    /// Write each participant's assignments to a separate file
    #[arg(short = 'o', long)]
    pub output_files: bool,

    /// Directory for result files
    #[arg(long = "output-path", visible_alias = "of", default_value = ".")]
    pub output_path: PathBuf,

    /// Email each participant their assignments
    #[arg(long, conflicts_with = "output_files")]
    pub email: bool,

    /// With --email: print the messages instead of sending them
    #[arg(long, requires = "email")]
    pub dry_run: bool,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed the random draw (reproducible results)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Give up after this many attempts
    #[arg(long)]
    pub max_attempts: Option<u32>,

    /// Verbosity: -v for info, -vv for debug
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
