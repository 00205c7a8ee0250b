use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::export::export_archive;
use crate::utils::resolve_output_dir;

#[derive(Parser)]
#[command(name = "fb-archive-export")]
#[command(version = "0.1.0")]
#[command(about = "Convert a Facebook message archive into TSV tables", long_about = None)]
pub struct Cli {
    /// The archive file to parse. Currently only html/messages.html is supported.
    pub archive_file: PathBuf,

    /// Output directory. By default, files are saved alongside the archive file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let out_dir = resolve_output_dir(&cli.archive_file, cli.output.as_deref());
    export_archive(&cli.archive_file, &out_dir)?;

    Ok(())
}
