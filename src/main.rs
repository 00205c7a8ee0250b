use anyhow::Result;

fn main() -> Result<()> {
    fb_archive_export::cli::run()
}
