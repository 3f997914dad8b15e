use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use modelgen_meta::{Catalog, PROJECT_FILE, ProjectFile};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the project file
    #[arg(short, long, default_value = PROJECT_FILE)]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let project_file = ProjectFile::open(&self.config).unwrap_or_exit();
        let catalog = Catalog::load_dir(project_file.tables_dir()).unwrap_or_exit();

        let report = ops::check(&catalog, &self.config).wrap_err("Validation failed")?;
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
