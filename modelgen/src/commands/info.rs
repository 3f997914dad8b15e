use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use modelgen_codegen::GeneratorConfig;
use modelgen_meta::{Catalog, PROJECT_FILE, ProjectFile};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InfoCommand {
    /// Path to the project file
    #[arg(short, long, default_value = PROJECT_FILE)]
    pub config: PathBuf,
}

impl InfoCommand {
    pub fn run(&self) -> Result<()> {
        let project_file = ProjectFile::open(&self.config).unwrap_or_exit();
        let catalog = Catalog::load_dir(project_file.tables_dir()).unwrap_or_exit();
        let config = GeneratorConfig::from(project_file.project());

        let report = ops::info(&project_file, &catalog, &config);
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
