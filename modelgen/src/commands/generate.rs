use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use modelgen_codegen::GeneratorConfig;
use modelgen_meta::{Catalog, PROJECT_FILE, ProjectFile};

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the project file
    #[arg(short, long, default_value = PROJECT_FILE)]
    pub config: PathBuf,

    /// Output directory (overrides the project setting)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print generated classes instead of writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Also generate members older runtimes rely on
    #[arg(long)]
    pub legacy: bool,

    /// Tables to generate (defaults to all)
    pub tables: Vec<String>,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let project_file = ProjectFile::open(&self.config).unwrap_or_exit();
        let catalog = Catalog::load_dir(project_file.tables_dir()).unwrap_or_exit();
        let tables = catalog.select(&self.tables).unwrap_or_exit();

        let mut config = GeneratorConfig::from(project_file.project());
        if self.legacy {
            config = config.legacy(true);
        }
        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| project_file.output_dir());

        let report = ops::generate(
            &tables,
            &config,
            GenerateOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
            },
        );
        report.render(&mut TerminalOutput::new());

        if report.has_failures() {
            std::process::exit(1);
        }
        Ok(())
    }
}
