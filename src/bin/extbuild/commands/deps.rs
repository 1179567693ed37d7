//! `extbuild deps` command

use anyhow::Result;

use crate::cli::{DepsArgs, DepsCommands};
use extbuild::core::OsFamily;
use extbuild::ops::{check_dependencies, force_install};
use extbuild::util::fs::absolute;
use extbuild::util::SystemRunner;

pub fn execute(args: DepsArgs) -> Result<()> {
    let os = OsFamily::host();

    match args.command {
        DepsCommands::Check(target) => {
            let source_dir = absolute(&target.source_dir)?;
            let report = check_dependencies(&mut SystemRunner, &source_dir, os)?;

            if report.is_satisfied() {
                println!("all {} dependencies installed", report.declared.len());
                return Ok(());
            }

            if !report.vcpkg_available {
                println!("vcpkg not available under {}", source_dir.join("vcpkg").display());
            }
            println!("missing: {}", report.missing.join(" "));

            // Unsatisfied dependencies are a failing check
            std::process::exit(1);
        }
        DepsCommands::Install(target) => {
            let source_dir = absolute(&target.source_dir)?;
            force_install(&mut SystemRunner, &source_dir, os)?;
            eprintln!("   Installed vcpkg dependencies");
            Ok(())
        }
    }
}
