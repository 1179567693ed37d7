//! `extbuild args` command

use anyhow::Result;

use crate::cli::ArgsArgs;
use crate::commands::build::resolve_options;
use extbuild::ops::plan_args;

pub fn execute(args: ArgsArgs) -> Result<()> {
    let opts = resolve_options(&args.build)?;
    let cmake_args = plan_args(&opts)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&cmake_args)?);
        return Ok(());
    }

    println!("configure: {}", cmake_args.configure.join(" "));
    println!("build: {}", cmake_args.build.join(" "));

    Ok(())
}
