//! `extbuild build` command

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::BuildArgs;
use extbuild::core::{BuildConfiguration, CompilerFamily, Extension, PlatformDescriptor};
use extbuild::ops::{build_extension, BuildExtOptions};
use extbuild::util::config::{global_config_path, load_config, project_config_path};
use extbuild::util::fs::absolute;
use extbuild::util::process::{find_cmake, find_interpreter};
use extbuild::util::{BuildEnvironment, SystemRunner};
use extbuild::vcpkg::DependencyStatus;

pub fn execute(args: BuildArgs) -> Result<()> {
    let opts = resolve_options(&args)?;

    let report = build_extension(&mut SystemRunner, &opts)?;

    if report.dependencies == DependencyStatus::Installed {
        eprintln!("   Installed vcpkg dependencies");
    }
    eprintln!(
        "    Finished `{}` -> {}",
        opts.extension.name(),
        opts.output_dir.display()
    );

    Ok(())
}

/// Merge CLI flags, config files and the environment into build options.
///
/// CLI beats project config, which beats global config.
pub fn resolve_options(args: &BuildArgs) -> Result<BuildExtOptions> {
    let source_dir = absolute(&args.source_dir)?;

    let global = global_config_path();
    let config = load_config(global.as_deref(), &project_config_path(&source_dir));
    let build = &config.build;

    let compiler = match args.compiler.as_ref().or(build.compiler.as_ref()) {
        Some(name) => name.parse::<CompilerFamily>()?,
        None => CompilerFamily::host_default(),
    };
    let mut platform = PlatformDescriptor::host().with_compiler(compiler);
    if let Some(plat_name) = args.plat_name.as_ref().or(build.plat_name.as_ref()) {
        platform = platform.with_plat_name(plat_name.clone());
    }

    let output_dir = match args.output_dir.as_ref().or(build.output_dir.as_ref()) {
        Some(dir) => absolute(dir)?,
        None => source_dir.join("build").join("lib"),
    };
    let build_temp = match args.build_temp.as_ref().or(build.build_temp.as_ref()) {
        Some(dir) => absolute(dir)?,
        None => source_dir.join("build").join("temp"),
    };

    let interpreter = args
        .interpreter
        .clone()
        .or_else(|| build.interpreter.clone())
        .or_else(find_interpreter)
        .unwrap_or_else(|| {
            tracing::warn!("no Python interpreter found in PATH, passing `python3` to CMake");
            PathBuf::from("python3")
        });

    let cmake = args
        .cmake
        .clone()
        .or_else(|| build.cmake.clone())
        .unwrap_or_else(find_cmake);

    let env = BuildEnvironment::from_process(build, args.generator.as_deref());

    Ok(BuildExtOptions {
        extension: Extension::new(args.name.clone(), source_dir)?,
        platform,
        configuration: BuildConfiguration::from_debug(args.debug || build.debug),
        output_dir,
        build_temp,
        interpreter,
        jobs: args.jobs.or(build.jobs),
        cmake,
        env,
    })
}
