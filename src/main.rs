//! fnpack CLI - serverless artifact packager
//!
//! Usage: fnpack <COMMAND>
//!
//! Commands:
//!   package    Archive compiled output and bind artifacts to functions
//!   deps       Install external modules into every compiled output
//!   packagers  List registered packagers

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;

use fnpack::config::{self, Config, LoadedConfig, Verbosity};
use fnpack::domain::ports::Logger;
use fnpack::domain::value_objects::ExcludePattern;
use fnpack::infrastructure::{all_packagers, ServiceManifest, SystemCommandRunner};
use fnpack::presentation::factory;
use fnpack::presentation::output::{create_renderer, OutputFormat, PackagerInfo, Renderer};

mod cli;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        if json {
            let output = serde_json::json!({
                "success": false,
                "error": format!("{:#}", err),
            });
            println!("{}", output);
        } else {
            eprintln!("Error: {:#}", err);
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let project_root = cli.project.clone();
    let loaded = config::resolve(&project_root, cli.config.as_deref())
        .context("failed to load configuration")?;
    report_config_warnings(&loaded, cli.json);

    let mut config = loaded.config;
    config.output.verbosity = effective_verbosity(&cli, config.output.verbosity);
    if let Some(format) = cli.log_format {
        config.output.log_format = format;
    }

    let logger = factory::create_logger(config.output.log_format, config.output.verbosity);
    let renderer = create_renderer(
        OutputFormat::from_json_flag(cli.json),
        std::io::stdout().is_terminal(),
        cli.verbose,
    );

    match cli.command {
        Commands::Package {
            functions,
            reuse_artifacts,
            exclude,
            concurrency,
            build_output,
        } => {
            let overrides = PackageOverrides {
                functions,
                reuse_artifacts,
                exclude,
                concurrency,
                build_output,
            };
            cmd_package(&project_root, &config, overrides, logger, renderer.as_ref())
        }
        Commands::Deps { packager } => cmd_deps(
            &project_root,
            &config,
            packager.as_deref(),
            logger,
            renderer.as_ref(),
        ),
        Commands::Packagers => {
            let listing: Vec<PackagerInfo> = all_packagers(Arc::new(SystemCommandRunner::new()))
                .iter()
                .map(|p| PackagerInfo::describe(p.as_ref()))
                .collect();
            print!("{}", with_newline(renderer.packagers(&listing)));
            Ok(())
        }
    }
}

struct PackageOverrides {
    functions: Vec<String>,
    reuse_artifacts: bool,
    exclude: Option<String>,
    concurrency: Option<usize>,
    build_output: Option<std::path::PathBuf>,
}

fn cmd_package(
    project_root: &Path,
    config: &Config,
    overrides: PackageOverrides,
    logger: Arc<dyn Logger>,
    renderer: &dyn Renderer,
) -> Result<()> {
    let mut options = config
        .package_options(project_root)?
        .with_functions(overrides.functions)
        .with_reuse_artifacts(overrides.reuse_artifacts);
    if let Some(pattern) = overrides.exclude {
        options = options.with_exclude(ExcludePattern::from_option(Some(pattern.as_str()))?);
    }
    if let Some(concurrency) = overrides.concurrency {
        options = options.with_concurrency(concurrency);
    }
    if let Some(build_output) = overrides.build_output {
        options = options.with_build_output(build_output);
    }

    let mut manifest = config.to_manifest(project_root);
    let use_case =
        factory::create_package_use_case(&project_root.join(&options.build_output), logger);
    let result = use_case.execute(&mut manifest, &options)?;

    let manifest_path = ServiceManifest::default_path(project_root);
    manifest
        .save(&manifest_path)
        .with_context(|| format!("failed to save manifest {}", manifest_path.display()))?;

    print!("{}", with_newline(renderer.package(&result, project_root)));
    Ok(())
}

fn cmd_deps(
    project_root: &Path,
    config: &Config,
    packager_id: Option<&str>,
    logger: Arc<dyn Logger>,
    renderer: &dyn Renderer,
) -> Result<()> {
    let packager_id = packager_id.unwrap_or(&config.packaging.packager);
    let packager = factory::create_packager_factory(logger.clone()).resolve(packager_id)?;

    let options = config.dependency_options(project_root);
    let manifest = config.to_manifest(project_root);
    let use_case =
        factory::create_dependency_use_case(&project_root.join(&options.build_output), logger);
    let report = use_case.execute(&manifest, packager.as_ref(), &options)?;

    print!("{}", with_newline(renderer.dependencies(&report)));
    Ok(())
}

fn effective_verbosity(cli: &Cli, configured: Verbosity) -> Verbosity {
    match (cli.quiet, cli.verbose) {
        (true, _) => Verbosity::Quiet,
        (false, 0) => configured,
        (false, 1) => Verbosity::Verbose,
        (false, _) => Verbosity::Debug,
    }
}

fn report_config_warnings(loaded: &LoadedConfig, json: bool) {
    if json {
        return;
    }
    for warning in &loaded.warnings {
        eprintln!("Warning: {}", warning);
    }
    for warning in &loaded.env_warnings {
        eprintln!("Warning: {}", warning);
    }
}

fn with_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
