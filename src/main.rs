use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use testcase_loader::cli;
use testcase_loader::housekeeping::clean_previous_results;
use testcase_loader::logging::{self, Verbosity};
use testcase_loader::output::OutputFormatter;
use testcase_loader::TestCaseLoader;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    let plan = args.resolve()?;

    if !args.no_clean {
        clean_previous_results(&plan.results_dir, &plan.diffs_file);
    }

    let loader = TestCaseLoader::new(plan.scan);
    let (cases, errors) = loader.discover_all();
    for error in &errors {
        tracing::error!("{error}");
    }

    tracing::info!("Rendering {} case(s) as {}", cases.len(), args.format.as_str());
    let rendered = OutputFormatter::format(&cases, errors.len(), args.format)?;

    match args.output_file {
        Some(ref path) => std::fs::write(path, rendered)
            .with_context(|| format!("Failed to write output file: {}", path.display()))?,
        None => println!("{rendered}"),
    }

    if args.fail_on_error && !errors.is_empty() {
        anyhow::bail!("{} test case(s) failed to resolve", errors.len());
    }

    Ok(())
}
