use anyhow::{Context, Result};
use int_vector_driver::cli::Cli;
use int_vector_driver::smoke::{report_violations, run_all_scenarios, run_smoke};
use std::io;
use std::process;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(&cli);

    if cli.test {
        println!("Running built-in scenarios...");
        run_all_scenarios().context("Scenario checks failed")?;
        println!("All scenarios passed!");
        return Ok(());
    }

    let violations = run_smoke(&cli).context("Smoke run failed")?;
    if !violations.is_empty() {
        let prog = std::env::args()
            .next()
            .unwrap_or_else(|| "int_vector_smoke".to_string());
        report_violations(&mut io::stderr(), &prog, &violations)?;
        process::exit(1);
    }
    Ok(())
}

fn init_logging(cli: &Cli) {
    let mut builder = pretty_env_logger::formatted_timed_builder();
    match std::env::var("RUST_LOG") {
        Ok(filters) => builder.parse_filters(&filters),
        Err(_) => builder.filter_level(cli.log_level()),
    };
    builder.init();
}
