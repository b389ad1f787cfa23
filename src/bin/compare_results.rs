use std::{env, process};

use bench_compare::{CommandLineConfig, CompareConfig, CompareError, compare_files, write_report};
use tracing_subscriber::EnvFilter;

const REGRESSION_EXIT_CODE: i32 = 5;

fn main() {
    init_logging();
    let args: Vec<String> = env::args().collect();
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match CommandLineConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => fail(err),
    };

    match run(&config) {
        Ok(true) => {
            eprintln!(
                "Regression detected between {} and {}",
                config.baseline.display(),
                config.current.display()
            );
            process::exit(REGRESSION_EXIT_CODE);
        }
        Ok(false) => {}
        Err(err) => fail(err),
    }
}

/// Returns whether a report was written for significant regressions.
fn run(config: &CommandLineConfig) -> Result<bool, CompareError> {
    let comparison = compare_files(&config.baseline, &config.current, &CompareConfig::default())?;
    if !comparison.significant {
        return Ok(false);
    }
    write_report(
        &config.output,
        &config.baseline,
        &config.current,
        &comparison.regressions,
    )?;
    Ok(true)
}

fn fail(err: CompareError) -> ! {
    match &err {
        CompareError::Usage(usage) => eprintln!("{usage}"),
        CompareError::UnsupportedFormat(_) => {
            eprintln!("Provided files must either be .json files or .csv files: {err}")
        }
        _ => eprintln!("error: {err}"),
    }
    process::exit(err.exit_code());
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
