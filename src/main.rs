use candy_calc::utils::{logger, validation::Validate};
use candy_calc::{CalcError, CliConfig, EngineOutcome, OutputFormat, ProgressEngine};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting candy-calc");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let outcome = config.roster_source().and_then(|source| {
        ProgressEngine::new(source)
            .with_target(config.target)
            .with_apply(config.apply)
            .run()
    });

    match outcome {
        Ok(outcome) => print_outcome(&outcome, config.format)?,
        Err(e) => fail(&e),
    }

    Ok(())
}

fn print_outcome(outcome: &EngineOutcome, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            println!("{}", outcome.report);
            if let Some(evolved) = &outcome.evolved {
                println!();
                println!("After evolving:");
                for holding in evolved {
                    println!("\t{}", holding);
                }
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "report": outcome.report,
                "evolved": outcome.evolved,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(())
}

fn fail(e: &CalcError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e);
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
