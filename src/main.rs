use clap::Parser;
use kata_kit::utils::error::{ErrorSeverity, KataError};
use kata_kit::utils::{logger, validation::Validate};
use kata_kit::{core::calc, BatchConfig, BatchRunner, CliConfig, Command};
use std::io::{self, Write};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = execute(config.command()) {
        tracing::error!(
            "❌ Command failed: {} (Severity: {:?})",
            e,
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        if e.severity() != ErrorSeverity::Low {
            eprintln!("💡 {}", e.recovery_suggestion());
        }

        std::process::exit(e.exit_code());
    }
}

fn execute(command: Command) -> Result<(), KataError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Calc => {
            let outcome = calc::run(io::stdin().lock(), &mut out)?;
            tracing::debug!("Calc outcome: {:?}", outcome);
        }
        Command::Prefix { words } => {
            writeln!(out, "{}", kata_kit::longest_common_prefix(&words))?;
        }
        Command::Palindrome { number } => {
            writeln!(out, "{}", kata_kit::is_palindrome_number(number))?;
        }
        Command::Roman { numeral } => {
            writeln!(out, "{}", kata_kit::parse_roman(&numeral)?)?;
        }
        Command::Batch { config, json } => {
            tracing::info!("📁 Loading batch from: {}", config);
            let batch = BatchConfig::from_file(&config)?;
            batch.validate()?;

            for report in BatchRunner::new(&batch).run() {
                if json {
                    writeln!(out, "{}", report.to_json_line()?)?;
                } else {
                    writeln!(
                        out,
                        "[{}] {} {} => {}",
                        report.index, report.kind, report.input, report.output
                    )?;
                }
            }
        }
    }

    Ok(())
}
