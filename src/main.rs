use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use serde::Serialize;

use uk_postcode::config::{Config, Mode, OutputFormat};
use uk_postcode::{check, format};

/// One line of `validate --output json`
#[derive(Debug, Serialize)]
struct ValidationRecord<'a> {
    input: &'a str,
    valid: bool,
    reason: Option<String>,
}

/// One line of `format --output json`
#[derive(Debug, Serialize)]
struct FormatRecord<'a> {
    input: &'a str,
    formatted: Option<String>,
    error: Option<String>,
    reason: Option<String>,
}

fn main() -> Result<ExitCode> {
    let config = Config::from_args_and_env()?;

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .init();

    let inputs = if config.reads_stdin() {
        read_stdin_lines()?
    } else {
        config.inputs.clone()
    };
    log::debug!("processing {} postcode(s) in {:?} mode", inputs.len(), config.mode);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut all_valid = true;

    for input in &inputs {
        let valid = match config.mode {
            Mode::Validate => report_validation(&mut out, input, config.output)?,
            Mode::Format => report_format(&mut out, input, config.output)?,
        };
        all_valid &= valid;
    }
    out.flush().context("failed to flush stdout")?;

    Ok(if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Read one postcode per non-blank stdin line
fn read_stdin_lines() -> Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        let line = line.trim_end_matches('\r');
        if !line.trim().is_empty() {
            inputs.push(line.to_string());
        }
    }
    Ok(inputs)
}

fn report_validation(out: &mut impl Write, input: &str, output: OutputFormat) -> Result<bool> {
    let result = check(input);

    match output {
        OutputFormat::Text => match &result {
            Ok(()) => writeln!(out, "{}: valid", input)?,
            Err(reason) => writeln!(out, "{}: invalid ({})", input, reason)?,
        },
        OutputFormat::Json => {
            let record = ValidationRecord {
                input,
                valid: result.is_ok(),
                reason: result.as_ref().err().map(ToString::to_string),
            };
            writeln!(out, "{}", serde_json::to_string(&record)?)?;
        }
    }

    Ok(result.is_ok())
}

fn report_format(out: &mut impl Write, input: &str, output: OutputFormat) -> Result<bool> {
    let result = format(input);

    match output {
        OutputFormat::Text => match &result {
            Ok(formatted) => writeln!(out, "{}", formatted)?,
            Err(err) => eprintln!("{}: {} ({})", input, err, err.reason()),
        },
        OutputFormat::Json => {
            let record = FormatRecord {
                input,
                formatted: result.as_ref().ok().cloned(),
                error: result.as_ref().err().map(ToString::to_string),
                reason: result.as_ref().err().map(|e| e.reason().to_string()),
            };
            writeln!(out, "{}", serde_json::to_string(&record)?)?;
        }
    }

    Ok(result.is_ok())
}
