// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use console::style;
use std::io::Read;

use crate::config::{self, Rule, RuleConfig, Severity};
use crate::error::{ConfigError, LintError, Result, ResultExt};
use crate::rules::RuleEngine;

use super::args::{CheckArgs, Cli, Commands, InitArgs, OutputFormat};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    match cli.effective_command() {
        Commands::Check(args) => run_check(&cli, args),
        Commands::Rules => run_rules(&cli),
        Commands::Init(args) => run_init(&cli, args),
    }
}

/// Run the check command.
fn run_check(cli: &Cli, args: CheckArgs) -> Result<()> {
    tracing::debug!("Running check command with args: {:?}", args);

    let engine = RuleEngine::new(config::load_config_from(&cli.config)?);
    let message = read_message(&args)?;

    let result = engine.validate(&message);
    result.print(&message, cli.format);

    let errors = result.errors().count();
    let warnings = result.warnings().count();
    if errors > 0 || (args.strict && warnings > 0) {
        Err(LintError::ValidationFailed { errors, warnings })
    } else {
        Ok(())
    }
}

/// Get the message from the argument, the file, or stdin.
fn read_message(args: &CheckArgs) -> Result<String> {
    if let Some(ref message) = args.message {
        return Ok(message.clone());
    }

    if let Some(ref path) = args.file {
        tracing::debug!("Reading message from: {:?}", path);
        return std::fs::read_to_string(path)
            .context(format!("Failed to read message from {}", path.display()));
    }

    tracing::debug!("Reading message from stdin");
    let mut message = String::new();
    std::io::stdin()
        .read_to_string(&mut message)
        .context("Failed to read message from stdin")?;
    Ok(message)
}

/// Run the rules command.
fn run_rules(cli: &Cli) -> Result<()> {
    let config = config::load_config_from(&cli.config)?;

    match cli.format {
        Some(OutputFormat::Json) => {
            let rules: Vec<_> = config.rules().map(rule_json).collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&rules).unwrap_or_default()
            );
        }
        _ => print_rules(&config),
    }

    Ok(())
}

fn rule_json(rule: &Rule) -> serde_json::Value {
    match rule {
        Rule::TypeEnum(r) => serde_json::json!({
            "rule": rule.name(),
            "severity": r.severity,
            "when": r.when,
            "allowedTypes": r.allowed_types,
            "caseSensitive": r.case_sensitive,
        }),
        Rule::SubjectCase(r) => serde_json::json!({
            "rule": rule.name(),
            "severity": r.severity,
            "when": r.when,
            "allowedStyles": r.allowed_styles,
            "exceptions": r.exceptions,
        }),
    }
}

fn print_rules(config: &RuleConfig) {
    if config.is_empty() {
        println!("No rules configured");
        return;
    }

    for rule in config.rules() {
        let severity = match rule.severity() {
            Severity::Error => style(rule.severity().as_str()).red(),
            Severity::Warning => style(rule.severity().as_str()).yellow(),
            Severity::Disabled => style(rule.severity().as_str()).dim(),
        };

        let detail = match rule {
            Rule::TypeEnum(r) => format!(
                "{} [{}]{}",
                r.when.as_str(),
                r.allowed_types.iter().cloned().collect::<Vec<_>>().join(", "),
                if r.case_sensitive { "" } else { " (case-insensitive)" }
            ),
            Rule::SubjectCase(r) => format!(
                "{} [{}]",
                r.when.as_str(),
                r.allowed_styles
                    .iter()
                    .map(|s| s.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        };

        println!("{:<14} {:<9} {}", rule.name().as_str(), severity, detail);
    }
}

/// Run the init command.
fn run_init(cli: &Cli, args: InitArgs) -> Result<()> {
    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = cli.config.as_path();

    if config_path.exists() && !args.force {
        return Err(LintError::Config(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }));
    }

    std::fs::write(config_path, config::example_config())
        .context(format!("Failed to write {}", config_path.display()))?;

    println!("✓ Created {}", config_path.display());

    Ok(())
}
