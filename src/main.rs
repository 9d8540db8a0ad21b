use std::fs;
use std::sync::Arc;

use anyhow::{Context, Result};
use bean_validator::{
    record, ConfigValidator, LoggingUtils, RecordValidator, RuleRegistry, Schema,
    ValidationErrors, ValidatorConfig,
};
use tracing::{error, info};

struct User {
    name: String,
    age: i32,
    email: String,
    hobbies: Vec<String>,
}

record!(User {
    name: "required,non-blank",
    age: "min=18,max=100",
    email: "required,email",
    hobbies: "non-empty",
});

fn main() {
    if let Err(e) = run() {
        error!("{:#}", e);
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Load configuration
    let config = ValidatorConfig::load().context("failed to load configuration")?;

    // Initialize logging
    LoggingUtils::initialize(&config.logging.level, config.logging.is_json())
        .context("failed to initialize logging")?;

    ConfigValidator::validate_config(&config).context("invalid configuration")?;

    let registry = Arc::new(RuleRegistry::from_config(&config.registry));
    info!(rules = %registry.len(), "Rule registry ready");
    let validator = RecordValidator::new(registry);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let errors = match args.as_slice() {
        [] => validator.validate(&User {
            name: "   ".to_string(),
            age: 16,
            email: "invalid-email".to_string(),
            hobbies: vec![],
        }),
        [schema_path, document_path] => {
            let schema = Schema::from_path(schema_path)
                .with_context(|| format!("failed to load schema `{}`", schema_path))?;
            let source = fs::read_to_string(document_path)
                .with_context(|| format!("failed to read document `{}`", document_path))?;
            let document: serde_json::Value = serde_json::from_str(&source)
                .with_context(|| format!("`{}` is not valid JSON", document_path))?;
            validator.validate_json(&document, &schema)?
        }
        _ => anyhow::bail!("usage: bean-validator-demo [<schema.toml> <document.json>]"),
    };

    report(&errors);
    Ok(())
}

fn report(errors: &ValidationErrors) {
    if errors.has_errors() {
        println!("Validation Errors:");
        for err in errors {
            println!("- {}", err.message);
        }
    } else {
        println!("Validation Passed!");
    }
}
