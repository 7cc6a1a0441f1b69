//! Check command - validate configuration and the rule dataset

use std::{collections::HashMap, path::Path};

use color_eyre::eyre::{Result, bail};
use vulrule_core::{Config, Dataset};

use super::build::{BuildOptions, resolve_config};

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates configuration and every rule without writing any file.
pub fn run(config_path: &Path, options: &BuildOptions) -> Result<()> {
    tracing::info!(?config_path, ?options, "Checking configuration and dataset");

    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    let config = match resolve_config(config_path, options) {
        Ok(c) => {
            println!("  ✓ Configuration valid");
            Some(c)
        }
        Err(e) => {
            result.add_error(format!("Configuration error: {e:#}"));
            println!("  ✗ Configuration invalid: {e:#}");
            None
        }
    };

    if let Some(ref cfg) = config {
        println!("\nChecking dataset...");
        match Dataset::load(&cfg.paths.data_path) {
            Ok(dataset) => {
                println!("  ✓ {} rules valid", dataset.len());
                check_collisions(&dataset, &mut result);
                check_case_variants(&dataset, &mut result);
            }
            Err(e) => {
                result.add_error(e.to_string());
                println!("  ✗ Dataset invalid: {e}");
            }
        }

        println!("\nOutput locations:");
        print_locations(cfg);
    }

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    let strict = options.strict || config.as_ref().is_some_and(|c| c.build.strict);
    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Warn about pages that several rules overwrite.
fn check_collisions(dataset: &Dataset, result: &mut ValidationResult) {
    for collision in dataset.collisions() {
        let apis: Vec<_> = collision
            .rules
            .iter()
            .map(|&i| format!("#{i} {}", dataset.rules()[i].api_name))
            .collect();
        result.add_warning(format!(
            "{} is produced by {} rules ({}); only the last is kept",
            collision.path,
            collision.rules.len(),
            apis.join(", ")
        ));
    }
}

/// Warn about tool or label names that differ only by case.
///
/// They produce distinct index files that clash on case-insensitive file systems.
fn check_case_variants(dataset: &Dataset, result: &mut ValidationResult) {
    let mut tools: HashMap<String, Vec<&str>> = HashMap::new();
    let mut labels: HashMap<String, Vec<&str>> = HashMap::new();

    for rule in dataset.rules() {
        record_variant(&mut tools, &rule.tool_name);
        if let Some(label) = rule.label() {
            record_variant(&mut labels, label);
        }
    }

    for (kind, variants) in [("tool", tools), ("label", labels)] {
        let mut clashes: Vec<_> = variants.into_values().filter(|v| v.len() > 1).collect();
        clashes.sort();
        for names in clashes {
            result.add_warning(format!(
                "{kind} names differ only by case: {}",
                names.join(", ")
            ));
        }
    }
}

fn record_variant<'a>(map: &mut HashMap<String, Vec<&'a str>>, name: &'a str) {
    let variants = map.entry(name.to_lowercase()).or_default();
    if !variants.contains(&name) {
        variants.push(name);
    }
}

fn print_locations(config: &Config) {
    println!("  Locale:     {}", config.build.locale);
    println!("  Docs root:  {}", config.docs_root().display());
    println!("  Stats file: {}", config.stats_file().display());
}
