//! Classify command implementation.

use crate::cli::ClassifyArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use vitae_classifier::{Classification, ClassifierConfig, PersonClassifier};
use vitae_domain::ArticleCandidate;

/// Classify ad-hoc text.
pub fn classify(args: &ClassifyArgs, config: &ClassifierConfig) -> Result<Classification> {
    if args.title.trim().is_empty() {
        return Err(CliError::InvalidInput("title must not be empty".to_string()));
    }

    let candidate = ArticleCandidate::new(args.title.clone(), "cli")
        .with_extract(args.extract.clone())
        .with_description(args.description.clone());
    Ok(PersonClassifier::from_config(config).classify(&candidate))
}

/// Execute the classify command.
pub fn execute_classify(
    args: ClassifyArgs,
    config: &ClassifierConfig,
    formatter: &Formatter,
) -> Result<()> {
    let classification = classify(&args, config)?;
    println!("{}", formatter.format_classification(&args.title, &classification)?);
    Ok(())
}
