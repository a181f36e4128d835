//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::error::Result;
use crate::output::Formatter;
use vitae_domain::ArticleCandidate;
use vitae_extractor::{ExtractionTrace, ExtractorConfig, PatternExtractor, PatternRuleSet};

/// Run extraction over ad-hoc text.
pub fn extract(args: &ExtractArgs, config: &ExtractorConfig) -> Result<ExtractionTrace> {
    let extractor = PatternExtractor::new(PatternRuleSet::standard()?, config.clone())?;
    let candidate = ArticleCandidate::new(args.title.clone(), "cli")
        .with_extract(args.extract.clone())
        .with_description(args.description.clone());
    Ok(extractor.trace(&candidate))
}

/// Execute the extract command.
pub fn execute_extract(args: ExtractArgs, config: &ExtractorConfig, formatter: &Formatter) -> Result<()> {
    let trace = extract(&args, config)?;
    println!("{}", formatter.format_extraction(&trace)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_domain::{BirthYear, Field};

    #[test]
    fn test_extract_newton() {
        let args = ExtractArgs {
            extract: "Isaac Newton (1643–1727) was an English mathematician and physicist."
                .to_string(),
            description: String::new(),
            title: "Isaac Newton".to_string(),
        };
        let trace = extract(&args, &ExtractorConfig::default()).unwrap();

        assert_eq!(trace.facts.birth_year, BirthYear::Known(1643));
        assert_eq!(trace.facts.field, Field::Science);
        assert_eq!(trace.birth_year_rule.as_deref(), Some("life-span"));
    }
}
