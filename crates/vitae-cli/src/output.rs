//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use serde_json::{json, Value};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use vitae_classifier::Classification;
use vitae_domain::PersonRecord;
use vitae_extractor::ExtractionTrace;
use vitae_resolver::{FailedAttempt, ResolutionReport};

/// How a resolution ended, for `--explain`.
#[derive(Debug, Clone, Copy)]
pub enum Explanation<'a> {
    /// A tier produced an accepted candidate
    Accepted(&'a ResolutionReport),
    /// Every tier failed
    Exhausted(&'a [FailedAttempt]),
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a resolved person, optionally with how it was found.
    pub fn format_person(
        &self,
        record: &PersonRecord,
        explanation: Option<Explanation<'_>>,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let mut value = json!({ "person": person_json(record) });
                if let Some(explanation) = explanation {
                    value["resolution"] = explanation_json(explanation);
                }
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => {
                let mut out = self.person_table(record);
                if let Some(explanation) = explanation {
                    out.push('\n');
                    out.push_str(&self.explanation_table(explanation));
                }
                Ok(out)
            }
        }
    }

    fn person_table(&self, record: &PersonRecord) -> String {
        let name = if record.is_placeholder {
            self.colorize(&record.name, "yellow")
        } else {
            self.colorize(&record.name, "cyan")
        };
        let birth_year = record.birth_year.to_string();

        let mut builder = Builder::default();
        builder.push_record(["Attribute", "Value"]);
        builder.push_record(["Name", name.as_str()]);
        builder.push_record(["Title", record.title.as_str()]);
        builder.push_record(["Born", birth_year.as_str()]);
        builder.push_record(["Achievement", record.achievement.as_str()]);
        builder.push_record(["Field", record.field.as_str()]);
        builder.push_record(["Description", record.description.as_str()]);
        builder.push_record(["Page", record.wiki_url.as_str()]);
        builder.push_record(["Image", record.image_url.as_str()]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    fn explanation_table(&self, explanation: Explanation<'_>) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Tier", "Outcome"]);

        let failures = match explanation {
            Explanation::Accepted(report) => &report.failures[..],
            Explanation::Exhausted(attempts) => attempts,
        };
        for attempt in failures {
            let outcome = self.colorize(&attempt.failure.to_string(), "red");
            builder.push_record([attempt.tier.as_str(), outcome.as_str()]);
        }

        match explanation {
            Explanation::Accepted(report) => {
                let outcome = if report.trusted {
                    "accepted (trusted)"
                } else {
                    "accepted"
                };
                let outcome = self.colorize(outcome, "green");
                builder.push_record([report.tier.as_str(), outcome.as_str()]);
            }
            Explanation::Exhausted(_) => {
                let outcome = self.colorize("all tiers exhausted, placeholder shown", "yellow");
                builder.push_record(["-", outcome.as_str()]);
            }
        }

        let mut table = builder.build();
        table.with(Style::rounded());
        table.to_string()
    }

    /// Format a classification verdict.
    pub fn format_classification(&self, title: &str, classification: &Classification) -> Result<String> {
        let reasons: Vec<String> = classification.reasons.iter().map(ToString::to_string).collect();
        match self.format {
            OutputFormat::Json => {
                let evidence: Vec<Value> = classification
                    .evidence
                    .iter()
                    .map(|(rule, term)| json!({ "rule": rule, "term": term }))
                    .collect();
                let value = json!({
                    "title": title,
                    "is_person": classification.is_person(),
                    "reasons": reasons,
                    "evidence": evidence,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => {
                let mut lines = Vec::new();
                if classification.is_person() {
                    lines.push(self.success(&format!("'{}' describes a person", title)));
                } else {
                    lines.push(self.error(&format!("'{}' does not describe a person", title)));
                }
                for (rule, term) in &classification.evidence {
                    lines.push(format!("  + {} matched '{}'", rule, term));
                }
                for reason in &reasons {
                    lines.push(format!("  - {}", reason));
                }
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format extracted facts with their provenance.
    pub fn format_extraction(&self, trace: &ExtractionTrace) -> Result<String> {
        let facts = &trace.facts;
        let birth_rule = trace.birth_year_rule.as_deref().unwrap_or("-");
        let keyword = trace.field_keyword.as_deref().unwrap_or("-");
        let source = trace.achievement_source.to_string();

        match self.format {
            OutputFormat::Json => {
                let value = json!({
                    "birth_year": facts.birth_year.to_string(),
                    "achievement": facts.achievement,
                    "field": facts.field.as_str(),
                    "provenance": {
                        "birth_year_rule": trace.birth_year_rule,
                        "achievement_source": source,
                        "field_keyword": trace.field_keyword,
                    },
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => {
                let birth_year = facts.birth_year.to_string();
                let mut builder = Builder::default();
                builder.push_record(["Fact", "Value", "From"]);
                builder.push_record(["Born", birth_year.as_str(), birth_rule]);
                builder.push_record(["Achievement", facts.achievement.as_str(), source.as_str()]);
                builder.push_record(["Field", facts.field.as_str(), keyword]);

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn person_json(record: &PersonRecord) -> Value {
    json!({
        "id": record.id,
        "name": record.name,
        "title": record.title,
        "description": record.description,
        "birth_year": record.birth_year.to_string(),
        "achievement": record.achievement,
        "field": record.field.as_str(),
        "image_url": record.image_url,
        "wiki_url": record.wiki_url,
        "is_placeholder": record.is_placeholder,
    })
}

fn explanation_json(explanation: Explanation<'_>) -> Value {
    let failures = |attempts: &[FailedAttempt]| -> Vec<Value> {
        attempts
            .iter()
            .map(|a| json!({ "tier": a.tier, "reason": a.failure.to_string() }))
            .collect()
    };

    match explanation {
        Explanation::Accepted(report) => json!({
            "date": report.date.to_string(),
            "tier": report.tier,
            "trusted": report.trusted,
            "failures": failures(&report.failures),
        }),
        Explanation::Exhausted(attempts) => json!({
            "exhausted": true,
            "failures": failures(attempts),
        }),
    }
}
