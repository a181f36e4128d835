//! Behavioural tests for the Extractor

#[cfg(test)]
mod tests {
    use crate::{AchievementSource, PatternExtractor};
    use proptest::prelude::*;
    use vitae_domain::text::char_len;
    use vitae_domain::traits::FactExtractor;
    use vitae_domain::{ArticleCandidate, BirthYear, Field, DEFAULT_ACHIEVEMENT};

    fn extractor() -> PatternExtractor {
        PatternExtractor::default_config()
            .unwrap()
            .with_current_year(2024)
    }

    fn candidate(extract: &str, description: &str) -> ArticleCandidate {
        ArticleCandidate::new("Test Person", "1")
            .with_extract(extract)
            .with_description(description)
    }

    #[test]
    fn test_life_span_birth_year() {
        let facts = extractor().extract(&candidate(
            "Isaac Newton (1643–1727) was an English mathematician, physicist, astronomer.",
            "",
        ));
        assert_eq!(facts.birth_year, BirthYear::Known(1643));
        assert_eq!(facts.birth_year.to_string(), "1643");
    }

    #[test]
    fn test_no_year_is_unknown() {
        let facts = extractor().extract(&candidate("A person of some renown.", "poet"));
        assert_eq!(facts.birth_year.to_string(), "Unknown");
    }

    #[test]
    fn test_out_of_range_year_is_unknown() {
        let facts = extractor().extract(&candidate("He was born in 9999 on a distant star.", ""));
        assert_eq!(facts.birth_year, BirthYear::Unknown);
    }

    #[test]
    fn test_out_of_range_capture_falls_through_to_later_rule() {
        let text = "Ra (0999–1044) or, by another count, Ra (1012–1044).";
        let (year, rule) = extractor().birth_year(text);
        assert_eq!(year, BirthYear::Known(1012));
        assert_eq!(rule.as_deref(), Some("life-span"));
    }

    #[test]
    fn test_birth_year_is_idempotent() {
        let extractor = extractor();
        let c = candidate("Vincent van Gogh (30 March 1853 – 29 July 1890) was a Dutch painter.", "");
        let first = extractor.extract(&c);
        let second = extractor.extract(&c);
        assert_eq!(first, second);
        assert_eq!(first.birth_year, BirthYear::Known(1853));
    }

    #[test]
    fn test_template_beats_short_description() {
        let c = candidate(
            "Alexander Graham Bell invented the telephone in 1876.",
            "Scottish-born inventor",
        );
        let trace = extractor().trace(&c);
        assert_eq!(trace.facts.achievement, "Invented the telephone");
        assert_eq!(trace.achievement_source, AchievementSource::Template("invented".to_string()));
    }

    #[test]
    fn test_literal_template() {
        let c = candidate(
            "Abraham Lincoln was the 16th president of the United States.",
            "President of the United States from 1861 to 1865",
        );
        assert_eq!(extractor().extract(&c).achievement, "Former President");
    }

    #[test]
    fn test_nobel_category_template() {
        let c = candidate(
            "Marie Curie won the Nobel Prize in Physics in 1903.",
            "Polish-French physicist",
        );
        assert_eq!(extractor().extract(&c).achievement, "Nobel Prize in Physics");
    }

    #[test]
    fn test_short_description_fallback() {
        let c = candidate("Someone of note lived here.", "Danish philosopher");
        let trace = extractor().trace(&c);
        assert_eq!(trace.facts.achievement, "Danish philosopher");
        assert_eq!(trace.achievement_source, AchievementSource::Description);
    }

    #[test]
    fn test_long_description_truncated_at_word_boundary() {
        let description =
            "American inventor and businessman known for the phonograph and the light bulb";
        let trace = extractor().trace(&candidate("Lived in New Jersey.", description));
        assert_eq!(
            trace.facts.achievement,
            "American inventor and businessman known for the..."
        );
        assert_eq!(trace.achievement_source, AchievementSource::TruncatedDescription);
    }

    #[test]
    fn test_role_phrase_fallback() {
        let c = candidate("Hypatia was a Neoplatonist philosopher in Alexandria.", "");
        let trace = extractor().trace(&c);
        assert_eq!(trace.facts.achievement, "Neoplatonist philosopher in Alexandria");
        assert_eq!(trace.achievement_source, AchievementSource::Role("was-role".to_string()));
    }

    #[test]
    fn test_long_role_phrase_truncated() {
        let c = candidate(
            "She is an astronomer, mathematician, translator and teacher of the later Alexandrian school.",
            "",
        );
        let achievement = extractor().extract(&c).achievement;
        assert!(achievement.ends_with("..."));
        assert!(char_len(&achievement) <= 50);
        assert!(achievement.starts_with("Astronomer, mathematician"));
    }

    #[test]
    fn test_default_achievement() {
        let c = candidate("", "");
        assert_eq!(extractor().extract(&c).achievement, DEFAULT_ACHIEVEMENT);
    }

    #[test]
    fn test_field_first_match_wins() {
        let c = candidate(
            "He served as president and was also an accomplished painter.",
            "",
        );
        assert_eq!(extractor().extract(&c).field, Field::Politics);
    }

    #[test]
    fn test_field_reads_description_and_extract() {
        let (field, keyword) = extractor().field(&candidate("Played in Vienna.", "Austrian composer"));
        assert_eq!(field, Field::Music);
        assert_eq!(keyword.as_deref(), Some("composer"));
    }

    #[test]
    fn test_field_default() {
        let facts = extractor().extract(&candidate("Lived quietly.", "Local figure"));
        assert_eq!(facts.field, Field::NotableFigure);
        assert_eq!(facts.field.as_str(), "Notable Figure");
    }

    proptest! {
        #[test]
        fn prop_birth_year_is_sentinel_or_in_range(text in "\\PC{0,200}") {
            let facts = extractor().extract(&candidate(&text, ""));
            match facts.birth_year {
                BirthYear::Unknown => {}
                BirthYear::Known(y) => prop_assert!((1000..=2024).contains(&y)),
            }
        }

        #[test]
        fn prop_life_span_year_validated(start in 0u32..20000, end in 0u32..20000) {
            let text = format!("Someone ({:04}–{:04}) was a poet.", start, end);
            let facts = extractor().extract(&candidate(&text, ""));
            if (1000..=2024).contains(&start) {
                prop_assert_eq!(facts.birth_year, BirthYear::Known(start as i32));
            } else {
                prop_assert_ne!(facts.birth_year, BirthYear::Known(start as i32));
            }
        }

        #[test]
        fn prop_achievement_is_bounded_and_non_empty(
            extract in "\\PC{0,300}",
            description in "\\PC{0,120}",
        ) {
            let facts = extractor().extract(&candidate(&extract, &description));
            prop_assert!(!facts.achievement.trim().is_empty());
            prop_assert!(char_len(&facts.achievement) <= 60);
        }
    }
}
