//! End-to-end pipeline tests against the in-memory encyclopedia

use chrono::NaiveDate;
use std::sync::Arc;
use vitae_cache::FixedClock;
use vitae_domain::{ArticleCandidate, BirthYear, Field};
use vitae_resolver::{day_index, DEFAULT_CATALOG};
use vitae_service::{PersonResolutionService, ServiceConfig};
use vitae_source::{Endpoint, MockClient};

fn build(mock: &MockClient, clock: Arc<FixedClock>) -> PersonResolutionService {
    PersonResolutionService::from_config(ServiceConfig::default(), Arc::new(mock.clone()), clock)
        .unwrap()
}

#[tokio::test]
async fn catalog_tier_serves_when_remote_tiers_fail() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let name = DEFAULT_CATALOG[day_index(date, DEFAULT_CATALOG.len()).unwrap()];
    assert_eq!(name, "Rosa Parks");

    let mock = MockClient::new().with_summary(
        ArticleCandidate::new(name, "26492")
            .with_extract(
                "Rosa Louise McCauley Parks (February 4, 1913 – October 24, 2005) was an \
                 American activist in the civil rights movement.",
            )
            .with_description("American civil rights activist (1913–2005)"),
    );
    mock.fail(Endpoint::Featured);
    mock.fail(Endpoint::CategoryMembers);
    mock.fail(Endpoint::Search);

    let service = build(&mock, Arc::new(FixedClock::at_date(date)));
    let record = service.get_person_of_the_day().await;

    assert_eq!(record.name, "Rosa Parks");
    assert_eq!(record.id, "26492");
    assert_eq!(record.birth_year, BirthYear::Known(1913));
    assert_eq!(record.achievement, "American civil rights activist (1913–2005)");
    assert_eq!(record.field, Field::Activism);
    assert_eq!(record.wiki_url, "https://en.wikipedia.org/wiki/Rosa_Parks");
    assert!(record.is_fully_populated());
    assert!(!record.is_placeholder);
}

#[tokio::test]
async fn cache_hit_makes_no_network_calls() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
    let mock = MockClient::new()
        .with_featured(date, "Katherine Johnson")
        .with_summary(
            ArticleCandidate::new("Katherine Johnson", "577")
                .with_extract("Katherine Johnson was born in 1918 in West Virginia.")
                .with_description("American mathematician"),
        );
    let clock = Arc::new(FixedClock::at_date(date));
    let service = build(&mock, clock.clone());

    let first = service.get_person_of_the_day().await;
    mock.reset_call_counts();

    clock.advance(chrono::Duration::hours(20));
    let second = service.get_person_of_the_day().await;

    assert_eq!(mock.total_calls(), 0);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(second.field, Field::Science);
}

#[tokio::test]
async fn new_day_resolves_again() {
    let day_one = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
    let day_two = day_one.succ_opt().unwrap();
    let person = |title: &str| {
        ArticleCandidate::new(title, "1")
            .with_extract(format!("{} was born in 1900.", title))
            .with_description("Brazilian composer")
    };
    let mock = MockClient::new()
        .with_featured(day_one, "Heitor Villa-Lobos")
        .with_featured(day_two, "Chiquinha Gonzaga")
        .with_summary(person("Heitor Villa-Lobos"))
        .with_summary(person("Chiquinha Gonzaga"));
    let clock = Arc::new(FixedClock::at_date(day_one));
    let service = build(&mock, clock.clone());

    assert_eq!(service.get_person_of_the_day().await.name, "Heitor Villa-Lobos");
    clock.advance(chrono::Duration::days(1));
    assert_eq!(service.get_person_of_the_day().await.name, "Chiquinha Gonzaga");
    assert_eq!(service.cache().len(), 2);
}

#[tokio::test]
async fn exhaustion_never_errors() {
    let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
    let mock = MockClient::new();
    for endpoint in Endpoint::ALL {
        mock.fail(endpoint);
    }
    let service = build(&mock, Arc::new(FixedClock::at_date(date)));

    let record = service.get_person_for_date(date).await;
    assert!(record.is_placeholder);
    assert!(record.is_fully_populated());
    assert_eq!(record.birth_year.to_string(), "Unknown");
    assert_eq!(service.resolver().metrics().exhausted, 1);
}
