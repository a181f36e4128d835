//! Built-in tiers
//!
//! | Tier | Source | Selection | Classified |
//! |------|--------|-----------|------------|
//! | `featured` | featured feed for the date | the featured article | yes |
//! | `category` | category members | category by day, member at random | yes |
//! | `search` | full-text search | hit at random | yes |
//! | `catalog` | curated name list | name by day | no |
//! | `random` | random-article endpoint | whatever comes back | yes |

use crate::{Picker, ResolveContext, SourceStrategy, TierFailure};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use vitae_domain::ArticleCandidate;
use vitae_source::EncyclopediaClient;

/// The featured article published for the exact date
pub struct FeaturedArticle {
    client: Arc<dyn EncyclopediaClient>,
}

impl FeaturedArticle {
    /// Create the tier over `client`
    pub fn new(client: Arc<dyn EncyclopediaClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SourceStrategy for FeaturedArticle {
    fn name(&self) -> &str {
        "featured"
    }

    async fn try_resolve(&self, ctx: &ResolveContext) -> Result<ArticleCandidate, TierFailure> {
        let title = self
            .client
            .featured_title(ctx.date)
            .await?
            .ok_or(TierFailure::NoFeaturedEntry)?;
        debug!("Featured article for {}: '{}'", ctx.date, title);
        Ok(self.client.page_summary(&title).await?)
    }
}

/// A random member of the day's biographical category
pub struct CategorySample {
    client: Arc<dyn EncyclopediaClient>,
    categories: Vec<String>,
    limit: usize,
    picker: Picker,
}

impl CategorySample {
    /// Create the tier over `categories`, fetching up to `limit` members
    pub fn new(client: Arc<dyn EncyclopediaClient>, categories: Vec<String>, limit: usize) -> Self {
        Self {
            client,
            categories,
            limit,
            picker: Picker::from_entropy(),
        }
    }

    /// Replace the member picker
    pub fn with_picker(mut self, picker: Picker) -> Self {
        self.picker = picker;
        self
    }

    /// Category used on the context's date
    pub fn category_for(&self, ctx: &ResolveContext) -> Option<&str> {
        ctx.day_index(self.categories.len())
            .map(|i| self.categories[i].as_str())
    }
}

#[async_trait]
impl SourceStrategy for CategorySample {
    fn name(&self) -> &str {
        "category"
    }

    async fn try_resolve(&self, ctx: &ResolveContext) -> Result<ArticleCandidate, TierFailure> {
        let category = self
            .category_for(ctx)
            .ok_or_else(|| TierFailure::EmptyListing("no categories configured".to_string()))?;

        let members = self.client.category_members(category, self.limit).await?;
        let title = self
            .picker
            .pick(&members)
            .ok_or_else(|| TierFailure::EmptyListing(format!("category '{}'", category)))?;
        debug!(
            "Picked '{}' from {} members of '{}'",
            title,
            members.len(),
            category
        );
        Ok(self.client.page_summary(title).await?)
    }
}

/// A random hit of a fixed full-text search
pub struct KeywordSearch {
    client: Arc<dyn EncyclopediaClient>,
    query: String,
    limit: usize,
    picker: Picker,
}

impl KeywordSearch {
    /// Create the tier searching `query`, fetching up to `limit` hits
    pub fn new(client: Arc<dyn EncyclopediaClient>, query: impl Into<String>, limit: usize) -> Self {
        Self {
            client,
            query: query.into(),
            limit,
            picker: Picker::from_entropy(),
        }
    }

    /// Replace the hit picker
    pub fn with_picker(mut self, picker: Picker) -> Self {
        self.picker = picker;
        self
    }
}

#[async_trait]
impl SourceStrategy for KeywordSearch {
    fn name(&self) -> &str {
        "search"
    }

    async fn try_resolve(&self, _ctx: &ResolveContext) -> Result<ArticleCandidate, TierFailure> {
        let hits = self.client.search_titles(&self.query, self.limit).await?;
        let title = self
            .picker
            .pick(&hits)
            .ok_or_else(|| TierFailure::EmptyListing(format!("search '{}'", self.query)))?;
        debug!("Picked '{}' from {} search hits", title, hits.len());
        Ok(self.client.page_summary(title).await?)
    }
}

/// The day's entry of a curated list of well-known people
///
/// Trusted: names on the list are vetted, so the classifier is skipped.
pub struct StaticCatalog {
    client: Arc<dyn EncyclopediaClient>,
    names: Vec<String>,
}

impl StaticCatalog {
    /// Create the tier over `names`
    pub fn new(client: Arc<dyn EncyclopediaClient>, names: Vec<String>) -> Self {
        Self { client, names }
    }

    /// Name used on the context's date
    pub fn name_for(&self, ctx: &ResolveContext) -> Option<&str> {
        ctx.day_index(self.names.len()).map(|i| self.names[i].as_str())
    }
}

#[async_trait]
impl SourceStrategy for StaticCatalog {
    fn name(&self) -> &str {
        "catalog"
    }

    fn trusted(&self) -> bool {
        true
    }

    async fn try_resolve(&self, ctx: &ResolveContext) -> Result<ArticleCandidate, TierFailure> {
        let name = self
            .name_for(ctx)
            .ok_or_else(|| TierFailure::EmptyListing("catalog".to_string()))?;
        debug!("Catalog entry for {}: '{}'", ctx.date, name);
        Ok(self.client.page_summary(name).await?)
    }
}

/// Any random article
pub struct RandomArticle {
    client: Arc<dyn EncyclopediaClient>,
}

impl RandomArticle {
    /// Create the tier over `client`
    pub fn new(client: Arc<dyn EncyclopediaClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SourceStrategy for RandomArticle {
    fn name(&self) -> &str {
        "random"
    }

    async fn try_resolve(&self, _ctx: &ResolveContext) -> Result<ArticleCandidate, TierFailure> {
        Ok(self.client.random_summary().await?)
    }
}
