// src/services/catalog.rs

//! Movie catalog service.
//!
//! Maps each API operation to one upstream request and one extraction pass.

use std::sync::Arc;

use scraper::Html;
use url::Url;

use super::extractor::{
    CompiledProfile, CompiledRule, FieldPolicy, compile_rules, extract_all, extract_detail,
};
use super::fetcher::{Fetcher, UpstreamRequest};
use crate::error::{AppError, Result};
use crate::models::{CategoryStrategy, CategoryTable, Config, MovieRecord, UpstreamConfig};

pub const MISSING_CATEGORY: &str = "Nenhuma categoria fornecida.";
pub const INVALID_CATEGORY: &str = "Categoria inválida.";
pub const MISSING_QUERY: &str = "Nenhum termo de pesquisa fornecido";
pub const MISSING_MOVIE_ID: &str = "Nenhum filme fornecido.";
pub const INVALID_PAGE: &str = "Página inválida.";

/// Parse an optional `page` parameter. Absent means page 1.
pub fn parse_page(raw: Option<&str>) -> Result<u32> {
    match raw.map(str::trim) {
        None | Some("") => Ok(1),
        Some(s) => match s.parse::<u32>() {
            Ok(page) if page >= 1 => Ok(page),
            _ => Err(AppError::client_input(INVALID_PAGE)),
        },
    }
}

/// Service answering every movie query against the upstream site.
pub struct MovieCatalog {
    fetcher: Arc<dyn Fetcher>,
    categories: CategoryTable,
    upstream: UpstreamConfig,
    movie_listing: CompiledProfile,
    category_card: CompiledProfile,
    search_card: CompiledProfile,
    detail: Vec<CompiledRule>,
}

impl MovieCatalog {
    /// Build a catalog, compiling every configured selector up front.
    pub fn new(config: &Config, fetcher: Arc<dyn Fetcher>) -> Result<Self> {
        config.upstream.base()?;
        let selectors = &config.selectors;

        Ok(Self {
            fetcher,
            categories: CategoryTable::default(),
            upstream: config.upstream.clone(),
            movie_listing: CompiledProfile::compile(&selectors.movie_listing)?,
            category_card: CompiledProfile::compile(&selectors.category_card)?,
            search_card: CompiledProfile::compile(&selectors.search_card)?,
            detail: compile_rules(&selectors.detail)?,
        })
    }

    /// Category names in table order. Never touches the upstream.
    pub fn categories(&self) -> Vec<&'static str> {
        self.categories.names()
    }

    /// List movies of a named category.
    pub async fn by_category(&self, name: &str, page: u32) -> Result<Vec<MovieRecord>> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::client_input(MISSING_CATEGORY));
        }
        let category = self
            .categories
            .lookup(name)
            .ok_or_else(|| AppError::client_input(INVALID_CATEGORY))?;

        match self.upstream.category_strategy {
            CategoryStrategy::GenreQuery => {
                let url = self.upstream.url_for(&[self.upstream.listing_path.as_str()])?;
                let request = UpstreamRequest::new(url)
                    .param("page", page)
                    .param("genre", category.genre_id);
                self.fetch_listing(&request, &self.movie_listing).await
            }
            CategoryStrategy::Slug => {
                let url = self
                    .upstream
                    .url_for(&[self.upstream.category_path.as_str(), category.slug])?;
                let request = UpstreamRequest::new(url).param("page", page);
                self.fetch_listing(&request, &self.category_card).await
            }
        }
    }

    /// Search movies by free text.
    pub async fn search(&self, query: &str, page: u32) -> Result<Vec<MovieRecord>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::client_input(MISSING_QUERY));
        }

        let url = self.upstream.url_for(&[self.upstream.search_path.as_str()])?;
        let request = UpstreamRequest::new(url)
            .param("search", query)
            .param("page", page);
        self.fetch_listing(&request, &self.search_card).await
    }

    /// Fetch the detail page of a single movie.
    pub async fn by_id(&self, id: &str) -> Result<MovieRecord> {
        let id = id.trim();
        if id.is_empty() {
            return Err(AppError::client_input(MISSING_MOVIE_ID));
        }

        let url = self.upstream.url_for(&[self.upstream.detail_path.as_str(), id])?;
        let request = UpstreamRequest::new(url);
        let body = self.fetcher.fetch(&request).await?;
        Ok(parse_detail(&body, &self.detail, id, &request.full_url()))
    }

    /// List movies without any filter.
    pub async fn all(&self, page: u32) -> Result<Vec<MovieRecord>> {
        let url = self.upstream.url_for(&[self.upstream.listing_path.as_str()])?;
        let request = UpstreamRequest::new(url).param("page", page);
        self.fetch_listing(&request, &self.movie_listing).await
    }

    async fn fetch_listing(
        &self,
        request: &UpstreamRequest,
        profile: &CompiledProfile,
    ) -> Result<Vec<MovieRecord>> {
        let body = self.fetcher.fetch(request).await?;
        let page_url = request.full_url();
        let records = parse_listing(&body, profile, &page_url)?;
        log::debug!("Extracted {} movies from {}", records.len(), page_url);
        Ok(records)
    }
}

fn parse_listing(
    body: &str,
    profile: &CompiledProfile,
    page_url: &Url,
) -> Result<Vec<MovieRecord>> {
    let document = Html::parse_document(body);
    extract_all(&document, profile, FieldPolicy::Required, page_url)
}

fn parse_detail(body: &str, rules: &[CompiledRule], id: &str, page_url: &Url) -> MovieRecord {
    let document = Html::parse_document(body);
    extract_detail(&document, rules, id, page_url)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    const CARD_PAGE: &str = r#"
        <div class="movie-item"><a href="/public/filme/alien"><img src="/a.jpg"></a></div>
    "#;

    /// Returns a fixed body and records every request.
    struct RecordingFetcher {
        body: String,
        requests: Mutex<Vec<String>>,
    }

    impl RecordingFetcher {
        fn new(body: &str) -> Arc<Self> {
            Arc::new(Self {
                body: body.to_string(),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn urls(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Fetcher for RecordingFetcher {
        async fn fetch(&self, request: &UpstreamRequest) -> Result<String> {
            self.requests
                .lock()
                .unwrap()
                .push(request.full_url().to_string());
            Ok(self.body.clone())
        }
    }

    fn catalog(config: &Config, fetcher: Arc<RecordingFetcher>) -> MovieCatalog {
        MovieCatalog::new(config, fetcher).unwrap()
    }

    #[test]
    fn test_parse_page() {
        assert_eq!(parse_page(None).unwrap(), 1);
        assert_eq!(parse_page(Some("")).unwrap(), 1);
        assert_eq!(parse_page(Some("3")).unwrap(), 3);
        assert!(parse_page(Some("0")).is_err());
        assert!(parse_page(Some("-1")).is_err());
        assert!(parse_page(Some("dois")).is_err());
    }

    #[tokio::test]
    async fn test_every_category_dispatches_to_its_genre_id() {
        let fetcher = RecordingFetcher::new("<html></html>");
        let catalog = catalog(&Config::default(), fetcher.clone());

        for category in CategoryTable::default().iter() {
            let records = catalog.by_category(category.name, 2).await.unwrap();
            assert!(records.is_empty());
        }

        let urls = fetcher.urls();
        assert_eq!(urls.len(), 19);
        assert_eq!(
            urls[0],
            "https://wix.maxcine.top/public/filmes?page=2&genre=12"
        );
        assert_eq!(
            urls[18],
            "https://wix.maxcine.top/public/filmes?page=2&genre=10770"
        );
    }

    #[tokio::test]
    async fn test_unknown_category_makes_no_upstream_call() {
        let fetcher = RecordingFetcher::new("<html></html>");
        let catalog = catalog(&Config::default(), fetcher.clone());

        let err = catalog.by_category("Anime", 1).await.unwrap_err();
        assert_eq!(err.public_message(), INVALID_CATEGORY);

        let err = catalog.by_category("  ", 1).await.unwrap_err();
        assert_eq!(err.public_message(), MISSING_CATEGORY);

        assert!(fetcher.urls().is_empty());
    }

    #[tokio::test]
    async fn test_slug_strategy_uses_category_path() {
        let mut config = Config::default();
        config.upstream.category_strategy = CategoryStrategy::Slug;
        let fetcher = RecordingFetcher::new(CARD_PAGE);
        let catalog = catalog(&config, fetcher.clone());

        let records = catalog.by_category("Ficção científica", 1).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "alien");
        assert_eq!(records[0].title.as_deref(), Some("alien"));
        assert_eq!(
            fetcher.urls(),
            vec!["https://wix.maxcine.top/public/categoria/ficcao-cientifica?page=1"]
        );
    }

    #[tokio::test]
    async fn test_search_builds_query() {
        let fetcher = RecordingFetcher::new("<html></html>");
        let catalog = catalog(&Config::default(), fetcher.clone());

        catalog.search(" matrix ", 1).await.unwrap();
        assert_eq!(
            fetcher.urls(),
            vec!["https://wix.maxcine.top/public/pesquisa?search=matrix&page=1"]
        );

        let err = catalog.search("   ", 1).await.unwrap_err();
        assert_eq!(err.public_message(), MISSING_QUERY);
        assert_eq!(fetcher.urls().len(), 1);
    }

    #[tokio::test]
    async fn test_by_id_and_all_urls() {
        let fetcher = RecordingFetcher::new("<html></html>");
        let catalog = catalog(&Config::default(), fetcher.clone());

        let record = catalog.by_id("duna").await.unwrap();
        assert_eq!(record.id, "duna");
        assert_eq!(record.title, None);
        assert_eq!(
            record.url.as_deref(),
            Some("https://wix.maxcine.top/public/filme/duna")
        );
        catalog.all(4).await.unwrap();

        assert_eq!(
            fetcher.urls(),
            vec![
                "https://wix.maxcine.top/public/filme/duna",
                "https://wix.maxcine.top/public/filmes?page=4",
            ]
        );
    }

    #[test]
    fn test_invalid_configured_selector_fails_construction() {
        let mut config = Config::default();
        config.selectors.search_card.item_selector = "[[invalid".to_string();
        let fetcher = RecordingFetcher::new("");
        assert!(MovieCatalog::new(&config, fetcher).is_err());
    }

    #[test]
    fn test_categories_are_static() {
        let fetcher = RecordingFetcher::new("");
        let catalog = catalog(&Config::default(), fetcher.clone());
        assert_eq!(catalog.categories().len(), 19);
        assert!(fetcher.urls().is_empty());
    }
}
