// src/services/extractor.rs

//! Movie record extraction.
//!
//! A single routine applies a list of field rules to an HTML fragment. The
//! [`FieldPolicy`] decides whether a missing element fails the record or
//! simply leaves the field empty.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{Field, FieldRule, FieldSource, ListingProfile, MovieRecord};
use crate::utils::url::{extract_css_url, trailing_segment};
use crate::utils::{normalize_whitespace, resolve_url};

/// How missing elements are treated during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPolicy {
    /// Rules flagged `required` fail the record when their target is missing.
    Required,
    /// Every missing target yields `None`.
    Optional,
}

/// A field rule with its selector parsed.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub rule: FieldRule,
    selector: Selector,
}

/// A listing profile with all selectors parsed.
#[derive(Debug, Clone)]
pub struct CompiledProfile {
    item: Selector,
    rules: Vec<CompiledRule>,
}

impl CompiledProfile {
    /// Parse every selector in a profile.
    pub fn compile(profile: &ListingProfile) -> Result<Self> {
        Ok(Self {
            item: parse_selector(&profile.item_selector)?,
            rules: compile_rules(&profile.rules)?,
        })
    }
}

/// Parse the selectors of a list of rules.
pub fn compile_rules(rules: &[FieldRule]) -> Result<Vec<CompiledRule>> {
    rules
        .iter()
        .map(|rule| {
            Ok(CompiledRule {
                selector: parse_selector(&rule.selector)?,
                rule: rule.clone(),
            })
        })
        .collect()
}

fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

/// Apply rules to one fragment and build a record.
///
/// The record id is taken from the trailing segment of the link field.
pub fn extract(
    fragment: ElementRef<'_>,
    rules: &[CompiledRule],
    policy: FieldPolicy,
    base_url: &Url,
) -> Result<MovieRecord> {
    let mut record = MovieRecord::default();

    for compiled in rules {
        let rule = &compiled.rule;
        let value = select_value(fragment, compiled, base_url);

        if value.is_none() && rule.required && policy == FieldPolicy::Required {
            return Err(AppError::extraction(rule.field.as_str(), &rule.selector));
        }

        record.set(rule.field, value);
    }

    if let Some(id) = record.url.as_deref().and_then(trailing_segment) {
        record.id = id;
    }

    Ok(record)
}

/// Extract one record per listing item in a page.
///
/// Items without a title fall back to their id, as poster-only cards have
/// no title element.
pub fn extract_all(
    document: &Html,
    profile: &CompiledProfile,
    policy: FieldPolicy,
    base_url: &Url,
) -> Result<Vec<MovieRecord>> {
    document
        .select(&profile.item)
        .map(|item| {
            let mut record = extract(item, &profile.rules, policy, base_url)?;
            if record.title.is_none() && !record.id.is_empty() {
                record.title = Some(record.id.clone());
            }
            Ok(record)
        })
        .collect()
}

/// Extract a detail page. Missing elements never fail.
///
/// The record's link is the page URL itself.
pub fn extract_detail(
    document: &Html,
    rules: &[CompiledRule],
    id: &str,
    page_url: &Url,
) -> MovieRecord {
    let root = document.root_element();
    let mut record = MovieRecord::with_id(id);

    for compiled in rules {
        record.set(compiled.rule.field, select_value(root, compiled, page_url));
    }
    record.url = Some(page_url.to_string());

    record
}

fn select_value(
    fragment: ElementRef<'_>,
    compiled: &CompiledRule,
    base_url: &Url,
) -> Option<String> {
    fragment
        .select(&compiled.selector)
        .next()
        .and_then(|element| read_value(element, &compiled.rule, base_url))
}

fn read_value(element: ElementRef<'_>, rule: &FieldRule, base_url: &Url) -> Option<String> {
    let raw = match &rule.source {
        FieldSource::Text => normalize_whitespace(&element.text().collect::<String>()),
        FieldSource::Attr(name) => element.value().attr(name)?.trim().to_string(),
        FieldSource::BannerStyle => extract_css_url(element.value().attr("style")?)?,
    };

    if raw.is_empty() {
        return None;
    }

    if is_url_field(rule.field) {
        Some(resolve_url(base_url, &raw))
    } else {
        Some(raw)
    }
}

fn is_url_field(field: Field) -> bool {
    matches!(field, Field::Cover | Field::Banner | Field::Play | Field::Link)
}
