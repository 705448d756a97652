use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};
use scraper::{Html, Selector};

use crate::error::Result;

/// Placeholder for a section whose element id is missing from the page.
pub const SECTION_NOT_FOUND: &str = "Section not found.";
/// Placeholder used for every section when the site cannot be reached.
pub const CONTENT_UNAVAILABLE: &str = "Could not fetch content.";

/// The fixed set of page sections the persona prompt is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Services,
    Skills,
    Work,
    Resume,
    Contact,
}

impl Section {
    /// All sections, in prompt order.
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::Services,
        Section::Skills,
        Section::Work,
        Section::Resume,
        Section::Contact,
    ];

    /// Element id the section is extracted from.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Services => "services",
            Section::Skills => "skills",
            Section::Work => "work",
            Section::Resume => "resume",
            Section::Contact => "contact",
        }
    }

    /// Label used for the section's line in the system prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Services => "Services",
            Section::Skills => "Skills",
            Section::Work => "Work",
            Section::Resume => "Resume",
            Section::Contact => "Contact",
        }
    }
}

/// Extracted text per section. Always contains every `Section::ALL` entry.
pub type SectionMap = HashMap<Section, String>;

/// Mapping returned when the site is unreachable.
pub fn placeholder_content() -> SectionMap {
    Section::ALL
        .iter()
        .map(|s| (*s, CONTENT_UNAVAILABLE.to_string()))
        .collect()
}

// Create a static client to reuse connections
static CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .timeout(Duration::from_secs(10))
        .connect_timeout(Duration::from_secs(5))
        .pool_max_idle_per_host(10)
        .build()
        .expect("Failed to build HTTP client")
});

// Create static selectors to avoid recompiling them each time
static SECTION_SELECTORS: Lazy<Vec<(Section, Selector)>> = Lazy::new(|| {
    Section::ALL
        .iter()
        .map(|section| {
            let selector = Selector::parse(&format!("#{}", section.id()))
                .expect("Failed to parse section selector");
            (*section, selector)
        })
        .collect()
});

/// Source of section content. The production implementation scrapes the
/// configured site; tests substitute their own.
#[async_trait]
pub trait SectionFetcher: Send + Sync {
    async fn fetch(&self) -> Result<SectionMap>;
}

/// Fetches section text from a fixed website over HTTP.
pub struct SiteFetcher {
    url: String,
}

impl SiteFetcher {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait]
impl SectionFetcher for SiteFetcher {
    async fn fetch(&self) -> Result<SectionMap> {
        let response = CLIENT.get(&self.url).send().await?;
        let html = response.text().await?;
        Ok(extract_sections(&html))
    }
}

/// Extracts whitespace-stripped text for every configured section. Sections
/// whose id is absent map to `SECTION_NOT_FOUND`; a missing section never
/// fails the whole extraction.
pub fn extract_sections(html: &str) -> SectionMap {
    let document = Html::parse_document(html);
    let mut sections = SectionMap::with_capacity(Section::ALL.len());

    for (section, selector) in SECTION_SELECTORS.iter() {
        let text = document.select(selector).next().map(|element| {
            element
                .text()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .collect::<String>()
        });
        sections.insert(*section, text.unwrap_or_else(|| SECTION_NOT_FOUND.to_string()));
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
            <div id="home">  Welcome to my portfolio  </div>
            <section id="skills">
                <ul><li> Android </li><li> Firebase </li></ul>
            </section>
            <div id="contact">contact@kamilamin.com</div>
        </body></html>
    "#;

    #[test]
    fn extracts_text_for_present_sections() {
        let sections = extract_sections(PAGE);
        assert_eq!(sections[&Section::Home], "Welcome to my portfolio");
        assert_eq!(sections[&Section::Skills], "AndroidFirebase");
        assert_eq!(sections[&Section::Contact], "contact@kamilamin.com");
    }

    #[test]
    fn missing_sections_get_placeholder() {
        let sections = extract_sections(PAGE);
        assert_eq!(sections[&Section::Services], SECTION_NOT_FOUND);
        assert_eq!(sections[&Section::Work], SECTION_NOT_FOUND);
        assert_eq!(sections[&Section::Resume], SECTION_NOT_FOUND);
    }

    #[test]
    fn every_section_is_always_present() {
        let sections = extract_sections("<html><body></body></html>");
        assert_eq!(sections.len(), Section::ALL.len());
        for section in Section::ALL {
            assert_eq!(sections[&section], SECTION_NOT_FOUND);
        }
    }

    #[test]
    fn placeholder_content_covers_every_section() {
        let sections = placeholder_content();
        assert_eq!(sections.len(), Section::ALL.len());
        for section in Section::ALL {
            assert_eq!(sections[&section], CONTENT_UNAVAILABLE);
        }
    }
}
