//! Localized message lookup.
//!
//! Messages live in per-language bundles keyed by message code. The bundle is
//! picked from the request's `Accept-Language` header, falling back to the
//! configured default locale.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::config::GREETING_MESSAGE_KEY;

type Bundle = HashMap<&'static str, &'static str>;

static BUNDLES: Lazy<HashMap<&'static str, Bundle>> = Lazy::new(|| {
    HashMap::from([
        ("ko", Bundle::from([(GREETING_MESSAGE_KEY, "안녕하세요")])),
        ("en", Bundle::from([(GREETING_MESSAGE_KEY, "Hello")])),
        ("fr", Bundle::from([(GREETING_MESSAGE_KEY, "Bonjour")])),
    ])
});

/// One entry of an `Accept-Language` header (e.g. `en-US;q=0.8`)
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageRange {
    /// Primary language subtag, lowercased (`en`)
    pub language: String,
    /// Region subtag, uppercased (`US`)
    pub region: Option<String>,
    /// Quality weight between 0.0 and 1.0
    pub quality: f32,
}

impl LanguageRange {
    /// Parse a single range. Returns `None` for empty or malformed entries.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.split(';');
        let tag = parts.next()?.trim();
        if tag.is_empty() {
            return None;
        }

        let (language, region) = match tag.split_once(['-', '_']) {
            Some((lang, region)) => (lang.to_lowercase(), Some(region.to_uppercase())),
            None => (tag.to_lowercase(), None),
        };

        let mut quality = 1.0;
        for param in parts {
            if let Some(q) = param.trim().strip_prefix("q=") {
                quality = q.trim().parse::<f32>().ok()?.clamp(0.0, 1.0);
            }
        }

        Some(Self {
            language,
            region,
            quality,
        })
    }
}

/// Parse an `Accept-Language` header into ranges ordered by quality.
///
/// Entries with equal quality keep their header order.
pub fn parse_accept_language(header: &str) -> Vec<LanguageRange> {
    let mut ranges: Vec<LanguageRange> = header
        .split(',')
        .filter_map(LanguageRange::parse)
        .collect();
    ranges.sort_by(|a, b| b.quality.total_cmp(&a.quality));
    ranges
}

/// Resolves message codes against the bundled translations
#[derive(Debug, Clone)]
pub struct MessageSource {
    default_locale: String,
}

impl MessageSource {
    pub fn new(default_locale: impl Into<String>) -> Self {
        Self {
            default_locale: default_locale.into(),
        }
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Whether a bundle exists for the language
    pub fn supports(&self, language: &str) -> bool {
        BUNDLES.contains_key(language)
    }

    /// Pick the best supported language for an `Accept-Language` header.
    pub fn resolve_locale(&self, accept_language: Option<&str>) -> String {
        accept_language
            .map(parse_accept_language)
            .unwrap_or_default()
            .into_iter()
            .filter(|range| range.quality > 0.0)
            .find(|range| self.supports(&range.language))
            .map(|range| range.language)
            .unwrap_or_else(|| self.default_locale.clone())
    }

    /// Look up a message in the locale's bundle, then in the default bundle.
    pub fn get_message(&self, code: &str, locale: &str) -> Option<&'static str> {
        [locale, self.default_locale.as_str()]
            .into_iter()
            .filter_map(|lang| BUNDLES.get(lang))
            .find_map(|bundle| bundle.get(code).copied())
    }

    /// Resolve a message straight from the request header
    pub fn message_for(&self, code: &str, accept_language: Option<&str>) -> Option<&'static str> {
        let locale = self.resolve_locale(accept_language);
        tracing::info!(locale = %locale, "acceptLanguage resolved");
        self.get_message(code, &locale)
    }
}
