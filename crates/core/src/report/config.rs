//! Report configuration and the override resolver.
//!
//! A [`ReportConfig`] is always fully populated. Callers describe changes
//! with a partial [`ReportOverrides`]; [`ReportConfig::merge`] applies them
//! with one rule: every top-level key present in the override replaces the
//! base value wholesale, except `sections`, which is merged key by key.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono_tz::Tz;
use hireme_shared::config::ReportSettings;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::warn;

use super::error::ConfigError;
use crate::quote::Role;

/// Default accent color.
pub const DEFAULT_PRIMARY_COLOR: &str = "#007bff";
/// Default company name.
pub const DEFAULT_COMPANY_NAME: &str = "HireMe";
/// Default `@page` size.
pub const DEFAULT_PAGE_SIZE: &str = "A4";
/// Default `@page` margin.
pub const DEFAULT_MARGINS: &str = "0.5in";
/// Default currency symbol.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

const MAX_CSS_VALUE_LEN: usize = 64;

/// A toggleable section of the report, in canonical document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum SectionName {
    /// Title block.
    Header,
    /// Record information block.
    QuoteInfo,
    /// Service (subject) details block.
    ServiceDetails,
    /// Client (counterparty) details block.
    ClientDetails,
    /// Response / outcome block.
    QuoteResponse,
    /// Event timeline.
    Timeline,
    /// Print and close controls.
    PrintButtons,
}

impl SectionName {
    /// Every section in canonical order.
    pub const ALL: [Self; 7] = [
        Self::Header,
        Self::QuoteInfo,
        Self::ServiceDetails,
        Self::ClientDetails,
        Self::QuoteResponse,
        Self::Timeline,
        Self::PrintButtons,
    ];

    /// Configuration key of the section.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::QuoteInfo => "quoteInfo",
            Self::ServiceDetails => "serviceDetails",
            Self::ClientDetails => "clientDetails",
            Self::QuoteResponse => "quoteResponse",
            Self::Timeline => "timeline",
            Self::PrintButtons => "printButtons",
        }
    }

    /// Heading shown when the section has to be replaced by a placeholder.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Header => "Report Header",
            Self::QuoteInfo => "Quote Information",
            Self::ServiceDetails => "Service Details",
            Self::ClientDetails => "Client Details",
            Self::QuoteResponse => "Quote Response",
            Self::Timeline => "Timeline",
            Self::PrintButtons => "Controls",
        }
    }
}

impl FromStr for SectionName {
    type Err = String;

    /// Accepts camelCase, snake_case and kebab-case spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_key(s);
        Self::ALL
            .into_iter()
            .find(|name| normalize_key(name.key()) == wanted)
            .ok_or_else(|| format!("unknown section: {s}"))
    }
}

impl TryFrom<String> for SectionName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Visibility of each section. All sections are visible by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct SectionToggles {
    header: bool,
    quote_info: bool,
    service_details: bool,
    client_details: bool,
    quote_response: bool,
    timeline: bool,
    print_buttons: bool,
}

impl Default for SectionToggles {
    fn default() -> Self {
        Self {
            header: true,
            quote_info: true,
            service_details: true,
            client_details: true,
            quote_response: true,
            timeline: true,
            print_buttons: true,
        }
    }
}

impl SectionToggles {
    /// Returns whether a section is rendered.
    #[must_use]
    pub const fn is_enabled(&self, name: SectionName) -> bool {
        match name {
            SectionName::Header => self.header,
            SectionName::QuoteInfo => self.quote_info,
            SectionName::ServiceDetails => self.service_details,
            SectionName::ClientDetails => self.client_details,
            SectionName::QuoteResponse => self.quote_response,
            SectionName::Timeline => self.timeline,
            SectionName::PrintButtons => self.print_buttons,
        }
    }

    /// Shows or hides a section.
    pub fn set(&mut self, name: SectionName, enabled: bool) {
        let slot = match name {
            SectionName::Header => &mut self.header,
            SectionName::QuoteInfo => &mut self.quote_info,
            SectionName::ServiceDetails => &mut self.service_details,
            SectionName::ClientDetails => &mut self.client_details,
            SectionName::QuoteResponse => &mut self.quote_response,
            SectionName::Timeline => &mut self.timeline,
            SectionName::PrintButtons => &mut self.print_buttons,
        };
        *slot = enabled;
    }

    /// Returns a copy with one section changed.
    #[must_use]
    pub fn with(mut self, name: SectionName, enabled: bool) -> Self {
        self.set(name, enabled);
        self
    }

    /// Iterates `(section, enabled)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionName, bool)> + '_ {
        SectionName::ALL
            .into_iter()
            .map(move |name| (name, self.is_enabled(name)))
    }
}

/// A value interpolated into the stylesheet.
///
/// Rejects anything that could close a declaration, a rule or the
/// surrounding `<style>` element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct CssValue(String);

impl CssValue {
    /// Validates a raw CSS value for the given configuration key.
    pub fn parse(key: &str, raw: &str) -> Result<Self, ConfigError> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(ConfigError::invalid_value(key, raw, "value is empty"));
        }
        if value.len() > MAX_CSS_VALUE_LEN {
            return Err(ConfigError::invalid_value(key, raw, "value is too long"));
        }
        if let Some(ch) = value
            .chars()
            .find(|ch| matches!(ch, ';' | '{' | '}' | '<' | '>' | '"' | '\\') || ch.is_control())
        {
            return Err(ConfigError::invalid_value(
                key,
                raw,
                format!("contains forbidden character {ch:?}"),
            ));
        }
        Ok(Self(value.to_string()))
    }

    /// The validated value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CssValue {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse("css value", &value)
    }
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleConfig {
    /// Accent color used throughout the stylesheet.
    pub primary_color: CssValue,
    /// Company name shown in the header.
    pub company_name: String,
    /// Compact density tier.
    pub compact: bool,
    /// `@page` size.
    pub page_size: CssValue,
    /// `@page` margin.
    pub margins: CssValue,
    /// Currency symbol for money figures.
    pub currency_symbol: String,
    /// Timezone for displayed timestamps.
    pub timezone: Tz,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            primary_color: CssValue(DEFAULT_PRIMARY_COLOR.to_string()),
            company_name: DEFAULT_COMPANY_NAME.to_string(),
            compact: true,
            page_size: CssValue(DEFAULT_PAGE_SIZE.to_string()),
            margins: CssValue(DEFAULT_MARGINS.to_string()),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            timezone: Tz::UTC,
        }
    }
}

/// Fully resolved report configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportConfig {
    /// Perspective the report is written from.
    pub role: Role,
    /// Presentation settings.
    pub style: StyleConfig,
    /// Section visibility.
    pub sections: SectionToggles,
}

/// A partial configuration. Absent keys keep the base value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportOverrides {
    /// Acting role.
    pub role: Option<Role>,
    /// Accent color.
    pub primary_color: Option<CssValue>,
    /// Company name.
    pub company_name: Option<String>,
    /// Density tier.
    pub compact: Option<bool>,
    /// `@page` size.
    pub page_size: Option<CssValue>,
    /// `@page` margin.
    pub margins: Option<CssValue>,
    /// Currency symbol.
    pub currency_symbol: Option<String>,
    /// Display timezone.
    pub timezone: Option<Tz>,
    /// Per-section visibility, merged key by key.
    pub sections: BTreeMap<SectionName, bool>,
}

impl ReportOverrides {
    /// Overrides that only change section visibility.
    #[must_use]
    pub fn sections<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (SectionName, bool)>,
    {
        Self {
            sections: entries.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Combines two overrides; keys present in `later` win.
    ///
    /// `base.merge(&a).merge(&b) == base.merge(&a.then(&b))`.
    #[must_use]
    pub fn then(&self, later: &Self) -> Self {
        let mut sections = self.sections.clone();
        sections.extend(later.sections.iter().map(|(k, v)| (*k, *v)));

        Self {
            role: later.role.or(self.role),
            primary_color: later.primary_color.clone().or_else(|| self.primary_color.clone()),
            company_name: later.company_name.clone().or_else(|| self.company_name.clone()),
            compact: later.compact.or(self.compact),
            page_size: later.page_size.clone().or_else(|| self.page_size.clone()),
            margins: later.margins.clone().or_else(|| self.margins.clone()),
            currency_symbol: later
                .currency_symbol
                .clone()
                .or_else(|| self.currency_symbol.clone()),
            timezone: later.timezone.or(self.timezone),
            sections,
        }
    }

    /// Parses an untyped override object key by key.
    ///
    /// Malformed keys are logged and skipped; the rest still apply.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        let (overrides, rejected) = Self::from_json_with_errors(value);
        for error in &rejected {
            warn!(error = %error, "Ignoring report configuration override");
        }
        overrides
    }

    /// Like [`ReportOverrides::from_json`], returning the rejected keys
    /// instead of logging them.
    #[must_use]
    pub fn from_json_with_errors(value: &Value) -> (Self, Vec<ConfigError>) {
        let mut overrides = Self::default();
        let mut rejected = Vec::new();

        match value {
            Value::Object(map) => overrides.apply_object(map, "", &mut rejected),
            Value::Null => {}
            _ => rejected.push(ConfigError::NotAnObject),
        }

        (overrides, rejected)
    }

    fn apply_object(&mut self, map: &Map<String, Value>, prefix: &str, rejected: &mut Vec<ConfigError>) {
        for (key, value) in map {
            let path = format!("{prefix}{key}");
            if let Err(error) = self.apply_entry(key, value, &path, rejected) {
                rejected.push(error);
            }
        }
    }

    fn apply_entry(
        &mut self,
        key: &str,
        value: &Value,
        path: &str,
        rejected: &mut Vec<ConfigError>,
    ) -> Result<(), ConfigError> {
        match normalize_key(key).as_str() {
            "role" => {
                let raw = expect_str(path, value)?;
                let role = raw
                    .parse::<Role>()
                    .map_err(|reason| ConfigError::invalid_value(path, raw, reason))?;
                self.role = Some(role);
            }
            "primarycolor" => {
                self.primary_color = Some(CssValue::parse(path, expect_str(path, value)?)?);
            }
            "companyname" => self.company_name = Some(expect_str(path, value)?.to_string()),
            "compact" => self.compact = Some(expect_bool(path, value)?),
            "pagesize" => self.page_size = Some(CssValue::parse(path, expect_str(path, value)?)?),
            "margins" => self.margins = Some(CssValue::parse(path, expect_str(path, value)?)?),
            "currencysymbol" => {
                self.currency_symbol = Some(expect_str(path, value)?.to_string());
            }
            "timezone" => self.timezone = Some(parse_timezone(path, expect_str(path, value)?)?),
            "style" => {
                let Value::Object(style) = value else {
                    return Err(ConfigError::InvalidType {
                        key: path.to_string(),
                        expected: "object",
                    });
                };
                self.apply_object(style, &format!("{path}."), rejected);
            }
            "sections" => {
                let Value::Object(sections) = value else {
                    return Err(ConfigError::InvalidType {
                        key: path.to_string(),
                        expected: "object",
                    });
                };
                for (name, enabled) in sections {
                    let entry_path = format!("{path}.{name}");
                    let parsed = name
                        .parse::<SectionName>()
                        .map_err(|_| ConfigError::UnknownKey(entry_path.clone()))
                        .and_then(|section| Ok((section, expect_bool(&entry_path, enabled)?)));
                    match parsed {
                        Ok((section, enabled)) => {
                            self.sections.insert(section, enabled);
                        }
                        Err(error) => rejected.push(error),
                    }
                }
            }
            _ => return Err(ConfigError::UnknownKey(path.to_string())),
        }
        Ok(())
    }

    /// Converts application settings into overrides, logging and skipping
    /// unusable values.
    #[must_use]
    pub fn from_settings(settings: &ReportSettings) -> Self {
        let mut overrides = Self::default();
        let mut rejected = Vec::new();

        if let Some(raw) = settings.role.as_deref() {
            match raw.parse::<Role>() {
                Ok(role) => overrides.role = Some(role),
                Err(reason) => rejected.push(ConfigError::invalid_value("role", raw, reason)),
            }
        }
        for (slot, key, raw) in [
            (&mut overrides.primary_color, "primary_color", &settings.primary_color),
            (&mut overrides.page_size, "page_size", &settings.page_size),
            (&mut overrides.margins, "margins", &settings.margins),
        ] {
            if let Some(raw) = raw.as_deref() {
                match CssValue::parse(key, raw) {
                    Ok(value) => *slot = Some(value),
                    Err(error) => rejected.push(error),
                }
            }
        }
        if let Some(raw) = settings.timezone.as_deref() {
            match parse_timezone("timezone", raw) {
                Ok(tz) => overrides.timezone = Some(tz),
                Err(error) => rejected.push(error),
            }
        }
        overrides.company_name.clone_from(&settings.company_name);
        overrides.currency_symbol.clone_from(&settings.currency_symbol);
        overrides.compact = settings.compact;

        for (name, enabled) in &settings.sections {
            match name.parse::<SectionName>() {
                Ok(section) => {
                    overrides.sections.insert(section, *enabled);
                }
                Err(_) => rejected.push(ConfigError::UnknownKey(format!("sections.{name}"))),
            }
        }

        for error in &rejected {
            warn!(error = %error, "Ignoring report setting");
        }
        overrides
    }
}

impl ReportConfig {
    /// Resolves overrides against the built-in defaults.
    #[must_use]
    pub fn resolve(overrides: &ReportOverrides) -> Self {
        Self::default().merge(overrides)
    }

    /// Applies overrides on top of this configuration.
    #[must_use]
    pub fn merge(&self, overrides: &ReportOverrides) -> Self {
        let mut merged = self.clone();
        let style = &mut merged.style;

        if let Some(role) = overrides.role {
            merged.role = role;
        }
        if let Some(color) = &overrides.primary_color {
            style.primary_color = color.clone();
        }
        if let Some(name) = &overrides.company_name {
            style.company_name.clone_from(name);
        }
        if let Some(compact) = overrides.compact {
            style.compact = compact;
        }
        if let Some(page_size) = &overrides.page_size {
            style.page_size = page_size.clone();
        }
        if let Some(margins) = &overrides.margins {
            style.margins = margins.clone();
        }
        if let Some(symbol) = &overrides.currency_symbol {
            style.currency_symbol.clone_from(symbol);
        }
        if let Some(tz) = overrides.timezone {
            style.timezone = tz;
        }
        for (name, enabled) in &overrides.sections {
            merged.sections.set(*name, *enabled);
        }

        merged
    }

    /// Overrides that reproduce this configuration exactly.
    #[must_use]
    pub fn to_overrides(&self) -> ReportOverrides {
        ReportOverrides {
            role: Some(self.role),
            primary_color: Some(self.style.primary_color.clone()),
            company_name: Some(self.style.company_name.clone()),
            compact: Some(self.style.compact),
            page_size: Some(self.style.page_size.clone()),
            margins: Some(self.style.margins.clone()),
            currency_symbol: Some(self.style.currency_symbol.clone()),
            timezone: Some(self.style.timezone),
            sections: self.sections.iter().collect(),
        }
    }

    /// Returns a copy with a different role.
    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}

/// Resolves caller overrides against the built-in defaults.
#[must_use]
pub fn resolve(overrides: &ReportOverrides) -> ReportConfig {
    ReportConfig::resolve(overrides)
}

fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|ch| !matches!(ch, '_' | '-'))
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

fn expect_str<'a>(key: &str, value: &'a Value) -> Result<&'a str, ConfigError> {
    value.as_str().ok_or_else(|| ConfigError::InvalidType {
        key: key.to_string(),
        expected: "string",
    })
}

fn expect_bool(key: &str, value: &Value) -> Result<bool, ConfigError> {
    value.as_bool().ok_or_else(|| ConfigError::InvalidType {
        key: key.to_string(),
        expected: "boolean",
    })
}

fn parse_timezone(key: &str, raw: &str) -> Result<Tz, ConfigError> {
    raw.trim()
        .parse::<Tz>()
        .map_err(|err| ConfigError::invalid_value(key, raw, err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn disabled_sections(config: &ReportConfig) -> Vec<SectionName> {
        config
            .sections
            .iter()
            .filter(|(_, enabled)| !enabled)
            .map(|(name, _)| name)
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.role, Role::Provider);
        assert_eq!(config.style.primary_color.as_str(), "#007bff");
        assert_eq!(config.style.company_name, "HireMe");
        assert!(config.style.compact);
        assert_eq!(config.style.page_size.as_str(), "A4");
        assert_eq!(config.style.margins.as_str(), "0.5in");
        assert_eq!(config.style.timezone, Tz::UTC);
        assert!(config.sections.iter().all(|(_, enabled)| enabled));
    }

    #[test]
    fn test_partial_sections_merge_key_wise() {
        let overrides = ReportOverrides::from_json(&json!({ "sections": { "timeline": false } }));
        let config = resolve(&overrides);

        assert_eq!(disabled_sections(&config), vec![SectionName::Timeline]);
        assert_eq!(config.style, StyleConfig::default());
        assert_eq!(config.role, Role::Provider);
    }

    #[test]
    fn test_top_level_keys_replace_wholesale() {
        let overrides = ReportOverrides::from_json(&json!({
            "primaryColor": "#123456",
            "companyName": "Acme Repairs",
            "compact": false,
            "role": "client",
        }));
        let config = resolve(&overrides);

        assert_eq!(config.role, Role::Client);
        assert_eq!(config.style.primary_color.as_str(), "#123456");
        assert_eq!(config.style.company_name, "Acme Repairs");
        assert!(!config.style.compact);
        assert_eq!(config.style.page_size.as_str(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_nested_style_object_is_accepted() {
        let overrides = ReportOverrides::from_json(&json!({
            "style": { "pageSize": "Letter", "margins": "1cm", "timezone": "Asia/Manila" }
        }));
        let config = resolve(&overrides);

        assert_eq!(config.style.page_size.as_str(), "Letter");
        assert_eq!(config.style.margins.as_str(), "1cm");
        assert_eq!(config.style.timezone, chrono_tz::Asia::Manila);
    }

    #[test]
    fn test_bad_keys_are_ignored_individually() {
        let (overrides, rejected) = ReportOverrides::from_json_with_errors(&json!({
            "primaryColor": "red; background: url(x)",
            "compact": "yes",
            "role": "guest",
            "timezone": "Mars/Olympus",
            "fontFamily": "Comic Sans",
            "sections": { "timeline": false, "footer": false, "header": "no" },
            "companyName": "Still Applied",
        }));

        assert_eq!(rejected.len(), 7);
        assert!(rejected.contains(&ConfigError::UnknownKey("fontFamily".into())));
        assert!(rejected.contains(&ConfigError::UnknownKey("sections.footer".into())));
        assert!(rejected.contains(&ConfigError::InvalidType {
            key: "compact".into(),
            expected: "boolean"
        }));

        let config = resolve(&overrides);
        assert_eq!(config.style.company_name, "Still Applied");
        assert_eq!(config.style.primary_color.as_str(), DEFAULT_PRIMARY_COLOR);
        assert!(config.style.compact);
        assert_eq!(config.role, Role::Provider);
        assert_eq!(disabled_sections(&config), vec![SectionName::Timeline]);
    }

    #[test]
    fn test_non_object_overrides() {
        let (overrides, rejected) = ReportOverrides::from_json_with_errors(&json!([1, 2]));
        assert_eq!(overrides, ReportOverrides::default());
        assert_eq!(rejected, vec![ConfigError::NotAnObject]);

        let (overrides, rejected) = ReportOverrides::from_json_with_errors(&Value::Null);
        assert_eq!(overrides, ReportOverrides::default());
        assert!(rejected.is_empty());
    }

    #[test]
    fn test_typed_deserialization() {
        let overrides: ReportOverrides = serde_json::from_value(json!({
            "role": "admin",
            "pageSize": "Letter",
            "sections": { "printButtons": false, "client_details": false }
        }))
        .unwrap();

        assert_eq!(overrides.role, Some(Role::Admin));
        assert_eq!(overrides.sections.len(), 2);

        let invalid = serde_json::from_value::<ReportOverrides>(json!({ "margins": "1in}" }));
        assert!(invalid.is_err());
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let overrides = ReportOverrides::from_json(&json!({
            "primaryColor": "#ff8800",
            "sections": { "timeline": false, "printButtons": false }
        }));
        let once = resolve(&overrides);
        let twice = resolve(&once.to_overrides());

        assert_eq!(once, twice);
        assert_eq!(once.merge(&overrides), once);
        assert_eq!(once.merge(&ReportOverrides::default()), once);
    }

    #[test]
    fn test_from_settings() {
        let mut settings = ReportSettings {
            role: Some("client".to_string()),
            primary_color: Some("#00aa00".to_string()),
            margins: Some("{".to_string()),
            timezone: Some("Asia/Manila".to_string()),
            ..ReportSettings::default()
        };
        settings.sections.insert("print_buttons".to_string(), false);
        settings.sections.insert("bogus".to_string(), false);

        let config = resolve(&ReportOverrides::from_settings(&settings));
        assert_eq!(config.role, Role::Client);
        assert_eq!(config.style.primary_color.as_str(), "#00aa00");
        assert_eq!(config.style.margins.as_str(), DEFAULT_MARGINS);
        assert_eq!(disabled_sections(&config), vec![SectionName::PrintButtons]);
    }

    #[test]
    fn test_section_name_spellings() {
        assert_eq!("quoteInfo".parse::<SectionName>().unwrap(), SectionName::QuoteInfo);
        assert_eq!("quote_info".parse::<SectionName>().unwrap(), SectionName::QuoteInfo);
        assert_eq!("print-buttons".parse::<SectionName>().unwrap(), SectionName::PrintButtons);
        assert!("footer".parse::<SectionName>().is_err());
    }

    #[test]
    fn test_css_value_validation() {
        assert!(CssValue::parse("primaryColor", "rgb(0, 123, 255)").is_ok());
        assert!(CssValue::parse("primaryColor", "  ").is_err());
        assert!(CssValue::parse("primaryColor", "</style>").is_err());
        assert!(CssValue::parse("primaryColor", &"a".repeat(65)).is_err());
        assert_eq!(CssValue::parse("pageSize", " A5 ").unwrap().as_str(), "A5");
    }
}
