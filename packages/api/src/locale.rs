use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::LocaleError;

/// Locales the command service can describe its commands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en-US")]
    AmericanEnglish,
    #[serde(rename = "zh-TW")]
    TaiwanChinese,
    #[serde(rename = "zh-CN")]
    Chinese,
    #[serde(rename = "id")]
    Indonesian,
    #[serde(rename = "nl")]
    Dutch,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "pt-BR")]
    BrazilPortuguese,
}

impl Locale {
    pub const DEFAULT: Locale = Locale::AmericanEnglish;

    /// Every locale, in dropdown order.
    pub const ALL: [Locale; 8] = [
        Locale::AmericanEnglish,
        Locale::TaiwanChinese,
        Locale::Chinese,
        Locale::Indonesian,
        Locale::Dutch,
        Locale::French,
        Locale::Japanese,
        Locale::BrazilPortuguese,
    ];

    /// Value sent as the `locale` query parameter.
    pub fn code(self) -> &'static str {
        match self {
            Locale::AmericanEnglish => "en-US",
            Locale::TaiwanChinese => "zh-TW",
            Locale::Chinese => "zh-CN",
            Locale::Indonesian => "id",
            Locale::Dutch => "nl",
            Locale::French => "fr",
            Locale::Japanese => "ja",
            Locale::BrazilPortuguese => "pt-BR",
        }
    }

    fn native_name(self) -> &'static str {
        match self {
            Locale::AmericanEnglish => "English",
            Locale::TaiwanChinese => "繁體中文",
            Locale::Chinese => "简体中文",
            Locale::Indonesian => "Bahasa Indonesia",
            Locale::Dutch => "Nederlands",
            Locale::French => "Français",
            Locale::Japanese => "日本語",
            Locale::BrazilPortuguese => "Português (Brasil)",
        }
    }

    pub fn display_name(self) -> &'static str {
        LocaleTable::global().display_name(self)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::DEFAULT
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Two-way mapping between locales and the names shown in the language
/// dropdown. Built once and never mutated.
#[derive(Debug)]
pub struct LocaleTable {
    names: IndexMap<Locale, &'static str>,
    by_name: HashMap<&'static str, Locale>,
}

static TABLE: OnceLock<LocaleTable> = OnceLock::new();

impl LocaleTable {
    /// Build a table from `(locale, display name)` pairs. Fails if a display
    /// name appears twice, since the dropdown could not tell them apart.
    pub fn build(
        entries: impl IntoIterator<Item = (Locale, &'static str)>,
    ) -> Result<Self, LocaleError> {
        let mut names: IndexMap<Locale, &'static str> = IndexMap::new();
        let mut by_name: HashMap<&'static str, Locale> = HashMap::new();
        for (locale, name) in entries {
            if by_name.get(name).is_some_and(|owner| *owner != locale) {
                return Err(LocaleError::DuplicateDisplayName(name.to_string()));
            }
            if let Some(previous) = names.insert(locale, name) {
                by_name.remove(previous);
            }
            by_name.insert(name, locale);
        }
        Ok(Self { names, by_name })
    }

    /// Process-wide table covering every [`Locale`].
    pub fn global() -> &'static LocaleTable {
        TABLE.get_or_init(|| {
            match Self::build(Locale::ALL.map(|locale| (locale, locale.native_name()))) {
                Ok(table) => table,
                Err(err) => unreachable!("built-in locale names are unique: {err}"),
            }
        })
    }

    pub fn display_name(&self, locale: Locale) -> &'static str {
        self.names.get(&locale).copied().unwrap_or_else(|| locale.code())
    }

    /// Inverse lookup used when the dropdown reports a selection.
    pub fn locale_for(&self, display_name: &str) -> Result<Locale, LocaleError> {
        self.by_name
            .get(display_name)
            .copied()
            .ok_or_else(|| LocaleError::UnknownDisplayName(display_name.to_string()))
    }

    /// Entries in dropdown order.
    pub fn entries(&self) -> impl Iterator<Item = (Locale, &'static str)> + '_ {
        self.names.iter().map(|(locale, name)| (*locale, *name))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
