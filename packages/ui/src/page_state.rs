//! State behind the commands page, kept free of rendering so the
//! load/rebuild cycle can be tested on its own.

use api::{CommandListing, FetchError, Locale, LocaleError, LocaleTable};

/// Identifies one fetch. Only the most recent ticket may change the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Loading,
    Ready,
    Failed(FetchError),
}

/// One rendered command card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageModel {
    locale: Locale,
    phase: Phase,
    cards: Vec<CardView>,
    generation: u64,
}

impl Default for PageModel {
    fn default() -> Self {
        Self {
            locale: Locale::DEFAULT,
            phase: Phase::Loading,
            cards: Vec::new(),
            generation: 0,
        }
    }
}

impl PageModel {
    /// Start loading `locale`: the old cards are dropped right away and the
    /// returned ticket must accompany the result.
    pub fn begin(&mut self, locale: Locale) -> Ticket {
        self.generation += 1;
        self.locale = locale;
        self.phase = Phase::Loading;
        self.cards.clear();
        Ticket(self.generation)
    }

    /// Handle a dropdown selection. An unknown name leaves the page as is.
    pub fn select_display_name(&mut self, display_name: &str) -> Result<Ticket, LocaleError> {
        let locale = LocaleTable::global().locale_for(display_name)?;
        Ok(self.begin(locale))
    }

    pub fn retry(&mut self) -> Ticket {
        self.begin(self.locale)
    }

    /// Apply a finished fetch. Returns `false` when the ticket is stale and
    /// the result was ignored.
    pub fn resolve(&mut self, ticket: Ticket, result: Result<CommandListing, FetchError>) -> bool {
        if ticket.0 != self.generation || self.phase != Phase::Loading {
            return false;
        }
        match result {
            Ok(listing) => {
                self.cards = listing
                    .iter()
                    .map(|(name, description)| CardView {
                        name: name.to_string(),
                        description: description.to_string(),
                    })
                    .collect();
                self.phase = Phase::Ready;
            }
            Err(err) => {
                self.cards.clear();
                self.phase = Phase::Failed(err);
            }
        }
        true
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Value shown in the language dropdown.
    pub fn selected_display_name(&self) -> &'static str {
        LocaleTable::global().display_name(self.locale)
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn cards(&self) -> &[CardView] {
        &self.cards
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
