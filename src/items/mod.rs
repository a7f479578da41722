//! Items

use std::cmp::Ordering;

use smallvec::SmallVec;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Where an item may be bought, as declared on the item itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint<'a> {
    /// The item can only be bought at this shop.
    OnlyShop(&'a str),

    /// The item should be bought at this shop whenever it is on the trip.
    PreferredShop(&'a str),

    /// Any shop selling the item's type will do.
    Unconstrained,
}

/// How an allocated item relates to its preferred shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference<'a> {
    /// Bought at its preferred shop.
    Preferred,

    /// Bought somewhere other than its preferred shop (the preferred shop).
    Elsewhere(&'a str),

    /// The item has no preferred shop.
    Indifferent,
}

/// A catalog item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Item {
    name: String,
    item_type: String,
    preferred_shop: Option<String>,
    only_shop: Option<String>,
    nicknames: SmallVec<[String; 3]>,
    is_deferred: bool,
}

impl Item {
    /// Creates a new unconstrained item of the given type.
    #[must_use]
    pub fn new(name: impl Into<String>, item_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            item_type: item_type.into(),
            ..Self::default()
        }
    }

    /// Sets the preferred shop. Blank names leave the item without one.
    #[must_use]
    pub fn with_preferred_shop(mut self, shop: impl Into<String>) -> Self {
        self.preferred_shop = non_blank(shop.into());
        self
    }

    /// Sets the only shop the item may be bought at. Blank names leave the item without one.
    #[must_use]
    pub fn with_only_shop(mut self, shop: impl Into<String>) -> Self {
        self.only_shop = non_blank(shop.into());
        self
    }

    /// Sets alternate names for the item.
    #[must_use]
    pub fn with_nicknames<S: Into<String>>(
        mut self,
        nicknames: impl IntoIterator<Item = S>,
    ) -> Self {
        self.nicknames = nicknames.into_iter().map(Into::into).collect();
        self
    }

    /// Marks the item as deferred.
    #[must_use]
    pub fn deferred(mut self) -> Self {
        self.is_deferred = true;
        self
    }

    /// Returns the item name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the item type
    pub fn item_type(&self) -> &str {
        &self.item_type
    }

    /// Returns the preferred shop, if any
    pub fn preferred_shop(&self) -> Option<&str> {
        self.preferred_shop.as_deref()
    }

    /// Returns the only shop the item may be bought at, if any
    pub fn only_shop(&self) -> Option<&str> {
        self.only_shop.as_deref()
    }

    /// Returns the alternate names for the item
    pub fn nicknames(&self) -> &[String] {
        &self.nicknames
    }

    /// Returns true if the item has been put off until a later trip.
    pub fn is_deferred(&self) -> bool {
        self.is_deferred
    }

    /// Sets or clears the deferred flag.
    pub fn set_deferred(&mut self, deferred: bool) {
        self.is_deferred = deferred;
    }

    /// Returns the constraint that governs where the item may be bought.
    ///
    /// `only_shop` takes precedence; `preferred_shop` is ignored when both are set.
    pub fn constraint(&self) -> Constraint<'_> {
        match (self.only_shop(), self.preferred_shop()) {
            (Some(shop), _) => Constraint::OnlyShop(shop),
            (None, Some(shop)) => Constraint::PreferredShop(shop),
            (None, None) => Constraint::Unconstrained,
        }
    }

    /// Describes how buying the item at `shop` relates to its preferred shop.
    pub fn preference_at(&self, shop: &str) -> Preference<'_> {
        match self.preferred_shop() {
            Some(preferred) if preferred == shop => Preference::Preferred,
            Some(preferred) => Preference::Elsewhere(preferred),
            None => Preference::Indifferent,
        }
    }
}

/// Compares item names the way a person would read them in a list.
///
/// Names compare by their letters first, ignoring accents and case. Ties are
/// broken by accents (unaccented first), then by case (lowercase first), and
/// anything still tied falls back to code point order.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let base = |name: &str| {
        name.nfd()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
            .collect::<String>()
    };

    let accented = |name: &str| name.nfd().flat_map(char::to_lowercase).collect::<String>();

    base(a)
        .cmp(&base(b))
        .then_with(|| accented(a).cmp(&accented(b)))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_string())
    }
}
