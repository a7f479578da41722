//! Shop Selection

use smallvec::SmallVec;

use crate::{shops::Shop, snapshot::Snapshot};

/// Which shops a trip should be planned across.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopSelection {
    /// Plan across every known shop, choosing a small covering set.
    AllShops,

    /// Plan across exactly these shops.
    Shops(SmallVec<[String; 4]>),
}

impl ShopSelection {
    /// Pin the trip to the named shops.
    pub fn shops<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self::Shops(names.into_iter().map(Into::into).collect())
    }

    /// Returns true if the selection pins a specific set of shops.
    pub fn is_pinned(&self) -> bool {
        matches!(self, Self::Shops(_))
    }

    /// Resolve the selection against a snapshot.
    pub fn active_shops(&self, snapshot: &Snapshot) -> ActiveShops {
        match self {
            Self::AllShops => ActiveShops::all(snapshot),
            Self::Shops(names) => ActiveShops::pinned(snapshot, names.as_slice()),
        }
    }
}

impl Default for ShopSelection {
    fn default() -> Self {
        Self::Shops(SmallVec::new())
    }
}

/// Positions of the shops taking part in a planning run, in canonical shop order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveShops {
    shops: SmallVec<[usize; 8]>,
}

impl ActiveShops {
    /// Every shop in the snapshot.
    pub fn all(snapshot: &Snapshot) -> Self {
        Self {
            shops: (0..snapshot.shops().len()).collect(),
        }
    }

    /// Shops named in `names`. Names matching no shop are dropped.
    pub fn pinned<S: AsRef<str>>(snapshot: &Snapshot, names: &[S]) -> Self {
        let shops = snapshot
            .shops()
            .iter()
            .enumerate()
            .filter(|(_, shop)| names.iter().any(|name| name.as_ref() == shop.name()))
            .map(|(idx, _)| idx)
            .collect();

        Self { shops }
    }

    /// Iterate over active shop positions in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.shops.iter().copied()
    }

    /// Iterate over the active shops themselves.
    pub fn shops<'a>(
        &'a self,
        snapshot: &'a Snapshot,
    ) -> impl Iterator<Item = (usize, &'a Shop)> + 'a {
        self.iter()
            .filter_map(|idx| snapshot.shop_at(idx).map(|shop| (idx, shop)))
    }

    /// Returns true if the shop at `idx` is active.
    pub fn contains(&self, idx: usize) -> bool {
        self.shops.contains(&idx)
    }

    /// Position of the named shop, if it exists and is active.
    pub fn find(&self, snapshot: &Snapshot, name: &str) -> Option<usize> {
        snapshot.shop_idx(name).filter(|idx| self.contains(*idx))
    }

    /// Number of active shops.
    pub fn len(&self) -> usize {
        self.shops.len()
    }

    /// Returns true if no shop is active.
    pub fn is_empty(&self) -> bool {
        self.shops.is_empty()
    }
}
