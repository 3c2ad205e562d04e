use serde::Serialize;
use smallvec::SmallVec;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Continent {
    #[serde(rename = "AF")]
    Africa,
    #[serde(rename = "AS")]
    Asia,
    #[serde(rename = "EU")]
    Europe,
    #[serde(rename = "NA")]
    NorthAmerica,
    #[serde(rename = "SA")]
    SouthAmerica,
    #[serde(rename = "OC")]
    Oceania,
    #[serde(rename = "AN")]
    Antarctica,
}

/// Continents a language is spoken on, in discovery order.
pub type ContinentList = SmallVec<[Continent; 4]>;

impl Continent {
    /// Fixed lookup order; ties within one territory resolve in this order.
    pub const ALL: [Continent; 7] = [
        Continent::Africa,
        Continent::Asia,
        Continent::Europe,
        Continent::NorthAmerica,
        Continent::SouthAmerica,
        Continent::Oceania,
        Continent::Antarctica,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            Continent::Africa => "AF",
            Continent::Asia => "AS",
            Continent::Europe => "EU",
            Continent::NorthAmerica => "NA",
            Continent::SouthAmerica => "SA",
            Continent::Oceania => "OC",
            Continent::Antarctica => "AN",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    #[inline(always)]
    const fn index(self) -> usize {
        self as usize
    }
}

/// Continent → territory codes, built once per run.
#[derive(Debug, Clone, Default)]
pub struct ContinentIndex {
    territories: [HashSet<String>; 7],
}

impl ContinentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, continent: Continent, territory: impl Into<String>) {
        self.territories[continent.index()].insert(territory.into());
    }

    #[inline]
    pub fn contains(&self, continent: Continent, territory: &str) -> bool {
        self.territories[continent.index()].contains(territory)
    }

    pub fn territory_count(&self) -> usize {
        self.territories.iter().map(HashSet::len).sum()
    }

    /// Continents covering any of `territories`, without repeats.
    ///
    /// Order follows the territories; a territory listed under several
    /// continents contributes them in [`Continent::ALL`] order.
    pub fn continents_of<'t, I>(&self, territories: I) -> ContinentList
    where
        I: IntoIterator<Item = &'t str>,
    {
        let mut found = ContinentList::new();
        for territory in territories {
            for continent in Continent::ALL {
                if !found.contains(&continent) && self.contains(continent, territory) {
                    found.push(continent);
                }
            }
        }
        found
    }
}

impl<S: Into<String>> FromIterator<(Continent, S)> for ContinentIndex {
    fn from_iter<T: IntoIterator<Item = (Continent, S)>>(iter: T) -> Self {
        let mut index = Self::new();
        for (continent, territory) in iter {
            index.insert(continent, territory);
        }
        index
    }
}
