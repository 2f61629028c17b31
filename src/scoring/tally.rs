use super::likert::LikertLevel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    EnumString,
)]
pub enum Focus {
    #[strum(serialize = "accelerationistFocus")]
    Accelerationist,
    #[strum(serialize = "postLiberalFocus")]
    PostLiberal,
    #[strum(serialize = "anarchistFocus")]
    Anarchist,
    #[strum(serialize = "falgscFocus")]
    Falgsc,
    #[strum(serialize = "cryptoAnarchistFocus")]
    CryptoAnarchist,
    #[strum(serialize = "neoReactionaryFocus")]
    NeoReactionary,
    #[strum(serialize = "ecoSocialistFocus")]
    EcoSocialist,
    #[strum(serialize = "altRightFocus")]
    AltRight,
}

impl Focus {
    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            Self::Accelerationist => &["accelerationism"],
            Self::PostLiberal => &["post_liberal", "neo_reactionary", "alt_right"],
            Self::Anarchist => &[
                "anarchist",
                "crypto_anarchist",
                "cooperative",
                "decentralization",
            ],
            Self::Falgsc => &["falgsc"],
            Self::CryptoAnarchist => &["crypto_anarchist"],
            Self::NeoReactionary => &["neo_reactionary"],
            Self::EcoSocialist => &["eco_socialist"],
            Self::AltRight => &["alt_right"],
        }
    }

    pub fn tracks(&self, category: &str) -> bool {
        self.categories().contains(&category)
    }

    pub fn containing(category: &str) -> impl Iterator<Item = Focus> + '_ {
        Self::iter().filter(move |focus| focus.tracks(category))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryTally {
    pub strongly_agree: u32,
    pub agree: u32,
    pub neutral: u32,
    pub disagree: u32,
    pub strongly_disagree: u32,
}

impl CategoryTally {
    pub fn single(level: LikertLevel) -> Self {
        Self::default().with(level)
    }

    pub fn with(self, level: LikertLevel) -> Self {
        let mut next = self;
        match level {
            LikertLevel::StronglyAgree => next.strongly_agree += 1,
            LikertLevel::Agree => next.agree += 1,
            LikertLevel::Neutral => next.neutral += 1,
            LikertLevel::Disagree => next.disagree += 1,
            LikertLevel::StronglyDisagree => next.strongly_disagree += 1,
        }
        next
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            strongly_agree: self.strongly_agree + other.strongly_agree,
            agree: self.agree + other.agree,
            neutral: self.neutral + other.neutral,
            disagree: self.disagree + other.disagree,
            strongly_disagree: self.strongly_disagree + other.strongly_disagree,
        }
    }

    pub fn count(&self, level: LikertLevel) -> u32 {
        match level {
            LikertLevel::StronglyAgree => self.strongly_agree,
            LikertLevel::Agree => self.agree,
            LikertLevel::Neutral => self.neutral,
            LikertLevel::Disagree => self.disagree,
            LikertLevel::StronglyDisagree => self.strongly_disagree,
        }
    }

    pub fn total(&self) -> u32 {
        self.strongly_agree + self.agree + self.neutral + self.disagree + self.strongly_disagree
    }
}

/// Unknown focus keys are dropped when reading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, CategoryTally>",
    into = "BTreeMap<String, CategoryTally>"
)]
pub struct FocusTallies {
    tallies: BTreeMap<Focus, CategoryTally>,
}

impl FocusTallies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_answer(category: &str, level: LikertLevel) -> Self {
        Self {
            tallies: Focus::containing(category)
                .map(|focus| (focus, CategoryTally::single(level)))
                .collect(),
        }
    }

    pub fn merge(self, other: Self) -> Self {
        let mut tallies = self.tallies;
        for (focus, tally) in other.tallies {
            let merged = tallies.get(&focus).copied().unwrap_or_default().merge(tally);
            tallies.insert(focus, merged);
        }
        Self { tallies }
    }

    pub fn with_tally(mut self, focus: Focus, tally: CategoryTally) -> Self {
        self.tallies.insert(focus, tally);
        self
    }

    pub fn get(&self, focus: Focus) -> Option<&CategoryTally> {
        self.tallies.get(&focus)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Focus, &CategoryTally)> {
        self.tallies.iter().map(|(focus, tally)| (*focus, tally))
    }

    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tallies.len()
    }
}

impl From<BTreeMap<String, CategoryTally>> for FocusTallies {
    fn from(raw: BTreeMap<String, CategoryTally>) -> Self {
        Self {
            tallies: raw
                .into_iter()
                .filter_map(|(name, tally)| Focus::from_str(&name).ok().map(|f| (f, tally)))
                .collect(),
        }
    }
}

impl From<FocusTallies> for BTreeMap<String, CategoryTally> {
    fn from(tallies: FocusTallies) -> Self {
        tallies
            .tallies
            .into_iter()
            .map(|(focus, tally)| (focus.to_string(), tally))
            .collect()
    }
}
