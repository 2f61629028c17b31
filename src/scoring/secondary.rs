use super::axes::AxisScores;
use super::catalog::Ideology;
use super::primary::Condition;
use super::tally::{CategoryTally, Focus, FocusTallies};
use indexmap::IndexSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evidence {
    Standard,
    Strict,
}

impl Evidence {
    pub fn is_met(&self, tally: &CategoryTally) -> bool {
        let (strong, agree) = (tally.strongly_agree, tally.agree);
        match self {
            Evidence::Standard => (strong >= 1 && agree >= 1) || strong >= 2,
            Evidence::Strict => strong >= 2 || (strong >= 1 && agree >= 2),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FocusRule {
    pub focus: Focus,
    pub evidence: Evidence,
    pub ideology: Ideology,
}

pub const FOCUS_RULES: &[FocusRule] = &[
    FocusRule {
        focus: Focus::Accelerationist,
        evidence: Evidence::Standard,
        ideology: Ideology::AccelerationistTendencies,
    },
    FocusRule {
        focus: Focus::PostLiberal,
        evidence: Evidence::Standard,
        ideology: Ideology::PostLiberal,
    },
    FocusRule {
        focus: Focus::Anarchist,
        evidence: Evidence::Standard,
        ideology: Ideology::AnarchistSympathies,
    },
    FocusRule {
        focus: Focus::AltRight,
        evidence: Evidence::Strict,
        ideology: Ideology::AltRight,
    },
    FocusRule {
        focus: Focus::Falgsc,
        evidence: Evidence::Standard,
        ideology: Ideology::Falgsc,
    },
    FocusRule {
        focus: Focus::CryptoAnarchist,
        evidence: Evidence::Standard,
        ideology: Ideology::CryptoAnarchist,
    },
    FocusRule {
        focus: Focus::NeoReactionary,
        evidence: Evidence::Standard,
        ideology: Ideology::NeoReactionary,
    },
    FocusRule {
        focus: Focus::EcoSocialist,
        evidence: Evidence::Standard,
        ideology: Ideology::EcoSocialist,
    },
];

pub fn tally_nominations(tallies: &FocusTallies) -> impl Iterator<Item = Ideology> + '_ {
    FOCUS_RULES.iter().filter_map(move |rule| {
        tallies
            .get(rule.focus)
            .filter(|tally| rule.evidence.is_met(tally))
            .map(|_| rule.ideology)
    })
}

pub fn magnitude_nominations(scores: &AxisScores) -> Vec<Ideology> {
    let (economic, social) = (scores.economic, scores.social);
    let ei = scores.economic_intensity();
    let si = scores.social_intensity();

    let mut nominated = Vec::new();
    if ei < 3.0 && si < 3.0 {
        nominated.push(Ideology::Centrist);
    }
    if ei > 4.5 || si > 4.5 {
        nominated.push(Ideology::AccelerationistTendencies);
    }
    if social < -4.5 && si > 4.5 {
        nominated.push(Ideology::PostLiberal);
    }
    if economic < -4.5 && social < -2.5 && (ei > 4.5 || si > 2.5) {
        nominated.push(Ideology::AnarchistSympathies);
    }
    nominated
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EconomicSide {
    Left,
    Right,
}

/// Sides are strict: a zero economic score is neither left nor right.
#[derive(Debug, Clone, Copy)]
pub struct AlternateTemplate {
    pub ideology: Ideology,
    pub side: EconomicSide,
    pub libertarian: bool,
    pub primary: Condition,
    pub secondary: Condition,
}

impl AlternateTemplate {
    fn in_region(&self, scores: &AxisScores) -> bool {
        let side = match self.side {
            EconomicSide::Left => scores.economic < 0.0,
            EconomicSide::Right => scores.economic > 0.0,
        };
        side && scores.is_libertarian() == self.libertarian
    }

    pub fn meets_primary(&self, scores: &AxisScores) -> bool {
        self.in_region(scores) && self.primary.holds(scores)
    }

    pub fn meets_secondary(&self, scores: &AxisScores) -> bool {
        self.in_region(scores) && self.secondary.holds(scores)
    }
}

pub const ALTERNATE_TEMPLATES: &[AlternateTemplate] = &[
    AlternateTemplate {
        ideology: Ideology::Falgsc,
        side: EconomicSide::Left,
        libertarian: true,
        primary: Condition::Both(7.0),
        secondary: Condition::Both(5.0),
    },
    AlternateTemplate {
        ideology: Ideology::CryptoAnarchist,
        side: EconomicSide::Right,
        libertarian: true,
        primary: Condition::Both(7.0),
        secondary: Condition::Both(5.0),
    },
    AlternateTemplate {
        ideology: Ideology::NeoReactionary,
        side: EconomicSide::Right,
        libertarian: false,
        primary: Condition::Both(7.0),
        secondary: Condition::Both(5.0),
    },
    AlternateTemplate {
        ideology: Ideology::EcoSocialist,
        side: EconomicSide::Left,
        libertarian: false,
        primary: Condition::Both(6.0),
        secondary: Condition::Both(4.0),
    },
    AlternateTemplate {
        ideology: Ideology::AltRight,
        side: EconomicSide::Right,
        libertarian: false,
        primary: Condition::SocialOver {
            social: 5.0,
            economic_below: 3.0,
        },
        secondary: Condition::SocialOver {
            social: 3.0,
            economic_below: 5.0,
        },
    },
];

pub fn alternate_nominations(scores: &AxisScores) -> impl Iterator<Item = Ideology> + '_ {
    ALTERNATE_TEMPLATES
        .iter()
        .filter(move |template| template.meets_secondary(scores))
        .map(|template| template.ideology)
}

pub fn tag_secondary(
    scores: &AxisScores,
    tallies: &FocusTallies,
    primary: Ideology,
) -> IndexSet<Ideology> {
    tally_nominations(tallies)
        .chain(magnitude_nominations(scores))
        .chain(alternate_nominations(scores))
        .filter(|ideology| *ideology != primary)
        .collect()
}
