use super::axes::{AxisScores, Quadrant};
use super::catalog::{
    IdeologyDetails, ALT_RIGHT, CLASSICAL_LIBERAL, CONSERVATIVE, CRYPTO_ANARCHIST, ECO_SOCIALIST,
    FALGSC, LIBERTARIAN_SOCIALIST, MODERATE_LIBERTARIAN, NEO_REACTIONARY, SOCIAL_DEMOCRAT,
    SOCIAL_LIBERAL,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Condition {
    Both(f64),
    Economic(f64),
    SocialOver { social: f64, economic_below: f64 },
}

impl Condition {
    pub fn holds(&self, scores: &AxisScores) -> bool {
        let ei = scores.economic_intensity();
        let si = scores.social_intensity();
        match *self {
            Condition::Both(threshold) => ei > threshold && si > threshold,
            Condition::Economic(threshold) => ei > threshold,
            Condition::SocialOver {
                social,
                economic_below,
            } => si > social && ei < economic_below,
        }
    }
}

#[derive(Debug)]
pub struct QuadrantRules {
    pub tiers: &'static [(Condition, &'static IdeologyDetails)],
    pub fallback: &'static IdeologyDetails,
}

impl QuadrantRules {
    pub fn resolve(&self, scores: &AxisScores) -> &'static IdeologyDetails {
        self.tiers
            .iter()
            .find(|(condition, _)| condition.holds(scores))
            .map(|(_, details)| *details)
            .unwrap_or(self.fallback)
    }
}

static LIBERTARIAN_LEFT: QuadrantRules = QuadrantRules {
    tiers: &[
        (Condition::Both(7.0), &FALGSC),
        (Condition::Economic(5.0), &LIBERTARIAN_SOCIALIST),
    ],
    fallback: &SOCIAL_LIBERAL,
};

static LIBERTARIAN_RIGHT: QuadrantRules = QuadrantRules {
    tiers: &[
        (Condition::Both(7.0), &CRYPTO_ANARCHIST),
        (Condition::Economic(5.0), &CLASSICAL_LIBERAL),
    ],
    fallback: &MODERATE_LIBERTARIAN,
};

static AUTHORITARIAN_LEFT: QuadrantRules = QuadrantRules {
    tiers: &[(Condition::Both(6.0), &ECO_SOCIALIST)],
    fallback: &SOCIAL_DEMOCRAT,
};

static AUTHORITARIAN_RIGHT: QuadrantRules = QuadrantRules {
    tiers: &[
        (Condition::Both(7.0), &NEO_REACTIONARY),
        (
            Condition::SocialOver {
                social: 5.0,
                economic_below: 3.0,
            },
            &ALT_RIGHT,
        ),
    ],
    fallback: &CONSERVATIVE,
};

pub fn rules_for(quadrant: Quadrant) -> &'static QuadrantRules {
    match quadrant {
        Quadrant::LibertarianLeft => &LIBERTARIAN_LEFT,
        Quadrant::LibertarianRight => &LIBERTARIAN_RIGHT,
        Quadrant::AuthoritarianLeft => &AUTHORITARIAN_LEFT,
        Quadrant::AuthoritarianRight => &AUTHORITARIAN_RIGHT,
    }
}

pub fn classify_primary(scores: &AxisScores) -> &'static IdeologyDetails {
    rules_for(scores.quadrant()).resolve(scores)
}
