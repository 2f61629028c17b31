use serde::{Deserialize, Serialize};
use strum::Display;

pub const SCALE_MULTIPLIER: f64 = 5.0;
pub const AXIS_BOUND: f64 = 10.0;

pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(-AXIS_BOUND, AXIS_BOUND)
    }
}

pub fn normalize(raw_total: f64, total_weight: f64) -> f64 {
    if total_weight == 0.0 {
        return 0.0;
    }
    clamp_score(raw_total / total_weight * SCALE_MULTIPLIER)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawAxisScores")]
pub struct AxisScores {
    pub economic: f64,
    pub social: f64,
}

#[derive(Deserialize)]
struct RawAxisScores {
    economic: f64,
    social: f64,
}

impl From<RawAxisScores> for AxisScores {
    fn from(raw: RawAxisScores) -> Self {
        Self::new(raw.economic, raw.social)
    }
}

impl AxisScores {
    pub fn new(economic: f64, social: f64) -> Self {
        Self {
            economic: clamp_score(economic),
            social: clamp_score(social),
        }
    }

    pub fn is_left(&self) -> bool {
        self.economic < 0.0
    }

    pub fn is_libertarian(&self) -> bool {
        self.social < 0.0
    }

    pub fn economic_intensity(&self) -> f64 {
        self.economic.abs()
    }

    pub fn social_intensity(&self) -> f64 {
        self.social.abs()
    }

    pub fn quadrant(&self) -> Quadrant {
        Quadrant::of(self)
    }
}

/// Partition by strict sign. A zero score counts as right / authoritarian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Quadrant {
    #[strum(serialize = "libertarian left")]
    LibertarianLeft,
    #[strum(serialize = "libertarian right")]
    LibertarianRight,
    #[strum(serialize = "authoritarian left")]
    AuthoritarianLeft,
    #[strum(serialize = "authoritarian right")]
    AuthoritarianRight,
}

impl Quadrant {
    pub fn of(scores: &AxisScores) -> Self {
        match (scores.is_left(), scores.is_libertarian()) {
            (true, true) => Self::LibertarianLeft,
            (false, true) => Self::LibertarianRight,
            (true, false) => Self::AuthoritarianLeft,
            (false, false) => Self::AuthoritarianRight,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Intensity {
    Moderate,
    Leaning,
    Strong,
    Extreme,
}

impl Intensity {
    pub const LEANING_THRESHOLD: f64 = 2.0;
    pub const STRONG_THRESHOLD: f64 = 5.0;
    pub const EXTREME_THRESHOLD: f64 = 7.0;

    pub fn from_score(score: f64) -> Self {
        let magnitude = score.abs();
        if magnitude < Self::LEANING_THRESHOLD {
            Intensity::Moderate
        } else if magnitude < Self::STRONG_THRESHOLD {
            Intensity::Leaning
        } else if magnitude < Self::EXTREME_THRESHOLD {
            Intensity::Strong
        } else {
            Intensity::Extreme
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisReading {
    pub score: f64,
    pub intensity: Intensity,
    pub direction: &'static str,
}

impl std::fmt::Display for AxisReading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.intensity, self.direction)
    }
}

impl AxisReading {
    pub fn economic(score: f64) -> Self {
        Self {
            score,
            intensity: Intensity::from_score(score),
            direction: if score > 0.0 { "Right-wing" } else { "Left-wing" },
        }
    }

    pub fn social(score: f64) -> Self {
        Self {
            score,
            intensity: Intensity::from_score(score),
            direction: if score > 0.0 {
                "Authoritarian"
            } else {
                "Libertarian"
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_weight_is_zero() {
        assert_eq!(normalize(12.0, 0.0), 0.0);
        assert_eq!(normalize(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_normalize_scale() {
        assert_eq!(normalize(2.0, 4.0), 2.5);
        assert_eq!(normalize(-8.0, 4.0), -10.0);
    }

    #[test]
    fn test_normalize_clamps() {
        assert_eq!(normalize(100.0, 1.0), AXIS_BOUND);
        assert_eq!(normalize(-100.0, 1.0), -AXIS_BOUND);
    }

    #[test]
    fn test_new_clamps_supplied_scores() {
        let scores = AxisScores::new(f64::INFINITY, -42.0);
        assert_eq!(scores.economic, 10.0);
        assert_eq!(scores.social, -10.0);

        let scores = AxisScores::new(f64::NAN, 3.0);
        assert_eq!(scores.economic, 0.0);
        assert_eq!(scores.social, 3.0);
    }

    #[test]
    fn test_deserialized_scores_are_clamped() {
        let scores: AxisScores =
            serde_json::from_str(r#"{"economic": 40.0, "social": -3.5}"#).unwrap();
        assert_eq!(scores, AxisScores::new(10.0, -3.5));
    }

    #[test]
    fn test_quadrant_zero_boundary() {
        assert_eq!(AxisScores::new(0.0, 0.0).quadrant(), Quadrant::AuthoritarianRight);
        assert_eq!(AxisScores::new(-0.1, 0.0).quadrant(), Quadrant::AuthoritarianLeft);
        assert_eq!(AxisScores::new(0.0, -0.1).quadrant(), Quadrant::LibertarianRight);
        assert_eq!(AxisScores::new(-0.1, -0.1).quadrant(), Quadrant::LibertarianLeft);
    }

    #[test]
    fn test_intensity_tiers() {
        assert_eq!(Intensity::from_score(1.9), Intensity::Moderate);
        assert_eq!(Intensity::from_score(-2.0), Intensity::Leaning);
        assert_eq!(Intensity::from_score(6.5), Intensity::Strong);
        assert_eq!(Intensity::from_score(-7.0), Intensity::Extreme);
    }

    #[test]
    fn test_readings() {
        assert_eq!(AxisReading::economic(-6.0).to_string(), "Strong Left-wing");
        assert_eq!(AxisReading::economic(8.0).to_string(), "Extreme Right-wing");
        assert_eq!(AxisReading::social(3.0).to_string(), "Leaning Authoritarian");
        assert_eq!(AxisReading::social(0.0).to_string(), "Moderate Libertarian");
    }
}
