use super::axes::AxisScores;
use super::catalog::{Ideology, IdeologyDetails, NotableFigure};
use super::primary::classify_primary;
use super::secondary::tag_secondary;
use super::tally::FocusTallies;
use indexmap::IndexSet;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeologyProfile {
    pub primary_ideology: Ideology,
    pub description: &'static str,
    pub characteristics: &'static [&'static str],
    pub notable_figures: &'static [NotableFigure],
    pub secondary_ideologies: IndexSet<Ideology>,
    pub modern_context: &'static str,
    pub color: &'static str,
}

impl IdeologyProfile {
    pub fn compose(details: &'static IdeologyDetails, secondary: IndexSet<Ideology>) -> Self {
        let mut secondary_ideologies = secondary;
        secondary_ideologies.shift_remove(&details.ideology);

        Self {
            primary_ideology: details.ideology,
            description: details.description,
            characteristics: details.characteristics,
            notable_figures: details.notable_figures,
            secondary_ideologies,
            modern_context: details.modern_context,
            color: details.color,
        }
    }
}

pub fn analyze(scores: &AxisScores, tallies: &FocusTallies) -> IdeologyProfile {
    let details = classify_primary(scores);
    let secondary = tag_secondary(scores, tallies, details.ideology);

    debug!(
        economic = scores.economic,
        social = scores.social,
        quadrant = %scores.quadrant(),
        primary = %details.ideology,
        secondary = secondary.len(),
        "classified"
    );

    IdeologyProfile::compose(details, secondary)
}

pub fn analyze_scores(scores: &AxisScores) -> IdeologyProfile {
    analyze(scores, &FocusTallies::new())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub scores: AxisScores,
    pub tallies: FocusTallies,
    pub profile: IdeologyProfile,
}

impl Classification {
    pub fn new(scores: AxisScores, tallies: FocusTallies) -> Self {
        let profile = analyze(&scores, &tallies);
        Self {
            scores,
            tallies,
            profile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::catalog::{CONSERVATIVE, FALGSC};
    use crate::scoring::tally::{CategoryTally, Focus};

    #[test]
    fn test_compose_copies_details() {
        let profile = IdeologyProfile::compose(&CONSERVATIVE, IndexSet::new());
        assert_eq!(profile.primary_ideology, Ideology::Conservative);
        assert_eq!(profile.color, "#8B5CF6");
        assert_eq!(profile.characteristics.len(), 4);
        assert_eq!(profile.notable_figures[0].name, "Ronald Reagan");
    }

    #[test]
    fn test_compose_drops_primary_from_secondary() {
        let secondary: IndexSet<Ideology> = [Ideology::Centrist, Ideology::Falgsc, Ideology::PostLiberal]
            .into_iter()
            .collect();
        let profile = IdeologyProfile::compose(&FALGSC, secondary);
        let tags: Vec<Ideology> = profile.secondary_ideologies.iter().copied().collect();
        assert_eq!(tags, vec![Ideology::Centrist, Ideology::PostLiberal]);
    }

    #[test]
    fn test_analyze_scores_matches_empty_tallies() {
        let scores = AxisScores::new(-3.5, 6.2);
        assert_eq!(analyze_scores(&scores), analyze(&scores, &FocusTallies::new()));
    }

    #[test]
    fn test_tallies_add_tags() {
        let scores = AxisScores::new(1.0, 1.0);
        let tallies = FocusTallies::new().with_tally(
            Focus::CryptoAnarchist,
            CategoryTally {
                strongly_agree: 1,
                agree: 1,
                ..Default::default()
            },
        );
        let without = analyze_scores(&scores);
        let with = analyze(&scores, &tallies);
        assert!(!without.secondary_ideologies.contains(&Ideology::CryptoAnarchist));
        assert!(with.secondary_ideologies.contains(&Ideology::CryptoAnarchist));
        assert_eq!(with.primary_ideology, without.primary_ideology);
    }

    #[test]
    fn test_profile_json_shape() {
        let profile = analyze_scores(&AxisScores::new(0.0, 0.0));
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["primaryIdeology"], "Conservative");
        assert_eq!(json["secondaryIdeologies"][0], "Centrist");
        assert_eq!(json["notableFigures"][1]["role"], "Former UK Prime Minister");
        assert!(json["modernContext"].is_string());
    }
}
