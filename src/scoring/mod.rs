pub mod aggregate;
pub mod axes;
pub mod catalog;
mod likert;
pub mod primary;
pub mod profile;
pub mod secondary;
pub mod tally;

pub use aggregate::{aggregate, tally_answers, Aggregation, AnswerSheet};
pub use axes::{normalize, AxisReading, AxisScores, Intensity, Quadrant, AXIS_BOUND};
pub use catalog::{details_for, Ideology, IdeologyDetails, NotableFigure};
pub use likert::LikertLevel;
pub use primary::classify_primary;
pub use profile::{analyze, analyze_scores, Classification, IdeologyProfile};
pub use secondary::tag_secondary;
pub use tally::{CategoryTally, Focus, FocusTallies};
