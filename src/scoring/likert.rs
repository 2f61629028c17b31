use strum::{Display, EnumIter};

pub const NEUTRAL_LEVEL: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
pub enum LikertLevel {
    #[strum(serialize = "strongly disagree")]
    StronglyDisagree,
    #[strum(serialize = "disagree")]
    Disagree,
    #[strum(serialize = "neutral")]
    Neutral,
    #[strum(serialize = "agree")]
    Agree,
    #[strum(serialize = "strongly agree")]
    StronglyAgree,
}

impl LikertLevel {
    pub fn from_index(level: u8) -> Option<Self> {
        match level {
            0 => Some(Self::StronglyDisagree),
            1 => Some(Self::Disagree),
            2 => Some(Self::Neutral),
            3 => Some(Self::Agree),
            4 => Some(Self::StronglyAgree),
            _ => None,
        }
    }

    pub fn index(&self) -> u8 {
        match self {
            Self::StronglyDisagree => 0,
            Self::Disagree => 1,
            Self::Neutral => 2,
            Self::Agree => 3,
            Self::StronglyAgree => 4,
        }
    }

    pub fn offset(&self) -> f64 {
        f64::from(self.index()) - f64::from(NEUTRAL_LEVEL)
    }
}

impl TryFrom<u8> for LikertLevel {
    type Error = u8;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::from_index(level).ok_or(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_index_round_trip() {
        for level in LikertLevel::iter() {
            assert_eq!(LikertLevel::from_index(level.index()), Some(level));
        }
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(LikertLevel::from_index(5), None);
        assert_eq!(LikertLevel::try_from(9), Err(9));
    }

    #[test]
    fn test_offsets() {
        assert_eq!(LikertLevel::StronglyDisagree.offset(), -2.0);
        assert_eq!(LikertLevel::Neutral.offset(), 0.0);
        assert_eq!(LikertLevel::StronglyAgree.offset(), 2.0);
    }
}
