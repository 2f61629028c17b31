use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

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
    IntoStaticStr,
)]
pub enum Ideology {
    #[strum(serialize = "Fully Automated Luxury Gay Space Communist")]
    Falgsc,
    #[strum(serialize = "Libertarian Socialist")]
    LibertarianSocialist,
    #[strum(serialize = "Social Liberal")]
    SocialLiberal,
    #[strum(serialize = "Crypto-Anarchist")]
    CryptoAnarchist,
    #[strum(serialize = "Classical Liberal")]
    ClassicalLiberal,
    #[strum(serialize = "Moderate Libertarian")]
    ModerateLibertarian,
    #[strum(serialize = "Eco-Socialist")]
    EcoSocialist,
    #[strum(serialize = "Social Democrat")]
    SocialDemocrat,
    #[strum(serialize = "Neo-Reactionary")]
    NeoReactionary,
    #[strum(serialize = "Alt-Right")]
    AltRight,
    #[strum(serialize = "Conservative")]
    Conservative,
    #[strum(serialize = "Centrist")]
    Centrist,
    #[strum(serialize = "Accelerationist Tendencies")]
    AccelerationistTendencies,
    #[strum(serialize = "Post-Liberal")]
    PostLiberal,
    #[strum(serialize = "Anarchist Sympathies")]
    AnarchistSympathies,
}

impl Ideology {
    pub fn label(&self) -> &'static str {
        self.into()
    }

    pub fn is_primary(&self) -> bool {
        !matches!(
            self,
            Self::Centrist
                | Self::AccelerationistTendencies
                | Self::PostLiberal
                | Self::AnarchistSympathies
        )
    }

    pub fn primaries() -> impl Iterator<Item = Ideology> {
        Self::iter().filter(|ideology| ideology.is_primary())
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Self::Falgsc => "Envisions a post-scarcity future with advanced technology, universal LGBTQ+ rights, and communist expansion to space.",
            Self::LibertarianSocialist => "Advocates for maximal individual freedom alongside collective ownership of production, opposing state and corporate control.",
            Self::SocialLiberal => "Supports a mixed economy with strong social safety nets and robust individual freedoms and rights.",
            Self::CryptoAnarchist => "Advocates for using technology like cryptography and digital currencies to create a stateless, voluntary society.",
            Self::ClassicalLiberal => "Emphasizes free markets, individual liberty, and limited government intervention in economic and personal life.",
            Self::ModerateLibertarian => "Favors free markets and personal liberty while accepting a pragmatic, limited role for government in certain areas.",
            Self::EcoSocialist => "Believes strong state action is vital to address climate change and inequality, potentially restructuring the economy on socialist lines.",
            Self::SocialDemocrat => "Supports a strong welfare state, government regulation, and democratic institutions to achieve social and economic equality.",
            Self::NeoReactionary => "Rejects democracy for more hierarchical governance models, sometimes envisioning corporate city-states or monarchies.",
            Self::AltRight => "Focuses on cultural preservation and identity, often with nationalist and traditionalist social views.",
            Self::Conservative => "Supports free-market principles combined with traditional social values and strong, established institutions.",
            Self::Centrist => "Holds a moderate political position, balancing elements from different ideologies to find pragmatic solutions.",
            Self::AccelerationistTendencies => "Believes in accelerating societal change, often through technology or radical politics, towards a transformed future.",
            Self::PostLiberal => "Critiques aspects of classical liberalism, often emphasizing community, tradition, or new forms of social order.",
            Self::AnarchistSympathies => "Expresses affinity with anarchist ideals such as decentralization, voluntary association, and skepticism of authority.",
        }
    }
}

impl Serialize for Ideology {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Ideology {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ideology::from_str(&label)
            .map_err(|_| serde::de::Error::custom(format!("unknown ideology: {label}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NotableFigure {
    pub name: &'static str,
    pub role: &'static str,
}

const fn figure(name: &'static str, role: &'static str) -> NotableFigure {
    NotableFigure { name, role }
}

#[derive(Debug, PartialEq, Eq)]
pub struct IdeologyDetails {
    pub ideology: Ideology,
    pub description: &'static str,
    pub characteristics: &'static [&'static str],
    pub notable_figures: &'static [NotableFigure],
    pub modern_context: &'static str,
    pub color: &'static str,
}

pub static FALGSC: IdeologyDetails = IdeologyDetails {
    ideology: Ideology::Falgsc,
    description: "You envision a post-scarcity future where advanced technology eliminates work, LGBTQ+ rights are universal, and humanity expands to the stars under a communist system.",
    characteristics: &[
        "Believes in complete automation of labor through AI and robotics",
        "Supports universal LGBTQ+ rights and gender liberation",
        "Advocates for space exploration and colonization",
        "Envisions a post-scarcity communist society",
        "Embraces radical technological acceleration",
    ],
    notable_figures: &[
        figure("Fully Automated Luxury Communism", "Theoretical Framework"),
        figure("Mark Fisher", "Cultural Theorist"),
        figure("Donna Haraway", "Cyborg Feminist"),
    ],
    modern_context: "This ideology combines accelerationist technology with queer liberation and communist economics, popular in online leftist spaces.",
    color: "#FF69B4",
};

pub static LIBERTARIAN_SOCIALIST: IdeologyDetails = IdeologyDetails {
    ideology: Ideology::LibertarianSocialist,
    description: "You believe in maximum individual freedom combined with collective ownership of the means of production. You oppose both state control and corporate capitalism.",
    characteristics: &[
        "Strong support for civil liberties and personal freedom",
        "Advocates for worker ownership and democratic workplaces",
        "Opposes both government and corporate authoritarianism",
        "Supports decentralized, community-based decision making",
    ],
    notable_figures: &[
        figure("Noam Chomsky", "Linguist & Political Activist"),
        figure("Murray Bookchin", "Social Ecologist"),
        figure("Peter Kropotkin", "Anarchist Theorist"),
    ],
    modern_context: "Popular among young progressives who distrust both big government and big corporations.",
    color: "#10B981",
};

pub static SOCIAL_LIBERAL: IdeologyDetails = IdeologyDetails {
    ideology: Ideology::SocialLiberal,
    description: "You support a mixed economy with strong social programs while maintaining individual freedoms.",
    characteristics: &[
        "Supports progressive taxation and social safety nets",
        "Strong advocate for civil rights and liberties",
        "Believes in regulated capitalism with worker protections",
        "Supports environmental protection and social justice",
    ],
    notable_figures: &[
        figure("Alexandria Ocasio-Cortez", "US Representative"),
        figure("Bernie Sanders", "US Senator"),
        figure("John Rawls", "Political Philosopher"),
    ],
    modern_context: "Mainstream progressive position in modern democratic societies.",
    color: "#3B82F6",
};

pub static CRYPTO_ANARCHIST: IdeologyDetails = IdeologyDetails {
    ideology: Ideology::CryptoAnarchist,
    description: "You believe in using technology, especially blockchain and cryptography, to create a stateless society based on voluntary exchange and digital currencies.",
    characteristics: &[
        "Advocates for cryptocurrency replacing government money",
        "Supports complete digital privacy and anonymity",
        "Believes technology can eliminate the need for government",
        "Embraces radical decentralization of all institutions",
        "Supports unrestricted free markets in cyberspace",
    ],
    notable_figures: &[
        figure("Satoshi Nakamoto", "Bitcoin Creator"),
        figure("Timothy C. May", "Crypto-Anarchist Manifesto"),
        figure("Ross Ulbricht", "Silk Road Founder"),
    ],
    modern_context: "Emerging ideology combining libertarian economics with cutting-edge technology and digital rights.",
    color: "#F59E0B",
};

pub static CLASSICAL_LIBERAL: IdeologyDetails = IdeologyDetails {
    ideology: Ideology::ClassicalLiberal,
    description: "You support free markets and individual liberty with limited government intervention.",
    characteristics: &[
        "Supports free market capitalism with minimal regulation",
        "Strong advocate for individual rights and freedoms",
        "Believes in limited government and fiscal responsibility",
        "Supports meritocracy and equal opportunity",
    ],
    notable_figures: &[
        figure("Milton Friedman", "Economist"),
        figure("Friedrich Hayek", "Economist & Philosopher"),
        figure("Ron Paul", "Former US Representative"),
    ],
    modern_context: "Traditional American conservative/libertarian position, popular in tech and business circles.",
    color: "#EAB308",
};

pub static MODERATE_LIBERTARIAN: IdeologyDetails = IdeologyDetails {
    ideology: Ideology::ModerateLibertarian,
    description: "You generally favor free markets and personal liberty while accepting some government role in society.",
    characteristics: &[
        "Supports most free market policies",
        "Values personal freedom and civil liberties",
        "Accepts limited government intervention when necessary",
        "Pragmatic approach to policy solutions",
    ],
    notable_figures: &[
        figure("Gary Johnson", "Former Presidential Candidate"),
        figure("Justin Amash", "Former US Representative"),
        figure("Reason Magazine", "Libertarian Publication"),
    ],
    modern_context: "Mainstream libertarian position in American politics.",
    color: "#FBBF24",
};

pub static ECO_SOCIALIST: IdeologyDetails = IdeologyDetails {
    ideology: Ideology::EcoSocialist,
    description: "You believe strong government action is necessary to address climate change and economic inequality, even if it requires restricting some individual freedoms.",
    characteristics: &[
        "Supports extensive government control to combat climate change",
        "Believes capitalism is incompatible with environmental protection",
        "Advocates for planned economy to reduce consumption",
        "Supports restrictions on individual behavior for collective good",
        "May support authoritarian measures for environmental protection",
    ],
    notable_figures: &[
        figure("Greta Thunberg", "Climate Activist"),
        figure("Extinction Rebellion", "Environmental Movement"),
        figure("Joel Kovel", "Eco-Socialist Theorist"),
    ],
    modern_context: "Growing movement combining environmental urgency with socialist economics and potentially authoritarian methods.",
    color: "#059669",
};

pub static SOCIAL_DEMOCRAT: IdeologyDetails = IdeologyDetails {
    ideology: Ideology::SocialDemocrat,
    description: "You support a strong welfare state and government regulation while maintaining democratic institutions.",
    characteristics: &[
        "Supports comprehensive welfare state",
        "Believes in progressive taxation and wealth redistribution",
        "Advocates for strong labor unions and worker rights",
        "Supports government regulation of business",
    ],
    notable_figures: &[
        figure("Nordic Model", "Scandinavian Countries"),
        figure("Elizabeth Warren", "US Senator"),
        figure("Jeremy Corbyn", "Former UK Labour Leader"),
    ],
    modern_context: "Popular European-style social democracy, gaining traction in American progressive politics.",
    color: "#DC2626",
};

pub static NEO_REACTIONARY: IdeologyDetails = IdeologyDetails {
    ideology: Ideology::NeoReactionary,
    description: "You believe democracy has failed and should be replaced with more efficient, hierarchical forms of governance, possibly including corporate city-states or monarchies.",
    characteristics: &[
        "Rejects democratic governance as inefficient",
        "Supports hierarchical social structures",
        "Believes in natural inequality between groups",
        "Advocates for corporate or monarchical governance",
        "Embraces technological acceleration under strong leadership",
    ],
    notable_figures: &[
        figure("Curtis Yarvin", "Neo-Reactionary Theorist"),
        figure("Nick Land", "Accelerationist Philosopher"),
        figure("Peter Thiel", "Tech Entrepreneur"),
    ],
    modern_context: "Emerging ideology in tech circles, influenced by Silicon Valley's frustration with democratic processes.",
    color: "#7C3AED",
};

pub static ALT_RIGHT: IdeologyDetails = IdeologyDetails {
    ideology: Ideology::AltRight,
    description: "You combine nationalist and traditionalist social views with skepticism of free-market economics, focusing on cultural preservation and identity.",
    characteristics: &[
        "Strong emphasis on cultural and ethnic nationalism",
        "Skeptical of globalization and multiculturalism",
        "Supports traditional gender roles and family structures",
        "May support economic protectionism",
        "Focuses on preserving Western/European culture",
    ],
    notable_figures: &[
        figure("Richard Spencer", "White Nationalist"),
        figure("Steve Bannon", "Political Strategist"),
        figure("Tucker Carlson", "Media Personality"),
    ],
    modern_context: "Movement that gained prominence during the 2016 election, combining nationalism with internet culture.",
    color: "#6B21A8",
};

pub static CONSERVATIVE: IdeologyDetails = IdeologyDetails {
    ideology: Ideology::Conservative,
    description: "You support free market principles combined with traditional social values and strong institutions.",
    characteristics: &[
        "Supports free market capitalism with some regulation",
        "Advocates for traditional family and social values",
        "Believes in strong law and order",
        "Supports gradual rather than radical change",
    ],
    notable_figures: &[
        figure("Ronald Reagan", "40th US President"),
        figure("Margaret Thatcher", "Former UK Prime Minister"),
        figure("Ben Shapiro", "Political Commentator"),
    ],
    modern_context: "Traditional conservative position, dominant in Republican politics.",
    color: "#8B5CF6",
};

pub fn details_for(ideology: Ideology) -> Option<&'static IdeologyDetails> {
    match ideology {
        Ideology::Falgsc => Some(&FALGSC),
        Ideology::LibertarianSocialist => Some(&LIBERTARIAN_SOCIALIST),
        Ideology::SocialLiberal => Some(&SOCIAL_LIBERAL),
        Ideology::CryptoAnarchist => Some(&CRYPTO_ANARCHIST),
        Ideology::ClassicalLiberal => Some(&CLASSICAL_LIBERAL),
        Ideology::ModerateLibertarian => Some(&MODERATE_LIBERTARIAN),
        Ideology::EcoSocialist => Some(&ECO_SOCIALIST),
        Ideology::SocialDemocrat => Some(&SOCIAL_DEMOCRAT),
        Ideology::NeoReactionary => Some(&NEO_REACTIONARY),
        Ideology::AltRight => Some(&ALT_RIGHT),
        Ideology::Conservative => Some(&CONSERVATIVE),
        Ideology::Centrist
        | Ideology::AccelerationistTendencies
        | Ideology::PostLiberal
        | Ideology::AnarchistSympathies => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_eleven_primaries() {
        assert_eq!(Ideology::primaries().count(), 11);
        assert_eq!(Ideology::iter().count(), 15);
    }

    #[test]
    fn test_every_primary_has_its_own_details() {
        for ideology in Ideology::primaries() {
            let details = details_for(ideology).unwrap();
            assert_eq!(details.ideology, ideology);
            assert!(!details.characteristics.is_empty());
            assert!(!details.notable_figures.is_empty());
            assert!(details.color.starts_with('#'));
        }
        let colors: HashSet<&str> = Ideology::primaries()
            .filter_map(details_for)
            .map(|d| d.color)
            .collect();
        assert_eq!(colors.len(), 11);
    }

    #[test]
    fn test_tag_only_labels_have_no_details() {
        assert!(details_for(Ideology::Centrist).is_none());
        assert!(details_for(Ideology::PostLiberal).is_none());
        assert!(!Ideology::AnarchistSympathies.is_primary());
    }

    #[test]
    fn test_labels_parse_back() {
        assert_eq!(
            Ideology::from_str("Fully Automated Luxury Gay Space Communist"),
            Ok(Ideology::Falgsc)
        );
        assert_eq!(Ideology::AltRight.label(), "Alt-Right");
        assert!(Ideology::from_str("Monarchist").is_err());
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&Ideology::AccelerationistTendencies).unwrap();
        assert_eq!(json, "\"Accelerationist Tendencies\"");
        let parsed: Ideology = serde_json::from_str("\"Social Democrat\"").unwrap();
        assert_eq!(parsed, Ideology::SocialDemocrat);
    }

    #[test]
    fn test_every_label_has_summary() {
        for ideology in Ideology::iter() {
            assert!(ideology.summary().ends_with('.'), "{ideology}");
        }
    }
}
