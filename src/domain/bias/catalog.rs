//! Pattern Catalog - versioned phrase data for every signal.
//!
//! Phrase matching is case-insensitive substring containment, not tokenized.
//! Entries are chosen to avoid partial-word collisions but the limitation is
//! real: "balanced" also matches inside "unbalanced".
//!
//! The built-in catalog is compiled in. A replacement with the same shape can
//! be loaded from YAML; every phrase is lower-cased and de-duplicated on load.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use super::lean::BiasLabel;

/// Version tag of the compiled-in catalog.
pub const BUILTIN_CATALOG_VERSION: &str = "2024.2";

/// Topical category within a lean's phrase set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicCategory {
    Economic,
    Social,
    Environmental,
    Healthcare,
    ForeignPolicy,
}

impl TopicCategory {
    /// Returns the snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TopicCategory::Economic => "economic",
            TopicCategory::Social => "social",
            TopicCategory::Environmental => "environmental",
            TopicCategory::Healthcare => "healthcare",
            TopicCategory::ForeignPolicy => "foreign_policy",
        }
    }
}

/// Category of loaded (emotionally charged) language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadedCategory {
    Emotional,
    Judgmental,
    Partisan,
}

/// Double-weight ("research-backed") phrases per lean.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoostedPhrases {
    pub left: BTreeSet<String>,
    pub right: BTreeSet<String>,
    pub center: BTreeSet<String>,
}

/// Compound phrases that attack one side and therefore force a direction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverridePhrases {
    /// Attacks on the left; evidence of Right-authored text.
    pub right_authored: Vec<String>,
    /// Attacks on the right; evidence of Left-authored text.
    pub left_authored: Vec<String>,
}

/// Literal word sets used to pick a direction once loaded language is found.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectionCues {
    /// Strong branch: criticism of institutions and authority reads Right.
    pub authority_critique: Vec<String>,
    /// Strong branch: targets that read Left.
    pub left_evidence: Vec<String>,
    /// Moderate branch cues for Right.
    pub moderate_right: Vec<String>,
    /// Moderate branch cues for Left.
    pub moderate_left: Vec<String>,
}

/// Errors raised while loading a catalog from disk or YAML.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid catalog: {0}")]
    Invalid(String),
}

/// All phrase data consulted by the scoring engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseCatalog {
    pub version: String,
    #[serde(default)]
    pub left: BTreeMap<TopicCategory, Vec<String>>,
    #[serde(default)]
    pub right: BTreeMap<TopicCategory, Vec<String>>,
    #[serde(default)]
    pub center: Vec<String>,
    #[serde(default)]
    pub boosted: BoostedPhrases,
    #[serde(default)]
    pub loaded: BTreeMap<LoadedCategory, Vec<String>>,
    #[serde(default)]
    pub overrides: OverridePhrases,
    #[serde(default)]
    pub cues: DirectionCues,
    /// Terms surfaced as evidence snippets by the flagger.
    #[serde(default)]
    pub flag_terms: Vec<String>,
}

static BUILTIN: Lazy<Arc<PhraseCatalog>> = Lazy::new(|| Arc::new(PhraseCatalog::builtin()));

impl PhraseCatalog {
    /// Builds the compiled-in catalog.
    pub fn builtin() -> Self {
        let left = BTreeMap::from([
            (TopicCategory::Economic, owned(LEFT_ECONOMIC)),
            (TopicCategory::Social, owned(LEFT_SOCIAL)),
            (TopicCategory::Environmental, owned(LEFT_ENVIRONMENTAL)),
            (TopicCategory::Healthcare, owned(LEFT_HEALTHCARE)),
        ]);
        let right = BTreeMap::from([
            (TopicCategory::Economic, owned(RIGHT_ECONOMIC)),
            (TopicCategory::Social, owned(RIGHT_SOCIAL)),
            (TopicCategory::Environmental, owned(RIGHT_ENVIRONMENTAL)),
            (TopicCategory::ForeignPolicy, owned(RIGHT_FOREIGN_POLICY)),
        ]);
        let loaded = BTreeMap::from([
            (LoadedCategory::Emotional, owned(LOADED_EMOTIONAL)),
            (LoadedCategory::Judgmental, owned(LOADED_JUDGMENTAL)),
            (LoadedCategory::Partisan, owned(LOADED_PARTISAN)),
        ]);

        Self {
            version: BUILTIN_CATALOG_VERSION.to_string(),
            left,
            right,
            center: owned(CENTER),
            boosted: BoostedPhrases {
                left: BOOSTED_LEFT.iter().map(|p| p.to_string()).collect(),
                right: BOOSTED_RIGHT.iter().map(|p| p.to_string()).collect(),
                center: BOOSTED_CENTER.iter().map(|p| p.to_string()).collect(),
            },
            loaded,
            overrides: OverridePhrases {
                right_authored: owned(OVERRIDE_RIGHT_AUTHORED),
                left_authored: owned(OVERRIDE_LEFT_AUTHORED),
            },
            cues: DirectionCues {
                authority_critique: owned(CUE_AUTHORITY_CRITIQUE),
                left_evidence: owned(CUE_LEFT_EVIDENCE),
                moderate_right: owned(CUE_MODERATE_RIGHT),
                moderate_left: owned(CUE_MODERATE_LEFT),
            },
            flag_terms: owned(FLAG_TERMS),
        }
    }

    /// Process-wide shared handle to the built-in catalog.
    pub fn shared_builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    /// A catalog with no phrases at all. Every signal reads it as zero evidence.
    pub fn empty(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            left: BTreeMap::new(),
            right: BTreeMap::new(),
            center: Vec::new(),
            boosted: BoostedPhrases::default(),
            loaded: BTreeMap::new(),
            overrides: OverridePhrases::default(),
            cues: DirectionCues::default(),
            flag_terms: Vec::new(),
        }
    }

    /// Parses a catalog from YAML and normalizes it.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let catalog: PhraseCatalog = serde_yaml::from_str(yaml)?;
        catalog.normalized()
    }

    /// Reads and parses a YAML catalog file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Phrases for one lean and category. Center has no categories.
    pub fn phrases(&self, lean: BiasLabel, category: TopicCategory) -> &[String] {
        let map = match lean {
            BiasLabel::Left => &self.left,
            BiasLabel::Right => &self.right,
            BiasLabel::Center => return &[],
        };
        map.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Category map for a lean (empty for Center).
    pub fn categories(&self, lean: BiasLabel) -> Option<&BTreeMap<TopicCategory, Vec<String>>> {
        match lean {
            BiasLabel::Left => Some(&self.left),
            BiasLabel::Right => Some(&self.right),
            BiasLabel::Center => None,
        }
    }

    /// Whether `phrase` carries double weight for `lean`.
    pub fn is_boosted(&self, lean: BiasLabel, phrase: &str) -> bool {
        let set = match lean {
            BiasLabel::Left => &self.boosted.left,
            BiasLabel::Right => &self.boosted.right,
            BiasLabel::Center => &self.boosted.center,
        };
        set.contains(phrase)
    }

    /// Phrases of one loaded-language category.
    pub fn loaded_phrases(&self, category: LoadedCategory) -> &[String] {
        self.loaded.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of phrases across every list.
    pub fn phrase_count(&self) -> usize {
        self.left.values().chain(self.right.values()).map(Vec::len).sum::<usize>()
            + self.center.len()
            + self.loaded.values().map(Vec::len).sum::<usize>()
            + self.flag_terms.len()
    }

    /// Lower-cases and de-duplicates every phrase, keeping first-seen order.
    fn normalized(mut self) -> Result<Self, CatalogError> {
        if self.version.trim().is_empty() {
            return Err(CatalogError::Invalid("version cannot be empty".to_string()));
        }

        for list in self
            .left
            .values_mut()
            .chain(self.right.values_mut())
            .chain(self.loaded.values_mut())
            .chain([
                &mut self.center,
                &mut self.overrides.right_authored,
                &mut self.overrides.left_authored,
                &mut self.cues.authority_critique,
                &mut self.cues.left_evidence,
                &mut self.cues.moderate_right,
                &mut self.cues.moderate_left,
                &mut self.flag_terms,
            ])
        {
            normalize_list(list)?;
        }

        for set in [
            &mut self.boosted.left,
            &mut self.boosted.right,
            &mut self.boosted.center,
        ] {
            *set = set.iter().map(|p| p.trim().to_lowercase()).collect();
        }

        Ok(self)
    }
}

impl Default for PhraseCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn normalize_list(list: &mut Vec<String>) -> Result<(), CatalogError> {
    let mut seen = BTreeSet::new();
    let mut normalized = Vec::with_capacity(list.len());
    for phrase in list.drain(..) {
        let phrase = phrase.trim().to_lowercase();
        if phrase.is_empty() {
            return Err(CatalogError::Invalid("blank phrase".to_string()));
        }
        if seen.insert(phrase.clone()) {
            normalized.push(phrase);
        }
    }
    *list = normalized;
    Ok(())
}

fn owned(phrases: &[&str]) -> Vec<String> {
    phrases.iter().map(|p| p.to_string()).collect()
}

// ----- Built-in data -----

const LEFT_ECONOMIC: &[&str] = &[
    "wealth redistribution",
    "living wage",
    "income inequality",
    "progressive tax",
    "fair share",
    "corporate greed",
    "workers' rights",
    "minimum wage",
    "labor union",
    "economic justice",
    "working families",
    "wealth gap",
    "tax the rich",
];

const LEFT_SOCIAL: &[&str] = &[
    "systemic racism",
    "social justice",
    "racial justice",
    "police reform",
    "police brutality",
    "lgbtq",
    "reproductive rights",
    "black lives matter",
    "marginalized communities",
    "path to citizenship",
    "gender equality",
    "criminal justice reform",
    "undocumented immigrants",
    "systemic oppression",
];

const LEFT_ENVIRONMENTAL: &[&str] = &[
    "climate change",
    "climate crisis",
    "green new deal",
    "renewable energy",
    "fossil fuel",
    "environmental justice",
    "carbon emissions",
    "clean energy",
    "climate action",
    "environmental destruction",
];

const LEFT_HEALTHCARE: &[&str] = &[
    "universal healthcare",
    "medicare for all",
    "single-payer",
    "healthcare is a human right",
    "affordable care act",
    "public option",
    "national health service",
    "health equity",
];

const RIGHT_ECONOMIC: &[&str] = &[
    "free market",
    "tax cuts",
    "small government",
    "deregulation",
    "fiscal responsibility",
    "private sector",
    "lower taxes",
    "job creators",
    "government regulation",
    "economic freedom",
    "cut taxes",
    "government debt",
];

const RIGHT_SOCIAL: &[&str] = &[
    "traditional family values",
    "religious freedom",
    "second amendment",
    "right to bear arms",
    "pro-life",
    "law and order",
    "sanctity of life",
    "gun rights",
    "people of faith",
    "parental rights",
];

const RIGHT_ENVIRONMENTAL: &[&str] = &[
    "energy independence",
    "climate hoax",
    "job-killing regulations",
    "clean coal",
    "american energy",
    "climate alarmism",
];

const RIGHT_FOREIGN_POLICY: &[&str] = &[
    "border security",
    "illegal immigration",
    "secure its borders",
    "secure the border",
    "national defense",
    "peace through strength",
    "strong military",
    "america first",
    "border enforcement",
    "national security",
];

const CENTER: &[&str] = &[
    "bipartisan",
    "compromise",
    "both sides",
    "balanced",
    "evidence-based",
    "the data",
    "analysis",
    "experts",
    "study",
    "nonpartisan",
    "moderate",
    "mixed results",
    "further research",
    "peer-reviewed",
    "according to",
    "multiple perspectives",
    "objectively",
    "researchers",
];

const BOOSTED_LEFT: &[&str] = &[
    "systemic racism",
    "climate crisis",
    "income inequality",
    "universal healthcare",
    "living wage",
];

const BOOSTED_RIGHT: &[&str] = &[
    "free market",
    "tax cuts",
    "small government",
    "illegal immigration",
    "second amendment",
];

const BOOSTED_CENTER: &[&str] = &["bipartisan", "evidence-based", "nonpartisan", "peer-reviewed"];

const LOADED_EMOTIONAL: &[&str] = &[
    "shocking",
    "outrageous",
    "devastating",
    "disaster",
    "catastrophe",
    "horrific",
    "terrifying",
    "explosive",
    "heartbreaking",
    "unprecedented",
    "chaos",
    "destroy",
];

const LOADED_JUDGMENTAL: &[&str] = &[
    "corrupt",
    "dishonest",
    "greedy",
    "selfish",
    "evil",
    "disgraceful",
    "shameful",
    "incompetent",
    "betray",
    "courageous",
    "heroic",
    "cowardly",
];

const LOADED_PARTISAN: &[&str] = &[
    "radical left",
    "far left",
    "far right",
    "socialist agenda",
    "fake news",
    "deep state",
    "mainstream media",
    "leftist",
    "right-wing extremists",
    "alt-right",
    "liberal elites",
    "greedy corporations",
];

const OVERRIDE_RIGHT_AUTHORED: &[&str] = &[
    "radical left",
    "far left",
    "socialist agenda",
    "leftist mob",
    "liberal elites",
];

const OVERRIDE_LEFT_AUTHORED: &[&str] = &[
    "far right",
    "right-wing extremists",
    "alt-right",
    "greedy corporations",
    "selfish billionaires",
];

const CUE_AUTHORITY_CRITIQUE: &[&str] = &[
    "establishment",
    "corrupt",
    "elites",
    "bureaucrats",
    "government overreach",
    "politicians",
];

const CUE_LEFT_EVIDENCE: &[&str] = &[
    "corporations",
    "billionaires",
    "oppression",
    "injustice",
    "exploit",
];

const CUE_MODERATE_RIGHT: &[&str] = &["socialist", "liberal", "leftist", "big government"];

const CUE_MODERATE_LEFT: &[&str] = &["corporate", "billionaire", "racist", "bigot"];

const FLAG_TERMS: &[&str] = &[
    // emotional / intense
    "shocking",
    "unprecedented",
    "disaster",
    "outrage",
    "crisis",
    "scandal",
    "catastrophe",
    "explosive",
    "devastating",
    "terrible",
    "horrible",
    "awful",
    "amazing",
    "incredible",
    "fantastic",
    "brilliant",
    "outstanding",
    // political / controversial
    "radical",
    "extreme",
    "dangerous",
    "threatening",
    "revolutionary",
    "corrupt",
    "dishonest",
    "heroic",
    "brave",
    "cowardly",
    "treasonous",
    "unpatriotic",
    "socialist",
    "fascist",
    "communist",
    "dictator",
    // exaggerated claims
    "everyone knows",
    "clearly",
    "obviously",
    "undoubtedly",
    "certainly",
    "absolutely",
    "completely",
    "totally",
    "entirely",
    "wholly",
    // urgency
    "urgent",
    "immediate",
    "critical",
    "vital",
    "essential",
    "crucial",
    "time is running out",
    "last chance",
    "final warning",
    "doomsday",
    // partisan
    "fake news",
    "mainstream media",
    "deep state",
    "establishment",
    "elite",
    "ordinary people",
    "real americans",
    "coastal elites",
];
