//! Phoneme inventory and rules-document loading.
//!
//! The sound system lives in a companion rules document: a markdown file
//! whose YAML frontmatter lists the consonants, the vowels, the permitted
//! two-consonant clusters, and (optionally) the domain-compatibility table
//! used by the lexicon consistency check. The prose below the frontmatter is
//! for human readers and is ignored here.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

/// The fixed set of valid sound units, partitioned into consonants and
/// vowels, plus the permitted two-consonant clusters.
#[derive(Debug, Clone)]
pub struct PhonemeInventory {
    consonants: BTreeSet<char>,
    vowels: BTreeSet<char>,
    clusters: BTreeSet<String>,
}

/// Parsed rules document: the phoneme inventory plus the optional
/// domain-compatibility override.
#[derive(Debug)]
pub struct PhonologyRules {
    pub inventory: PhonemeInventory,
    /// Target domain mapped to the set of root domains considered
    /// semantically compatible with it. `None` means use the built-in table.
    pub compatible_domains: Option<BTreeMap<String, BTreeSet<String>>>,
}

#[derive(Debug, Deserialize)]
struct RulesFrontmatter {
    consonants: Vec<String>,
    vowels: Vec<String>,
    clusters: Vec<String>,
    #[serde(default)]
    compatible_domains: Option<BTreeMap<String, BTreeSet<String>>>,
}

/// Split content into frontmatter and body.
///
/// If the content starts with `---`, extracts the YAML frontmatter between
/// the first and second `---` delimiters. Otherwise returns None.
fn split_frontmatter(content: &str) -> Option<String> {
    let content = content.trim();
    if !content.starts_with("---") {
        return None;
    }
    let rest = &content[3..];
    rest.find("---").map(|end| rest[..end].to_string())
}

fn single_char(symbol: &str, role: &str) -> Result<char> {
    let mut chars = symbol.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => bail!("{} '{}' must be a single symbol", role, symbol),
    }
}

impl PhonologyRules {
    /// Load and validate the rules document. Absence of the document is a
    /// hard failure: no analysis can run without a sound system.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("rules document not found at {}", path.display());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read rules document {}", path.display()))?;
        let frontmatter = split_frontmatter(&content).with_context(|| {
            format!("rules document {} has no YAML frontmatter", path.display())
        })?;
        let parsed: RulesFrontmatter = serde_yaml::from_str(&frontmatter)
            .with_context(|| format!("Failed to parse rules frontmatter in {}", path.display()))?;

        let inventory =
            PhonemeInventory::new(&parsed.consonants, &parsed.vowels, &parsed.clusters)?;
        Ok(Self {
            inventory,
            compatible_domains: parsed.compatible_domains,
        })
    }
}

impl PhonemeInventory {
    /// Build an inventory, enforcing the structural invariants: consonants
    /// and vowels are disjoint, and every cluster is exactly two consonants
    /// drawn from the consonant set.
    pub fn new(consonants: &[String], vowels: &[String], clusters: &[String]) -> Result<Self> {
        if consonants.is_empty() || vowels.is_empty() {
            bail!("inventory must define at least one consonant and one vowel");
        }

        let mut consonant_set = BTreeSet::new();
        for symbol in consonants {
            consonant_set.insert(single_char(symbol, "consonant")?);
        }
        let mut vowel_set = BTreeSet::new();
        for symbol in vowels {
            let c = single_char(symbol, "vowel")?;
            if consonant_set.contains(&c) {
                bail!("symbol '{}' is listed as both consonant and vowel", c);
            }
            vowel_set.insert(c);
        }

        let mut cluster_set = BTreeSet::new();
        for cluster in clusters {
            let chars: Vec<char> = cluster.chars().collect();
            if chars.len() != 2 {
                bail!("cluster '{}' must be exactly two symbols", cluster);
            }
            if !chars.iter().all(|c| consonant_set.contains(c)) {
                bail!("cluster '{}' contains a non-consonant symbol", cluster);
            }
            cluster_set.insert(cluster.clone());
        }

        Ok(Self {
            consonants: consonant_set,
            vowels: vowel_set,
            clusters: cluster_set,
        })
    }

    /// Load the inventory alone, discarding any compatibility override.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(PhonologyRules::load(path)?.inventory)
    }

    /// The official inventory: 15 consonants, 5 vowels, 5 permitted clusters.
    pub fn official() -> Self {
        let consonants = "pbtdkgmnfshlrwj";
        let vowels = "aeiou";
        let clusters = ["st", "pl", "pr", "tr", "sp"];
        Self {
            consonants: consonants.chars().collect(),
            vowels: vowels.chars().collect(),
            clusters: clusters.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn is_consonant(&self, c: char) -> bool {
        self.consonants.contains(&c)
    }

    pub fn is_vowel(&self, c: char) -> bool {
        self.vowels.contains(&c)
    }

    /// Membership in the full phoneme set.
    pub fn is_phoneme(&self, c: char) -> bool {
        self.is_consonant(c) || self.is_vowel(c)
    }

    pub fn is_permitted_cluster(&self, cluster: &str) -> bool {
        self.clusters.contains(cluster)
    }

    /// All phonemes in sorted order, for diagnostics.
    pub fn phonemes_sorted(&self) -> Vec<char> {
        self.consonants.union(&self.vowels).copied().collect()
    }

    /// Permitted clusters in sorted order, for diagnostics.
    pub fn clusters_sorted(&self) -> Vec<&str> {
        self.clusters.iter().map(String::as_str).collect()
    }
}
