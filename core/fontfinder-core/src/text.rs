//! Script analysis of text samples (made by FontLab https://www.fontlab.com/)

use std::collections::{BTreeMap, HashMap};

use icu_properties::props::{EmojiPresentation, ExtendedPictographic, Script};
use icu_properties::{CodePointMapData, CodePointSetData, PropertyNamesLong};
use indexmap::IndexMap;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{FinderError, Result};

/// Script long names that say nothing about which font a text needs.
pub const GENERIC_SCRIPTS: [&str; 3] = ["Common", "Inherited", "Unknown"];

/// Per-script character counts, iterated in the order each script was first seen.
pub type ScriptFrequency = IndexMap<String, usize>;

/// Result of [`ScriptAnalyzer::analyse`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextInfo {
    /// Long Unicode name of the most frequent non-generic script, or `Common` for emoji text.
    pub main_script: String,
    /// Secondary key for scripts shared by several languages (`ja`, `zh-Hans`, `Emoji`, ...).
    pub script_variant: String,
    /// Characters with Emoji_Presentation or Extended_Pictographic set.
    pub emoji_count: usize,
    /// Counts for every script seen, generic scripts included.
    pub script_count: ScriptFrequency,
}

impl TextInfo {
    pub fn scanned_chars(&self) -> usize {
        self.script_count.values().sum()
    }
}

/// Which Unihan variant fields a Han character has.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HanVariants {
    pub has_simplified_variant: bool,
    pub has_traditional_variant: bool,
}

/// Point lookup into supplemental Han character data.
pub trait HanVariantLookup {
    fn han_variants(&self, ch: char) -> Option<HanVariants>;
}

/// In-memory [`HanVariantLookup`], usually loaded from the Unihan subset JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HanVariantTable {
    entries: HashMap<char, HanVariants>,
}

impl HanVariantTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, ch: char, variants: HanVariants) {
        self.entries.insert(ch, variants);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse `{"字": {"kSimplifiedVariant": ..., "kTraditionalVariant": ...}, ...}`.
    ///
    /// Only the presence of the two variant keys matters; their values and any other keys are
    /// ignored. Keys that are not a single character are skipped.
    pub fn from_unihan_json(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, serde_json::Map<String, serde_json::Value>> =
            serde_json::from_str(json).map_err(FinderError::UnihanShape)?;

        let mut table = Self::new();
        for (key, fields) in raw {
            let mut chars = key.chars();
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                warn!("skipping Unihan entry with multi-character key {key:?}");
                continue;
            };
            table.insert(
                ch,
                HanVariants {
                    has_simplified_variant: fields.contains_key("kSimplifiedVariant"),
                    has_traditional_variant: fields.contains_key("kTraditionalVariant"),
                },
            );
        }
        Ok(table)
    }
}

impl FromIterator<(char, HanVariants)> for HanVariantTable {
    fn from_iter<I: IntoIterator<Item = (char, HanVariants)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl HanVariantLookup for HanVariantTable {
    fn han_variants(&self, ch: char) -> Option<HanVariants> {
        self.entries.get(&ch).copied()
    }
}

/// Counts scripts in a text prefix and derives the main script and variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptAnalyzer {
    /// Only this many leading characters are examined.
    pub max_chars: usize,
    /// Report Traditional Chinese as `zh-Hant-HK` instead of `zh-Hant`.
    pub zh_hant_use_hk: bool,
}

impl Default for ScriptAnalyzer {
    fn default() -> Self {
        Self {
            max_chars: 2048,
            zh_hant_use_hk: false,
        }
    }
}

impl ScriptAnalyzer {
    pub fn new(max_chars: usize) -> Self {
        Self {
            max_chars,
            ..Self::default()
        }
    }

    pub fn zh_hant_use_hk(mut self, yes: bool) -> Self {
        self.zh_hant_use_hk = yes;
        self
    }

    pub fn analyse<L>(&self, text: &str, han_variants: &L) -> TextInfo
    where
        L: HanVariantLookup + ?Sized,
    {
        let scripts = CodePointMapData::<Script>::new();
        let names = PropertyNamesLong::<Script>::new();
        let emoji_presentation = CodePointSetData::new::<EmojiPresentation>();
        let pictographic = CodePointSetData::new::<ExtendedPictographic>();

        let mut script_count = ScriptFrequency::new();
        let mut emoji_count = 0;
        let mut simplified_hits = 0usize;
        let mut traditional_hits = 0usize;

        for ch in text.chars().take(self.max_chars) {
            let name = names.get(scripts.get(ch)).unwrap_or("Unknown");
            *script_count.entry(name.to_string()).or_insert(0) += 1;

            if emoji_presentation.contains(ch) || pictographic.contains(ch) {
                emoji_count += 1;
            }
            if let Some(variants) = han_variants.han_variants(ch) {
                simplified_hits += usize::from(variants.has_simplified_variant);
                traditional_hits += usize::from(variants.has_traditional_variant);
            }
        }

        let (mut main_script, top_count) = match most_frequent_specific(&script_count) {
            Some((script, count)) => (script.to_string(), count),
            None => (String::new(), 0),
        };
        let mut script_variant = String::new();

        // Covers both "only generic scripts plus emoji" and "emoji outnumber the main script".
        if emoji_count > top_count {
            main_script = "Common".to_string();
            script_variant = "Emoji".to_string();
        }

        if main_script == "Han" {
            script_variant = if script_count.contains_key("Hangul") {
                "ko"
            } else if script_count.contains_key("Hiragana") || script_count.contains_key("Katakana")
            {
                "ja"
            } else if simplified_hits > traditional_hits {
                // Traditional characters are the ones with a recorded simplified variant.
                if self.zh_hant_use_hk {
                    "zh-Hant-HK"
                } else {
                    "zh-Hant"
                }
            } else {
                "zh-Hans"
            }
            .to_string();
        }

        TextInfo {
            main_script,
            script_variant,
            emoji_count,
            script_count,
        }
    }
}

/// Highest-count non-generic script. Ties go to the script seen first.
fn most_frequent_specific(counts: &ScriptFrequency) -> Option<(&str, usize)> {
    let mut best: Option<(&str, usize)> = None;
    for (script, &count) in counts {
        if GENERIC_SCRIPTS.contains(&script.as_str()) {
            continue;
        }
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((script.as_str(), count));
        }
    }
    best
}

/// Long names of every script assigned to at least one code point, sorted.
pub fn all_unicode_scripts() -> Vec<&'static str> {
    let names = PropertyNamesLong::<Script>::new();
    let mut scripts: Vec<&'static str> = CodePointMapData::<Script>::new()
        .iter_ranges()
        .filter_map(|range| names.get(range.value))
        .collect();
    scripts.sort_unstable();
    scripts.dedup();
    scripts
}
