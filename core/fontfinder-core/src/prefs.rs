//! Cascading preference filters (made by FontLab https://www.fontlab.com/)
//!
//! Preferences map a [`SelectorKey`] to an ordered list of predicates. Narrowing consults the
//! script-specific key first and the [`SelectorKey::AnyScript`] key second; within a key each
//! predicate either narrows the working list, is skipped because it would leave nothing, or
//! finishes the key because exactly one item remains.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use log::trace;

use crate::filters::BoxedPredicate;
use crate::fontinfo::FontInfo;

/// Which candidate lists a preference list applies to.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SelectorKey {
    Specific {
        main_script: String,
        script_variant: String,
    },
    AnyScript,
}

impl SelectorKey {
    pub fn specific(main_script: impl Into<String>, script_variant: impl Into<String>) -> Self {
        SelectorKey::Specific {
            main_script: main_script.into(),
            script_variant: script_variant.into(),
        }
    }
}

impl fmt::Display for SelectorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectorKey::Specific {
                main_script,
                script_variant,
            } if script_variant.is_empty() => write!(f, "{main_script}"),
            SelectorKey::Specific {
                main_script,
                script_variant,
            } => write!(f, "{main_script}/{script_variant}"),
            SelectorKey::AnyScript => f.write_str("*"),
        }
    }
}

/// Ordered predicate lists per selector key.
#[derive(Default)]
pub struct Preferences {
    entries: BTreeMap<SelectorKey, Vec<BoxedPredicate>>,
}

impl Preferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the predicate list for `key`.
    pub fn set(&mut self, key: SelectorKey, predicates: Vec<BoxedPredicate>) {
        self.entries.insert(key, predicates);
    }

    /// Append one predicate to the list for `key`.
    pub fn push(&mut self, key: SelectorKey, predicate: BoxedPredicate) {
        self.entries.entry(key).or_default().push(predicate);
    }

    pub fn get(&self, key: &SelectorKey) -> Option<&[BoxedPredicate]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn remove(&mut self, key: &SelectorKey) -> Option<Vec<BoxedPredicate>> {
        self.entries.remove(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn keys(&self) -> impl Iterator<Item = &SelectorKey> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Preferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.entries
                    .iter()
                    .map(|(key, predicates)| (key.to_string(), predicates.len())),
            )
            .finish()
    }
}

/// Cardinality used when narrowing by family.
pub fn distinct_families(fonts: &[&FontInfo]) -> usize {
    fonts
        .iter()
        .map(|f| f.family_name.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Cardinality used when narrowing members.
pub fn member_count(fonts: &[&FontInfo]) -> usize {
    fonts.len()
}

/// Narrow `fonts` with the preferences for `(main_script, script_variant)` and then with the
/// any-script preferences.
///
/// The result is never empty when `fonts` is not, and keeps the input order.
pub fn apply_prefs<'a, C>(
    fonts: Vec<&'a FontInfo>,
    prefs: &Preferences,
    main_script: &str,
    script_variant: &str,
    cardinality: C,
) -> Vec<&'a FontInfo>
where
    C: Fn(&[&FontInfo]) -> usize,
{
    let specific = SelectorKey::specific(main_script, script_variant);
    [specific, SelectorKey::AnyScript]
        .iter()
        .fold(fonts, |fonts, key| match prefs.get(key) {
            Some(predicates) => apply_filters(fonts, predicates, &cardinality),
            None => fonts,
        })
}

/// Run one predicate list over `fonts`.
pub fn apply_filters<'a, C>(
    fonts: Vec<&'a FontInfo>,
    predicates: &[BoxedPredicate],
    cardinality: C,
) -> Vec<&'a FontInfo>
where
    C: Fn(&[&FontInfo]) -> usize,
{
    if predicates.is_empty() || cardinality(&fonts) < 2 {
        return fonts;
    }

    let mut current = fonts;
    for (index, predicate) in predicates.iter().enumerate() {
        let narrowed: Vec<&FontInfo> = current
            .iter()
            .copied()
            .filter(|font| predicate.evaluate(font))
            .collect();
        match cardinality(&narrowed) {
            0 => trace!("preference {index} would exclude everything, skipped"),
            1 => {
                trace!("preference {index} left a single candidate");
                return narrowed;
            }
            count => {
                trace!("preference {index} narrowed to {count}");
                current = narrowed;
            }
        }
    }
    current
}
