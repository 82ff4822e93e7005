//! The normalized, immutable font catalog (made by FontLab https://www.fontlab.com/)

use std::collections::HashSet;

use crate::filters::Predicate;
use crate::fontinfo::FontInfo;

/// Sorted collection of every known [`FontInfo`].
///
/// Records are ordered by script, variant, family, subfamily and then the remaining fields,
/// so enumeration order never depends on how the catalog was assembled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    fonts: Vec<FontInfo>,
}

impl Catalog {
    pub fn new(mut fonts: Vec<FontInfo>) -> Self {
        fonts.sort();
        Self { fonts }
    }

    pub fn fonts(&self) -> &[FontInfo] {
        &self.fonts
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Records passing `predicate`, in catalog order.
    pub fn matching<P>(&self, predicate: &P) -> Vec<&FontInfo>
    where
        P: Predicate + ?Sized,
    {
        self.fonts
            .iter()
            .filter(|font| predicate.evaluate(font))
            .collect()
    }

    /// Records for exactly this script and variant.
    pub fn for_script(&self, main_script: &str, script_variant: &str) -> Vec<&FontInfo> {
        let key = (main_script, script_variant);
        let start = self
            .fonts
            .partition_point(|f| (f.main_script.as_str(), f.script_variant.as_str()) < key);
        self.fonts[start..]
            .iter()
            .take_while(|f| (f.main_script.as_str(), f.script_variant.as_str()) == key)
            .collect()
    }

    /// Records belonging to any of `family_names`, in catalog order.
    pub fn for_families<S: AsRef<str>>(&self, family_names: &[S]) -> Vec<&FontInfo> {
        let wanted: HashSet<&str> = family_names.iter().map(|name| name.as_ref()).collect();
        self.fonts
            .iter()
            .filter(|f| wanted.contains(f.family_name.as_str()))
            .collect()
    }

    /// Distinct `main_script` values, sorted.
    pub fn scripts(&self) -> Vec<&str> {
        let mut scripts: Vec<&str> = self.fonts.iter().map(|f| f.main_script.as_str()).collect();
        scripts.dedup();
        scripts
    }

    /// Distinct `(main_script, script_variant)` pairs in catalog order.
    pub fn script_variants(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<(&str, &str)> = self
            .fonts
            .iter()
            .map(|f| (f.main_script.as_str(), f.script_variant.as_str()))
            .collect();
        pairs.dedup();
        pairs
    }
}
