//! Family and member selection on top of the catalog (made by FontLab https://www.fontlab.com/)

use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

use log::debug;

use crate::catalog::Catalog;
use crate::config::FinderConfig;
use crate::error::Result;
use crate::filters::{
    any_of, any_of_str_in, any_of_text, none_of, none_of_in, none_of_str_in, Predicate, TextField,
};
use crate::fontinfo::{FontBuild, FontForm, FontFormat, FontInfo, FontTags, FontWeight, FontWidth};
use crate::noto::{normalize, NotoMetadata};
use crate::prefs::{apply_prefs, distinct_families, member_count, Preferences, SelectorKey};
use crate::text::{self, HanVariantTable, TextInfo, GENERIC_SCRIPTS};

/// Either raw text to analyse or the result of an earlier analysis.
#[derive(Debug, Clone, Copy)]
pub enum TextQuery<'a> {
    Text(&'a str),
    Info(&'a TextInfo),
}

impl<'a> From<&'a str> for TextQuery<'a> {
    fn from(text: &'a str) -> Self {
        TextQuery::Text(text)
    }
}

impl<'a> From<&'a String> for TextQuery<'a> {
    fn from(text: &'a String) -> Self {
        TextQuery::Text(text)
    }
}

impl<'a> From<&'a TextInfo> for TextQuery<'a> {
    fn from(info: &'a TextInfo) -> Self {
        TextQuery::Info(info)
    }
}

/// Finds the font family best suited to a text, and the members of that family to fetch.
///
/// The catalog is normalized from the Noto metadata on first use and shared afterwards.
/// Preferences are public so callers can replace the defaults between queries.
///
/// ```rust
/// use fontfinder_core::finder::FontFinder;
/// use fontfinder_core::noto::NotoMetadata;
///
/// let finder = FontFinder::new(NotoMetadata::default());
/// assert_eq!(finder.find_font_family("Hello"), None);
/// assert_eq!(finder.find_font_family("日本語の文章").as_deref(), Some("Noto Sans CJK JP"));
/// ```
#[derive(Debug)]
pub struct FontFinder {
    config: FinderConfig,
    han_variants: HanVariantTable,
    pub font_family_prefs: Preferences,
    pub family_member_prefs: Preferences,
    noto: NotoMetadata,
    catalog: OnceLock<Arc<Catalog>>,
}

impl FontFinder {
    /// Finder over `noto` plus the built-in CJK fonts, with default preferences.
    ///
    /// The Han variant table starts empty, so Chinese text is reported as `zh-Hans` until a
    /// table is supplied with [`FontFinder::with_han_variants`].
    pub fn new(noto: NotoMetadata) -> Self {
        let mut finder = Self {
            config: FinderConfig::default(),
            han_variants: HanVariantTable::new(),
            font_family_prefs: Preferences::new(),
            family_member_prefs: Preferences::new(),
            noto,
            catalog: OnceLock::new(),
        };
        finder.set_default_prefs();
        finder
    }

    pub fn from_noto_json(json: &str) -> Result<Self> {
        Ok(Self::new(NotoMetadata::from_json(json)?))
    }

    /// Finder over an already built catalog.
    pub fn with_catalog(catalog: Arc<Catalog>) -> Self {
        let mut finder = Self::new(NotoMetadata::default());
        finder.catalog = OnceLock::from(catalog);
        finder
    }

    pub fn with_config(mut self, config: FinderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_han_variants(mut self, table: HanVariantTable) -> Self {
        self.han_variants = table;
        self
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut FinderConfig {
        &mut self.config
    }

    /// Replace both preference maps with the built-in defaults.
    pub fn set_default_prefs(&mut self) {
        let family = &mut self.font_family_prefs;
        family.clear();
        let exact_family = |name: &str| any_of_text(TextField::FamilyName, [name]);

        family.set(
            SelectorKey::specific("Adlam", ""),
            vec![exact_family("Noto Sans Adlam")],
        );
        family.set(
            SelectorKey::specific("Arabic", ""),
            vec![exact_family("Noto Naskh Arabic")],
        );
        family.set(
            SelectorKey::specific("Hebrew", ""),
            vec![exact_family("Noto Serif Hebrew")],
        );
        family.set(
            SelectorKey::specific("Khitan_Small_Script", ""),
            vec![exact_family("Noto Serif Khitan Small Script")],
        );
        family.set(
            SelectorKey::specific("Lao", ""),
            vec![any_of_str_in(TextField::FamilyName, ["Looped"])],
        );
        family.set(
            SelectorKey::specific("Nko", ""),
            vec![exact_family("Noto Sans NKo")],
        );
        family.set(
            SelectorKey::specific("Nushu", ""),
            vec![exact_family("Noto Sans Nushu")],
        );
        family.set(
            SelectorKey::specific("Tamil", ""),
            vec![none_of_str_in(TextField::FamilyName, ["Supplement"])],
        );
        family.set(
            SelectorKey::specific("Thai", ""),
            vec![exact_family("Noto Sans Thai Looped")],
        );
        family.set(
            SelectorKey::AnyScript,
            vec![
                any_of([FontForm::SansSerif]),
                none_of_in(FontTags::MONO | FontTags::DISPLAY | FontTags::UI),
            ],
        );

        let members = &mut self.family_member_prefs;
        members.clear();
        members.set(
            SelectorKey::AnyScript,
            vec![
                none_of([FontWidth::Variable]),
                none_of([FontWeight::Variable]),
                none_of_in(FontTags::MONO | FontTags::DISPLAY | FontTags::UI),
                any_of([FontBuild::Full]),
                any_of([FontBuild::Hinted]),
                any_of([FontFormat::Otf]),
                any_of([FontFormat::Ttf]),
                any_of([FontFormat::Otc]),
            ],
        );
    }

    /// The normalized catalog, built on first call.
    pub fn catalog(&self) -> &Catalog {
        self.catalog_handle()
    }

    /// Shared handle to the catalog, for use beyond this finder's lifetime.
    pub fn catalog_handle(&self) -> &Arc<Catalog> {
        self.catalog.get_or_init(|| {
            let catalog = normalize(&self.noto);
            debug!("font catalog ready with {} records", catalog.len());
            Arc::new(catalog)
        })
    }

    pub fn analyse(&self, text: &str) -> TextInfo {
        let info = self.config.analyzer().analyse(text, &self.han_variants);
        if info.main_script == "Han" && self.han_variants.is_empty() {
            debug!("no Han variant table loaded, reporting {}", info.script_variant);
        }
        info
    }

    pub fn known_fonts(&self) -> &[FontInfo] {
        self.catalog().fonts()
    }

    pub fn known_fonts_matching<P>(&self, predicate: &P) -> Vec<&FontInfo>
    where
        P: Predicate + ?Sized,
    {
        self.catalog().matching(predicate)
    }

    /// Scripts with at least one known font, sorted.
    pub fn known_scripts(&self) -> Vec<&str> {
        self.catalog().scripts()
    }

    /// `(main_script, script_variant)` pairs with at least one known font.
    pub fn known_script_variants(&self) -> Vec<(&str, &str)> {
        self.catalog().script_variants()
    }

    pub fn all_unicode_scripts(&self) -> Vec<&'static str> {
        text::all_unicode_scripts()
    }

    /// Specific Unicode scripts no known font serves, sorted.
    pub fn scripts_not_known(&self) -> Vec<&'static str> {
        let known: HashSet<&str> = self.known_scripts().into_iter().collect();
        self.all_unicode_scripts()
            .into_iter()
            .filter(|script| !known.contains(script) && !GENERIC_SCRIPTS.contains(script))
            .collect()
    }

    /// Every family serving the text's script and variant, without preferences.
    pub fn find_font_families<'q>(&self, query: impl Into<TextQuery<'q>>) -> Vec<String> {
        let mut seen = HashSet::new();
        self.fonts_for(query.into())
            .into_iter()
            .filter(|font| seen.insert(font.family_name.as_str()))
            .map(|font| font.family_name.clone())
            .collect()
    }

    /// The family preferred for the text, or `None` when no known font serves its script.
    pub fn find_font_family<'q>(&self, query: impl Into<TextQuery<'q>>) -> Option<String> {
        let fonts = self.fonts_for(query.into());
        let &first = fonts.first()?;
        let (main_script, script_variant) = (&first.main_script, &first.script_variant);

        let narrowed = apply_prefs(
            fonts,
            &self.font_family_prefs,
            main_script,
            script_variant,
            distinct_families,
        );
        narrowed.first().map(|font| font.family_name.clone())
    }

    /// Members of `family_names` to download or install.
    ///
    /// Families appear under several scripts; `script` picks which copy to use, defaulting to
    /// the first matching record in catalog order.
    pub fn find_family_members<S: AsRef<str>>(
        &self,
        family_names: &[S],
        script: Option<(&str, &str)>,
    ) -> Vec<FontInfo> {
        let fonts = self.catalog().for_families(family_names);
        let Some(&first) = fonts.first() else {
            return Vec::new();
        };
        let (main_script, script_variant) =
            script.unwrap_or((first.main_script.as_str(), first.script_variant.as_str()));

        let fonts: Vec<&FontInfo> = fonts
            .into_iter()
            .filter(|f| f.main_script == main_script && f.script_variant == script_variant)
            .collect();
        apply_prefs(
            fonts,
            &self.family_member_prefs,
            main_script,
            script_variant,
            member_count,
        )
        .into_iter()
        .cloned()
        .collect()
    }

    fn fonts_for(&self, query: TextQuery<'_>) -> Vec<&FontInfo> {
        let analysed;
        let info = match query {
            TextQuery::Text(text) => {
                analysed = self.analyse(text);
                &analysed
            }
            TextQuery::Info(info) => info,
        };
        self.catalog().for_script(&info.main_script, &info.script_variant)
    }
}
