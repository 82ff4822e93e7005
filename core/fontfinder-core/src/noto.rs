//! Noto metadata normalization (made by FontLab https://www.fontlab.com/)
//!
//! Turns the notofonts `noto.json` structure (`script tag -> families -> files by build`)
//! plus the compiled-in CJK table into one sorted [`Catalog`].

use std::collections::BTreeMap;

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::Catalog;
use crate::cjk::cjk_fonts;
use crate::classify::{classify, classify_build, classify_form};
use crate::error::{FinderError, Result};
use crate::fontinfo::FontInfo;

pub const NOTO_MAIN_JSON_URL: &str = "https://notofonts.github.io/noto.json";
pub const NOTO_MAIN_BASE_URL: &str = "https://cdn.jsdelivr.net/gh/notofonts/notofonts.github.io/";

/// Provider tags that bundle several Unicode scripts; fonts are duplicated under each one.
const MERGED_SCRIPT_TAGS: &[(&str, &[&str])] =
    &[("latin-greek-cyrillic", &["latin", "greek", "cyrillic"])];

/// Provider tags that cover scripts Unicode keeps apart; fonts are filed under each part.
const SPLIT_SCRIPT_TAGS: &[(&str, &[&str])] =
    &[("meroitic", &["meroitic-cursive", "meroitic-hieroglyphs"])];

/// Title-cased tags whose spelling differs from the Unicode long name.
const SCRIPT_RENAMES: &[(&str, &str)] = &[("Sign_Writing", "SignWriting")];

/// Family names as published by Noto vs. the names the fonts install under.
const FAMILY_NAME_FIXES: &[(&str, &str)] = &[
    ("Noto Sans Nko", "Noto Sans NKo"),
    ("Noto Sans Phags-Pa", "Noto Sans PhagsPa"),
    ("Noto Sans Sign Writing", "Noto Sans SignWriting"),
];

/// Families that also serve a script other than the one they are filed under.
const EXTRA_PLACEMENTS: &[(&str, &str)] = &[("Noto Sans Symbols 2", "Braille")];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotoFamily {
    /// Build name (`hinted`, `unhinted`, `full`, ...) to resource paths relative to the CDN root.
    pub files: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotoScript {
    pub families: BTreeMap<String, NotoFamily>,
}

/// Parsed `noto.json`. Keys other than `families`/`files` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotoMetadata {
    pub scripts: BTreeMap<String, NotoScript>,
}

impl NotoMetadata {
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).map_err(FinderError::Root)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let raw: BTreeMap<String, Value> =
            serde_json::from_value(value).map_err(FinderError::Root)?;

        let mut scripts = BTreeMap::new();
        for (tag, entry) in raw {
            let script: NotoScript = serde_json::from_value(entry).map_err(|source| {
                FinderError::DataShape {
                    script: tag.clone(),
                    source,
                }
            })?;
            scripts.insert(tag, script);
        }
        Ok(Self { scripts })
    }
}

/// Unicode long script names for a Noto script tag.
///
/// `-` becomes `_` and every word is title-cased, so `khitan-small-script` maps to
/// `Khitan_Small_Script`. Tags without a specific rule only go through that conversion.
pub fn unicode_script_names(tag: &str) -> Vec<String> {
    let tags: Vec<&str> = MERGED_SCRIPT_TAGS
        .iter()
        .chain(SPLIT_SCRIPT_TAGS)
        .find(|(grouped, _)| *grouped == tag)
        .map(|(_, parts)| parts.to_vec())
        .unwrap_or_else(|| vec![tag]);

    tags.into_iter()
        .map(|tag| {
            let name = title_case(&tag.replace('-', "_"));
            match SCRIPT_RENAMES.iter().find(|(from, _)| *from == name) {
                Some((_, to)) => to.to_string(),
                None => name,
            }
        })
        .collect()
}

pub fn fix_family_name(name: &str) -> &str {
    FAMILY_NAME_FIXES
        .iter()
        .find(|(published, _)| *published == name)
        .map_or(name, |(_, fixed)| *fixed)
}

/// Upper-case the first letter of every alphabetic run and lower-case the rest.
fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_word = false;
    for ch in raw.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

/// One resource to turn into a record.
struct Resource<'a> {
    main_script: String,
    family_name: &'a str,
    build_name: &'a str,
    path: &'a str,
}

/// Records for the main (non-CJK) Noto fonts, in no particular order.
pub fn noto_main_fonts(noto: &NotoMetadata) -> Vec<FontInfo> {
    let mut resources = Vec::new();
    for (tag, script) in &noto.scripts {
        for main_script in unicode_script_names(tag) {
            for (published_family, family) in &script.families {
                let family_name = fix_family_name(published_family);
                let mut placements = vec![main_script.clone()];
                placements.extend(
                    EXTRA_PLACEMENTS
                        .iter()
                        .filter(|(placed, extra)| *placed == family_name && *extra != main_script)
                        .map(|(_, extra)| extra.to_string()),
                );

                for placement in placements {
                    for (build_name, paths) in &family.files {
                        resources.extend(paths.iter().map(|path| Resource {
                            main_script: placement.clone(),
                            family_name,
                            build_name: build_name.as_str(),
                            path: path.as_str(),
                        }));
                    }
                }
            }
        }
    }

    resources.par_iter().map(resource_record).collect()
}

fn resource_record(resource: &Resource<'_>) -> FontInfo {
    let mut font = FontInfo {
        main_script: resource.main_script.clone(),
        family_name: resource.family_name.to_string(),
        url: format!("{NOTO_MAIN_BASE_URL}{}", resource.path),
        ..FontInfo::default()
    };
    classify(resource.path, resource.family_name).apply_to(&mut font);

    // The metadata structure knows the form and build; the path only suggests them.
    font.form = classify_form(resource.family_name);
    font.build = classify_build(resource.build_name);
    font
}

/// Normalize Noto metadata and the CJK table into one sorted catalog.
pub fn normalize(noto: &NotoMetadata) -> Catalog {
    let mut fonts = noto_main_fonts(noto);
    let main_count = fonts.len();
    fonts.extend(cjk_fonts());
    debug!(
        "normalized {} scripts into {} records ({} CJK)",
        noto.scripts.len(),
        fonts.len(),
        fonts.len() - main_count
    );
    Catalog::new(fonts)
}
