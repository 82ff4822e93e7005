//! Identifier classification into typographic attributes (made by FontLab https://www.fontlab.com/)
//!
//! Every attribute dimension is resolved against a declared, ordered rule table of
//! `(value, pattern)` pairs. All rules are evaluated and each match overwrites the previous
//! one, so the later rule wins: `ExtraBold` is declared after `Bold` so that
//! `NotoSans-ExtraBold` resolves to [`FontWeight::ExtraBold`]. Patterns are case-insensitive.

use std::sync::OnceLock;

use regex::Regex;

use crate::fontinfo::{
    FontBuild, FontForm, FontFormat, FontInfo, FontStyle, FontTags, FontWeight, FontWidth,
};

pub const FORM_RULES: &[(FontForm, &str)] = &[
    (FontForm::Serif, "Serif"),
    (FontForm::SansSerif, "Sans"),
    (FontForm::Kufi, "Kufi"),
    (FontForm::Naskh, "Naskh"),
    (FontForm::Nastaliq, "Nastaliq"),
    (FontForm::Rashi, "Rashi"),
];

pub const WIDTH_RULES: &[(FontWidth, &str)] = &[
    (FontWidth::Variable, "wdth"),
    (FontWidth::Condensed, "Condensed"),
    (FontWidth::ExtraCondensed, "Extra.?Condensed"),
    (FontWidth::SemiCondensed, "Semi.?Condensed"),
];

pub const WEIGHT_RULES: &[(FontWeight, &str)] = &[
    (FontWeight::Variable, "wght"),
    (FontWeight::Light, "Light"),
    (FontWeight::ExtraLight, "Extra.?Light"),
    (FontWeight::DemiLight, "Demi.?Light"),
    (FontWeight::Thin, "Thin"),
    (FontWeight::Medium, "Medium"),
    (FontWeight::Bold, "Bold"),
    (FontWeight::SemiBold, "Semi.?Bold"),
    (FontWeight::ExtraBold, "Extra.?Bold"),
    (FontWeight::Black, "Black"),
];

pub const STYLE_RULES: &[(FontStyle, &str)] = &[(FontStyle::Italic, "Italic")];

pub const FORMAT_RULES: &[(FontFormat, &str)] = &[
    (FontFormat::Otf, r"\.otf"),
    (FontFormat::Otc, r"\.otc"),
    (FontFormat::Ttf, r"\.ttf"),
];

// "Unhinted" contains "hinted", so it has to come second.
pub const BUILD_RULES: &[(FontBuild, &str)] = &[
    (FontBuild::Hinted, "hinted"),
    (FontBuild::Unhinted, "unhinted"),
    (FontBuild::Full, "full"),
];

/// Substrings of the PostScript name that set a tag. Case-sensitive: `UI` must not fire on `Buginese`.
const POSTSCRIPT_TAGS: &[(FontTags, &str)] = &[
    (FontTags::MONO, "Mono"),
    (FontTags::UI, "UI"),
    (FontTags::DISPLAY, "Display"),
    (FontTags::SLIM, "Slim"),
];

const FAMILY_TAGS: &[(FontTags, &str)] = &[(FontTags::LOOPED, "Looped")];

/// PostScript names that embed a language code, and the script variant each code selects.
const VARIANT_PATTERN: &str = r"^Noto(?:Sans|Serif)(?:Mono)?CJK(sc|tc|hk|jp|kr)\b";
const VARIANT_CODES: &[(&str, &str)] = &[
    ("sc", "zh-Hans"),
    ("tc", "zh-Hant"),
    ("hk", "zh-Hant-HK"),
    ("jp", "ja"),
    ("kr", "ko"),
];

struct RuleSet {
    form: Vec<(FontForm, Regex)>,
    width: Vec<(FontWidth, Regex)>,
    weight: Vec<(FontWeight, Regex)>,
    style: Vec<(FontStyle, Regex)>,
    format: Vec<(FontFormat, Regex)>,
    build: Vec<(FontBuild, Regex)>,
    variant: Regex,
}

fn rules() -> &'static RuleSet {
    static RULES: OnceLock<RuleSet> = OnceLock::new();
    RULES.get_or_init(|| RuleSet {
        form: compile(FORM_RULES),
        width: compile(WIDTH_RULES),
        weight: compile(WEIGHT_RULES),
        style: compile(STYLE_RULES),
        format: compile(FORMAT_RULES),
        build: compile(BUILD_RULES),
        variant: Regex::new(VARIANT_PATTERN).expect("variant pattern is a valid regex"),
    })
}

fn compile<T: Copy>(table: &[(T, &str)]) -> Vec<(T, Regex)> {
    table
        .iter()
        .map(|(value, pattern)| {
            let re = Regex::new(&format!("(?i){pattern}")).expect("rule patterns are valid regexes");
            (*value, re)
        })
        .collect()
}

/// Evaluate a compiled rule table against `identifier`; the last matching rule wins.
fn resolve<T: Copy>(table: &[(T, Regex)], default: T, identifier: &str) -> T {
    table.iter().fold(default, |current, (value, re)| {
        if re.is_match(identifier) {
            *value
        } else {
            current
        }
    })
}

pub fn classify_form(identifier: &str) -> FontForm {
    resolve(&rules().form, FontForm::Unset, identifier)
}

pub fn classify_width(identifier: &str) -> FontWidth {
    resolve(&rules().width, FontWidth::Normal, identifier)
}

pub fn classify_weight(identifier: &str) -> FontWeight {
    resolve(&rules().weight, FontWeight::Regular, identifier)
}

pub fn classify_style(identifier: &str) -> FontStyle {
    resolve(&rules().style, FontStyle::Upright, identifier)
}

pub fn classify_format(identifier: &str) -> FontFormat {
    resolve(&rules().format, FontFormat::Unset, identifier)
}

pub fn classify_build(identifier: &str) -> FontBuild {
    resolve(&rules().build, FontBuild::Unset, identifier)
}

/// Everything that can be inferred from a single resource identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Classification {
    pub form: FontForm,
    pub width: FontWidth,
    pub weight: FontWeight,
    pub style: FontStyle,
    pub format: FontFormat,
    pub build: FontBuild,
    pub tags: FontTags,
    pub postscript_name: String,
    pub subfamily_name: String,
    /// Present only for PostScript names that encode a language.
    pub script_variant: Option<&'static str>,
}

/// Classify a filename, relative path or URL. `family_name` is only consulted for tags that
/// family names carry (`Looped`); pass an empty string when it is unknown.
pub fn classify(identifier: &str, family_name: &str) -> Classification {
    let form = classify_form(identifier);
    let width = classify_width(identifier);
    let weight = classify_weight(identifier);
    let style = classify_style(identifier);
    let format = classify_format(identifier);
    let build = classify_build(identifier);

    let stem = postscript_stem(identifier);
    let variable = width == FontWidth::Variable || weight == FontWeight::Variable;
    let (postscript_name, subfamily_name) = if variable {
        // Variable resources do not name an instance; describe the default one.
        let postscript = if stem.contains('-') {
            stem.to_string()
        } else {
            format!("{stem}-Regular")
        };
        let subfamily = match style {
            FontStyle::Italic => "Italic",
            FontStyle::Upright => "Regular",
        };
        (postscript, subfamily.to_string())
    } else {
        (stem.to_string(), subfamily_name(width, weight, style))
    };

    let tags = collect_tags(&postscript_name, family_name);
    let script_variant = embedded_script_variant(&postscript_name);

    Classification {
        form,
        width,
        weight,
        style,
        format,
        build,
        tags,
        postscript_name,
        subfamily_name,
        script_variant,
    }
}

impl Classification {
    /// Fill the typographic fields of `font` from this classification.
    pub fn apply_to(&self, font: &mut FontInfo) {
        font.form = self.form;
        font.width = self.width;
        font.weight = self.weight;
        font.style = self.style;
        font.format = self.format;
        font.build = self.build;
        font.tags = self.tags;
        font.postscript_name = self.postscript_name.clone();
        font.subfamily_name = self.subfamily_name.clone();
        if let Some(variant) = self.script_variant {
            font.script_variant = variant.to_string();
        }
    }
}

/// Space-joined width, weight and style names; `Regular` when none of them is named.
pub fn subfamily_name(width: FontWidth, weight: FontWeight, style: FontStyle) -> String {
    let parts: Vec<&str> = [
        width.display_text(),
        weight.display_text(),
        style.display_text(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect();

    if parts.is_empty() {
        "Regular".to_string()
    } else {
        parts.join(" ")
    }
}

/// File stem of the last path segment, without any `[axis,...]` suffix.
fn postscript_stem(identifier: &str) -> &str {
    let segment = identifier
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or(identifier);
    let stem = match segment.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()) => {
            stem
        }
        _ => segment,
    };
    match stem.find('[') {
        Some(idx) => &stem[..idx],
        None => stem,
    }
}

fn collect_tags(postscript_name: &str, family_name: &str) -> FontTags {
    let mut tags = FontTags::empty();
    for (tag, needle) in POSTSCRIPT_TAGS {
        if postscript_name.contains(needle) {
            tags |= *tag;
        }
    }
    for (tag, needle) in FAMILY_TAGS {
        if family_name.contains(needle) {
            tags |= *tag;
        }
    }
    tags
}

fn embedded_script_variant(postscript_name: &str) -> Option<&'static str> {
    let caps = rules().variant.captures(postscript_name)?;
    let code = caps.get(1)?.as_str();
    VARIANT_CODES
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, variant)| *variant)
}
