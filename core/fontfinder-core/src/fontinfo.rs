//! Font records and their typographic attributes (made by FontLab https://www.fontlab.com/)

use std::fmt;
use std::path::PathBuf;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Serif vs. sans-serif, plus the regional forms that appear in Noto family names.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum FontForm {
    #[default]
    Unset,
    Serif,
    SansSerif,
    Kufi,
    Naskh,
    Nastaliq,
    Rashi,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum FontWidth {
    #[default]
    Normal,
    Variable,
    ExtraCondensed,
    Condensed,
    SemiCondensed,
}

impl FontWidth {
    /// Text used when composing a subfamily name. Empty for widths that are not named.
    pub fn display_text(self) -> &'static str {
        match self {
            FontWidth::Normal | FontWidth::Variable => "",
            FontWidth::ExtraCondensed => "ExtraCondensed",
            FontWidth::Condensed => "Condensed",
            FontWidth::SemiCondensed => "SemiCondensed",
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum FontWeight {
    #[default]
    Regular,
    Variable,
    Thin,
    ExtraLight,
    Light,
    DemiLight,
    Medium,
    SemiBold,
    Bold,
    ExtraBold,
    Black,
}

impl FontWeight {
    pub fn display_text(self) -> &'static str {
        match self {
            FontWeight::Regular | FontWeight::Variable => "",
            FontWeight::Thin => "Thin",
            FontWeight::ExtraLight => "ExtraLight",
            FontWeight::Light => "Light",
            FontWeight::DemiLight => "DemiLight",
            FontWeight::Medium => "Medium",
            FontWeight::SemiBold => "SemiBold",
            FontWeight::Bold => "Bold",
            FontWeight::ExtraBold => "ExtraBold",
            FontWeight::Black => "Black",
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum FontStyle {
    #[default]
    Upright,
    Italic,
}

impl FontStyle {
    pub fn display_text(self) -> &'static str {
        match self {
            FontStyle::Upright => "",
            FontStyle::Italic => "Italic",
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum FontFormat {
    #[default]
    Unset,
    Otf,
    Otc,
    Ttf,
}

/// Hinting completeness of a font resource.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum FontBuild {
    #[default]
    Unset,
    Unhinted,
    Hinted,
    Full,
}

bitflags! {
    /// Secondary design tags. A font can carry any combination.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct FontTags: u8 {
        const MONO = 1;
        const UI = 1 << 1;
        const DISPLAY = 1 << 2;
        const SLIM = 1 << 3;
        const LOOPED = 1 << 4;
    }
}

impl Default for FontTags {
    fn default() -> Self {
        FontTags::empty()
    }
}

impl fmt::Display for FontTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&tags_to_string(*self))
    }
}

/// Render tags as a `|`-joined list of flag names (`"MONO|UI"`), empty when no flag is set.
pub fn tags_to_string(tags: FontTags) -> String {
    tags.iter_names()
        .map(|(name, _)| name)
        .collect::<Vec<_>>()
        .join("|")
}

/// Parse the output of [`tags_to_string`]. Unknown flag names are rejected.
pub fn parse_tags(raw: &str) -> Result<FontTags, String> {
    let mut tags = FontTags::empty();
    for name in raw.split('|').map(str::trim).filter(|n| !n.is_empty()) {
        let flag = FontTags::from_name(name).ok_or_else(|| format!("unknown font tag: {name}"))?;
        tags |= flag;
    }
    Ok(tags)
}

/// One downloadable (or installed) member of a font family, bound to the script it serves.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FontInfo {
    pub main_script: String,
    pub script_variant: String,
    pub family_name: String,
    pub subfamily_name: String,
    pub postscript_name: String,
    pub form: FontForm,
    pub width: FontWidth,
    pub weight: FontWeight,
    pub style: FontStyle,
    pub format: FontFormat,
    pub build: FontBuild,
    #[serde(serialize_with = "serialize_tags", deserialize_with = "deserialize_tags")]
    pub tags: FontTags,
    pub url: String,
    /// Set by download collaborators once the file exists locally.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_path: Option<PathBuf>,
}

impl FontInfo {
    /// Last path segment of `url`, if any.
    pub fn filename(&self) -> Option<&str> {
        self.url
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty())
    }

    pub fn is_variable(&self) -> bool {
        self.width == FontWidth::Variable || self.weight == FontWeight::Variable
    }
}

/// An attribute dimension of [`FontInfo`] that filters can select on.
pub trait FontAttribute: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    fn of(font: &FontInfo) -> Self;
}

macro_rules! font_attribute {
    ($ty:ty, $field:ident) => {
        impl FontAttribute for $ty {
            fn of(font: &FontInfo) -> Self {
                font.$field
            }
        }
    };
}

font_attribute!(FontForm, form);
font_attribute!(FontWidth, width);
font_attribute!(FontWeight, weight);
font_attribute!(FontStyle, style);
font_attribute!(FontFormat, format);
font_attribute!(FontBuild, build);

fn serialize_tags<S>(tags: &FontTags, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    tags_to_string(*tags).serialize(serializer)
}

fn deserialize_tags<'de, D>(deserializer: D) -> Result<FontTags, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_tags(&raw).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_render_in_declaration_order() {
        let tags = FontTags::UI | FontTags::MONO;
        assert_eq!(tags_to_string(tags), "MONO|UI");
        assert_eq!(tags_to_string(FontTags::empty()), "");
    }

    #[test]
    fn parse_tags_accepts_empty_and_rejects_unknown() {
        assert_eq!(parse_tags("").unwrap(), FontTags::empty());
        assert_eq!(
            parse_tags("DISPLAY|LOOPED").unwrap(),
            FontTags::DISPLAY | FontTags::LOOPED
        );
        assert!(parse_tags("MONO|WIDE").is_err());
    }

    #[test]
    fn filename_is_last_url_segment() {
        let font = FontInfo {
            url: "https://example.org/fonts/NotoSans-Bold.ttf".to_string(),
            ..FontInfo::default()
        };
        assert_eq!(font.filename(), Some("NotoSans-Bold.ttf"));
        assert_eq!(FontInfo::default().filename(), None);
    }

    #[test]
    fn enums_serialize_to_symbolic_names() {
        let json = serde_json::to_string(&(FontFormat::Otf, FontWeight::ExtraBold)).unwrap();
        assert_eq!(json, r#"["OTF","ExtraBold"]"#);
    }
}
