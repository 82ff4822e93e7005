//! Noto CJK records synthesized from a compiled-in table (made by FontLab https://www.fontlab.com/)

use crate::fontinfo::{FontBuild, FontForm, FontFormat, FontInfo, FontStyle, FontWeight, FontWidth};

pub const NOTO_CJK_BASE_URL: &str = "https://github.com/notofonts/noto-cjk/raw/main/";

/// One language-specific subset of the Noto CJK fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CjkLanguage {
    pub key: &'static str,
    /// Every `(main_script, script_variant)` the subset is offered for.
    pub script_variants: &'static [(&'static str, &'static str)],
    pub url_component: &'static str,
    pub code: &'static str,
}

pub const CJK_LANGUAGES: &[CjkLanguage] = &[
    CjkLanguage {
        key: "chinese-simplified",
        script_variants: &[("Han", "zh-Hans")],
        url_component: "SimplifiedChinese/",
        code: "SC",
    },
    CjkLanguage {
        key: "chinese-traditional",
        script_variants: &[("Han", "zh-Hant"), ("Bopomofo", "")],
        url_component: "TraditionalChinese/",
        code: "TC",
    },
    CjkLanguage {
        key: "chinese-hongkong",
        script_variants: &[("Han", "zh-Hant-HK")],
        url_component: "TraditionalChineseHK/",
        code: "HK",
    },
    CjkLanguage {
        key: "japanese",
        script_variants: &[("Hiragana", ""), ("Katakana", ""), ("Han", "ja")],
        url_component: "Japanese/",
        code: "JP",
    },
    CjkLanguage {
        key: "korean",
        script_variants: &[("Hangul", ""), ("Han", "ko")],
        url_component: "Korean/",
        code: "KR",
    },
];

pub const CJK_WEIGHTS: [(&str, FontWeight); 7] = [
    ("Black", FontWeight::Black),
    ("Bold", FontWeight::Bold),
    ("DemiLight", FontWeight::DemiLight),
    ("Light", FontWeight::Light),
    ("Medium", FontWeight::Medium),
    ("Regular", FontWeight::Regular),
    ("Thin", FontWeight::Thin),
];

const CJK_FORMS: [(FontForm, &str); 2] = [(FontForm::SansSerif, "Sans"), (FontForm::Serif, "Serif")];

/// Records for the built-in [`CJK_LANGUAGES`] table.
pub fn cjk_fonts() -> Vec<FontInfo> {
    cjk_fonts_from(CJK_LANGUAGES)
}

/// Two forms times seven weights per language, each duplicated per declared script/variant.
pub fn cjk_fonts_from(languages: &[CjkLanguage]) -> Vec<FontInfo> {
    let mut fonts = Vec::new();
    for language in languages {
        for (form, form_name) in CJK_FORMS {
            let family_name = format!("Noto {form_name} CJK {}", language.code.to_uppercase());
            let members: Vec<FontInfo> = CJK_WEIGHTS
                .iter()
                .map(|(weight_name, weight)| {
                    let postscript_name = format!(
                        "Noto{form_name}CJK{}-{weight_name}",
                        language.code.to_lowercase()
                    );
                    let url = format!(
                        "{NOTO_CJK_BASE_URL}{form_name}/OTF/{}{postscript_name}.otf",
                        language.url_component
                    );
                    FontInfo {
                        family_name: family_name.clone(),
                        subfamily_name: weight_name.to_string(),
                        postscript_name,
                        form,
                        width: FontWidth::Normal,
                        weight: *weight,
                        style: FontStyle::Upright,
                        format: FontFormat::Otf,
                        build: FontBuild::Full,
                        url,
                        ..FontInfo::default()
                    }
                })
                .collect();

            for (main_script, script_variant) in language.script_variants {
                fonts.extend(members.iter().cloned().map(|mut font| {
                    font.main_script = main_script.to_string();
                    font.script_variant = script_variant.to_string();
                    font
                }));
            }
        }
    }
    fonts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_gets_both_forms_and_all_weights() {
        let fonts = cjk_fonts();
        let pairs: usize = CJK_LANGUAGES.iter().map(|l| l.script_variants.len()).sum();
        assert_eq!(fonts.len(), pairs * 2 * CJK_WEIGHTS.len());
    }

    #[test]
    fn templates_produce_expected_names() {
        let fonts = cjk_fonts();
        let font = fonts
            .iter()
            .find(|f| f.postscript_name == "NotoSerifCJKjp-Bold" && f.main_script == "Katakana")
            .expect("japanese serif bold");
        assert_eq!(font.family_name, "Noto Serif CJK JP");
        assert_eq!(font.script_variant, "");
        assert_eq!(font.weight, FontWeight::Bold);
        assert_eq!(font.form, FontForm::Serif);
        assert_eq!(
            font.url,
            "https://github.com/notofonts/noto-cjk/raw/main/Serif/OTF/Japanese/NotoSerifCJKjp-Bold.otf"
        );
    }

    #[test]
    fn traditional_chinese_is_also_offered_for_bopomofo() {
        let fonts = cjk_fonts();
        assert!(fonts
            .iter()
            .any(|f| f.main_script == "Bopomofo" && f.family_name == "Noto Sans CJK TC"));
    }
}
