use proptest::prelude::*;

use fontfinder_core::text::{HanVariants, ScriptAnalyzer};
use fontfinder_core::HanVariantTable;

fn traditional_table() -> HanVariantTable {
    // Characters with a recorded simplified form.
    ['國', '語', '學']
        .into_iter()
        .map(|ch| {
            (
                ch,
                HanVariants {
                    has_simplified_variant: true,
                    has_traditional_variant: false,
                },
            )
        })
        .collect()
}

#[test]
fn latin_text() {
    let info = ScriptAnalyzer::default().analyse("Hello World", &HanVariantTable::new());
    assert_eq!(info.main_script, "Latin");
    assert_eq!(info.script_variant, "");
    assert_eq!(info.script_count.get("Latin"), Some(&10));
    assert_eq!(info.script_count.get("Common"), Some(&1));
}

#[test]
fn han_with_simplified_hits_reads_as_traditional() {
    let table = traditional_table();
    let info = ScriptAnalyzer::default().analyse("國語學", &table);
    assert_eq!(info.main_script, "Han");
    assert_eq!(info.script_variant, "zh-Hant");

    let info = ScriptAnalyzer::default()
        .zh_hant_use_hk(true)
        .analyse("國語學", &table);
    assert_eq!(info.script_variant, "zh-Hant-HK");
}

#[test]
fn han_without_table_hits_defaults_to_simplified() {
    let info = ScriptAnalyzer::default().analyse("国语学", &HanVariantTable::new());
    assert_eq!(info.main_script, "Han");
    assert_eq!(info.script_variant, "zh-Hans");
}

#[test]
fn han_with_kana_is_japanese() {
    let info = ScriptAnalyzer::default().analyse("日本語の文章", &HanVariantTable::new());
    assert_eq!(info.main_script, "Han");
    assert_eq!(info.script_variant, "ja");
}

#[test]
fn unihan_subset_drives_variant_detection() {
    let json = r#"{"國": {"kSimplifiedVariant": ["U+56FD"]}, "国": {"kTraditionalVariant": ["U+570B"]}}"#;
    let table = HanVariantTable::from_unihan_json(json).expect("parse");
    let analyzer = ScriptAnalyzer::default();
    assert_eq!(analyzer.analyse("國國国", &table).script_variant, "zh-Hant");
    assert_eq!(analyzer.analyse("國国国", &table).script_variant, "zh-Hans");
}

proptest! {
    #[test]
    fn counts_sum_to_scanned_chars(text in any::<String>(), max in 0usize..64) {
        let info = ScriptAnalyzer::new(max).analyse(&text, &HanVariantTable::new());
        prop_assert_eq!(info.scanned_chars(), text.chars().count().min(max));
        prop_assert!(info.emoji_count <= info.scanned_chars());
    }

    #[test]
    fn analysis_is_deterministic(text in "\\PC{0,40}") {
        let analyzer = ScriptAnalyzer::default();
        let table = HanVariantTable::new();
        prop_assert_eq!(analyzer.analyse(&text, &table), analyzer.analyse(&text, &table));
    }
}
