use proptest::prelude::*;

use fontfinder_core::filters::{
    any_of, any_of_in, any_of_str_in, any_of_text, none_of, none_of_in, BoxedPredicate, TextField,
};
use fontfinder_core::prefs::{apply_filters, apply_prefs, distinct_families, member_count};
use fontfinder_core::{FontForm, FontInfo, FontTags, Preferences, SelectorKey};

fn font(family: &str, form: FontForm, tags: FontTags) -> FontInfo {
    FontInfo {
        main_script: "Latin".to_string(),
        family_name: family.to_string(),
        form,
        tags,
        ..FontInfo::default()
    }
}

fn any_script_prefs() -> Preferences {
    let mut prefs = Preferences::new();
    prefs.set(
        SelectorKey::AnyScript,
        vec![
            any_of([FontForm::SansSerif]),
            none_of_in(FontTags::MONO | FontTags::DISPLAY | FontTags::UI),
        ],
    );
    prefs
}

#[test]
fn sans_filter_collapses_mixed_set() {
    let fonts = [
        font("Noto Serif", FontForm::Serif, FontTags::empty()),
        font("Noto Sans", FontForm::SansSerif, FontTags::empty()),
        font("Noto Sans Display", FontForm::SansSerif, FontTags::DISPLAY),
    ];
    let narrowed = apply_prefs(
        fonts.iter().collect(),
        &any_script_prefs(),
        "Latin",
        "",
        distinct_families,
    );
    let families: Vec<&str> = narrowed.iter().map(|f| f.family_name.as_str()).collect();
    assert_eq!(families, vec!["Noto Sans"]);
}

#[test]
fn all_serif_set_is_unchanged() {
    let fonts = [
        font("Noto Serif", FontForm::Serif, FontTags::empty()),
        font("Noto Serif Display", FontForm::Serif, FontTags::DISPLAY),
    ];
    let narrowed = apply_prefs(
        fonts.iter().collect(),
        &any_script_prefs(),
        "Latin",
        "",
        distinct_families,
    );
    // The sans filter would leave nothing and is skipped; the tag filter still applies.
    assert_eq!(narrowed.len(), 1);
    assert_eq!(narrowed[0].family_name, "Noto Serif");

    let mut prefs = Preferences::new();
    prefs.set(SelectorKey::AnyScript, vec![any_of([FontForm::SansSerif])]);
    let narrowed = apply_prefs(fonts.iter().collect(), &prefs, "Latin", "", distinct_families);
    assert_eq!(narrowed.len(), 2);
}

#[test]
fn single_family_is_returned_untouched() {
    let fonts = [
        font("Noto Serif", FontForm::Serif, FontTags::empty()),
        font("Noto Serif", FontForm::Serif, FontTags::DISPLAY),
    ];
    let predicates: Vec<BoxedPredicate> =
        vec![any_of_text(TextField::FamilyName, ["Something Else"])];
    let narrowed = apply_filters(fonts.iter().collect(), &predicates, distinct_families);
    assert_eq!(narrowed.len(), 2);
}

const FAMILIES: [&str; 4] = ["Noto Sans", "Noto Serif", "Noto Sans Mono", "Noto Kufi"];
const FORMS: [FontForm; 3] = [FontForm::Serif, FontForm::SansSerif, FontForm::Kufi];
const SCRIPTS: [&str; 2] = ["Latin", "Greek"];

fn arb_font() -> impl Strategy<Value = FontInfo> {
    (
        prop::sample::select(FAMILIES.to_vec()),
        prop::sample::select(FORMS.to_vec()),
        0u8..32,
    )
        .prop_map(|(family, form, bits)| font(family, form, FontTags::from_bits_truncate(bits)))
}

fn arb_mixed_script_font() -> impl Strategy<Value = FontInfo> {
    (arb_font(), prop::sample::select(SCRIPTS.to_vec())).prop_map(|(mut font, script)| {
        font.main_script = script.to_string();
        font
    })
}

/// Printable stand-in for a predicate.
#[derive(Debug, Clone)]
enum Rule {
    Form(FontForm),
    NotForm(FontForm),
    AnyTags(u8),
    NoTags(u8),
    Family(&'static str),
    FamilyFragment(&'static str),
}

impl Rule {
    fn predicate(&self) -> BoxedPredicate {
        match *self {
            Rule::Form(form) => any_of([form]),
            Rule::NotForm(form) => none_of([form]),
            Rule::AnyTags(bits) => any_of_in(FontTags::from_bits_truncate(bits)),
            Rule::NoTags(bits) => none_of_in(FontTags::from_bits_truncate(bits)),
            Rule::Family(name) => any_of_text(TextField::FamilyName, [name]),
            Rule::FamilyFragment(fragment) => any_of_str_in(TextField::FamilyName, [fragment]),
        }
    }
}

fn arb_rule() -> impl Strategy<Value = Rule> {
    prop_oneof![
        prop::sample::select(FORMS.to_vec()).prop_map(Rule::Form),
        prop::sample::select(FORMS.to_vec()).prop_map(Rule::NotForm),
        (0u8..32).prop_map(Rule::AnyTags),
        (0u8..32).prop_map(Rule::NoTags),
        prop::sample::select(FAMILIES.to_vec()).prop_map(Rule::Family),
        prop::sample::select(vec!["Sans", "Mono", "Kufi", "Missing"])
            .prop_map(Rule::FamilyFragment),
    ]
}

fn arb_key() -> impl Strategy<Value = SelectorKey> {
    prop_oneof![
        Just(SelectorKey::AnyScript),
        prop::sample::select(SCRIPTS.to_vec()).prop_map(|script| SelectorKey::specific(script, "")),
        prop::sample::select(SCRIPTS.to_vec()).prop_map(|script| SelectorKey::specific(script, "x")),
    ]
}

fn build_prefs(entries: &[(SelectorKey, Vec<Rule>)]) -> Preferences {
    let mut prefs = Preferences::new();
    for (key, rules) in entries {
        prefs.set(key.clone(), rules.iter().map(Rule::predicate).collect());
    }
    prefs
}

proptest! {
    #[test]
    fn never_empties_a_non_empty_list(fonts in prop::collection::vec(arb_font(), 1..12)) {
        let refs: Vec<&FontInfo> = fonts.iter().collect();
        let prefs = any_script_prefs();
        let by_family = apply_prefs(refs.clone(), &prefs, "Latin", "", distinct_families);
        let by_member = apply_prefs(refs, &prefs, "Latin", "", member_count);
        prop_assert!(!by_family.is_empty());
        prop_assert!(!by_member.is_empty());
    }

    #[test]
    fn any_configuration_keeps_a_candidate(
        fonts in prop::collection::vec(arb_mixed_script_font(), 1..12),
        entries in prop::collection::vec(
            (arb_key(), prop::collection::vec(arb_rule(), 0..6)),
            0..4,
        ),
        script in prop::sample::select(SCRIPTS.to_vec()),
    ) {
        let prefs = build_prefs(&entries);
        let refs: Vec<&FontInfo> = fonts.iter().collect();
        let by_family = apply_prefs(refs.clone(), &prefs, script, "", distinct_families);
        let by_member = apply_prefs(refs, &prefs, script, "", member_count);
        prop_assert!(!by_family.is_empty());
        prop_assert!(!by_member.is_empty());
    }

    #[test]
    fn unchanged_below_cardinality_two(fonts in prop::collection::vec(arb_font(), 0..2)) {
        let refs: Vec<&FontInfo> = fonts.iter().collect();
        let narrowed = apply_prefs(refs.clone(), &any_script_prefs(), "Latin", "", member_count);
        prop_assert_eq!(narrowed, refs);
    }

    #[test]
    fn result_is_a_subsequence_of_the_input(fonts in prop::collection::vec(arb_font(), 0..12)) {
        let refs: Vec<&FontInfo> = fonts.iter().collect();
        let narrowed = apply_prefs(refs.clone(), &any_script_prefs(), "Latin", "", distinct_families);
        let mut rest = refs.iter();
        prop_assert!(narrowed.iter().all(|kept| rest.any(|f| std::ptr::eq(*f, *kept))));
    }
}
