//! Font predicates and the filter factories used in preferences (made by FontLab https://www.fontlab.com/)
//!
//! ```rust
//! use fontfinder_core::filters::{any_of, none_of_in, Predicate};
//! use fontfinder_core::fontinfo::{FontForm, FontInfo, FontTags};
//!
//! let sans = any_of([FontForm::SansSerif]);
//! let plain = none_of_in(FontTags::MONO | FontTags::UI);
//!
//! let font = FontInfo { form: FontForm::SansSerif, ..FontInfo::default() };
//! assert!(sans.evaluate(&font) && plain.evaluate(&font));
//! ```

use crate::fontinfo::{FontAttribute, FontInfo, FontTags};

/// A yes/no question about a font.
pub trait Predicate: Send + Sync {
    fn evaluate(&self, font: &FontInfo) -> bool;
}

impl<F> Predicate for F
where
    F: Fn(&FontInfo) -> bool + Send + Sync,
{
    fn evaluate(&self, font: &FontInfo) -> bool {
        self(font)
    }
}

pub type BoxedPredicate = Box<dyn Predicate>;

/// Text fields of [`FontInfo`] that string filters can look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    MainScript,
    ScriptVariant,
    FamilyName,
    SubfamilyName,
    PostscriptName,
    Url,
}

impl TextField {
    pub fn get(self, font: &FontInfo) -> &str {
        match self {
            TextField::MainScript => &font.main_script,
            TextField::ScriptVariant => &font.script_variant,
            TextField::FamilyName => &font.family_name,
            TextField::SubfamilyName => &font.subfamily_name,
            TextField::PostscriptName => &font.postscript_name,
            TextField::Url => &font.url,
        }
    }
}

/// Attribute equals one of `values`.
pub fn any_of<A: FontAttribute>(values: impl IntoIterator<Item = A>) -> BoxedPredicate {
    let values: Vec<A> = values.into_iter().collect();
    Box::new(move |font: &FontInfo| values.contains(&A::of(font)))
}

/// Attribute equals none of `values`.
pub fn none_of<A: FontAttribute>(values: impl IntoIterator<Item = A>) -> BoxedPredicate {
    let values: Vec<A> = values.into_iter().collect();
    Box::new(move |font: &FontInfo| !values.contains(&A::of(font)))
}

/// Field equals one of `values` exactly.
pub fn any_of_text<S: Into<String>>(
    field: TextField,
    values: impl IntoIterator<Item = S>,
) -> BoxedPredicate {
    let values: Vec<String> = values.into_iter().map(Into::into).collect();
    Box::new(move |font: &FontInfo| {
        let text = field.get(font);
        values.iter().any(|v| v == text)
    })
}

/// Field equals none of `values`.
pub fn none_of_text<S: Into<String>>(
    field: TextField,
    values: impl IntoIterator<Item = S>,
) -> BoxedPredicate {
    let values: Vec<String> = values.into_iter().map(Into::into).collect();
    Box::new(move |font: &FontInfo| {
        let text = field.get(font);
        !values.iter().any(|v| v == text)
    })
}

/// Field contains at least one of `fragments`.
pub fn any_of_str_in<S: Into<String>>(
    field: TextField,
    fragments: impl IntoIterator<Item = S>,
) -> BoxedPredicate {
    let fragments: Vec<String> = fragments.into_iter().map(Into::into).collect();
    Box::new(move |font: &FontInfo| {
        let text = field.get(font);
        fragments.iter().any(|f| text.contains(f.as_str()))
    })
}

/// Field contains none of `fragments`.
pub fn none_of_str_in<S: Into<String>>(
    field: TextField,
    fragments: impl IntoIterator<Item = S>,
) -> BoxedPredicate {
    let fragments: Vec<String> = fragments.into_iter().map(Into::into).collect();
    Box::new(move |font: &FontInfo| {
        let text = field.get(font);
        !fragments.iter().any(|f| text.contains(f.as_str()))
    })
}

/// Font carries at least one of `tags`.
pub fn any_of_in(tags: FontTags) -> BoxedPredicate {
    Box::new(move |font: &FontInfo| font.tags.intersects(tags))
}

/// Font carries none of `tags`.
pub fn none_of_in(tags: FontTags) -> BoxedPredicate {
    Box::new(move |font: &FontInfo| !font.tags.intersects(tags))
}

pub fn and(first: BoxedPredicate, second: BoxedPredicate) -> BoxedPredicate {
    Box::new(move |font: &FontInfo| first.evaluate(font) && second.evaluate(font))
}

pub fn or(first: BoxedPredicate, second: BoxedPredicate) -> BoxedPredicate {
    Box::new(move |font: &FontInfo| first.evaluate(font) || second.evaluate(font))
}

pub fn not(inner: BoxedPredicate) -> BoxedPredicate {
    Box::new(move |font: &FontInfo| !inner.evaluate(font))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fontinfo::{FontBuild, FontForm, FontWidth};

    fn font() -> FontInfo {
        FontInfo {
            family_name: "Noto Sans Thai Looped".to_string(),
            form: FontForm::SansSerif,
            width: FontWidth::Condensed,
            build: FontBuild::Hinted,
            tags: FontTags::LOOPED | FontTags::UI,
            ..FontInfo::default()
        }
    }

    #[test]
    fn attribute_filters() {
        let f = font();
        assert!(any_of([FontForm::SansSerif, FontForm::Serif]).evaluate(&f));
        assert!(!any_of([FontBuild::Full]).evaluate(&f));
        assert!(none_of([FontWidth::Variable]).evaluate(&f));
        assert!(!none_of([FontWidth::Condensed]).evaluate(&f));
    }

    #[test]
    fn text_filters() {
        let f = font();
        assert!(any_of_text(TextField::FamilyName, ["Noto Sans Thai Looped"]).evaluate(&f));
        assert!(!any_of_text(TextField::FamilyName, ["Noto Sans Thai"]).evaluate(&f));
        assert!(none_of_text(TextField::FamilyName, ["Noto Sans Thai"]).evaluate(&f));
        assert!(any_of_str_in(TextField::FamilyName, ["Looped"]).evaluate(&f));
        assert!(none_of_str_in(TextField::FamilyName, ["Supplement"]).evaluate(&f));
    }

    #[test]
    fn tag_filters() {
        let f = font();
        assert!(any_of_in(FontTags::UI | FontTags::MONO).evaluate(&f));
        assert!(!none_of_in(FontTags::UI).evaluate(&f));
        assert!(none_of_in(FontTags::DISPLAY).evaluate(&f));
    }

    #[test]
    fn combinators_compose() {
        let f = font();
        let sans_not_ui = and(any_of([FontForm::SansSerif]), none_of_in(FontTags::UI));
        assert!(!sans_not_ui.evaluate(&f));
        assert!(or(sans_not_ui, any_of([FontBuild::Hinted])).evaluate(&f));
        assert!(not(any_of([FontBuild::Full])).evaluate(&f));
    }

    #[test]
    fn closures_are_predicates() {
        let custom = |font: &FontInfo| font.family_name.starts_with("Noto");
        assert!(custom.evaluate(&font()));
    }
}
