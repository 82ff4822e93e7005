//! fontfinder-core: which font does this text want?
//!
//! Give it a sample of text and it tells you which Unicode script dominates, which language
//! variant applies when a script is shared (Han for Chinese, Japanese and Korean), and which
//! Noto family serves it best. Then it lists the family members worth downloading.
//!
//! ## How the pieces fit
//!
//! **Analysis** ([`text`]): count scripts in the first characters, pick the most frequent
//! specific one, spot emoji, and tell Han texts apart by their neighbours.
//!
//! **Catalog** ([`noto`], [`cjk`], [`classify`], [`catalog`]): turn the Noto metadata and the
//! built-in CJK table into one sorted list of [`FontInfo`] records, classifying each file name
//! into form, width, weight, style, format and build.
//!
//! **Selection** ([`filters`], [`prefs`], [`finder`]): narrow the fonts for a script through
//! cascading preferences that never leave you with nothing.
//!
//! ## A short example
//!
//! ```rust
//! use fontfinder_core::{FontFinder, NotoMetadata};
//!
//! let noto = NotoMetadata::from_json(r#"{
//!     "thai": {"families": {
//!         "Noto Sans Thai": {"files": {"hinted": ["fonts/NotoSansThai/hinted/ttf/NotoSansThai-Regular.ttf"]}},
//!         "Noto Sans Thai Looped": {"files": {"full": ["fonts/NotoSansThaiLooped/full/otf/NotoSansThaiLooped-Regular.otf"]}}
//!     }}
//! }"#)?;
//! let finder = FontFinder::new(noto);
//!
//! let family = finder.find_font_family("สวัสดีครับ").expect("Thai is covered");
//! assert_eq!(family, "Noto Sans Thai Looped");
//!
//! let members = finder.find_family_members(&[family], None);
//! assert_eq!(members[0].postscript_name, "NotoSansThaiLooped-Regular");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The library never touches the network or the file system; fetching `noto.json` and
//! installing fonts belong to the caller.
//!
//! ---
//!
//! Crafted with care at FontLab https://www.fontlab.com/

pub mod catalog;
pub mod cjk;
pub mod classify;
pub mod config;
pub mod error;
pub mod filters;
pub mod finder;
pub mod fontinfo;
pub mod noto;
pub mod output;
pub mod prefs;
pub mod text;

pub use catalog::Catalog;
pub use config::FinderConfig;
pub use error::{FinderError, Result};
pub use finder::{FontFinder, TextQuery};
pub use fontinfo::{
    FontBuild, FontForm, FontFormat, FontInfo, FontStyle, FontTags, FontWeight, FontWidth,
};
pub use noto::NotoMetadata;
pub use prefs::{Preferences, SelectorKey};
pub use text::{HanVariantTable, ScriptAnalyzer, TextInfo};
