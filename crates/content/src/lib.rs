//! Localized roadmap text.
//!
//! Static bundles of milestone narratives, monthly content and labels,
//! selected once per render by locale.

#![warn(missing_docs)]

mod bundle;
mod en;
mod ja;

pub use bundle::{MonthlyContent, PurposeText, TextBundle, CONTENT_BUCKETS};

use sensei_core::Locale;

/// Text bundle for a locale.
pub fn bundle(locale: Locale) -> &'static TextBundle {
    match locale {
        Locale::Ja => &ja::BUNDLE,
        Locale::En => &en::BUNDLE,
    }
}
