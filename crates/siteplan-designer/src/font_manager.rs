//! System font lookup for plan labels.
//!
//! Fonts are discovered once through `fontdb` and parsed with `rusttype`;
//! parsed faces are cached per family for the life of the process.

use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use rusttype::Font;
use std::{
    collections::HashMap,
    fs,
    sync::{Mutex, OnceLock},
};

fn db() -> &'static Database {
    static DB: OnceLock<Database> = OnceLock::new();
    DB.get_or_init(|| {
        let mut db = Database::new();
        db.load_system_fonts();
        tracing::debug!("Font database loaded with {} faces", db.len());
        db
    })
}

/// Font for `family`, falling back to any sans-serif face.
///
/// Returns `None` when the system has no usable font at all; callers skip
/// text in that case.
pub fn get_font_for(family: &str) -> Option<&'static Font<'static>> {
    static CACHE: OnceLock<Mutex<HashMap<String, Option<&'static Font<'static>>>>> =
        OnceLock::new();
    let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));

    if let Some(font) = cache
        .lock()
        .unwrap_or_else(|p| p.into_inner())
        .get(family)
    {
        return *font;
    }

    let loaded = load_font_from_system(family).or_else(|| load_font_from_system(""));
    let font_ref: Option<&'static Font<'static>> = match loaded {
        Some(font) => Some(Box::leak(Box::new(font))),
        None => {
            tracing::warn!("No system font found for '{}', labels will be skipped", family);
            None
        }
    };

    cache
        .lock()
        .unwrap_or_else(|p| p.into_inner())
        .insert(family.to_string(), font_ref);
    font_ref
}

fn load_font_from_system(family: &str) -> Option<Font<'static>> {
    let families: Vec<Family<'_>> = match family.trim() {
        "" | "Sans" => vec![Family::SansSerif],
        "Serif" => vec![Family::Serif],
        "Monospace" => vec![Family::Monospace],
        other => vec![Family::Name(other), Family::SansSerif],
    };

    let query = Query {
        families: &families,
        weight: Weight::NORMAL,
        stretch: Stretch::Normal,
        style: Style::Normal,
    };

    let id = db().query(&query)?;
    let face = db().face(id)?;

    match &face.source {
        fontdb::Source::File(path) | fontdb::Source::SharedFile(path, _) => {
            let bytes = fs::read(path).ok()?;
            Font::try_from_vec_and_index(bytes, face.index)
        }
        fontdb::Source::Binary(bytes) => {
            Font::try_from_vec_and_index(bytes.as_ref().as_ref().to_vec(), face.index)
        }
    }
}
