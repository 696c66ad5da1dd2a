//! The per-document font registry.
//!
//! Core fonts are always available but only enter the registry the first time
//! they are selected; user fonts enter it through [`FontRegistry::add_font`].
//! Entries are never removed and keep the index they were given on first use.

use crate::alias::{alias_target, normalize_family};
use crate::core::{self, is_core_family, is_styleless};
use crate::descriptor::FontDescriptor;
use crate::error::FontError;
use crate::style::{FontStyle, StyleSpec};
use crate::truetype::TrueTypeFace;
use crate::warning::FontWarning;
use indexmap::IndexMap;

/// The outcome of a successful font selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub family: String,
    pub style: FontStyle,
    pub underline: bool,
    pub key: String,
    pub index: usize,
}

#[derive(Debug, Default)]
pub struct FontRegistry {
    fonts: IndexMap<String, FontDescriptor>,
    warnings: Vec<FontWarning>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes `name` and replaces an alias with its core family, recording
    /// a substitution warning when that happens.
    pub fn resolve_family(&mut self, name: &str) -> String {
        let normalized = normalize_family(name);
        match alias_target(&normalized) {
            Some(target) => {
                self.warn(FontWarning::Substituted {
                    given: normalized,
                    target: target.to_string(),
                });
                target.to_string()
            }
            None => normalized,
        }
    }

    /// Resolves `family` and `style` to a registered font, registering the core
    /// font on first use.
    ///
    /// An alias is only substituted when no user font is registered under the
    /// alias itself. Bold and italic are dropped for single-style families
    /// while underline is kept.
    ///
    /// # Errors
    ///
    /// Returns `FontError::UndefinedFont` if the family is neither a core font
    /// nor previously added. Nothing is registered or warned in that case.
    pub fn select(&mut self, family: &str, style: &str) -> Result<Selection, FontError> {
        let spec = StyleSpec::parse(style);
        let mut family = normalize_family(family);
        let mut style = spec.style;
        let mut pending = Vec::new();

        if let Some(target) = alias_target(&family)
            && !self.fonts.contains_key(&font_key(&family, style))
        {
            pending.push(FontWarning::Substituted {
                given: family.clone(),
                target: target.to_string(),
            });
            family = target.to_string();
        } else if is_styleless(&family) && !style.is_regular() {
            pending.push(FontWarning::StyleDropped {
                family: family.clone(),
            });
            style = FontStyle::REGULAR;
        }

        let key = font_key(&family, style);
        let index = match self.fonts.get(&key) {
            Some(font) => font.index,
            None => {
                let core_font =
                    core::lookup(&key).ok_or_else(|| FontError::UndefinedFont {
                        family: family.clone(),
                    })?;
                let index = self.next_index();
                log::debug!("Registering core font '{}' as /F{}", key, index);
                self.fonts
                    .insert(key.clone(), FontDescriptor::from_core(core_font, index));
                index
            }
        };

        for warning in pending {
            self.warn(warning);
        }

        Ok(Selection {
            family,
            style,
            underline: spec.underline,
            key,
            index,
        })
    }

    /// Registers a user TrueType font under `family` + `style`.
    ///
    /// `load` is only called when the font actually needs loading: core
    /// families (after alias resolution) and keys that are already registered
    /// are left untouched with an `AlreadyRegistered` warning, and `Ok(false)`
    /// is returned.
    pub fn add_font<F>(&mut self, family: &str, style: &str, load: F) -> Result<bool, FontError>
    where
        F: FnOnce(&str, FontStyle) -> Result<Vec<u8>, FontError>,
    {
        let family = normalize_family(family);
        let style = StyleSpec::parse(style).style;
        let key = font_key(&family, style);

        let core_family = alias_target(&family).unwrap_or(family.as_str());
        if is_core_family(core_family) || self.fonts.contains_key(&key) {
            self.warn(FontWarning::AlreadyRegistered { key });
            return Ok(false);
        }

        let face = TrueTypeFace::parse(load(&family, style)?)?;
        let index = self.next_index();
        log::debug!(
            "Registering TrueType font '{}' ({}) as /F{}",
            key,
            face.postscript_name,
            index
        );
        self.fonts.insert(
            key.clone(),
            FontDescriptor::from_truetype(key, family, style, index, face),
        );
        Ok(true)
    }

    pub fn get(&self, key: &str) -> Option<&FontDescriptor> {
        self.fonts.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fonts.contains_key(key)
    }

    /// Registered fonts in index order.
    pub fn iter(&self) -> impl Iterator<Item = &FontDescriptor> {
        self.fonts.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fonts.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    pub fn warnings(&self) -> &[FontWarning] {
        &self.warnings
    }

    pub fn take_warnings(&mut self) -> Vec<FontWarning> {
        std::mem::take(&mut self.warnings)
    }

    fn next_index(&self) -> usize {
        self.fonts.len() + 1
    }

    fn warn(&mut self, warning: FontWarning) {
        log::warn!("{}", warning);
        self.warnings.push(warning);
    }
}

fn font_key(family: &str, style: FontStyle) -> String {
    format!("{}{}", family, style.as_str())
}
