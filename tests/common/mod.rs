pub mod fixtures;

use lopdf::{Dictionary, Document as LopdfDocument, Object};
use vellum::{Document, Unit};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A document in `unit` with one open page.
pub fn doc_with_page(unit: Unit) -> Document {
    init_logging();
    let mut doc = Document::with_unit(unit);
    doc.add_page();
    doc
}

/// Records what a closure appends to the open page.
pub fn emitted<F>(doc: &mut Document, draw: F) -> Vec<String>
where
    F: FnOnce(&mut Document),
{
    let mark = doc.operations().len();
    draw(doc);
    doc.operations()[mark..].to_vec()
}

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Decoded content stream of page `number` (1-based).
    pub fn page_content(&self, number: u32) -> Result<String, Box<dyn std::error::Error>> {
        let page_id = *self
            .doc
            .get_pages()
            .get(&number)
            .ok_or("page not found")?;
        let bytes = self.doc.get_page_content(page_id)?;
        Ok(bytes.iter().map(|b| char::from(*b)).collect())
    }

    /// Font dictionaries of the first page, keyed by resource name.
    pub fn fonts(&self) -> Vec<(String, Dictionary)> {
        let mut fonts = Vec::new();
        let Some(page_id) = self.doc.get_pages().get(&1).copied() else {
            return fonts;
        };
        if let Ok(page) = self.doc.get_dictionary(page_id)
            && let Ok(resources) = page.get(b"Resources").and_then(|r| self.resolve_dict(r))
            && let Ok(font_dict) = resources.get(b"Font").and_then(|f| self.resolve_dict(f))
        {
            for (name, font) in font_dict.iter() {
                if let Ok(font) = self.resolve_dict(font) {
                    fonts.push((String::from_utf8_lossy(name).into_owned(), font.clone()));
                }
            }
        }
        fonts.sort_by(|a, b| a.0.cmp(&b.0));
        fonts
    }

    pub fn resolve_dict<'a>(&'a self, object: &'a Object) -> lopdf::Result<&'a Dictionary> {
        match object {
            Object::Reference(id) => self.doc.get_dictionary(*id),
            other => other.as_dict(),
        }
    }

    pub fn info_string(&self, key: &[u8]) -> Option<String> {
        let info = self.doc.trailer.get(b"Info").ok()?;
        let info = self.resolve_dict(info).ok()?;
        let value = info.get(key).ok()?.as_str().ok()?;
        Some(String::from_utf8_lossy(value).into_owned())
    }
}

pub fn name_of(dict: &Dictionary, key: &[u8]) -> Option<String> {
    dict.get(key)
        .and_then(|v| v.as_name())
        .ok()
        .map(|n| String::from_utf8_lossy(n).into_owned())
}
