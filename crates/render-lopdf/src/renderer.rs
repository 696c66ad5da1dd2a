use crate::fonts::write_font;
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};
use std::io::Write;
use vellum_fonts::FontRegistry;
use vellum_render_core::{DocumentInfo, DocumentRenderer, PageContent, RenderError};

const PDF_VERSION: &str = "1.3";

/// A PDF renderer that assembles the whole file in memory with `lopdf` and
/// writes it out on `finish`.
pub struct LopdfRenderer {
    doc: Document,
    pages_id: ObjectId,
    resources_id: Option<ObjectId>,
    info_id: Option<ObjectId>,
    page_ids: Vec<ObjectId>,
}

impl Default for LopdfRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl LopdfRenderer {
    pub fn new() -> Self {
        let mut doc = Document::with_version(PDF_VERSION);
        let pages_id = doc.new_object_id();
        Self {
            doc,
            pages_id,
            resources_id: None,
            info_id: None,
            page_ids: Vec::new(),
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }
}

fn info_dictionary(info: &DocumentInfo) -> Dictionary {
    let mut dict = Dictionary::new();
    let entries = [
        ("Title", &info.title),
        ("Author", &info.author),
        ("Subject", &info.subject),
        ("Creator", &info.creator),
        ("Producer", &info.producer),
    ];
    for (key, value) in entries {
        if let Some(value) = value {
            dict.set(key, Object::string_literal(value.as_str()));
        }
    }
    dict
}

impl<W: Write> DocumentRenderer<W> for LopdfRenderer {
    fn begin_document(
        &mut self,
        fonts: &FontRegistry,
        info: &DocumentInfo,
    ) -> Result<(), RenderError> {
        if self.resources_id.is_some() {
            return Err(RenderError::Other("Document already started".into()));
        }

        let mut font_dict = Dictionary::new();
        for font in fonts.iter() {
            let font_id = write_font(&mut self.doc, font);
            log::debug!("Font '{}' written as /{} ({})", font.key, font.resource_name(), font.kind.as_str());
            font_dict.set(font.resource_name(), font_id);
        }

        let resources = dictionary! {
            "ProcSet" => vec![Object::from("PDF"), Object::from("Text")],
            "Font" => font_dict,
        };
        self.resources_id = Some(self.doc.add_object(resources));

        let info_dict = info_dictionary(info);
        if !info_dict.is_empty() {
            self.info_id = Some(self.doc.add_object(info_dict));
        }
        Ok(())
    }

    fn render_page(&mut self, page: &PageContent) -> Result<ObjectId, RenderError> {
        let resources_id = self
            .resources_id
            .ok_or_else(|| RenderError::Other("Document not started".into()))?;

        let content_id = self
            .doc
            .add_object(Stream::new(Dictionary::new(), page.to_bytes()));

        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                (page.width_pt as f32).into(),
                (page.height_pt as f32).into(),
            ],
            "Contents" => content_id,
            "Resources" => resources_id,
        };
        let page_id = self.doc.add_object(page_dict);
        self.page_ids.push(page_id);
        Ok(page_id)
    }

    fn finish(mut self: Box<Self>, mut writer: W) -> Result<W, RenderError> {
        if self.resources_id.is_none() {
            return Err(RenderError::Other(
                "Document not started or already finished".into(),
            ));
        }

        let kids: Vec<Object> = self.page_ids.iter().copied().map(Object::Reference).collect();
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => Object::Integer(self.page_ids.len() as i64),
        };
        self.doc.objects.insert(self.pages_id, Object::Dictionary(pages));

        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.doc.trailer.set("Root", catalog_id);
        if let Some(info_id) = self.info_id {
            self.doc.trailer.set("Info", info_id);
        }

        self.doc.save_to(&mut writer)?;
        Ok(writer)
    }
}

/// Renders `pages` with the fonts of `fonts` into an in-memory PDF file.
pub fn render_to_vec(
    fonts: &FontRegistry,
    info: &DocumentInfo,
    pages: &[PageContent],
) -> Result<Vec<u8>, RenderError> {
    let mut renderer: Box<dyn DocumentRenderer<Vec<u8>>> = Box::new(LopdfRenderer::new());
    renderer.begin_document(fonts, info)?;
    for page in pages {
        renderer.render_page(page)?;
    }
    renderer.finish(Vec::new())
}
