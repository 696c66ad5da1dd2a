//! The document: page lifecycle, graphics state and the drawing entry points.
use crate::config::DocumentConfig;
use crate::drawing::path;
use crate::drawing::text::{self, CellBounds, TextFont};
use crate::drawing::{CellMove, CellStyle, PageFrame, PaintStyle};
use crate::error::DocumentError;
use crate::state::{CurrentFont, GraphicsState};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use vellum_fonts::{FontDescriptor, FontError, FontRegistry, FontStyle, FontWarning};
use vellum_render_core::{ContentSink, DocumentInfo, PageContent};
use vellum_render_lopdf::render_to_vec;
use vellum_types::{Point, Unit};

const PRODUCER: &str = concat!("vellum ", env!("CARGO_PKG_VERSION"));

/// A PDF document under construction.
///
/// Coordinates are in the configured user unit with the origin at the top-left
/// corner of the page. Every drawing call appends operators to the content of
/// the open page in call order.
#[derive(Debug)]
pub struct Document {
    config: DocumentConfig,
    /// Points per user unit.
    k: f64,
    w_pt: f64,
    h_pt: f64,
    fonts: FontRegistry,
    state: GraphicsState,
    pages: Vec<PageContent>,
    info: DocumentInfo,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// A portrait A4 document measured in millimeters.
    pub fn new() -> Self {
        Self::build(DocumentConfig::default())
    }

    pub fn with_config(config: DocumentConfig) -> Result<Self, DocumentError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// A portrait A4 document measured in `unit`.
    pub fn with_unit(unit: Unit) -> Self {
        Self::build(DocumentConfig::default().with_unit(unit))
    }

    fn build(config: DocumentConfig) -> Self {
        let k = config.unit.scale_factor();
        let (w_pt, h_pt) = config.page_size_pt();
        log::debug!(
            "New document: {:.2} x {:.2} pt, unit {} (k = {})",
            w_pt,
            h_pt,
            config.unit,
            k
        );
        Self {
            config,
            k,
            w_pt,
            h_pt,
            fonts: FontRegistry::new(),
            state: GraphicsState::new(k),
            pages: Vec::new(),
            info: DocumentInfo {
                producer: Some(PRODUCER.to_string()),
                ..Default::default()
            },
        }
    }

    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    /// Points per user unit.
    pub fn scale_factor(&self) -> f64 {
        self.k
    }

    /// Page width in user units.
    pub fn page_width(&self) -> f64 {
        self.w_pt / self.k
    }

    /// Page height in user units.
    pub fn page_height(&self) -> f64 {
        self.h_pt / self.k
    }

    fn frame(&self) -> PageFrame {
        PageFrame {
            k: self.k,
            h: self.page_height(),
        }
    }

    // --- Page lifecycle ---

    /// Closes the current page, if any, and starts a new one with the cursor at
    /// the top-left margin. The line width and the current font carry over.
    pub fn add_page(&mut self) {
        self.pages.push(PageContent::new(self.w_pt, self.h_pt));
        self.state.page_open = true;
        self.state.home();
        log::debug!("Opened page {}", self.pages.len());

        let frame = self.frame();
        let line_width = self.state.line_width;
        let font = self.current_font_index();
        let size_pt = self.state.font_size_pt;
        if let Some(page) = self.pages.last_mut() {
            page.append("2 J".to_string());
            path::line_width(page, frame, line_width);
            if let Some(index) = font {
                text::select_font(page, index, size_pt);
            }
        }
    }

    /// Number of the current page, starting at 1; 0 before the first page.
    pub fn page_no(&self) -> usize {
        self.pages.len()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn has_open_page(&self) -> bool {
        self.state.page_open
    }

    /// Content of page `number` (1-based).
    pub fn page_content(&self, number: usize) -> Option<&PageContent> {
        number.checked_sub(1).and_then(|i| self.pages.get(i))
    }

    /// Operators of the open page in emission order.
    pub fn operations(&self) -> &[String] {
        match self.pages.last() {
            Some(page) if self.state.page_open => page.operations(),
            _ => &[],
        }
    }

    fn open_page(&mut self) -> Result<&mut PageContent, DocumentError> {
        if !self.state.page_open {
            return Err(DocumentError::NoOpenPage);
        }
        self.pages.last_mut().ok_or(DocumentError::NoOpenPage)
    }

    // --- Cursor and margins ---

    pub fn x(&self) -> f64 {
        self.state.x
    }

    pub fn y(&self) -> f64 {
        self.state.y
    }

    /// Negative values are measured from the right edge.
    pub fn set_x(&mut self, x: f64) {
        self.state.x = if x >= 0.0 { x } else { self.page_width() + x };
    }

    /// Moves to `y` and back to the left margin. Negative values are measured
    /// from the bottom edge.
    pub fn set_y(&mut self, y: f64) {
        self.state.x = self.state.margins.left;
        self.state.y = if y >= 0.0 { y } else { self.page_height() + y };
    }

    pub fn set_xy(&mut self, x: f64, y: f64) {
        self.set_y(y);
        self.set_x(x);
    }

    pub fn set_margins(&mut self, left: f64, top: f64, right: Option<f64>) {
        self.state.margins.left = left;
        self.state.margins.top = top;
        self.state.margins.right = right.unwrap_or(left);
    }

    pub fn left_margin(&self) -> f64 {
        self.state.margins.left
    }

    pub fn top_margin(&self) -> f64 {
        self.state.margins.top
    }

    pub fn right_margin(&self) -> f64 {
        self.state.margins.right
    }

    /// Inset of cell text from the cell edge.
    pub fn cell_margin(&self) -> f64 {
        self.state.cell_margin
    }

    pub fn set_cell_margin(&mut self, margin: f64) {
        self.state.cell_margin = margin;
    }

    /// Moves to the left margin and down by `h`, or by the height of the last
    /// cell when `h` is `None`.
    pub fn ln(&mut self, h: Option<f64>) {
        self.state.x = self.state.margins.left;
        self.state.y += h.unwrap_or(self.state.last_cell_height);
    }

    pub fn line_width(&self) -> f64 {
        self.state.line_width
    }

    /// Sets the stroke width, emitting it right away when a page is open.
    pub fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
        let frame = self.frame();
        if let Ok(page) = self.open_page() {
            path::line_width(page, frame, width);
        }
    }

    // --- Metadata ---

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.info.title = Some(title.into());
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.info.author = Some(author.into());
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.info.subject = Some(subject.into());
    }

    pub fn set_creator(&mut self, creator: impl Into<String>) {
        self.info.creator = Some(creator.into());
    }

    pub fn info(&self) -> &DocumentInfo {
        &self.info
    }

    // --- Fonts ---

    /// Selects the font used by subsequent text.
    ///
    /// An empty `family` keeps the current family, and `size` of `None` or
    /// zero keeps the current size (in points). `style` is any combination of
    /// `B`, `I` and `U`.
    ///
    /// # Errors
    ///
    /// `FontError::UndefinedFont` when the family is neither a core font nor
    /// previously added with [`Document::add_font`].
    pub fn set_font(
        &mut self,
        family: &str,
        style: &str,
        size: Option<f64>,
    ) -> Result<(), DocumentError> {
        let family = if family.trim().is_empty() {
            self.font_family().unwrap_or_default().to_string()
        } else {
            family.to_string()
        };
        let size_pt = match size {
            Some(size) if size > 0.0 => size,
            _ => self.state.font_size_pt,
        };

        let selection = self.fonts.select(&family, style)?;
        self.state.underline = selection.underline;
        if self.state.is_current(&selection.key, size_pt) {
            return Ok(());
        }

        log::debug!(
            "Font set to '{}' ({} pt) as /F{}",
            selection.key,
            size_pt,
            selection.index
        );
        self.state.font = Some(CurrentFont {
            key: selection.key,
            family: selection.family,
            style: selection.style,
        });
        self.state.font_size_pt = size_pt;
        if let Ok(page) = self.open_page() {
            text::select_font(page, selection.index, size_pt);
        }
        Ok(())
    }

    /// Changes only the font size, in points. Sizes that are not positive are
    /// ignored, as in [`Document::set_font`].
    pub fn set_font_size(&mut self, size_pt: f64) {
        if size_pt <= 0.0 || self.state.font_size_pt == size_pt {
            return;
        }
        self.state.font_size_pt = size_pt;
        let font = self.current_font_index();
        if let (Some(index), Ok(page)) = (font, self.open_page()) {
            text::select_font(page, index, size_pt);
        }
    }

    /// Registers a TrueType font under `family` and `style`.
    ///
    /// Without a `path` the file `{font_dir}/{family}{style}.ttf` is read, with
    /// spaces removed from the family and the style lowercased. Core families
    /// and already registered fonts are left alone with a warning.
    pub fn add_font(
        &mut self,
        family: &str,
        style: &str,
        path: Option<&Path>,
    ) -> Result<(), DocumentError> {
        let font_dir = self.config.font_dir.clone();
        self.fonts.add_font(family, style, |family, style| {
            let path = match path {
                Some(path) => path.to_path_buf(),
                None => default_font_path(font_dir.as_deref(), family, style),
            };
            log::debug!("Loading font file {}", path.display());
            std::fs::read(&path).map_err(|source| FontError::Io {
                path: path.display().to_string(),
                source,
            })
        })?;
        Ok(())
    }

    /// Registers a TrueType font from memory.
    pub fn add_font_bytes(
        &mut self,
        family: &str,
        style: &str,
        data: Vec<u8>,
    ) -> Result<(), DocumentError> {
        self.fonts.add_font(family, style, move |_, _| Ok(data))?;
        Ok(())
    }

    /// Normalizes a family name and replaces an alias with its core family,
    /// recording a `Substituted` warning when it does.
    pub fn resolve_family(&mut self, name: &str) -> String {
        self.fonts.resolve_family(name)
    }

    /// The current family, canonical and lowercase.
    pub fn font_family(&self) -> Option<&str> {
        self.state.font.as_ref().map(|f| f.family.as_str())
    }

    /// The current style: `""`, `"B"`, `"I"` or `"BI"`.
    pub fn font_style(&self) -> &'static str {
        self.state
            .font
            .as_ref()
            .map_or(FontStyle::REGULAR, |f| f.style)
            .as_str()
    }

    pub fn underline(&self) -> bool {
        self.state.underline
    }

    pub fn font_size_pt(&self) -> f64 {
        self.state.font_size_pt
    }

    /// The current font size in user units.
    pub fn font_size(&self) -> f64 {
        self.state.font_size_pt / self.k
    }

    pub fn current_font(&self) -> Option<&FontDescriptor> {
        self.state
            .font
            .as_ref()
            .and_then(|f| self.fonts.get(&f.key))
    }

    /// Every font used or added so far, in index order.
    pub fn fonts(&self) -> &FontRegistry {
        &self.fonts
    }

    pub fn warnings(&self) -> &[FontWarning] {
        self.fonts.warnings()
    }

    pub fn take_warnings(&mut self) -> Vec<FontWarning> {
        self.fonts.take_warnings()
    }

    fn current_font_index(&self) -> Option<usize> {
        self.current_font().map(|f| f.index)
    }

    fn text_font(&self) -> Result<TextFont<'_>, DocumentError> {
        let descriptor = self.current_font().ok_or(DocumentError::NoFontSet)?;
        Ok(TextFont {
            descriptor,
            size_pt: self.state.font_size_pt,
            underline: self.state.underline,
        })
    }

    /// Width of `content` in the current font, in user units.
    pub fn get_string_width(&self, content: &str) -> Result<f64, DocumentError> {
        let font = self.text_font()?;
        let encoded = font.descriptor.encode(content)?;
        Ok(font.width_of(&encoded, self.k))
    }

    // --- Drawing ---

    /// Draws a path through `points`, closing it when `polygon` is set and
    /// filling it as well as stroking it when `fill` is set.
    ///
    /// # Errors
    ///
    /// `NoOpenPage` before [`Document::add_page`], and `DegeneratePath` for
    /// fewer than two points.
    pub fn polyline<P>(
        &mut self,
        points: &[P],
        fill: bool,
        polygon: bool,
    ) -> Result<(), DocumentError>
    where
        P: Into<Point> + Copy,
    {
        let frame = self.frame();
        let page = self.open_page()?;
        let points: Vec<Point> = points.iter().map(|&p| p.into()).collect();
        path::polyline(page, frame, &points, fill, polygon)
    }

    /// A closed [`Document::polyline`].
    pub fn polygon<P>(&mut self, points: &[P], fill: bool) -> Result<(), DocumentError>
    where
        P: Into<Point> + Copy,
    {
        self.polyline(points, fill, true)
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<(), DocumentError> {
        let frame = self.frame();
        let page = self.open_page()?;
        path::line(page, frame, Point::new(x1, y1), Point::new(x2, y2));
        Ok(())
    }

    pub fn rect(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        style: PaintStyle,
    ) -> Result<(), DocumentError> {
        let frame = self.frame();
        let page = self.open_page()?;
        path::rect(page, frame, Point::new(x, y), w, h, style);
        Ok(())
    }

    /// Shows `content` with its baseline starting at `(x, y)` in the current
    /// font, underlined when the current style includes `U`.
    ///
    /// # Errors
    ///
    /// `NoOpenPage`, then `NoFontSet`, then `UnsupportedCharacter` for text the
    /// font cannot encode. Nothing is emitted on error.
    pub fn text(&mut self, x: f64, y: f64, content: &str) -> Result<(), DocumentError> {
        if !self.state.page_open {
            return Err(DocumentError::NoOpenPage);
        }
        let frame = self.frame();
        let font = self.text_font()?;
        let mut ops = Vec::with_capacity(1);
        text::show_text(&mut ops, frame, font, x, y, content)?;
        let page = self.open_page()?;
        for op in ops {
            page.append(op);
        }
        Ok(())
    }

    /// Draws a `w` by `h` cell at the cursor with `content` inside it, then
    /// moves the cursor as `style.then` says. A `w` of zero stretches the cell
    /// to the right margin.
    ///
    /// # Errors
    ///
    /// `NoOpenPage`, then `NoFontSet` when `content` is not empty, then
    /// `UnsupportedCharacter`. Neither the page nor the cursor changes on error.
    pub fn cell(
        &mut self,
        w: f64,
        h: f64,
        content: &str,
        style: CellStyle,
    ) -> Result<(), DocumentError> {
        if !self.state.page_open {
            return Err(DocumentError::NoOpenPage);
        }
        let w = if w == 0.0 {
            self.page_width() - self.state.margins.right - self.state.x
        } else {
            w
        };
        let bounds = CellBounds {
            x: self.state.x,
            y: self.state.y,
            w,
            h,
        };
        let frame = self.frame();
        let padding = self.state.cell_margin;
        let text = if content.is_empty() {
            None
        } else {
            Some((self.text_font()?, content))
        };
        let mut ops = Vec::with_capacity(1);
        text::show_cell(&mut ops, frame, bounds, padding, style, text)?;
        let page = self.open_page()?;
        for op in ops {
            page.append(op);
        }

        self.state.last_cell_height = h;
        match style.then {
            CellMove::Right => self.state.x += w,
            CellMove::NextLine => {
                self.state.x = self.state.margins.left;
                self.state.y += h;
            }
            CellMove::Below => self.state.y += h,
        }
        Ok(())
    }

    // --- Output ---

    /// Closes the document and returns the PDF file. A document without pages
    /// gets one blank page first.
    pub fn output(&mut self) -> Result<Vec<u8>, DocumentError> {
        if self.pages.is_empty() {
            self.add_page();
        }
        self.state.page_open = false;
        log::debug!(
            "Writing {} page(s) with {} font(s)",
            self.pages.len(),
            self.fonts.len()
        );
        Ok(render_to_vec(&self.fonts, &self.info, &self.pages)?)
    }

    pub fn output_to<W: Write>(&mut self, mut writer: W) -> Result<W, DocumentError> {
        let bytes = self.output()?;
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(writer)
    }

    pub fn output_to_file(&mut self, path: impl AsRef<Path>) -> Result<(), DocumentError> {
        let file = File::create(path.as_ref())?;
        self.output_to(BufWriter::new(file))?;
        Ok(())
    }
}

fn default_font_path(font_dir: Option<&Path>, family: &str, style: FontStyle) -> PathBuf {
    let file_name = format!(
        "{}{}.ttf",
        family.replace(' ', ""),
        style.as_str().to_lowercase()
    );
    match font_dir {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}
