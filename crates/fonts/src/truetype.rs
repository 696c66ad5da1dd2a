//! Metrics extraction for user-supplied TrueType fonts.
use crate::core::{CORE_UNDERLINE_POSITION, CORE_UNDERLINE_THICKNESS};
use crate::encoding::win_ansi_char;
use crate::error::FontError;
use std::sync::Arc;

/// A parsed TrueType font: the raw program (embedded whole on output) plus the
/// metrics a simple-font dictionary needs, scaled to 1/1000 em.
pub struct TrueTypeFace {
    pub data: Arc<Vec<u8>>,
    pub postscript_name: String,
    pub ascent: i32,
    pub descent: i32,
    pub cap_height: i32,
    pub bbox: [i32; 4],
    pub italic_angle: i32,
    pub stem_v: i32,
    pub flags: u32,
    pub underline_position: i32,
    pub underline_thickness: i32,
    /// Advance widths indexed by WinAnsi code.
    pub widths: [u16; 256],
    pub missing_width: u16,
}

impl std::fmt::Debug for TrueTypeFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrueTypeFace")
            .field("postscript_name", &self.postscript_name)
            .field("data_len", &self.data.len())
            .finish()
    }
}

const FLAG_FIXED_PITCH: u32 = 1;
const FLAG_NONSYMBOLIC: u32 = 1 << 5;
const FLAG_ITALIC: u32 = 1 << 6;

impl TrueTypeFace {
    pub fn parse(data: Vec<u8>) -> Result<Self, FontError> {
        let face = ttf_parser::Face::parse(&data, 0)
            .map_err(|e| FontError::InvalidFontData(e.to_string()))?;

        let upem = f64::from(face.units_per_em());
        let scale = |v: f64| (v * 1000.0 / upem).round() as i32;

        let postscript_name = extract_postscript_name(&face)
            .ok_or_else(|| FontError::InvalidFontData("font has no usable name".to_string()))?;

        let ascent = scale(f64::from(face.ascender()));
        let descent = scale(f64::from(face.descender()));
        let cap_height = face
            .capital_height()
            .map(|h| scale(f64::from(h)))
            .unwrap_or(ascent);
        let bbox = face.global_bounding_box();
        let bbox = [
            scale(f64::from(bbox.x_min)),
            scale(f64::from(bbox.y_min)),
            scale(f64::from(bbox.x_max)),
            scale(f64::from(bbox.y_max)),
        ];

        let (underline_position, underline_thickness) = face
            .underline_metrics()
            .map(|m| (scale(f64::from(m.position)), scale(f64::from(m.thickness))))
            .unwrap_or((CORE_UNDERLINE_POSITION, CORE_UNDERLINE_THICKNESS));

        let missing_width = face
            .glyph_hor_advance(ttf_parser::GlyphId(0))
            .map(|adv| scale(f64::from(adv)).max(0) as u16)
            .unwrap_or(0);

        let mut widths = [missing_width; 256];
        for (code, width) in widths.iter_mut().enumerate() {
            let advance = win_ansi_char(code as u8)
                .and_then(|ch| face.glyph_index(ch))
                .and_then(|gid| face.glyph_hor_advance(gid));
            if let Some(adv) = advance {
                *width = scale(f64::from(adv)).max(0) as u16;
            }
        }

        let mut flags = FLAG_NONSYMBOLIC;
        if face.is_monospaced() {
            flags |= FLAG_FIXED_PITCH;
        }
        if face.is_italic() {
            flags |= FLAG_ITALIC;
        }
        let italic_angle = if face.is_italic() { -12 } else { 0 };
        let stem_v = if face.is_bold() { 120 } else { 80 };

        log::debug!(
            "Parsed TrueType font '{}' ({} bytes, {} units/em)",
            postscript_name,
            data.len(),
            upem
        );

        Ok(Self {
            data: Arc::new(data),
            postscript_name,
            ascent,
            descent,
            cap_height,
            bbox,
            italic_angle,
            stem_v,
            flags,
            underline_position,
            underline_thickness,
            widths,
            missing_width,
        })
    }
}

/// PostScript name (name ID 6), falling back to the full name and then the
/// family name with spaces removed. Records that do not decode, such as most
/// Macintosh-platform ones, are skipped in favour of later records.
fn extract_postscript_name(face: &ttf_parser::Face<'_>) -> Option<String> {
    let find = |id: u16| {
        face.names()
            .into_iter()
            .filter(|n| n.name_id == id)
            .find_map(|n| n.to_string())
    };

    if let Some(ps_name) = find(ttf_parser::name_id::POST_SCRIPT_NAME) {
        return Some(ps_name);
    }
    if let Some(full_name) = find(ttf_parser::name_id::FULL_NAME) {
        log::debug!("Using full name as PostScript name: {}", full_name);
        return Some(full_name.replace(' ', ""));
    }
    find(ttf_parser::name_id::FAMILY).map(|family| family.replace(' ', ""))
}
