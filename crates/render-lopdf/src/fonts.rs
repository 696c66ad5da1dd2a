//! Font dictionaries for the shared resource dictionary.
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};
use vellum_fonts::{FontDescriptor, FontKind, TrueTypeFace};

const FIRST_CHAR: usize = 32;
const LAST_CHAR: usize = 255;

/// Adds the objects for `font` to `doc` and returns the font dictionary id.
pub(crate) fn write_font(doc: &mut Document, font: &FontDescriptor) -> ObjectId {
    match (font.kind, font.face.as_deref()) {
        (FontKind::TrueType, Some(face)) => write_truetype(doc, font, face),
        _ => write_core(doc, font),
    }
}

fn write_core(doc: &mut Document, font: &FontDescriptor) -> ObjectId {
    let mut dict = dictionary! {
        "Type" => "Font",
        "BaseFont" => font.name.as_str(),
        "Subtype" => "Type1",
    };
    if !font.symbolic {
        dict.set("Encoding", "WinAnsiEncoding");
    }
    doc.add_object(dict)
}

fn write_truetype(doc: &mut Document, font: &FontDescriptor, face: &TrueTypeFace) -> ObjectId {
    let program = Stream::new(
        dictionary! { "Length1" => Object::Integer(face.data.len() as i64) },
        face.data.to_vec(),
    );
    let program_id = doc.add_object(program);

    let descriptor: Dictionary = dictionary! {
        "Type" => "FontDescriptor",
        "FontName" => font.name.as_str(),
        "Flags" => Object::Integer(i64::from(face.flags)),
        "FontBBox" => face.bbox.iter().map(|v| Object::Integer(i64::from(*v))).collect::<Vec<_>>(),
        "ItalicAngle" => Object::Integer(i64::from(face.italic_angle)),
        "Ascent" => Object::Integer(i64::from(face.ascent)),
        "Descent" => Object::Integer(i64::from(face.descent)),
        "CapHeight" => Object::Integer(i64::from(face.cap_height)),
        "StemV" => Object::Integer(i64::from(face.stem_v)),
        "MissingWidth" => Object::Integer(i64::from(face.missing_width)),
        "FontFile2" => program_id,
    };
    let descriptor_id = doc.add_object(descriptor);

    let widths: Vec<Object> = font.widths[FIRST_CHAR..=LAST_CHAR]
        .iter()
        .map(|w| Object::Integer(i64::from(*w)))
        .collect();

    doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "TrueType",
        "BaseFont" => font.name.as_str(),
        "FirstChar" => Object::Integer(FIRST_CHAR as i64),
        "LastChar" => Object::Integer(LAST_CHAR as i64),
        "Widths" => widths,
        "FontDescriptor" => descriptor_id,
        "Encoding" => "WinAnsiEncoding",
    })
}
