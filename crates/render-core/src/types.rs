use crate::traits::ContentSink;
use crate::utils::to_single_bytes;

/// The operator buffer of one page together with its size in points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageContent {
    pub width_pt: f64,
    pub height_pt: f64,
    ops: Vec<String>,
}

impl PageContent {
    pub fn new(width_pt: f64, height_pt: f64) -> Self {
        Self {
            width_pt,
            height_pt,
            ops: Vec::new(),
        }
    }

    /// Operators in the order they were appended.
    pub fn operations(&self) -> &[String] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// The content stream: one operator per line, each char written as one byte.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.ops.iter().map(|op| op.len() + 1).sum());
        for op in &self.ops {
            out.extend(to_single_bytes(op));
            out.push(b'\n');
        }
        out
    }
}

impl ContentSink for PageContent {
    fn append(&mut self, op: String) {
        self.ops.push(op);
    }
}

/// Values for the document information dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
}
