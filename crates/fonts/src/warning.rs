use std::fmt;

/// A non-fatal condition raised while resolving or registering a font.
///
/// The operation that produced the warning has already carried on with a
/// corrected value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontWarning {
    /// An alias was replaced by the core family it stands for.
    Substituted { given: String, target: String },
    /// Bold/italic was requested for a font that only has one style.
    StyleDropped { family: String },
    /// `add_font` was called for a core font or an already registered key.
    AlreadyRegistered { key: String },
}

impl fmt::Display for FontWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontWarning::Substituted { given, target } => {
                write!(f, "Substitutting font {given} by core font {target}")
            }
            FontWarning::StyleDropped { family } => write!(
                f,
                "Built-in font {family} only has a single 'style' and can't be bold or italic"
            ),
            FontWarning::AlreadyRegistered { key } => {
                write!(f, "Core font or font already added '{key}': doing nothing")
            }
        }
    }
}
