//! Event types consumed by the tree builder.
//!
//! Tokenizing raw markup is an external collaborator's job: anything able to
//! produce this six-variant stream (with tag names already split out,
//! attributes as ordered name/value pairs, and reference bodies stripped of
//! their `&`/`&#`/`;` framing) can drive [`TreeBuilder`](crate::TreeBuilder).

/// A single name/value pair from a start tag.
///
/// Pairs arrive in source order; when the same name appears twice in one tag
/// the builder keeps the later value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// The attribute name, case as supplied by the tokenizer.
    pub name: String,
    /// The attribute value (empty string for valueless attributes).
    pub value: String,
}

impl Attribute {
    /// Create a new attribute.
    #[must_use]
    pub const fn new(name: String, value: String) -> Self {
        Self { name, value }
    }
}

/// One tokenizer event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// An opening tag, e.g. `<div id="main">`.
    StartTag {
        /// The tag name, case as supplied by the tokenizer.
        name: String,
        /// The attribute pairs, in source order.
        attributes: Vec<Attribute>,
    },
    /// A closing tag, e.g. `</div>`.
    EndTag {
        /// The tag name being closed.
        name: String,
    },
    /// A run of character data.
    Data {
        /// The literal text.
        text: String,
    },
    /// A named entity reference, e.g. `&amp;`.
    EntityRef {
        /// The entity name without the `&` and `;` framing (`"amp"`).
        name: String,
    },
    /// A numeric character reference, e.g. `&#65;` or `&#x41;`.
    CharRef {
        /// The reference body without the `&#` and `;` framing: `"65"`, or
        /// `"x41"` with a lowercase `x` prefix for hexadecimal.
        raw: String,
    },
    /// A markup declaration, e.g. `<!DOCTYPE html>`.
    Decl {
        /// The raw declaration content without the `<!` and `>` framing.
        text: String,
    },
}

impl Event {
    /// Create a start-tag event from a name and attribute pairs.
    #[must_use]
    pub fn start_tag(name: &str, attributes: &[(&str, &str)]) -> Self {
        Event::StartTag {
            name: name.to_string(),
            attributes: attributes
                .iter()
                .map(|&(n, v)| Attribute::new(n.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Create an end-tag event.
    #[must_use]
    pub fn end_tag(name: &str) -> Self {
        Event::EndTag {
            name: name.to_string(),
        }
    }

    /// Create a character-data event.
    #[must_use]
    pub fn data(text: &str) -> Self {
        Event::Data {
            text: text.to_string(),
        }
    }

    /// Create a named entity reference event.
    #[must_use]
    pub fn entity_ref(name: &str) -> Self {
        Event::EntityRef {
            name: name.to_string(),
        }
    }

    /// Create a numeric character reference event.
    #[must_use]
    pub fn char_ref(raw: &str) -> Self {
        Event::CharRef {
            raw: raw.to_string(),
        }
    }

    /// Create a declaration event.
    #[must_use]
    pub fn decl(text: &str) -> Self {
        Event::Decl {
            text: text.to_string(),
        }
    }
}
