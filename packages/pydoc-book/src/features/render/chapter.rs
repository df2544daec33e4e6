//! Chapter rendering
//!
//! Layout:
//!
//! ```text
//! # {chapter title}
//!
//! ## class Client(url, retries=3)
//!
//! {class doc}
//!
//! ### Client.send(data)
//!
//! {method doc}
//!
//!
//! ## connect(url) -> Client
//!
//! {function doc}
//! ```
//!
//! Leaf sections end with three newlines; the chapter body is trimmed before
//! it is wrapped, so the file has no trailing whitespace.

use super::section::Section;
use crate::features::walker::{DocUnit, MethodUnit};

const LEAF_SEPARATOR: &str = "\n\n\n";
const CLASS_DOC_SEPARATOR: &str = "\n\n";

/// Render a whole chapter titled `title`
pub fn render_chapter(title: &str, units: &[DocUnit]) -> String {
    let body: String = units.iter().map(render_unit).collect();
    Section::new(Section::CHAPTER, title, body.trim()).render()
}

/// Render one unit; [`DocUnit::Module`] contributes nothing by itself
pub fn render_unit(unit: &DocUnit) -> String {
    match unit {
        DocUnit::Module => String::new(),
        DocUnit::Class {
            name,
            doc,
            constructor_signature,
            members,
        } => {
            let mut body = String::new();
            if let Some(doc) = doc.as_deref().filter(|doc| !doc.is_empty()) {
                body.push_str(doc);
                body.push_str(CLASS_DOC_SEPARATOR);
            }
            for member in members {
                body.push_str(&render_member(member));
            }

            let title = format!(
                "class {}({})",
                name,
                constructor_signature.as_deref().unwrap_or("")
            );
            Section::new(Section::ITEM, title, body).render()
        }
        DocUnit::Function { doc, signature, .. } => {
            Section::new(Section::ITEM, signature.as_str(), leaf_body(doc)).render()
        }
    }
}

fn render_member(member: &MethodUnit) -> String {
    Section::new(Section::MEMBER, member.signature.as_str(), leaf_body(&member.doc)).render()
}

fn leaf_body(doc: &str) -> String {
    format!("{}{}", doc, LEAF_SEPARATOR)
}
