//! Documentable units produced by the walker

use crate::features::signature::Decoration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocUnit {
    /// The file itself; rendered as the chapter wrapper
    Module,
    Class {
        name: String,
        doc: Option<String>,
        /// `__init__` parameters without the receiver
        constructor_signature: Option<String>,
        members: Vec<MethodUnit>,
    },
    Function {
        name: String,
        doc: String,
        signature: String,
        is_async: bool,
    },
}

impl DocUnit {
    pub fn name(&self) -> Option<&str> {
        match self {
            DocUnit::Module => None,
            DocUnit::Class { name, .. } | DocUnit::Function { name, .. } => Some(name.as_str()),
        }
    }
}

/// A documented method or property of a class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodUnit {
    pub name: String,
    pub doc: String,
    pub signature: String,
    pub is_async: bool,
    pub decoration: Decoration,
}
