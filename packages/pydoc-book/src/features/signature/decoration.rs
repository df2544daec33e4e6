//! Method decoration kinds that change how a signature is displayed

use crate::features::parsing::Decorator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Decoration {
    #[default]
    None,
    ClassMethod,
    StaticMethod,
    Property,
}

impl Decoration {
    /// Find `@classmethod`, `@staticmethod` or `@property` among `decorators`.
    ///
    /// Only bare-identifier decorators count; the last match wins.
    pub fn detect(decorators: &[Decorator]) -> Self {
        decorators
            .iter()
            .filter_map(|d| d.name.as_deref().and_then(Self::from_name))
            .last()
            .unwrap_or_default()
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "classmethod" => Some(Decoration::ClassMethod),
            "staticmethod" => Some(Decoration::StaticMethod),
            "property" => Some(Decoration::Property),
            _ => None,
        }
    }

    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Decoration::None => None,
            Decoration::ClassMethod => Some("classmethod"),
            Decoration::StaticMethod => Some("staticmethod"),
            Decoration::Property => Some("property"),
        }
    }
}
