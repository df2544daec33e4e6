//! Declaration model for one Python module
//!
//! Only the shapes documentation cares about are modelled: classes, functions
//! and the parameter lists needed to rebuild a signature. Everything else in a
//! block is kept as `Stmt::Other` so source order stays intact.

use crate::shared::models::Span;

/// A parsed module body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleDef {
    pub body: Vec<Stmt>,
}

/// A statement inside a module or class body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Class(ClassDef),
    Function(FunctionDef),
    /// Any other statement; carries the raw tree-sitter kind
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDef {
    pub name: String,
    pub docstring: Option<String>,
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl ClassDef {
    /// Function-like members in source order
    pub fn methods(&self) -> impl Iterator<Item = &FunctionDef> {
        self.body.iter().filter_map(|stmt| match stmt {
            Stmt::Function(func) => Some(func),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    pub name: String,
    pub is_async: bool,
    pub decorators: Vec<Decorator>,
    pub parameters: Vec<Parameter>,
    /// Return annotation source text (`-> T`)
    pub returns: Option<String>,
    pub docstring: Option<String>,
    pub span: Span,
}

/// An applied decorator (`@expr`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decorator {
    /// Expression text without the `@`
    pub expression: String,
    /// Set when the expression is a bare identifier (`@property`)
    pub name: Option<String>,
}

impl Decorator {
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            expression: name.clone(),
            name: Some(name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    Positional,               // x, x: int, x=1
    VarArgs,                  // *args
    VarKeyword,               // **kwargs
    PositionalOnlySeparator,  // /
    KeywordOnlySeparator,     // bare *
}

/// One entry of a parameter list, with annotation and default kept as source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub kind: ParameterKind,
    pub annotation: Option<String>,
    pub default: Option<String>,
}

impl Parameter {
    pub fn positional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParameterKind::Positional,
            annotation: None,
            default: None,
        }
    }

    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_kind(mut self, kind: ParameterKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn separator(kind: ParameterKind) -> Self {
        let name = match kind {
            ParameterKind::PositionalOnlySeparator => "/",
            _ => "*",
        };
        Self::positional(name).with_kind(kind)
    }

    pub fn is_positional(&self) -> bool {
        self.kind == ParameterKind::Positional
    }
}
