//! Declaration walker
//!
//! Filtering order for every declaration:
//! 1. private names (leading `_`) are dropped, `__init__` aside
//! 2. exclusion set, by exact qualified name
//! 3. functions and methods without a docstring are dropped
//!
//! Classes are kept without a docstring; only their members need one.

use tracing::debug;

use super::domain::{DocUnit, MethodUnit};
use crate::features::directives::ExclusionSet;
use crate::features::parsing::{ClassDef, FunctionDef, ModuleDef, Stmt};
use crate::features::signature::{constructor_parameters, normalize, Decoration};

pub const PRIVACY_MARKER: char = '_';
pub const CONSTRUCTOR: &str = "__init__";

pub fn is_private(name: &str) -> bool {
    name.starts_with(PRIVACY_MARKER)
}

/// Walk the top level of `module`, in source order.
///
/// The result always starts with [`DocUnit::Module`].
pub fn walk_module(module: &ModuleDef, exclusions: &ExclusionSet) -> Vec<DocUnit> {
    let mut units = vec![DocUnit::Module];

    for stmt in &module.body {
        let unit = match stmt {
            Stmt::Class(class) => walk_class(class, exclusions),
            Stmt::Function(func) => walk_function(func, exclusions),
            Stmt::Other(_) => None,
        };
        units.extend(unit);
    }

    units
}

fn walk_class(class: &ClassDef, exclusions: &ExclusionSet) -> Option<DocUnit> {
    if is_private(&class.name) {
        return None;
    }
    if exclusions.contains(&class.name) {
        debug!(class = %class.name, "ignoring class");
        return None;
    }

    let mut constructor_signature = None;
    let mut members = Vec::new();

    for method in class.methods() {
        if method.name == CONSTRUCTOR {
            constructor_signature = Some(constructor_parameters(method));
            continue;
        }
        members.extend(walk_method(&class.name, method, exclusions));
    }

    Some(DocUnit::Class {
        name: class.name.clone(),
        doc: class.docstring.clone(),
        constructor_signature,
        members,
    })
}

fn walk_method(class_name: &str, method: &FunctionDef, exclusions: &ExclusionSet) -> Option<MethodUnit> {
    if is_private(&method.name) {
        return None;
    }
    if exclusions.contains_member(class_name, &method.name) {
        debug!(class = %class_name, method = %method.name, "ignoring method");
        return None;
    }
    let doc = documented(method)?;

    let decoration = Decoration::detect(&method.decorators);
    Some(MethodUnit {
        name: method.name.clone(),
        doc,
        signature: normalize(Some(class_name), method, decoration),
        is_async: method.is_async,
        decoration,
    })
}

fn walk_function(func: &FunctionDef, exclusions: &ExclusionSet) -> Option<DocUnit> {
    if is_private(&func.name) {
        return None;
    }
    if exclusions.contains(&func.name) {
        debug!(function = %func.name, "ignoring function");
        return None;
    }
    let doc = documented(func)?;

    Some(DocUnit::Function {
        name: func.name.clone(),
        doc,
        signature: normalize(None, func, Decoration::None),
        is_async: func.is_async,
    })
}

/// Docstring of `func`, if it has a non-empty one
fn documented(func: &FunctionDef) -> Option<String> {
    func.docstring.clone().filter(|doc| !doc.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::parsing::{Decorator, Parameter};
    use crate::shared::models::Span;
    use pretty_assertions::assert_eq;

    fn func(name: &str, doc: Option<&str>) -> FunctionDef {
        FunctionDef {
            name: name.to_string(),
            is_async: false,
            decorators: Vec::new(),
            parameters: vec![Parameter::positional("self")],
            returns: None,
            docstring: doc.map(String::from),
            span: Span::zero(),
        }
    }

    fn class(name: &str, doc: Option<&str>, methods: Vec<FunctionDef>) -> Stmt {
        Stmt::Class(ClassDef {
            name: name.to_string(),
            docstring: doc.map(String::from),
            body: methods.into_iter().map(Stmt::Function).collect(),
            span: Span::zero(),
        })
    }

    fn top_level(name: &str, doc: Option<&str>) -> Stmt {
        let mut f = func(name, doc);
        f.parameters.clear();
        Stmt::Function(f)
    }

    fn names(units: &[DocUnit]) -> Vec<&str> {
        units.iter().filter_map(DocUnit::name).collect()
    }

    #[test]
    fn test_module_unit_comes_first_and_order_is_kept() {
        let module = ModuleDef {
            body: vec![
                top_level("b", Some("B")),
                Stmt::Other("import_statement".to_string()),
                class("A", Some("A"), vec![]),
                top_level("c", Some("C")),
            ],
        };

        let units = walk_module(&module, &ExclusionSet::new());
        assert_eq!(units[0], DocUnit::Module);
        assert_eq!(names(&units), vec!["b", "A", "c"]);
    }

    #[test]
    fn test_private_names_are_dropped_even_if_not_excluded() {
        let module = ModuleDef {
            body: vec![
                top_level("_helper", Some("doc")),
                class("_Internal", Some("doc"), vec![]),
                class("Public", Some("doc"), vec![func("_secret", Some("doc"))]),
            ],
        };

        let units = walk_module(&module, &ExclusionSet::new());
        assert_eq!(names(&units), vec!["Public"]);
        match &units[1] {
            DocUnit::Class { members, .. } => assert!(members.is_empty()),
            other => panic!("expected class, got {:?}", other),
        }
    }

    #[test]
    fn test_undocumented_functions_and_methods_are_dropped() {
        let module = ModuleDef {
            body: vec![
                top_level("bare", None),
                top_level("empty", Some("")),
                class("Holder", None, vec![func("bare", None), func("doc", Some("Has docs."))]),
            ],
        };

        let units = walk_module(&module, &ExclusionSet::new());
        assert_eq!(names(&units), vec!["Holder"]);
        match &units[1] {
            DocUnit::Class { doc, members, .. } => {
                assert_eq!(doc, &None);
                assert_eq!(members.len(), 1);
                assert_eq!(members[0].signature, "Holder.doc()");
            }
            other => panic!("expected class, got {:?}", other),
        }
    }

    #[test]
    fn test_exclusions_use_qualified_names() {
        let module = ModuleDef {
            body: vec![
                top_level("helper", Some("doc")),
                class("Client", Some("doc"), vec![func("send", Some("doc")), func("recv", Some("doc"))]),
                class("Skipped", Some("doc"), vec![]),
            ],
        };
        let exclusions: ExclusionSet = ["helper", "Client.send", "Skipped", "recv"].into_iter().collect();

        let units = walk_module(&module, &exclusions);
        assert_eq!(names(&units), vec!["Client"]);
        match &units[1] {
            DocUnit::Class { members, .. } => {
                let kept: Vec<_> = members.iter().map(|m| m.name.as_str()).collect();
                assert_eq!(kept, vec!["recv"]);
            }
            other => panic!("expected class, got {:?}", other),
        }
    }

    #[test]
    fn test_constructor_becomes_class_signature() {
        let mut init = func("__init__", None);
        init.parameters.push(Parameter::positional("url"));
        init.parameters.push(Parameter::positional("retries").with_default("3"));

        let module = ModuleDef {
            body: vec![class("Client", Some("A client."), vec![init])],
        };

        let units = walk_module(&module, &ExclusionSet::new());
        assert_eq!(
            units[1],
            DocUnit::Class {
                name: "Client".to_string(),
                doc: Some("A client.".to_string()),
                constructor_signature: Some("url, retries=3".to_string()),
                members: Vec::new(),
            }
        );
    }

    #[test]
    fn test_method_decorations() {
        let mut prop = func("size", Some("Pool size."));
        prop.decorators.push(Decorator::named("property"));
        prop.returns = Some("int".to_string());

        let mut factory = func("create", Some("Build one."));
        factory.decorators.push(Decorator::named("classmethod"));
        factory.is_async = true;

        let module = ModuleDef {
            body: vec![class("Pool", None, vec![prop, factory])],
        };

        let units = walk_module(&module, &ExclusionSet::new());
        let DocUnit::Class { members, .. } = &units[1] else {
            panic!("expected class");
        };
        assert_eq!(members[0].decoration, Decoration::Property);
        assert_eq!(members[0].signature, "property Pool.size: int");
        assert_eq!(members[1].decoration, Decoration::ClassMethod);
        assert!(members[1].is_async);
        assert_eq!(members[1].signature, "async classmethod Pool.create()");
    }
}
