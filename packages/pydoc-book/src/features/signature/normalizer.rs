//! Signature normalizer
//!
//! Output shapes:
//!
//! ```text
//! connect(host, port=5432, *, timeout: float=1.0) -> Connection
//! async classmethod Pool.open(size: int=4) -> Pool
//! property Pool.size: int
//! ```
//!
//! Parameters are serialized in `ast.unparse` style: `name: Ann=default`.

use super::decoration::Decoration;
use crate::features::parsing::{FunctionDef, Parameter, ParameterKind};

/// Serialize one parameter
pub fn format_parameter(param: &Parameter) -> String {
    let mut out = match param.kind {
        ParameterKind::PositionalOnlySeparator => return "/".to_string(),
        ParameterKind::KeywordOnlySeparator => return "*".to_string(),
        ParameterKind::Positional => param.name.clone(),
        ParameterKind::VarArgs => format!("*{}", param.name),
        ParameterKind::VarKeyword => format!("**{}", param.name),
    };

    if let Some(annotation) = &param.annotation {
        out.push_str(": ");
        out.push_str(annotation);
    }
    if let Some(default) = &param.default {
        out.push('=');
        out.push_str(default);
    }
    out
}

/// Serialize a parameter list, comma separated, without parentheses
pub fn format_parameters(params: &[Parameter]) -> String {
    params
        .iter()
        .map(format_parameter)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Drop the implicit receiver (`self`/`cls`): the first entry, when it is a
/// plain positional parameter.
///
/// A `/` left at the front has no positional-only parameters to mark and
/// goes with it.
pub fn without_receiver(params: &[Parameter]) -> &[Parameter] {
    let rest = match params.first() {
        Some(first) if first.is_positional() => &params[1..],
        _ => return params,
    };
    match rest.first() {
        Some(next) if next.kind == ParameterKind::PositionalOnlySeparator => &rest[1..],
        _ => rest,
    }
}

/// Parameter list shown in a class heading, taken from `__init__`
pub fn constructor_parameters(init: &FunctionDef) -> String {
    format_parameters(without_receiver(&init.parameters))
}

/// Display signature for a function (`owner == None`) or a method of `owner`
pub fn normalize(owner: Option<&str>, func: &FunctionDef, decoration: Decoration) -> String {
    let qualified = match owner {
        Some(class_name) => format!("{}.{}", class_name, func.name),
        None => func.name.clone(),
    };

    if decoration == Decoration::Property {
        return format!(
            "property {}: {}",
            qualified,
            func.returns.as_deref().unwrap_or("None")
        );
    }

    let params = match owner {
        Some(_) => without_receiver(&func.parameters),
        None => &func.parameters[..],
    };

    let mut signature = String::new();
    if func.is_async {
        signature.push_str("async ");
    }
    if let Some(keyword) = decoration.keyword() {
        signature.push_str(keyword);
        signature.push(' ');
    }
    signature.push_str(&qualified);
    signature.push('(');
    signature.push_str(&format_parameters(params));
    signature.push(')');
    if let Some(returns) = &func.returns {
        signature.push_str(" -> ");
        signature.push_str(returns);
    }
    signature
}
