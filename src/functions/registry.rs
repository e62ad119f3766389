use std::collections::HashMap;
use std::sync::OnceLock;

use crate::ast::Node;
use crate::error::MathError;

/// Definition of an elementary function: numeric evaluation plus the
/// symbolic derivative rule.
#[derive(Clone)]
pub(crate) struct FunctionDefinition {
    /// Canonical name (synonyms are resolved by the lexer)
    pub name: &'static str,

    /// Numeric evaluation of the function at a point
    pub eval: fn(f64) -> f64,

    /// Symbolic derivative with the chain rule applied.
    /// Arguments: the operand subtree `g` and the already-differentiated
    /// inner derivative `g'`; returns the full derivative of `f(g)`.
    pub derivative: fn(&Node, Node) -> Result<Node, MathError>,
}

static REGISTRY: OnceLock<HashMap<&'static str, FunctionDefinition>> = OnceLock::new();

fn init_registry() -> HashMap<&'static str, FunctionDefinition> {
    let mut map = HashMap::with_capacity(24);
    for def in crate::functions::definitions::all_definitions() {
        map.insert(def.name, def);
    }
    map
}

/// Central lookup for function definitions.
pub(crate) struct Registry;

impl Registry {
    /// Get a function definition by canonical name
    pub(crate) fn get(name: &str) -> Option<&'static FunctionDefinition> {
        REGISTRY.get_or_init(init_registry).get(name)
    }
}
