pub mod store;
pub mod swipl;
pub mod syntax;

use crate::error::BusanaError;
use std::collections::BTreeMap;

pub use store::ExternalRuleStore;

/// A value bound to a query variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Atom(String),
    List(Vec<String>),
    Bool(bool),
}

/// One solution of a query: variable name -> bound value.
pub type Bindings = BTreeMap<String, Term>;

/// Trait for external rule engine backends.
pub trait QueryBackend: Send + Sync {
    /// Run a goal such as `item_options(tops, formal, hot, Items)` and return
    /// zero or more solutions.
    fn query(&self, goal: &str) -> Result<Vec<Bindings>, BusanaError>;

    /// Name of this backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
