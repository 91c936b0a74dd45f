//! Compiled registry of generators and functions.
//!
//! Every generator and function shipped with the crate is listed here once. The tables are
//! process-wide statics built on first access; lookups by name go through a hash index.
//!
//! # Examples
//!
//! ```rust
//! use visigraph::registry;
//! use visigraph::{GeneratorConfig, GraphFlags};
//!
//! for generator in registry::generators() {
//!     println!("{} {}", generator.name(), generator.parameters_description());
//! }
//!
//! let star = registry::find_generator("Star graph")?;
//! let mut graph = star.generate("4", GraphFlags::empty(), &GeneratorConfig::default())?;
//!
//! let regular = registry::find_function("Is regular")?;
//! assert_eq!(regular.evaluate_checked(&mut graph)?.to_string(), "false");
//! # Ok::<(), visigraph::Error>(())
//! ```

use std::{collections::HashMap, sync::OnceLock};

use crate::{
    functions::{
        CalculateRadius, ColorComponents, CountComponents, Function, IsRegular, MaximumIndegree,
    },
    generators::{BeharProduct, CycleGraph, Generator, ScottProduct, StarGraph, SymmetricTree},
    Error, Result,
};

static GENERATORS: [&dyn Generator; 5] = [
    &BeharProduct,
    &ScottProduct,
    &CycleGraph,
    &StarGraph,
    &SymmetricTree,
];

static FUNCTIONS: [&dyn Function; 8] = [
    &CalculateRadius::UNWEIGHTED,
    &CalculateRadius::WEIGHTED,
    &ColorComponents::CONNECTED,
    &ColorComponents::STRONGLY_CONNECTED,
    &CountComponents::CONNECTED,
    &CountComponents::STRONGLY_CONNECTED,
    &MaximumIndegree,
    &IsRegular,
];

static GENERATOR_INDEX: OnceLock<HashMap<&'static str, &'static dyn Generator>> = OnceLock::new();
static FUNCTION_INDEX: OnceLock<HashMap<&'static str, &'static dyn Function>> = OnceLock::new();

/// Returns every registered generator, sorted by name.
#[must_use]
pub fn generators() -> &'static [&'static dyn Generator] {
    &GENERATORS
}

/// Returns every registered function, sorted by name.
#[must_use]
pub fn functions() -> &'static [&'static dyn Function] {
    &FUNCTIONS
}

/// Looks up a generator by its exact name.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if no generator has that name.
pub fn find_generator(name: &str) -> Result<&'static dyn Generator> {
    GENERATOR_INDEX
        .get_or_init(|| GENERATORS.iter().map(|&g| (g.name(), g)).collect())
        .get(name)
        .copied()
        .ok_or_else(|| Error::NotFound(name.to_string()))
}

/// Looks up a function by its exact name.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if no function has that name.
pub fn find_function(name: &str) -> Result<&'static dyn Function> {
    FUNCTION_INDEX
        .get_or_init(|| FUNCTIONS.iter().map(|&f| (f.name(), f)).collect())
        .get(name)
        .copied()
        .ok_or_else(|| Error::NotFound(name.to_string()))
}
