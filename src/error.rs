use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Most engines in this crate are total functions over a graph snapshot and never fail; errors
/// are limited to the boundary where callers hand in parameter strings, vertex references or
/// registry names.
///
/// # Error Categories
///
/// ## Parameter Errors
/// - [`Error::InvalidParameters`] - Parameter string rejected by a generator's pattern
/// - [`Error::Malformed`] - A captured parameter could not be converted to a number
/// - [`Error::LimitExceeded`] - Generation would produce more vertices or edges than allowed
///
/// ## Model Errors
/// - [`Error::GraphError`] - Reference to a vertex or edge that the graph does not own
///
/// ## Registry Errors
/// - [`Error::NotFound`] - No generator or function registered under the given name
/// - [`Error::NotApplicable`] - Function cannot run on a graph with the given flags
///
/// # Examples
///
/// ```rust
/// use visigraph::{registry, Error, GeneratorConfig, GraphFlags};
///
/// let cycle = registry::find_generator("Cycle graph")?;
/// match cycle.generate("2", GraphFlags::empty(), &GeneratorConfig::default()) {
///     Ok(graph) => println!("{} vertices", graph.vertex_count()),
///     Err(Error::InvalidParameters { generator, parameters }) => {
///         eprintln!("{generator} rejected '{parameters}'");
///     }
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// # Ok::<(), visigraph::Error>(())
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The parameter string does not match the generator's validation pattern.
    ///
    /// Callers are expected to validate parameters before generating; this error surfaces the
    /// contract violation instead of producing a partial graph.
    #[error("Parameters '{parameters}' are not valid for generator '{generator}'")]
    InvalidParameters {
        /// Name of the generator that rejected the parameters
        generator: String,
        /// The rejected parameter string
        parameters: String,
    },

    /// A parameter matched the pattern but could not be converted.
    ///
    /// This happens when a captured number does not fit the target integer type. The error
    /// includes the source location where the conversion failed.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// Generation was refused because the result would be too large.
    #[error("Generating {requested} {element} exceeds the limit of {limit}")]
    LimitExceeded {
        /// What is being counted, `"vertices"` or `"edges"`
        element: &'static str,
        /// Number of elements the parameters ask for
        requested: usize,
        /// The configured maximum
        limit: usize,
    },

    /// Graph structure error.
    ///
    /// Raised when an edge references a vertex that is not owned by the graph, or when a
    /// vertex or edge identifier is out of range.
    #[error("{0}")]
    GraphError(String),

    /// No generator or function is registered under the requested name.
    #[error("Nothing registered under the name '{0}'")]
    NotFound(String),

    /// The function does not support graphs with the current flags.
    #[error("'{0}' is not applicable to this graph")]
    NotApplicable(String),
}

#[cfg(test)]
mod tests {
    use crate::Error;

    #[test]
    fn test_malformed_macro_captures_location() {
        let err = malformed_error!("value {} too large", 42);
        match err {
            Error::Malformed {
                message,
                file,
                line,
            } => {
                assert_eq!(message, "value 42 too large");
                assert!(file.ends_with("error.rs"));
                assert!(line > 0);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_display_messages() {
        let err = Error::InvalidParameters {
            generator: "Cycle graph".to_string(),
            parameters: "2".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Parameters '2' are not valid for generator 'Cycle graph'"
        );

        let err = Error::LimitExceeded {
            element: "vertices",
            requested: 10,
            limit: 5,
        };
        assert_eq!(
            err.to_string(),
            "Generating 10 vertices exceeds the limit of 5"
        );
    }
}
