//! Graph configuration flags.

use bitflags::bitflags;
use strum::{Display, EnumIter};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// The structural features a graph is allowed to contain.
    ///
    /// The flags are a declaration about the graph, not a computed property: the editor
    /// refuses to create a loop in a graph without [`GraphFlags::LOOPS`], and generators
    /// never emit a feature whose flag is cleared.
    pub struct GraphFlags: u8 {
        /// Edges may start and end at the same vertex
        const LOOPS = 0x01;
        /// Edges may be directed
        const DIRECTED_EDGES = 0x02;
        /// Several edges may join the same pair of vertices
        const MULTIPLE_EDGES = 0x04;
        /// The graph may contain cycles
        const CYCLES = 0x08;
    }
}

/// One of the four structural capabilities covered by [`GraphFlags`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum Capability {
    /// Loops
    #[strum(to_string = "loops")]
    Loops,
    /// Directed edges
    #[strum(to_string = "directed edges")]
    DirectedEdges,
    /// Multiple edges
    #[strum(to_string = "multiple edges")]
    MultipleEdges,
    /// Cycles
    #[strum(to_string = "cycles")]
    Cycles,
}

impl Capability {
    /// Returns the flag bit corresponding to this capability.
    #[must_use]
    pub const fn flag(self) -> GraphFlags {
        match self {
            Capability::Loops => GraphFlags::LOOPS,
            Capability::DirectedEdges => GraphFlags::DIRECTED_EDGES,
            Capability::MultipleEdges => GraphFlags::MULTIPLE_EDGES,
            Capability::Cycles => GraphFlags::CYCLES,
        }
    }
}

impl GraphFlags {
    /// Returns `true` if loops are allowed.
    #[must_use]
    pub fn allows_loops(self) -> bool {
        self.contains(GraphFlags::LOOPS)
    }

    /// Returns `true` if directed edges are allowed.
    #[must_use]
    pub fn allows_directed_edges(self) -> bool {
        self.contains(GraphFlags::DIRECTED_EDGES)
    }

    /// Returns `true` if multiple edges are allowed.
    #[must_use]
    pub fn allows_multiple_edges(self) -> bool {
        self.contains(GraphFlags::MULTIPLE_EDGES)
    }

    /// Returns `true` if cycles are allowed.
    #[must_use]
    pub fn allows_cycles(self) -> bool {
        self.contains(GraphFlags::CYCLES)
    }
}

impl Default for GraphFlags {
    /// An unrestricted graph.
    fn default() -> Self {
        GraphFlags::all()
    }
}
