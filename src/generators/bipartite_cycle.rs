//! Cartesian product of a complete bipartite graph K(r, s) and a cycle C(n).
//!
//! Both generators build the same topology and differ only in how each copy of K(r, s) is
//! drawn. The product is laid out as a vertical chain of rings `-1..=n`, one ring per copy:
//!
//! - every ring holds r + s vertices, the r vertices of part A first
//! - interior rings `0..n` carry the r·s edges of K(r, s)
//! - each ring after the first is joined to the ring above it, vertex by vertex
//!
//! Rings `-1` and `n` are the two halves of the cut link that closes the cycle; they carry
//! no bipartite edges and are drawn with small vertices.

use log::debug;

use crate::{
    generators::{
        check_edge_limit, check_vertex_limit, match_parameters, parse_group, BooleanRule, Generator,
        GeneratorConfig, ParameterPattern,
    },
    graph::{Capability, Edge, EdgeId, Graph, GraphFlags, Vertex, VertexId},
    Result,
};

const SPACING: f64 = 50.0;
const RING_GAP: f64 = 100.0;
const END_RING_RADIUS: f64 = 2.0;

static BEHAR_PATTERN: ParameterPattern = ParameterPattern::new(
    r"^\s*0*([1-9]\d{1,6}|[2-9])\s+0*([1-9]\d{1,6}|[2-9])\s+0*([1-9]\d{0,7})\s*$",
);
static SCOTT_PATTERN: ParameterPattern = ParameterPattern::new(r"^\s*(\d+)\s+(\d+)\s+(\d+)\s*$");

/// Ring drawing styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Drawing {
    /// Parts drawn as crossing diagonals, alternating orientation ring to ring
    Behar,
    /// Part A drawn as a slanted axis, part B as a horizontal axis
    Scott,
}

/// Product dimensions.
#[derive(Debug, Clone, Copy)]
struct Dimensions {
    r: usize,
    s: usize,
    n: usize,
}

impl Dimensions {
    fn ring_size(self) -> Option<usize> {
        self.r.checked_add(self.s)
    }

    fn vertex_count(self) -> Option<usize> {
        self.ring_size()?.checked_mul(self.n.checked_add(2)?)
    }

    fn edge_count(self) -> Option<usize> {
        let bipartite = self.n.checked_mul(self.r)?.checked_mul(self.s)?;
        let links = self.n.checked_add(1)?.checked_mul(self.ring_size()?)?;
        bipartite.checked_add(links)
    }
}

/// Returns the positions of the vertices of ring `i`, part A first.
fn ring_positions(drawing: Drawing, dims: Dimensions, i: i64) -> (Vec<(f64, f64)>, f64) {
    let Dimensions { r, s, n } = dims;
    let mut points = Vec::with_capacity(r + s);
    let step = |j: usize| j as f64 * SPACING;

    match drawing {
        Drawing::Behar => {
            let northwest = r.div_ceil(2);
            let southeast = r / 2;
            let southwest = s / 2;
            let northeast = s.div_ceil(2);

            let link_height = (r.max(s) as f64 + 2.0) * SPACING;
            let baseline = (link_height + RING_GAP) * i as f64;
            let slope = if i % 2 == 0 { SPACING } else { -SPACING };

            for j in 0..northwest {
                let offset = j as f64 - northwest as f64;
                points.push((offset * SPACING, offset * slope + baseline));
            }
            for j in 0..southeast {
                points.push((step(j + 1), (j + 1) as f64 * slope + baseline));
            }
            for j in 0..southwest {
                let offset = j as f64 - southwest as f64;
                points.push((offset * SPACING, -offset * slope + baseline));
            }
            for j in 0..northeast {
                points.push((step(j + 1), -((j + 1) as f64) * slope + baseline));
            }

            (points, baseline)
        }
        Drawing::Scott => {
            let north = r / 2;
            let south = r.div_ceil(2);
            let west = s / 2;
            let east = s.div_ceil(2);

            let link_height = (north + 1 + south + 1) as f64 * SPACING;
            let baseline = (link_height + RING_GAP) * i as f64;
            let is_end = i == -1 || i == n as i64;

            for j in 0..north {
                let offset = j as f64 - north as f64;
                let rise = if is_end { 0.0 } else { offset * SPACING };
                points.push((offset * SPACING + SPACING / 2.0, rise + baseline));
            }
            for j in 0..south {
                let rise = if is_end { 0.0 } else { step(j + 1) };
                points.push((step(j + 1) - SPACING / 2.0, rise + baseline));
            }
            for j in 0..west {
                points.push(((j as f64 - west as f64) * SPACING, baseline));
            }
            for j in 0..east {
                points.push((step(j + 1), baseline));
            }

            (points, baseline)
        }
    }
}

fn build_product(
    generator: &dyn Generator,
    drawing: Drawing,
    params: &str,
    requested: GraphFlags,
    config: &GeneratorConfig,
) -> Result<Graph> {
    let captures = match_parameters(generator, params)?;
    let dims = Dimensions {
        r: parse_group(&captures, 1)?,
        s: parse_group(&captures, 2)?,
        n: parse_group(&captures, 3)?,
    };
    let vertex_count = check_vertex_limit(dims.vertex_count(), config)?;
    let edge_count = check_edge_limit(dims.edge_count(), config)?;
    let ring_size = dims.r + dims.s;

    let mut graph = Graph::with_capacity(
        config.graph_name(generator.name()),
        generator.resolve_flags(requested),
        vertex_count,
        edge_count,
    );

    for ring in 0..dims.n + 2 {
        let i = ring as i64 - 1;
        let first = graph.vertex_count();
        let (points, baseline) = ring_positions(drawing, dims, i);
        for (x, y) in points {
            graph.add_vertex(Vertex::new(x, y));
        }

        if i != -1 && i != dims.n as i64 {
            for a in 0..dims.r {
                for b in 0..dims.s {
                    graph.add_edge(Edge::undirected(
                        VertexId::new(first + a),
                        VertexId::new(first + dims.r + b),
                    ))?;
                }
            }
        }

        if i > -1 {
            for j in (0..ring_size).rev() {
                let above = VertexId::new(first - ring_size + j);
                let below = VertexId::new(first + j);
                let id = graph.add_edge(Edge::undirected(above, below))?;

                if drawing == Drawing::Behar {
                    bend_outer_link(&mut graph, id, baseline);
                }
            }
        }
    }

    for j in 0..ring_size.min(vertex_count) {
        for id in [VertexId::new(j), VertexId::new(vertex_count - 1 - j)] {
            if let Some(vertex) = graph.vertex_mut(id) {
                vertex.radius = END_RING_RADIUS;
            }
        }
    }

    debug!(
        "{}: {} vertices, {} edges",
        generator.name(),
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Pushes the handle of a link edge sideways when its lower endpoint lies below the
/// baseline, so links between outer vertices do not run through the ring.
fn bend_outer_link(graph: &mut Graph, id: EdgeId, baseline: f64) {
    let Some(edge) = graph.edge(id) else {
        return;
    };
    let (Some(from), Some(to)) = (graph.vertex(edge.from), graph.vertex(edge.to)) else {
        return;
    };
    if to.y <= baseline {
        return;
    }

    let rise = to.y - from.y;
    let handle_x = edge.handle_x;
    let shift = rise / if handle_x > 0.0 { 2.0 } else { -2.0 };
    if let Some(edge) = graph.edge_mut(id) {
        edge.handle_x = handle_x + shift;
    }
}

fn product_rule(capability: Capability) -> BooleanRule {
    match capability {
        Capability::Loops => BooleanRule::DefaultFalse,
        Capability::DirectedEdges => BooleanRule::ForcedFalse,
        Capability::MultipleEdges => BooleanRule::DefaultFalse,
        Capability::Cycles => BooleanRule::ForcedTrue,
    }
}

/// K(r, s) × C(n) drawn with crossing diagonals to reduce edge crossings.
///
/// Requires 2 ≤ r, s ≤ 9,999,999 and 1 ≤ n ≤ 99,999,999.
#[derive(Debug, Clone, Copy, Default)]
pub struct BeharProduct;

impl Generator for BeharProduct {
    fn name(&self) -> &'static str {
        "Cartesian product of a complete bipartite graph and cycle (Behar)"
    }

    fn description(&self) -> &'static str {
        concat!(
            "Constructs the Cartesian product of a complete bipartite graph K(r,s) and a cycle ",
            "graph C(n), with one link cut and parts drawn as crossing diagonals."
        )
    }

    fn parameters_description(&self) -> &'static str {
        "[order of set A] [order of set B] [order of cycle]"
    }

    fn parameters(&self) -> &'static ParameterPattern {
        &BEHAR_PATTERN
    }

    fn rule(&self, capability: Capability) -> BooleanRule {
        product_rule(capability)
    }

    fn generate(
        &self,
        params: &str,
        requested: GraphFlags,
        config: &GeneratorConfig,
    ) -> Result<Graph> {
        build_product(self, Drawing::Behar, params, requested, config)
    }
}

/// K(r, s) × C(n) drawn with a slanted axis for part A and a horizontal axis for part B.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScottProduct;

impl Generator for ScottProduct {
    fn name(&self) -> &'static str {
        "Cartesian product of a complete bipartite graph and cycle (Scott)"
    }

    fn description(&self) -> &'static str {
        concat!(
            "Constructs the Cartesian product of a complete bipartite graph K(r,s) and a cycle ",
            "graph C(n), with one link cut and parts drawn as crossing axes."
        )
    }

    fn parameters_description(&self) -> &'static str {
        "[order of slant axes] [order of horizontal axes] [order of cycle]"
    }

    fn parameters(&self) -> &'static ParameterPattern {
        &SCOTT_PATTERN
    }

    fn rule(&self, capability: Capability) -> BooleanRule {
        product_rule(capability)
    }

    fn generate(
        &self,
        params: &str,
        requested: GraphFlags,
        config: &GeneratorConfig,
    ) -> Result<Graph> {
        build_product(self, Drawing::Scott, params, requested, config)
    }
}
