//! Deterministic arrangements.
//!
//! Each operation rewrites vertex positions in a single [`Graph::batch`] and returns a
//! [`Change`] describing how many vertices it wrote. Operations that work on the selection
//! leave the graph untouched when too few vertices are selected for them to mean anything.
//!
//! Degenerate spacings (one row, one level, one column) collapse onto the box's center line
//! instead of dividing by zero.

use crate::{
    algorithms::bfs_levels,
    graph::{Change, ChangeKind, Graph, VertexId},
    layout::LayoutConfig,
};

/// Which coordinate an alignment or distribution works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

/// Writes `positions` (vertex, x, y) in one batch.
fn place(graph: &mut Graph, positions: &[(VertexId, f64, f64)]) -> Change {
    if !positions.is_empty() {
        graph.batch(|g| {
            for &(id, x, y) in positions {
                if let Some(vertex) = g.vertex_mut(id) {
                    vertex.x = x;
                    vertex.y = y;
                }
            }
        });
    }

    Change {
        kind: ChangeKind::Moved,
        vertices: positions.len(),
        edges: 0,
        revision: graph.revision(),
    }
}

/// Offset of slot `index` out of `count` slots spread evenly over `length`, centered on 0.
fn spread(index: usize, count: usize, length: f64) -> f64 {
    if count > 1 {
        index as f64 * length / (count - 1) as f64 - length / 2.0
    } else {
        0.0
    }
}

/// Places every vertex on a circle of `arrange_circle_radius`, clockwise from the top, in
/// vertex order.
pub fn arrange_circle(graph: &mut Graph, config: &LayoutConfig) -> Change {
    let count = graph.vertex_count();
    let step = 2.0 * std::f64::consts::PI / count as f64;
    let positions: Vec<(VertexId, f64, f64)> = graph
        .vertex_ids()
        .map(|id| {
            let angle = step * id.index() as f64 - std::f64::consts::FRAC_PI_2;
            (
                id,
                config.arrange_circle_radius * angle.cos(),
                config.arrange_circle_radius * angle.sin(),
            )
        })
        .collect();

    place(graph, &positions)
}

/// Places the vertices row by row on a grid filling the arrangement box.
///
/// The grid has round(√N) rows and as many columns as needed to hold every vertex.
///
/// # Examples
///
/// ```rust
/// use visigraph::graph::{Graph, Vertex, VertexId};
/// use visigraph::layout::arrange_grid;
/// use visigraph::LayoutConfig;
///
/// let mut graph = Graph::default();
/// for _ in 0..4 {
///     graph.add_vertex(Vertex::default());
/// }
/// arrange_grid(&mut graph, &LayoutConfig::default());
///
/// let corner = graph.vertex(VertexId::new(3)).unwrap();
/// assert_eq!((corner.x, corner.y), (250.0, 250.0));
/// ```
pub fn arrange_grid(graph: &mut Graph, config: &LayoutConfig) -> Change {
    let count = graph.vertex_count();
    let rows = ((count as f64).sqrt().round() as usize).max(1);
    let columns = count.div_ceil(rows);

    let positions: Vec<(VertexId, f64, f64)> = graph
        .vertex_ids()
        .map(|id| {
            let (row, column) = (id.index() / columns, id.index() % columns);
            (
                id,
                spread(column, columns, config.arrange_box_width),
                spread(row, rows, config.arrange_box_height),
            )
        })
        .collect();

    place(graph, &positions)
}

/// Lays the graph out as a breadth-first tree rooted at the selected vertices.
///
/// The selection forms the top level. Each further level holds the not yet placed
/// neighbors of the level above, ignoring edge direction. Vertices not reachable from the
/// selection form one final level; with nothing selected that is every vertex. Levels are
/// spread evenly over the box height and each level's vertices over the box width.
pub fn arrange_tree(graph: &mut Graph, config: &LayoutConfig) -> Change {
    let roots: Vec<VertexId> = graph.selected_vertices().collect();
    let mut levels = bfs_levels(&graph.undirected(), &roots);

    let mut placed = vec![false; graph.vertex_count()];
    for vertex in levels.iter().flatten() {
        placed[vertex.index()] = true;
    }
    let unreached: Vec<VertexId> = graph.vertex_ids().filter(|v| !placed[v.index()]).collect();
    if !unreached.is_empty() {
        levels.push(unreached);
    }

    let width = config.arrange_box_width;
    let mut positions = Vec::with_capacity(graph.vertex_count());
    for (row, level) in levels.iter().enumerate() {
        let y = spread(row, levels.len(), config.arrange_box_height);
        let column_space = width / level.len() as f64;
        for (column, &id) in level.iter().enumerate() {
            let x = (column as f64 + 0.5) * column_space - width / 2.0;
            positions.push((id, x, y));
        }
    }

    place(graph, &positions)
}

fn coordinate(graph: &Graph, id: VertexId, axis: Axis) -> f64 {
    graph.vertex(id).map_or(0.0, |v| match axis {
        Axis::X => v.x,
        Axis::Y => v.y,
    })
}

fn with_coordinate(graph: &Graph, id: VertexId, axis: Axis, value: f64) -> (VertexId, f64, f64) {
    let (x, y) = graph.vertex(id).map_or((0.0, 0.0), |v| (v.x, v.y));
    match axis {
        Axis::X => (id, value, y),
        Axis::Y => (id, x, value),
    }
}

fn align(graph: &mut Graph, axis: Axis) -> Change {
    let selected: Vec<VertexId> = graph.selected_vertices().collect();
    if selected.is_empty() {
        return place(graph, &[]);
    }

    let mean = selected.iter().map(|&id| coordinate(graph, id, axis)).sum::<f64>()
        / selected.len() as f64;
    let positions: Vec<(VertexId, f64, f64)> = selected
        .iter()
        .map(|&id| with_coordinate(graph, id, axis, mean))
        .collect();

    place(graph, &positions)
}

fn distribute(graph: &mut Graph, axis: Axis) -> Change {
    let mut selected: Vec<VertexId> = graph.selected_vertices().collect();
    if selected.len() < 2 {
        return place(graph, &[]);
    }

    selected.sort_by(|&a, &b| coordinate(graph, a, axis).total_cmp(&coordinate(graph, b, axis)));
    let first = coordinate(graph, selected[0], axis);
    let last = coordinate(graph, selected[selected.len() - 1], axis);
    let spacing = (last - first) / (selected.len() - 1) as f64;

    let positions: Vec<(VertexId, f64, f64)> = selected
        .iter()
        .enumerate()
        .map(|(i, &id)| with_coordinate(graph, id, axis, first + spacing * i as f64))
        .collect();

    place(graph, &positions)
}

/// Moves the selected vertices onto one horizontal line at their mean y.
pub fn align_horizontally(graph: &mut Graph) -> Change {
    align(graph, Axis::Y)
}

/// Moves the selected vertices onto one vertical line at their mean x.
pub fn align_vertically(graph: &mut Graph) -> Change {
    align(graph, Axis::X)
}

/// Spaces the selected vertices evenly in x between the leftmost and the rightmost.
///
/// Vertices keep their left-to-right order; ties keep vertex order.
pub fn distribute_horizontally(graph: &mut Graph) -> Change {
    distribute(graph, Axis::X)
}

/// Spaces the selected vertices evenly in y between the topmost and the bottommost.
pub fn distribute_vertically(graph: &mut Graph) -> Change {
    distribute(graph, Axis::Y)
}
