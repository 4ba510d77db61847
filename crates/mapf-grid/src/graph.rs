//! Traversal graph derived from a [`GridMap`].
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for neighbour
//! adjacency.  Given a `VertexId v`, its neighbours occupy the slice:
//!
//! ```text
//! adjacency[ out_start[v] .. out_start[v+1] ]
//! ```
//!
//! Vertices are the passable cells only, numbered in row-major order, so
//! iteration over a vertex's neighbours is a contiguous memory scan — ideal
//! for the search inner loop.  Every edge has implicit unit cost; adjacency
//! is symmetric by construction (each adjacent passable pair contributes a
//! directed entry in both directions).
//!
//! The graph is a pure function of the map and read-only after `build`.
//! Strategies that need to close directed edges during a planning pass do so
//! with a request-scoped overlay set, never by mutating the graph.

use mapf_core::{Cell, VertexId};

use crate::GridMap;

/// 4-directional offsets: up, down, left, right.
const DIRECTIONS: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Connectivity graph over a grid's passable cells, in CSR format.
pub struct GridGraph {
    /// CSR row pointer.  Neighbours of vertex `v` are at adjacency indices
    /// `out_start[v] .. out_start[v+1]`.  Length = `vertex_count + 1`.
    out_start: Vec<u32>,

    /// Flattened neighbour lists, indexed through `out_start`.
    adjacency: Vec<VertexId>,

    /// Cell of each vertex.  Indexed by `VertexId`.
    vertex_cell: Vec<Cell>,

    /// Dense cell → vertex lookup, row-major over the full grid.
    /// `VertexId::INVALID` for blocked cells.
    cell_vertex: Vec<VertexId>,

    /// Grid width, needed to index `cell_vertex`.
    width: u32,
}

impl GridGraph {
    /// Build the traversal graph for `map`.
    ///
    /// An all-blocked (or empty) map yields a graph with no vertices; that
    /// is a valid graph, not an error.
    pub fn build(map: &GridMap) -> GridGraph {
        let width = map.width();

        // Pass 1: number the passable cells in row-major order.
        let mut cell_vertex = vec![VertexId::INVALID; map.cell_count()];
        let mut vertex_cell = Vec::new();
        for cell in map.passable_cells() {
            let id = VertexId(vertex_cell.len() as u32);
            cell_vertex[cell.row as usize * width as usize + cell.col as usize] = id;
            vertex_cell.push(cell);
        }

        // Pass 2: emit neighbour entries per vertex.  Vertices are visited
        // in id order, so `adjacency` comes out already CSR-sorted.
        let vertex_count = vertex_cell.len();
        let mut out_start = Vec::with_capacity(vertex_count + 1);
        let mut adjacency = Vec::new();
        out_start.push(0u32);
        for &cell in &vertex_cell {
            for (dr, dc) in DIRECTIONS {
                let nr = cell.row as i64 + dr;
                let nc = cell.col as i64 + dc;
                if nr < 0 || nc < 0 {
                    continue;
                }
                let neighbor = Cell::new(nr as u32, nc as u32);
                if map.is_passable(neighbor) {
                    adjacency.push(
                        cell_vertex[neighbor.row as usize * width as usize + neighbor.col as usize],
                    );
                }
            }
            out_start.push(adjacency.len() as u32);
        }

        GridGraph { out_start, adjacency, vertex_cell, cell_vertex, width }
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn vertex_count(&self) -> usize {
        self.vertex_cell.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_cell.is_empty()
    }

    // ── Vertex ↔ cell mapping ─────────────────────────────────────────────

    /// The vertex at `cell`, or `None` if the cell is blocked or out of
    /// bounds.
    #[inline]
    pub fn vertex(&self, cell: Cell) -> Option<VertexId> {
        if cell.col >= self.width {
            return None; // would alias a cell on another row
        }
        let idx = cell.row as usize * self.width as usize + cell.col as usize;
        match self.cell_vertex.get(idx) {
            Some(&v) if v != VertexId::INVALID => Some(v),
            _ => None,
        }
    }

    /// The cell of vertex `v`.
    #[inline]
    pub fn cell(&self, v: VertexId) -> Cell {
        self.vertex_cell[v.index()]
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the neighbour vertices of `v`.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        let start = self.out_start[v.index()] as usize;
        let end   = self.out_start[v.index() + 1] as usize;
        self.adjacency[start..end].iter().copied()
    }

    /// Number of neighbours of `v`.
    #[inline]
    pub fn degree(&self, v: VertexId) -> usize {
        let start = self.out_start[v.index()] as usize;
        let end   = self.out_start[v.index() + 1] as usize;
        end - start
    }
}
