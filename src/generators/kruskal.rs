use crate::{
    maze::{Coord, Grid, midpoint},
    steps::StepRecorder,
};
use rand::{Rng, seq::SliceRandom};

/// Disjoint sets over lattice cell indices.
///
/// `find` compresses paths; `unite` hangs the second root under the first
/// without any rank or size heuristic.
pub(crate) struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    pub(crate) fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
        }
    }

    pub(crate) fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Point every node on the walked chain straight at the root
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    pub(crate) fn unite(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false; // Already in same set
        }
        self.parent[root_y] = root_x;
        true
    }
}

/// Wall between two lattice cells two steps apart
#[derive(Clone, Copy)]
struct Edge {
    cell1: Coord,
    cell2: Coord,
}

/// Randomized Kruskal's over the lattice of even coordinates.
///
/// All lattice cells are opened up front, then candidate walls are processed
/// in shuffled order; a wall is opened exactly when its two cells are still
/// in different sets.
pub fn randomized_kruskal<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R, recorder: &mut StepRecorder) {
    let rows = grid.rows();
    let cols = grid.cols();
    let lattice_cols = cols.div_ceil(2);
    let lattice_rows = rows.div_ceil(2);

    let lattice = (0..rows)
        .step_by(2)
        .flat_map(|r| (0..cols).step_by(2).map(move |c| (r, c)))
        .collect::<Vec<_>>();
    for &cell in &lattice {
        grid.cell_mut(cell).is_wall = false;
    }

    let mut uf = UnionFind::new(lattice_rows * lattice_cols);
    let index = |(r, c): Coord| (r / 2) * lattice_cols + c / 2;

    // Collect all candidate walls: right and bottom neighbor of each lattice cell
    let mut edges: Vec<Edge> = lattice
        .iter()
        .flat_map(|&(r, c)| {
            [
                (c + 2 < cols).then(|| Edge {
                    cell1: (r, c),
                    cell2: (r, c + 2),
                }),
                (r + 2 < rows).then(|| Edge {
                    cell1: (r, c),
                    cell2: (r + 2, c),
                }),
            ]
        })
        .flatten()
        .collect();

    edges.shuffle(rng);

    for edge in edges {
        // If cells are not yet connected, remove the wall between them
        if uf.unite(index(edge.cell1), index(edge.cell2)) {
            grid.cell_mut(midpoint(edge.cell1, edge.cell2)).is_wall = false;
            recorder.record(grid);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{get_rng, tests::assert_perfect};

    #[test]
    fn test_union_find() {
        let mut uf = UnionFind::new(6);
        assert!(uf.unite(0, 1));
        assert!(uf.unite(2, 3));
        assert!(uf.unite(1, 3));
        assert!(!uf.unite(0, 2));
        assert_eq!(uf.find(3), uf.find(0));
        assert_ne!(uf.find(4), uf.find(0));
        assert_eq!(uf.find(5), 5);
    }

    #[test]
    fn test_find_compresses_long_chains() {
        let n = 100_000;
        let mut uf = UnionFind::new(n);
        // Build a single chain n-1 -> n-2 -> ... -> 0
        for i in 1..n {
            uf.parent[i] = i - 1;
        }
        assert_eq!(uf.find(n - 1), 0);
        assert!(uf.parent.iter().all(|&p| p == 0));
    }

    #[test]
    fn test_spanning_tree() {
        for seed in 0..8 {
            let mut grid = Grid::new(9, 11, (0, 0), (8, 10)).unwrap();
            grid.cells_mut().for_each(|c| c.is_wall = !c.is_endpoint());
            let mut recorder = StepRecorder::new();
            randomized_kruskal(&mut grid, &mut get_rng(Some(seed)), &mut recorder);
            assert_perfect(&grid);
            // 5 x 6 lattice cells need 29 joins, one snapshot each
            assert_eq!(recorder.len(), 29);
        }
    }

    #[test]
    fn test_even_sized_grid() {
        let mut grid = Grid::new(6, 8, (0, 0), (4, 6)).unwrap();
        grid.cells_mut().for_each(|c| c.is_wall = !c.is_endpoint());
        randomized_kruskal(&mut grid, &mut get_rng(Some(11)), &mut StepRecorder::disabled());
        assert_perfect(&grid);
        // The last row and column are off the lattice and stay solid
        assert!((0..8).all(|c| grid[(5, c)].is_wall));
        assert!((0..6).all(|r| grid[(r, 7)].is_wall));
    }
}
