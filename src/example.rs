//! Planar graphs used in doc examples, tests and benchmarks.
//!
//! Each graph is given as a rotation system: entry `v` lists the
//! neighbors of `v` counterclockwise, ready for
//! [`FiveColor::from_rotations`](crate::FiveColor::from_rotations).

/// Triangle.
pub fn triangle() -> Vec<Vec<usize>> {
    vec![vec![1, 2], vec![2, 0], vec![0, 1]]
}

/// Hub `0` linked to a cycle `1..=n`.
///
/// # Panics
///
/// If `n < 3`.
pub fn wheel(n: usize) -> Vec<Vec<usize>> {
    assert!(n >= 3);
    let mut rotations = vec![(1..=n).collect::<Vec<_>>()];
    for i in 1..=n {
        let next = i % n + 1;
        let prev = (i + n - 2) % n + 1;
        rotations.push(vec![next, 0, prev]);
    }
    rotations
}

/// Octahedron: poles `0` and `5` around the square `1..=4`.
pub fn octahedron() -> Vec<Vec<usize>> {
    let ring = |i: usize| (i + 3) % 4 + 1;
    let mut rotations = vec![vec![1, 2, 3, 4]];
    for i in 1..=4 {
        rotations.push(vec![ring(i + 1), 0, ring(i - 1), 5]);
    }
    rotations.push(vec![4, 3, 2, 1]);
    rotations
}

/// Icosahedron, where every vertex has degree 5.
///
/// Pole `0` sits above the pentagon `1..=5`, pole `11` below the
/// pentagon `6..=10`, and `5 + i` lies between `i` and `i + 1`.
pub fn icosahedron() -> Vec<Vec<usize>> {
    let upper = |i: usize| (i + 4) % 5 + 1;
    let lower = |i: usize| (i + 4) % 5 + 6;
    let mut rotations = vec![vec![1, 2, 3, 4, 5]];
    for i in 1..=5 {
        rotations.push(vec![upper(i + 1), 0, upper(i - 1), lower(i - 1), lower(i)]);
    }
    for i in 1..=5 {
        rotations.push(vec![lower(i + 1), upper(i + 1), upper(i), lower(i - 1), 11]);
    }
    rotations.push(vec![10, 9, 8, 7, 6]);
    rotations
}

/// Grid of `width * height` points, each square split by its rising diagonal.
///
/// Point `(x, y)` is the vertex `y * width + x`.
pub fn triangulated_grid(width: usize, height: usize) -> Vec<Vec<usize>> {
    let mut rotations = Vec::with_capacity(width * height);
    // counterclockwise, starting east
    let steps: [(isize, isize); 6] = [(1, 0), (1, 1), (0, 1), (-1, 0), (-1, -1), (0, -1)];
    for y in 0..height {
        for x in 0..width {
            let rotation = steps
                .iter()
                .filter_map(|&(dx, dy)| {
                    let nx = x.checked_add_signed(dx)?;
                    let ny = y.checked_add_signed(dy)?;
                    (nx < width && ny < height).then(|| ny * width + nx)
                })
                .collect();
            rotations.push(rotation);
        }
    }
    rotations
}
