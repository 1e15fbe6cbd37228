extern crate five_color;

use five_color::example::{icosahedron, octahedron, triangle, triangulated_grid, wheel};
use five_color::{Color, FiveColor, Options, RotationStart};
use rand::rngs::StdRng;
use rand::{prelude::SliceRandom, Rng, SeedableRng};

fn color(rotations: &[Vec<usize>], options: Options) -> FiveColor {
    let mut g = FiveColor::from_rotations(rotations).unwrap();
    g.set_options(options);
    let _ = g.color().unwrap();
    g
}

fn check(rotations: &[Vec<usize>]) -> FiveColor {
    let g = color(rotations, Options::new().validate(true));
    assert!(g.is_proper_coloring());
    assert!(g
        .colors()
        .unwrap()
        .iter()
        .all(|c| c.index() < Color::COUNT));
    g
}

/// Drop each edge with probability `p`, keeping the rotations valid.
fn thin<R: Rng>(rotations: &[Vec<usize>], p: f64, rng: &mut R) -> Vec<Vec<usize>> {
    let mut rotations = rotations.to_vec();
    for u in 0..rotations.len() {
        let higher: Vec<usize> = rotations[u].iter().copied().filter(|&v| v > u).collect();
        for v in higher {
            if rng.gen_bool(p) {
                rotations[u].retain(|&w| w != v);
                rotations[v].retain(|&w| w != u);
            }
        }
    }
    rotations
}

/// Rename the vertices by `perm` and start every rotation at a random place.
fn shuffle<R: Rng>(rotations: &[Vec<usize>], rng: &mut R) -> Vec<Vec<usize>> {
    let n = rotations.len();
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    let mut result = vec![Vec::new(); n];
    for (v, rotation) in rotations.iter().enumerate() {
        let mut rotation: Vec<usize> = rotation.iter().map(|&w| perm[w]).collect();
        if !rotation.is_empty() {
            let k = rng.gen_range(0..rotation.len());
            rotation.rotate_left(k);
        }
        result[perm[v]] = rotation;
    }
    result
}

/// Disjoint union of two graphs.
fn union(g: &[Vec<usize>], h: &[Vec<usize>]) -> Vec<Vec<usize>> {
    let n = g.len();
    g.iter()
        .cloned()
        .chain(h.iter().map(|r| r.iter().map(|&w| w + n).collect()))
        .collect()
}

#[test]
fn triangle_colors() {
    let g = check(&triangle());
    let mut colors = g.colors().unwrap();
    colors.sort();
    colors.dedup();
    assert_eq!(colors.len(), 3);
}

#[test]
fn two_triangles() {
    let g = check(&union(&triangle(), &triangle()));
    let colors = g.colors().unwrap();
    for component in colors.chunks(3) {
        assert_ne!(component[0], component[1]);
        assert_ne!(component[1], component[2]);
        assert_ne!(component[0], component[2]);
    }
}

#[test]
fn wheels() {
    for n in 3..12 {
        let g = check(&wheel(n));
        let hub = g.colors().unwrap()[0];
        assert!(g.colors().unwrap()[1..].iter().all(|&c| c != hub));
    }
}

#[test]
fn polyhedra() {
    check(&octahedron());
    let g = check(&icosahedron());
    // no vertex of degree 4 or less to start with
    let mut again = FiveColor::from_rotations(&icosahedron()).unwrap();
    assert!(again.color().unwrap().merges > 0);
    assert_eq!(again.colors(), g.colors());
}

#[test]
fn icosahedron_any_labelling() {
    let mut rng: StdRng = SeedableRng::from_seed([7; 32]);
    for _ in 0..50 {
        let rotations = shuffle(&icosahedron(), &mut rng);
        check(&rotations);
        let g = color(
            &rotations,
            Options::new().rotation_start(RotationStart::Root),
        );
        assert!(g.is_proper_coloring());
    }
}

#[test]
fn icosahedra() {
    let mut rng: StdRng = SeedableRng::from_seed([3; 32]);
    let mut rotations = icosahedron();
    for _ in 0..4 {
        rotations = union(&rotations, &shuffle(&icosahedron(), &mut rng));
    }
    check(&rotations);
}

#[test]
fn grids() {
    for (w, h) in [(1, 1), (1, 5), (2, 2), (5, 7), (20, 20)] {
        check(&triangulated_grid(w, h));
    }
}

#[test]
fn random_planar() {
    let mut rng: StdRng = SeedableRng::from_seed([42; 32]);
    for _ in 0..30 {
        let w = rng.gen_range(1..15);
        let h = rng.gen_range(1..15);
        let p = rng.gen_range(0.0..0.5);
        let rotations = thin(&triangulated_grid(w, h), p, &mut rng);
        check(&shuffle(&rotations, &mut rng));
    }
}

#[test]
fn random_thinned_icosahedra() {
    let mut rng: StdRng = SeedableRng::from_seed([11; 32]);
    for _ in 0..30 {
        let rotations = thin(&icosahedron(), 0.1, &mut rng);
        check(&shuffle(&rotations, &mut rng));
    }
}
