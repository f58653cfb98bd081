use super::*;
use crate::quad::pair_endpoints;
use crate::testutil::{square, Fixture};
use crate::types::{CriticalType::*, SepRange};

#[test]
fn valence_counts_corner_slots() {
    let cells = [4, 0, 1, 2, 1, 4, 0, 3, 2, 1];
    assert_eq!(produced_valence(&cells, 5), vec![2, 3, 2, 1, 0]);
}

#[test]
fn check_flags_points_below_separatrix_degree() {
    let cells = [4, 0, 1, 2, 3, 4, 4, 1, 2, 5];
    // Point 0 expects 2 but has 1; point 5 expects 1 and has 1.
    let expected = [2, 2, 2, 2, 2, 1];
    let report = check(&cells, &expected);
    assert_eq!(report.bad_points, vec![0, 3, 4]);
    // First quad: 0 and 3 bad; second: only 4.
    assert_eq!(report.bad_quads, vec![0]);
}

#[test]
fn degenerate_corner_counts_twice_toward_badness() {
    let cells = [4, 0, 1, 2, 1];
    let report = check(&cells, &[0, 3, 0]);
    assert_eq!(report.bad_points, vec![1]);
    assert_eq!(report.bad_quads, vec![0]);
}

#[test]
fn middle_finder_picks_arclength_middle_once() {
    let mut f = Fixture::new(
        &[Saddle, Minimum],
        &[[0.0, 0.0, 0.0], [4.0, 0.0, 0.0]],
    );
    // Uneven samples: 0, 1, 1.5, 4 along x; half length 2 is closest to 1.5.
    f.separatrices.push_polyline(
        &[crate::testutil::cell_of(0), -1, -1, crate::testutil::cell_of(1)],
        &[
            f.positions[0],
            [1.0, 0.0, 0.0].into(),
            [1.5, 0.0, 0.0].into(),
            f.positions[1],
        ],
    );
    let edges = pair_endpoints(&f.separatrices).unwrap();
    let finder = MiddleFinder::new(&edges, &f.points, &f.separatrices.points);
    assert_eq!(finder.ranges(0, 1), vec![SepRange::new(0, 3)]);
    assert!(finder.ranges(1, 0).is_empty());

    let mut cache = SubdivisionCache::default();
    let mut out = Vec::new();
    assert_eq!(finder.emit_middles(0, 1, &mut cache, &mut out), 1);
    assert_eq!(out, vec![1.5, 0.0, 0.0]);
    assert_eq!(cache.get(&SepRange::new(0, 3)), Some(2));
    // Cached ranges are skipped silently.
    assert_eq!(finder.emit_middles(0, 1, &mut cache, &mut out), 0);
    assert_eq!(out.len(), 3);
    assert_eq!(cache.len(), 1);
}

#[test]
fn middle_finder_covers_parallel_separatrices() {
    let mut f = Fixture::new(&[Saddle, Maximum], &[[0.0; 3], [2.0, 0.0, 0.0]]);
    f.separatrix(0, 1).separatrix(0, 1);
    let edges = pair_endpoints(&f.separatrices).unwrap();
    let finder = MiddleFinder::new(&edges, &f.points, &f.separatrices.points);
    let mut cache = SubdivisionCache::default();
    let mut out = Vec::new();
    assert_eq!(finder.emit_middles(0, 1, &mut cache, &mut out), 2);
    assert_eq!(out, vec![1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
    let keys: Vec<_> = cache.iter().map(|(r, &m)| (*r, m)).collect();
    assert_eq!(
        keys,
        vec![(SepRange::new(0, 2), 1), (SepRange::new(3, 5), 4)]
    );
}

#[test]
fn bad_square_gets_four_subdivision_points() {
    let f = square(true);
    let edges = pair_endpoints(&f.separatrices).unwrap();
    let cells = [4, 0, 1, 2, 3];
    let report = check(&cells, &[2, 2, 2, 2]);
    assert_eq!(report.bad_quads, vec![0]);
    let finder = MiddleFinder::new(&edges, &f.points, &f.separatrices.points);
    let mut cache = SubdivisionCache::default();
    let mut out = Vec::new();
    let added = subdivide_bad_quads(&cells, &report, &finder, &mut cache, &mut out);
    assert_eq!(added, 4);
    assert_eq!(
        out,
        vec![0.5, 0.0, 0.0, 1.0, 0.5, 0.0, 0.0, 0.5, 0.0, 0.5, 1.0, 0.0]
    );
    // A second pass over the same bad quad adds nothing.
    assert_eq!(
        subdivide_bad_quads(&cells, &report, &finder, &mut cache, &mut out),
        0
    );
}
