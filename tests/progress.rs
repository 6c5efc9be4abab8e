use folio_fx::progress;
use folio_fx::progress::lerp;

#[test]
fn progress_stays_in_unit_range_and_is_monotonic() {
    let spans = [(0.0, 100.0), (-50.0, 50.0), (120.0, 121.0), (0.0, 3000.0)];
    for &(start, end) in &spans {
        let mut prev = 0.0;
        for i in -20..=140 {
            let sample = start + (end - start) * (i as f64 / 100.0);
            let p = progress(start, end, sample);
            assert!((0.0..=1.0).contains(&p), "p={p} for {sample} in {start}..{end}");
            assert!(p >= prev, "not monotonic at {sample}: {p} < {prev}");
            prev = p;
        }
    }
}

#[test]
fn progress_hits_both_ends_exactly() {
    assert_eq!(progress(200.0, 800.0, 200.0), 0.0);
    assert_eq!(progress(200.0, 800.0, 800.0), 1.0);
    assert_eq!(progress(200.0, 800.0, 500.0), 0.5);
}

#[test]
fn degenerate_span_is_zero() {
    assert_eq!(progress(300.0, 300.0, 300.0), 0.0);
    assert_eq!(progress(300.0, 300.0, 1e9), 0.0);
    assert_eq!(progress(0.0, f64::INFINITY, 10.0), 0.0);
    assert_eq!(progress(0.0, 100.0, f64::NAN), 0.0);
}

#[test]
fn descending_span_counts_down() {
    // A card rising from the bottom of an 800px viewport to a 60px pin.
    assert_eq!(progress(800.0, 60.0, 800.0), 0.0);
    assert_eq!(progress(800.0, 60.0, 60.0), 1.0);
    assert_eq!(progress(800.0, 60.0, 900.0), 0.0);
    assert_eq!(progress(800.0, 60.0, 0.0), 1.0);
}

#[test]
fn lerp_moves_a_fraction_of_the_gap() {
    assert_eq!(lerp(0.0, 100.0, 0.1), 10.0);
    assert_eq!(lerp(50.0, 50.0, 0.3), 50.0);
    assert_eq!(lerp(10.0, 0.0, 1.0), 0.0);
}
