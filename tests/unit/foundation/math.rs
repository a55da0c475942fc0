use super::*;

#[test]
fn step_is_inclusive_at_the_edge() {
    assert_eq!(step(0.5, 0.5), 1.0);
    assert_eq!(step(0.5, 0.4999), 0.0);
    assert_eq!(step(-0.5, -0.5), 1.0);
}

#[test]
fn smoothstep_clamps_and_eases() {
    assert_eq!(smoothstep(0.0, 1.0, -3.0), 0.0);
    assert_eq!(smoothstep(0.0, 1.0, 3.0), 1.0);
    assert_eq!(smoothstep(0.0, 1.0, 0.5), 0.5);
    let q = smoothstep(0.0, 1.0, 0.25);
    assert!((q - 0.15625).abs() < 1e-12);
}

#[test]
fn fract_wraps_negatives_upward() {
    assert_eq!(fract(1.25), 0.25);
    assert_eq!(fract(-0.25), 0.75);
    assert_eq!(fract(3.0), 0.0);
}
