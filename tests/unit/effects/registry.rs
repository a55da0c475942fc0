use super::*;
use crate::{
    effects::evaluate::{TransitionInputs, TransitionParams},
    foundation::core::{Resolution, Rgba, Vec2},
};

fn render_with(f: EffectFn, progress: f64, u: Vec2) -> Rgb {
    let current = Rgba::new(0.9, 0.3, 0.1, 1.0);
    let next = |uv: Vec2| Rgba::new(uv.y as f32, uv.x as f32, 0.5, 1.0);
    let mask = Rgba::new(0.3, 0.3, 0.3, 1.0);
    let inputs = TransitionInputs {
        current: &current,
        next: &next,
        mask: Some(&mask),
        surface: Resolution::new(4.0, 3.0).unwrap(),
        image: Resolution::new(1.0, 1.0).unwrap(),
    };
    let params = TransitionParams {
        effect_id: 0,
        progress,
        time: 0.7,
    };
    f(&PixelCtx::new(&inputs, params, u))
}

#[test]
fn lookup_matches_kind_table() {
    let probes = [
        Vec2::new(0.12, 0.34),
        Vec2::new(0.77, 0.21),
        Vec2::new(0.5, 0.93),
    ];
    for kind in TransitionKind::ALL {
        for u in probes {
            for progress in [0.25, 0.6] {
                assert_eq!(
                    render_with(lookup(kind.id()), progress, u),
                    render_with(kind.effect_fn(), progress, u),
                    "{kind}"
                );
            }
        }
    }
}

#[test]
fn lookup_falls_back_outside_the_catalog() {
    let u = Vec2::new(0.4, 0.6);
    for id in [-1, 30, 31, 999, i32::MIN, i32::MAX] {
        assert_eq!(
            render_with(lookup(id), 0.5, u),
            render_with(FALLBACK, 0.5, u)
        );
        assert_eq!(
            render_with(lookup(id), 0.5, u),
            Rgb::new(0.9, 0.3, 0.1)
        );
    }
}

#[test]
fn table_entries_are_distinct_effects() {
    // off the pixel-center lattice: at (k + 0.5) / 12 the 8x and 80x bar phases coincide
    let grid: Vec<Vec2> = (0..12)
        .flat_map(|y| {
            (0..12).map(move |x| Vec2::new((x as f64 + 0.37) / 12.0, (y as f64 + 0.37) / 12.0))
        })
        .collect();
    let signature = |kind: TransitionKind| -> Vec<[u8; 4]> {
        [0.2, 0.45, 0.7]
            .into_iter()
            .flat_map(|p| grid.iter().map(move |u| (p, *u)))
            .map(|(p, u)| render_with(kind.effect_fn(), p, u).to_rgba8())
            .collect()
    };

    let sigs: Vec<_> = TransitionKind::ALL.into_iter().map(signature).collect();
    for i in 0..sigs.len() {
        for j in (i + 1)..sigs.len() {
            assert_ne!(
                sigs[i], sigs[j],
                "{} and {} render identically",
                TransitionKind::ALL[i],
                TransitionKind::ALL[j]
            );
        }
    }
}

#[test]
fn bar_frequencies_differ_on_the_distinctness_grid() {
    let coarse = TransitionKind::BarsLeftToRight.effect_fn();
    let fine = TransitionKind::FineBarsLeftToRight.effect_fn();
    // centered x = -0.46917: fract(8x) = 0.2467 flips, fract(80x) = 0.4667 holds
    let u = Vec2::new(0.37 / 12.0, 0.5);
    assert_eq!(render_with(fine, 0.45, u), Rgb::new(0.9, 0.3, 0.1));
    assert_ne!(render_with(coarse, 0.45, u), render_with(fine, 0.45, u));
}
