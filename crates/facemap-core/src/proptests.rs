use super::*;
use proptest::prelude::*;

fn invertible_matrix() -> impl Strategy<Value = Matrix> {
    (-8.0f64..8.0, -8.0f64..8.0, -8.0f64..8.0, -8.0f64..8.0)
        .prop_filter("matrix must be invertible", |(xx, xy, yx, yy)| {
            (xx * yy - yx * xy).abs() > 1e-3 && xx.hypot(*yx) > 1e-3
        })
        .prop_map(|(xx, xy, yx, yy)| Matrix::new(xx, xy, yx, yy, 0.0, 0.0))
}

fn rect() -> impl Strategy<Value = Rect> {
    (-5000i32..5000, -5000i32..5000, -5000i32..5000, -5000i32..5000)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

// Property: dividing out the font scale factors and multiplying them back
// reproduces the original transform
proptest! {
    #[test]
    fn prop_scale_factors_recompose(m in invertible_matrix()) {
        let (sx, sy) = m.font_scale_factors();
        prop_assert!(sx > 0.0 && sy > 0.0);

        let mut unit = m;
        unit.scale(1.0 / sx, 1.0 / sy);
        let mut back = unit;
        back.scale(sx, sy);

        prop_assert!((back.xx - m.xx).abs() < 1e-9);
        prop_assert!((back.xy - m.xy).abs() < 1e-9);
        prop_assert!((back.yx - m.yx).abs() < 1e-9);
        prop_assert!((back.yy - m.yy).abs() < 1e-9);
    }
}

// Property: once the scale is divided out, the x axis keeps unit length
proptest! {
    #[test]
    fn prop_unit_matrix_has_unit_major_axis(m in invertible_matrix()) {
        let (sx, sy) = m.font_scale_factors();
        let mut unit = m;
        unit.scale(1.0 / sx, 1.0 / sy);
        let (ux, uy) = unit.font_scale_factors();
        prop_assert!((ux - 1.0).abs() < 1e-9);
        prop_assert!((uy - 1.0).abs() < 1e-9);
    }
}

// Property: gravity mappings undo each other
proptest! {
    #[test]
    fn prop_gravity_round_trips(r in rect()) {
        prop_assert_eq!(Gravity::South.map_ink_rect(&r), r);
        prop_assert_eq!(Gravity::North.map_ink_rect(&Gravity::North.map_ink_rect(&r)), r);
        prop_assert_eq!(Gravity::West.map_ink_rect(&Gravity::East.map_ink_rect(&r)), r);
    }
}

// Property: transforming by the identity never changes a normalized rect
proptest! {
    #[test]
    fn prop_identity_transform_keeps_positive_rects(
        x in -5000i32..5000, y in -5000i32..5000, w in 0i32..5000, h in 0i32..5000
    ) {
        let r = Rect::new(x, y, w, h);
        prop_assert_eq!(Matrix::IDENTITY.transform_rect(&r), r);
    }
}

// Property: a description built from style fields survives printing and
// parsing
proptest! {
    #[test]
    fn prop_description_string_is_stable(
        weight in prop::sample::select(vec![
            Weight::THIN, Weight::LIGHT, Weight::NORMAL, Weight::MEDIUM,
            Weight::SEMIBOLD, Weight::BOLD, Weight::HEAVY,
        ]),
        style in prop::sample::select(vec![Style::Normal, Style::Oblique, Style::Italic]),
        stretch in prop::sample::select(vec![
            Stretch::Condensed, Stretch::Normal, Stretch::Expanded,
        ]),
        points in 1i32..200,
    ) {
        let mut desc = FontDescription::new();
        desc.set_family("Noto Sans");
        desc.set_weight(weight);
        desc.set_style(style);
        desc.set_stretch(stretch);
        desc.set_size(points * SCALE);

        let reparsed = FontDescription::parse(&desc.to_string());
        prop_assert_eq!(reparsed, desc);
    }
}
