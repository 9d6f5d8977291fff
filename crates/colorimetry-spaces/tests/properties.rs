//! Conversion laws checked over every working space and a grid of colors.

use approx::assert_abs_diff_eq;
use colorimetry_data::ReferenceData;
use colorimetry_spaces::prelude::*;

/// 6x6x6 grid over the unit cube.
fn rgb_grid() -> Vec<Rgb> {
    let steps: Vec<f64> = (0..=5).map(|i| i as f64 / 5.0).collect();
    let mut out = Vec::with_capacity(216);
    for &r in &steps {
        for &g in &steps {
            for &b in &steps {
                out.push(Rgb::new(r, g, b));
            }
        }
    }
    out
}

fn assert_rgb_close(a: Rgb, b: Rgb, eps: f64) {
    for i in 0..3 {
        let (x, y) = (a.get(i).unwrap(), b.get(i).unwrap());
        assert!((x - y).abs() < eps, "{a} vs {b} (component {i})");
    }
}

/// Distance between two hues in turns, around the circle.
fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(1.0);
    d.min(1.0 - d)
}

#[test]
fn test_xyz_roundtrip_all_working_spaces() {
    let data = ReferenceData::builtin().unwrap();
    let grid = rgb_grid();
    for space in RgbSpaceId::ALL {
        for adapt in [false, true] {
            let ctx = RgbContext::new(&data, space, adapt).unwrap();
            for &c in &grid {
                let back = c.to_xyz(&ctx).to_rgb(&ctx);
                assert_rgb_close(back, c, 1e-6);
            }
        }
    }
}

#[test]
fn test_white_maps_to_reference_white() {
    let data = ReferenceData::builtin().unwrap();
    for record in data.rgb_spaces() {
        let ctx = RgbContext::new(&data, record.space, false).unwrap();
        let white = data.white_point(record.white).unwrap();
        let xyz = Rgb::new(1.0, 1.0, 1.0).to_xyz(&ctx);
        assert_abs_diff_eq!(xyz.x(), white.x, epsilon = 1e-9);
        assert_abs_diff_eq!(xyz.y(), white.y, epsilon = 1e-9);
        assert_abs_diff_eq!(xyz.z(), white.z, epsilon = 1e-9);
    }
}

#[test]
fn test_hsl_hsv_roundtrip() {
    for c in rgb_grid() {
        assert_rgb_close(c.to_hsl().to_rgb(), c, 1e-9);
        assert_rgb_close(c.to_hsl_std().to_rgb(), c, 1e-9);
        assert_rgb_close(c.to_hsv().to_rgb(), c, 1e-9);
        assert_rgb_close(c.to_hsv_std().to_rgb(), c, 1e-9);
    }
}

#[test]
fn test_oklab_and_lms_roundtrip() {
    let ctx = RgbContext::builtin().unwrap();
    for c in rgb_grid() {
        assert_rgb_close(c.to_oklab(&ctx).to_rgb(&ctx), c, 1e-6);
        assert_rgb_close(c.to_lms(&ctx).to_rgb(&ctx), c, 1e-6);

        let xyz = c.to_xyz(&ctx);
        let back = xyz.to_lms().to_xyz();
        assert_abs_diff_eq!(back.x(), xyz.x(), epsilon = 1e-9);
        assert_abs_diff_eq!(back.y(), xyz.y(), epsilon = 1e-9);
        assert_abs_diff_eq!(back.z(), xyz.z(), epsilon = 1e-9);
    }
}

#[test]
fn test_reference_and_library_variants_agree() {
    for c in rgb_grid() {
        let (a, b) = (c.to_hsl(), c.to_hsl_std());
        assert!(hue_distance(a.h(), b.h()) < 1e-6, "{c}: {a} vs {b}");
        assert_abs_diff_eq!(a.s(), b.s(), epsilon = 1e-6);
        assert_abs_diff_eq!(a.l(), b.l(), epsilon = 1e-6);

        let (a, b) = (c.to_hsv(), c.to_hsv_std());
        assert!(hue_distance(a.h(), b.h()) < 1e-6, "{c}: {a} vs {b}");
        assert_abs_diff_eq!(a.s(), b.s(), epsilon = 1e-6);
        assert_abs_diff_eq!(a.v(), b.v(), epsilon = 1e-6);
    }
}

#[test]
fn test_achromatic_hue_is_zero() {
    for v in [0.0, 0.25, 0.5, 1.0] {
        let grey = Rgb::new(v, v, v);
        assert_eq!(grey.to_hsl().h(), 0.0);
        assert_eq!(grey.to_hsl().s(), 0.0);
        assert_eq!(grey.to_hsv_std().h(), 0.0);
        assert!(grey.to_hsv().s().is_finite());
    }
}

#[test]
fn test_adaptation_identity() {
    let data = ReferenceData::builtin().unwrap();
    for ill in Illuminant::ALL {
        for method in AdaptationMethod::ALL {
            assert_eq!(data.adapt(ill, ill, method).unwrap(), Mat3::IDENTITY, "{ill} {method}");
        }
    }
}

#[test]
fn test_hex_roundtrip_whole_cube() {
    for r in 0..=255 {
        for g in 0..=255 {
            for b in 0..=255 {
                let p = Rgb255::new(r, g, b);
                assert_eq!(p.to_hex().to_rgb255(), p);
            }
        }
    }
}

#[test]
fn test_hex_text_roundtrip_every_channel_value() {
    for v in 0..=255 {
        let p = Rgb255::new(v, 255 - v, v / 2);
        let text = p.to_hex().to_string();
        assert_eq!(text.parse::<Hex>().unwrap().to_rgb255(), p);
    }
}

#[test]
fn test_rgb255_through_rgb_is_stable() {
    for v in 0..=255 {
        let p = Rgb255::new(v, v, 255 - v);
        assert_eq!(Rgb255::from_rgb(p.to_rgb()), p);
    }
}

#[test]
fn test_cartesian_laws() {
    let a = Rgb::new(0.1, 0.2, 0.3);
    let b = Rgb::new(0.7, -0.4, 1.5);
    let c = Rgb::new(2.0, 0.25, -1.0);

    assert_eq!(a + b, b + a);
    assert_rgb_close((a + b) + c, a + (b + c), 1e-12);
    assert_eq!(a - a, Rgb::new(0.0, 0.0, 0.0));
    assert_eq!(a * 1.0, a);

    let lab = Oklab::new(0.5, 0.1, -0.2);
    assert_eq!(lab - lab, Oklab::new(0.0, 0.0, 0.0));
}

#[test]
fn test_cylindrical_sub_self_is_zero_radius() {
    let h = Hsv::new(0.3, 0.8, 0.6);
    let z = h - h;
    assert_abs_diff_eq!(z.s(), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(z.v(), 0.0, epsilon = 1e-12);
}

#[test]
fn test_mismatched_kinds_fail() {
    let rgb = AnyColor::from(Rgb::new(0.1, 0.2, 0.3));
    let xyz = AnyColor::from(Xyz::new(0.1, 0.2, 0.3));
    let hsl = AnyColor::from(Hsl::new(0.1, 0.2, 0.3));
    let hsl_std = AnyColor::from(HslStd::new(0.1, 0.2, 0.3));

    for (a, b) in [(&rgb, &xyz), (&hsl, &hsl_std), (&rgb, &hsl)] {
        for result in [a.try_add(b), a.try_sub(b), a.try_mul(b), a.try_div(b)] {
            assert!(matches!(result, Err(ColorError::TypeMismatch { .. })), "{a} {b}");
        }
    }
}

#[test]
fn test_converter_reaches_every_kind() {
    let conv = Converter::builtin().unwrap();
    let orig = Rgb::new(0.8, 0.4, 0.2);
    let start = AnyColor::from(orig);
    for kind in SpaceKind::ALL {
        let there = conv.convert(&start, kind);
        assert_eq!(there.kind(), kind);
        let back = conv.to_rgb(&there);
        // RGB255 and HEX quantize to 1/255
        let eps = if matches!(kind, SpaceKind::Rgb255 | SpaceKind::Hex) {
            0.5 / 255.0 + 1e-12
        } else {
            1e-6
        };
        assert_rgb_close(back, orig, eps);
    }
}
