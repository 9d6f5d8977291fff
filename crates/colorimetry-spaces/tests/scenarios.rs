//! Known-value checks and end-to-end use through the config layer.

use approx::assert_abs_diff_eq;
use colorimetry_data::{ReferenceData, BUILTIN_ILLUMINANTS, BUILTIN_RGB_SPACES};
use colorimetry_spaces::prelude::*;

#[test]
fn test_black_hsl() {
    assert_eq!(Rgb::new(0.0, 0.0, 0.0).to_hsl(), Hsl::new(0.0, 0.0, 0.0));
    assert_eq!(Hsl::new(0.0, 0.0, 0.0).to_rgb(), Rgb::new(0.0, 0.0, 0.0));
}

#[test]
fn test_white_hsl() {
    let white = Rgb::new(1.0, 1.0, 1.0);
    assert_eq!(white.to_hsl(), Hsl::new(0.0, 0.0, 1.0));
    assert_eq!(white.to_hsl().to_rgb(), white);
}

#[test]
fn test_grey_hsv() {
    assert_eq!(Rgb::new(0.5, 0.5, 0.5).to_hsv(), Hsv::new(0.0, 0.0, 0.5));
    assert_eq!(Hsv::new(0.0, 0.0, 0.5).to_rgb(), Rgb::new(0.5, 0.5, 0.5));
}

#[test]
fn test_red_quantized() {
    let red = Rgb255::from_rgb(Rgb::new(1.0, 0.0, 0.0));
    assert_eq!(red, Rgb255::new(255, 0, 0));
    assert_eq!(red.to_hex().to_string(), "#FF0000");
}

#[test]
fn test_d65_to_d65_bradford() {
    let data = ReferenceData::builtin().unwrap();
    let m = data.adapt_by_name("D65", "D65", AdaptationMethod::Bradford).unwrap();
    assert!(m.approx_eq(&Mat3::IDENTITY, 1e-9), "{m:?}");
}

#[test]
fn test_srgb_matrix_inverse() {
    let data = ReferenceData::builtin().unwrap();
    let m = data.rgb_to_xyz_matrix_by_name("sRGB").unwrap();
    let inv = m.inverse().unwrap();
    assert!((m * inv).approx_eq(&Mat3::IDENTITY, 1e-6));
    assert!((inv * m).approx_eq(&Mat3::IDENTITY, 1e-6));
}

#[test]
fn test_unknown_names_are_lookup_errors() {
    let data = ReferenceData::builtin().unwrap();
    assert!(data.rgb_to_xyz_matrix_by_name("Lab Gamut").is_err());
    assert!(data.adapt_by_name("D65", "D93", AdaptationMethod::Bradford).is_err());

    let conv = Converter::builtin().unwrap();
    let err = EngineConfig::from_yaml("working_space: Display P3\n").unwrap().build().unwrap_err();
    assert!(err.is_lookup());
    assert!(!err.is_fatal());
    assert_eq!(conv.context().space(), RgbSpaceId::Srgb);
}

#[test]
fn test_oklab_of_srgb_white() {
    // D65 white through an unadapted sRGB context lands on L = 1, a = b = 0
    let conv = EngineConfig::from_yaml("adapt_to_d50: false\n").unwrap().build().unwrap();
    let lab = Rgb::new(1.0, 1.0, 1.0).to_oklab(conv.context());
    assert_abs_diff_eq!(lab.l(), 1.0, epsilon = 1e-3);
    assert_abs_diff_eq!(lab.a(), 0.0, epsilon = 1e-3);
    assert_abs_diff_eq!(lab.b(), 0.0, epsilon = 1e-3);
}

#[test]
fn test_hex_to_hsv_through_converter() {
    let conv = Converter::builtin().unwrap();
    let hex: Hex = "#00FF00".parse().unwrap();
    let hsv = conv.convert(&hex.into(), SpaceKind::Hsv);
    assert_eq!(hsv, AnyColor::Hsv(Hsv::new(1.0 / 3.0, 1.0, 1.0)));
    assert_eq!(conv.convert(&hsv, SpaceKind::Hex), AnyColor::Hex(hex));
}

#[test]
fn test_config_file_drives_converter() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("tables")).unwrap();
    std::fs::write(dir.path().join("tables/illuminant.csv"), BUILTIN_ILLUMINANTS).unwrap();
    std::fs::write(dir.path().join("tables/rgb.csv"), BUILTIN_RGB_SPACES).unwrap();
    let path = dir.path().join("engine.yaml");
    std::fs::write(
        &path,
        "illuminants: tables/illuminant.csv\n\
         rgb_spaces: tables/rgb.csv\n\
         working_space: Adobe RGB (1998)\n",
    )
    .unwrap();

    let conv = EngineConfig::from_file(&path).unwrap().build().unwrap();
    assert_eq!(conv.context().space(), RgbSpaceId::AdobeRgb1998);
    assert!(conv.context().adapt_to_d50());

    // Adapted working space: RGB white lands on D50
    let d50 = conv.data().white_point(Illuminant::D50).unwrap();
    let xyz = conv.to_xyz(&Rgb::new(1.0, 1.0, 1.0).into());
    assert_abs_diff_eq!(xyz.x(), d50.x, epsilon = 1e-9);
    assert_abs_diff_eq!(xyz.y(), d50.y, epsilon = 1e-9);
    assert_abs_diff_eq!(xyz.z(), d50.z, epsilon = 1e-9);
}

#[test]
fn test_synthetic_tables_with_singular_primaries_are_fatal() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("ill.csv"), BUILTIN_ILLUMINANTS).unwrap();
    std::fs::write(
        dir.path().join("rgb.csv"),
        "Name,Reference White,Red Primary x,Red Primary y,Green Primary x,Green Primary y,Blue Primary x,Blue Primary y\n\
         sRGB,D65,0.2,0.2,0.3,0.3,0.4,0.4\n",
    )
    .unwrap();
    let path = dir.path().join("engine.yaml");
    std::fs::write(&path, "illuminants: ill.csv\nrgb_spaces: rgb.csv\n").unwrap();

    let err = EngineConfig::from_file(&path).unwrap().build().unwrap_err();
    assert!(err.is_fatal(), "{err}");
}
