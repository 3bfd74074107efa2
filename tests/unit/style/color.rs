use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Rgba = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Rgba::rgba(1.0, 0.0, 0.0, 1.0));

    let c: Rgba = serde_json::from_value(json!("#0000ff80")).unwrap();
    assert!((c.b - 1.0).abs() < 1e-9);
    assert!((c.a - (128.0 / 255.0)).abs() < 1e-9);
}

#[test]
fn parses_rgba_object_and_array() {
    let c: Rgba = serde_json::from_value(json!({"r": 0.25, "g": 0.5, "b": 0.75})).unwrap();
    assert_eq!(c, Rgba::rgba(0.25, 0.5, 0.75, 1.0));

    let c: Rgba = serde_json::from_value(json!([0.25, 0.5, 0.75, 0.9])).unwrap();
    assert_eq!(c, Rgba::rgba(0.25, 0.5, 0.75, 0.9));
}

#[test]
fn rejects_bad_hex_and_array_lengths() {
    assert!(serde_json::from_value::<Rgba>(json!("#12345")).is_err());
    assert!(serde_json::from_value::<Rgba>(json!("#zz0000")).is_err());
    assert!(serde_json::from_value::<Rgba>(json!([0.1, 0.2])).is_err());
}

#[test]
fn serialized_form_reads_back() {
    let c = Rgba::rgba8(255, 107, 0, 0.7);
    let back: Rgba = serde_json::from_value(serde_json::to_value(c).unwrap()).unwrap();
    assert_eq!(back, c);
    assert_eq!(Rgba::rgb8(255, 215, 0).to_hex(), "#FFD700FF");
}

#[test]
fn validity_checks_channel_range() {
    assert!(Rgba::WHITE.is_valid());
    assert!(!Rgba::rgba(1.5, 0.0, 0.0, 1.0).is_valid());
    assert!(!Rgba::rgba(f64::NAN, 0.0, 0.0, 1.0).is_valid());
}

#[test]
fn with_alpha_keeps_channels() {
    let c = Rgba::rgb8(0x66, 0x99, 0xFF).with_alpha(0.25);
    assert_eq!(c.a, 0.25);
    assert_eq!((c.r, c.g, c.b), (0x66 as f64 / 255.0, 0x99 as f64 / 255.0, 1.0));
}
