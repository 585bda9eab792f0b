use favicon_render::{Fit, Options};
use rgb::RGBA8;

use crate::{convert, is_pix_diff, TRANSPARENT};

const GREEN: RGBA8 = RGBA8 {
    r: 0,
    g: 255,
    b: 0,
    a: 255,
};

const BLUE: RGBA8 = RGBA8 {
    r: 0,
    g: 0,
    b: 255,
    a: 255,
};

fn render_wide(fit: Fit) -> crate::Image {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("favicon.png");
    let opt = Options {
        fit,
        ..Options::default()
    };
    convert("wide.svg", &out, &opt)
}

#[test]
fn cover_crops_sides() {
    let img = render_wide(Fit::Cover);
    // The blue left quarter is cropped away.
    assert!(!is_pix_diff(img.pixel(0, 16), GREEN));
    assert!(!is_pix_diff(img.pixel(31, 0), GREEN));
    assert!(!is_pix_diff(img.pixel(16, 31), GREEN));
}

#[test]
fn contain_letterboxes() {
    let img = render_wide(Fit::Contain);
    assert_eq!(img.pixel(16, 2), TRANSPARENT);
    assert_eq!(img.pixel(16, 29), TRANSPARENT);
    assert!(!is_pix_diff(img.pixel(2, 16), BLUE));
    assert!(!is_pix_diff(img.pixel(20, 16), GREEN));
}

#[test]
fn fill_stretches() {
    let img = render_wide(Fit::Fill);
    assert!(!is_pix_diff(img.pixel(2, 2), BLUE));
    assert!(!is_pix_diff(img.pixel(2, 29), BLUE));
    assert!(!is_pix_diff(img.pixel(20, 2), GREEN));
    assert!(!is_pix_diff(img.pixel(31, 31), GREEN));
}
