// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use rgb::{ComponentBytes, RGBA8};

use crate::Error;

/// Encodes a pixmap into an 8-bit RGBA PNG.
///
/// The encoder settings are fixed, so the same pixmap always produces the same bytes.
pub fn encode_png(pixmap: &tiny_skia::Pixmap) -> Result<Vec<u8>, Error> {
    let rgba = demultiply(pixmap);

    let mut data = Vec::new();
    let mut encoder = png::Encoder::new(&mut data, pixmap.width(), pixmap.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Default);
    encoder.set_filter(png::FilterType::Sub);
    encoder.set_adaptive_filter(png::AdaptiveFilterType::NonAdaptive);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgba.as_bytes())?;
    writer.finish()?;

    Ok(data)
}

// tiny-skia stores premultiplied colors, PNG expects straight alpha.
fn demultiply(pixmap: &tiny_skia::Pixmap) -> Vec<RGBA8> {
    pixmap
        .pixels()
        .iter()
        .map(|p| {
            let c = p.demultiply();
            RGBA8::new(c.red(), c.green(), c.blue(), c.alpha())
        })
        .collect()
}
