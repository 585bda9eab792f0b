// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Specifies how an SVG image is mapped onto the square output.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Fit {
    /// Scale uniformly until the square is fully covered.
    ///
    /// The longer side is centered and cropped.
    #[default]
    Cover,
    /// Scale uniformly until the whole image fits.
    ///
    /// The shorter side is centered and padded with the background.
    Contain,
    /// Stretch each axis independently.
    Fill,
}

impl Fit {
    /// Returns a transform that maps an image of `size` onto a `target` × `target` square.
    pub fn to_transform(&self, size: usvg::Size, target: u32) -> tiny_skia::Transform {
        let target = target as f32;
        let sx = target / size.width();
        let sy = target / size.height();

        let (sx, sy) = match *self {
            Fit::Cover => {
                let k = sx.max(sy);
                (k, k)
            }
            Fit::Contain => {
                let k = sx.min(sy);
                (k, k)
            }
            Fit::Fill => (sx, sy),
        };

        let tx = (target - size.width() * sx) / 2.0;
        let ty = (target - size.height() * sy) / 2.0;
        tiny_skia::Transform::from_row(sx, 0.0, 0.0, sy, tx, ty)
    }
}

impl std::str::FromStr for Fit {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cover" => Ok(Fit::Cover),
            "contain" => Ok(Fit::Contain),
            "fill" => Ok(Fit::Fill),
            _ => Err("invalid fit mode"),
        }
    }
}
