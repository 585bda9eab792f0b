// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
`favicon-render` renders an SVG file into a small square PNG, usually a favicon.

```no_run
let opt = favicon_render::Options::default();
favicon_render::convert("favicon.svg".as_ref(), "../favicon.png".as_ref(), &opt).unwrap();
```

The conversion is split into stages that can be used separately:
[`load`], [`decode`], [`render`], [`encode_png`] and [`save`].
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::uninlined_format_args)]

use std::borrow::Cow;
use std::io::Write;
use std::path::{Path, PathBuf};

mod encode;
mod error;
mod fit;

pub use encode::encode_png;
pub use error::Error;
pub use fit::Fit;

/// The default output size in pixels.
pub const DEFAULT_SIZE: u32 = 32;

/// The largest accepted output size in pixels.
pub const MAX_SIZE: u32 = 4096;

/// Conversion options.
#[derive(Clone, Debug)]
pub struct Options {
    /// Output width and height in pixels.
    ///
    /// Must be in `1..=MAX_SIZE`.
    ///
    /// Default: 32
    pub size: u32,

    /// How a non-square image is mapped onto the output square.
    ///
    /// Default: `Fit::Cover`
    pub fit: Fit,

    /// A color that will be painted under the image.
    ///
    /// Default: `None`, i.e. transparent
    pub background: Option<svgtypes::Color>,

    /// Directory that will be used during relative paths resolving.
    ///
    /// [`convert`] uses the input file directory when not set.
    ///
    /// Default: `None`
    pub resources_dir: Option<PathBuf>,

    /// Font files that will be loaded into the fonts database.
    pub font_files: Vec<PathBuf>,

    /// Directories whose fonts will be loaded into the fonts database.
    pub font_dirs: Vec<PathBuf>,

    /// Disables system fonts loading.
    pub skip_system_fonts: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            size: DEFAULT_SIZE,
            fit: Fit::default(),
            background: None,
            resources_dir: None,
            font_files: Vec::new(),
            font_dirs: Vec::new(),
            skip_system_fonts: false,
        }
    }
}

/// Renders the SVG file at `input` into a PNG file at `output`.
///
/// The output file is not touched until the PNG is fully encoded,
/// so read and decode errors leave an existing file intact.
pub fn convert(input: &Path, output: &Path, opt: &Options) -> Result<(), Error> {
    let data = load(input)?;

    let tree = if opt.resources_dir.is_some() {
        decode(&data, opt)?
    } else {
        let opt = Options {
            resources_dir: input_dir(input),
            ..opt.clone()
        };
        decode(&data, &opt)?
    };

    let pixmap = render(&tree, opt)?;
    let png = encode_png(&pixmap)?;
    save(&png, output)
}

/// Reads the whole file into memory.
pub fn load(path: &Path) -> Result<Vec<u8>, Error> {
    std::fs::read(path).map_err(|e| Error::Read(path.to_path_buf(), e))
}

/// Parses an SVG or SVGZ data.
pub fn decode(data: &[u8], opt: &Options) -> Result<usvg::Tree, Error> {
    let data = if data.starts_with(&[0x1f, 0x8b]) {
        Cow::Owned(usvg::decompress_svgz(data)?)
    } else {
        Cow::Borrowed(data)
    };

    let svg_string = std::str::from_utf8(&data).map_err(|_| usvg::Error::NotAnUtf8Str)?;

    let xml_opt = usvg::roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    let xml_tree = usvg::roxmltree::Document::parse_with_options(svg_string, xml_opt)
        .map_err(usvg::Error::ParsingFailed)?;

    let mut usvg_opt = usvg::Options {
        resources_dir: opt.resources_dir.clone(),
        ..usvg::Options::default()
    };
    if let Some(size) = usvg::Size::from_wh(opt.size as f32, opt.size as f32) {
        usvg_opt.default_size = size;
    }

    #[cfg(feature = "text")]
    let tree = {
        // fontdb initialization is pretty expensive, so perform it only when needed.
        let has_text_nodes = xml_tree
            .descendants()
            .any(|n| n.has_tag_name(("http://www.w3.org/2000/svg", "text")));

        let mut fontdb = usvg::fontdb::Database::new();
        if has_text_nodes {
            load_fonts(opt, &mut fontdb);
        }

        usvg::Tree::from_xmltree(&xml_tree, &usvg_opt, &fontdb)?
    };

    #[cfg(not(feature = "text"))]
    let tree = usvg::Tree::from_xmltree(&xml_tree, &usvg_opt)?;

    log::debug!("Decoded a {}x{} SVG.", tree.size().width(), tree.size().height());

    Ok(tree)
}

/// Renders a tree onto a new square pixmap of `opt.size` pixels.
pub fn render(tree: &usvg::Tree, opt: &Options) -> Result<tiny_skia::Pixmap, Error> {
    if !(1..=MAX_SIZE).contains(&opt.size) {
        return Err(Error::InvalidSize(opt.size));
    }

    let mut pixmap =
        tiny_skia::Pixmap::new(opt.size, opt.size).ok_or(Error::InvalidSize(opt.size))?;

    if let Some(background) = opt.background {
        pixmap.fill(svg_to_skia_color(background));
    }

    let size = tree.size();
    if opt.fit == Fit::Cover && size.width() != size.height() {
        log::debug!(
            "A {}x{} image will be cropped to a square.",
            size.width(),
            size.height()
        );
    }

    let ts = opt.fit.to_transform(size, opt.size);
    resvg::render(tree, ts, &mut pixmap.as_mut());

    Ok(pixmap)
}

/// Writes data to a file, creating or truncating it.
///
/// A partially written regular file is removed on failure.
/// Devices, pipes and other special files are left in place.
pub fn save(data: &[u8], path: &Path) -> Result<(), Error> {
    let file = std::fs::File::create(path).map_err(|e| Error::Write(path.to_path_buf(), e))?;
    let is_file = file.metadata().map(|m| m.is_file()).unwrap_or(false);
    write_output(file, data, path, is_file)
}

fn write_output<W: Write>(
    mut out: W,
    data: &[u8],
    path: &Path,
    remove_on_error: bool,
) -> Result<(), Error> {
    if let Err(e) = out.write_all(data).and_then(|_| out.flush()) {
        drop(out);
        if remove_on_error {
            if let Err(e) = std::fs::remove_file(path) {
                log::warn!("Failed to remove '{}' cause {}.", path.display(), e);
            }
        }

        return Err(Error::Write(path.to_path_buf(), e));
    }

    Ok(())
}

/// Returns the absolute directory of the input file.
///
/// Used as the default resources directory.
pub fn input_dir(path: &Path) -> Option<PathBuf> {
    std::fs::canonicalize(path)
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
}

#[cfg(feature = "text")]
fn load_fonts(opt: &Options, fontdb: &mut usvg::fontdb::Database) {
    if !opt.skip_system_fonts {
        fontdb.load_system_fonts();
    }

    for path in &opt.font_files {
        if let Err(e) = fontdb.load_font_file(path) {
            log::warn!("Failed to load '{}' cause {}.", path.display(), e);
        }
    }

    for path in &opt.font_dirs {
        fontdb.load_fonts_dir(path);
    }

    if fontdb.len() == 0 {
        log::warn!("No fonts were loaded. Text elements will not be rendered.");
    }
}

fn svg_to_skia_color(color: svgtypes::Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.red, color.green, color.blue, color.alpha)
}
