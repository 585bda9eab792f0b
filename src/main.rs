// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#![allow(clippy::uninlined_format_args)]

use std::path;

use favicon_render::{Fit, Options};

fn main() {
    if let Err(e) = process() {
        eprintln!("Error: {}.", e);
        std::process::exit(1);
    }

    println!("Favicon created successfully!");
}

fn timed<F, T>(perf: bool, name: &str, mut f: F) -> T
where
    F: FnMut() -> T,
{
    let now = std::time::Instant::now();
    let result = f();
    if perf {
        let elapsed = now.elapsed().as_micros() as f64 / 1000.0;
        println!("{}: {:.2}ms", name, elapsed);
    }

    result
}

fn process() -> Result<(), String> {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            println!("{}", HELP);
            return Err(e);
        }
    };

    if !args.quiet {
        if let Ok(()) = log::set_logger(&LOGGER) {
            log::set_max_level(log::LevelFilter::Warn);
        }
    }

    let svg_data = timed(args.perf, "Reading", || favicon_render::load(&args.input))
        .map_err(|e| e.to_string())?;

    let tree = timed(args.perf, "SVG Parsing", || {
        favicon_render::decode(&svg_data, &args.opt)
    })
    .map_err(|e| e.to_string())?;

    let pixmap = timed(args.perf, "Rendering", || {
        favicon_render::render(&tree, &args.opt)
    })
    .map_err(|e| e.to_string())?;

    let png = timed(args.perf, "Encoding", || favicon_render::encode_png(&pixmap))
        .map_err(|e| e.to_string())?;

    timed(args.perf, "Saving", || favicon_render::save(&png, &args.output))
        .map_err(|e| e.to_string())
}

const HELP: &str = "\
favicon-render renders an SVG file into a square PNG favicon.

USAGE:
  favicon-render [OPTIONS]

  favicon-render
  favicon-render -i logo.svg -o favicon.png
  favicon-render -s 16 --fit contain --background white

OPTIONS:
      --help                    Prints this help
  -V, --version                 Prints version

  -i, --input PATH              Sets the input SVG file
                                [default: favicon.svg]
  -o, --output PATH             Sets the output PNG file
                                [default: ../favicon.png]
  -s, --size LENGTH             Sets the output width and height in pixels
                                [default: 32] [possible values: 1..4096 (inclusive)]
  --fit MODE                    Sets how a non-square image is mapped onto the square
                                [default: cover]
                                [possible values: cover, contain, fill]
  --background COLOR            Sets the background color
                                Examples: red, #fff, #fff000
  --resources-dir DIR           Sets a directory that will be used during
                                relative paths resolving.
                                [default: input file directory]

  --use-font-file PATH          Load a specified font file into the fonts database.
                                Will be used during text to path conversion.
                                This option can be set multiple times
  --use-fonts-dir PATH          Loads all fonts from the specified directory
                                into the fonts database.
                                Will be used during text to path conversion.
                                This option can be set multiple times
  --skip-system-fonts           Disables system fonts loading.
                                You should add some fonts manually using
                                --use-font-file and/or --use-fonts-dir
                                Otherwise, text elements will not be processed

  --perf                        Prints performance stats
  --quiet                       Disables warnings
";

#[derive(Debug)]
struct CliArgs {
    input: path::PathBuf,
    output: path::PathBuf,
    size: u32,
    fit: Fit,
    background: Option<svgtypes::Color>,
    resources_dir: Option<path::PathBuf>,

    font_files: Vec<path::PathBuf>,
    font_dirs: Vec<path::PathBuf>,
    skip_system_fonts: bool,

    perf: bool,
    quiet: bool,
}

fn collect_args() -> Result<CliArgs, pico_args::Error> {
    let mut input = pico_args::Arguments::from_env();

    if input.contains("--help") {
        print!("{}", HELP);
        std::process::exit(0);
    }

    if input.contains(["-V", "--version"]) {
        println!("{}", env!("CARGO_PKG_VERSION"));
        std::process::exit(0);
    }

    let args = CliArgs {
        input: input
            .opt_value_from_str(["-i", "--input"])?
            .unwrap_or_else(|| path::PathBuf::from("favicon.svg")),
        output: input
            .opt_value_from_str(["-o", "--output"])?
            .unwrap_or_else(|| path::PathBuf::from("../favicon.png")),
        size: input
            .opt_value_from_fn(["-s", "--size"], parse_length)?
            .unwrap_or(favicon_render::DEFAULT_SIZE),
        fit: input.opt_value_from_str("--fit")?.unwrap_or_default(),
        background: input.opt_value_from_str("--background")?,
        resources_dir: input.opt_value_from_str("--resources-dir")?,

        font_files: input.values_from_str("--use-font-file")?,
        font_dirs: input.values_from_str("--use-fonts-dir")?,
        skip_system_fonts: input.contains("--skip-system-fonts"),

        perf: input.contains("--perf"),
        quiet: input.contains("--quiet"),
    };

    let remaining = input.finish();
    if !remaining.is_empty() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected arguments {:?}", remaining),
        });
    }

    Ok(args)
}

fn parse_length(s: &str) -> Result<u32, String> {
    let n: u32 = s.parse().map_err(|_| "invalid length")?;

    if n == 0 {
        Err("LENGTH cannot be zero".to_string())
    } else if n > favicon_render::MAX_SIZE {
        Err(format!("LENGTH cannot be larger than {}", favicon_render::MAX_SIZE))
    } else {
        Ok(n)
    }
}

struct Args {
    input: path::PathBuf,
    output: path::PathBuf,
    perf: bool,
    quiet: bool,
    opt: Options,
}

fn parse_args() -> Result<Args, String> {
    let args = collect_args().map_err(|e| e.to_string())?;

    if args.skip_system_fonts && args.font_files.is_empty() && args.font_dirs.is_empty() {
        println!("Warning: text elements will not be rendered without any fonts.");
    }

    let resources_dir = match args.resources_dir {
        Some(v) => Some(v),
        None => favicon_render::input_dir(&args.input),
    };

    let opt = Options {
        size: args.size,
        fit: args.fit,
        background: args.background,
        resources_dir,
        font_files: args.font_files,
        font_dirs: args.font_dirs,
        skip_system_fonts: args.skip_system_fonts,
    };

    Ok(Args {
        input: args.input,
        output: args.output,
        perf: args.perf,
        quiet: args.quiet,
        opt,
    })
}

/// A simple stderr logger.
static LOGGER: SimpleLogger = SimpleLogger;
struct SimpleLogger;
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::LevelFilter::Warn
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            let target = if !record.target().is_empty() {
                record.target()
            } else {
                record.module_path().unwrap_or_default()
            };

            let line = record.line().unwrap_or(0);
            let args = record.args();

            match record.level() {
                log::Level::Error => eprintln!("Error (in {}:{}): {}", target, line, args),
                log::Level::Warn => eprintln!("Warning (in {}:{}): {}", target, line, args),
                log::Level::Info => eprintln!("Info (in {}:{}): {}", target, line, args),
                log::Level::Debug => eprintln!("Debug (in {}:{}): {}", target, line, args),
                log::Level::Trace => eprintln!("Trace (in {}:{}): {}", target, line, args),
            }
        }
    }

    fn flush(&self) {}
}
