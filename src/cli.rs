// SPDX-License-Identifier: MIT
//
// Argument parsing and dispatch for the tinct binary.
//
//   argv ──► Cli::parse ──► (Color, Operation, Option<Format>, json)
//        ──► Cli::run   ──► Output (one color, a palette, or every notation)
//        ──► render     ──► text or JSON on stdout
//
// Arguments are read by hand, flags anywhere on the line:
//
//   tinct [--format NAME] [--json] [--steps N] <color> <operation> [args...]

use std::fmt;

use regex::Regex;
use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

use tinct_palette::format::{Format, Formatted, Value, format_many, format_one};
use tinct_palette::harmony::{self, HueShifts};
use tinct_palette::options::{GradientOptions, PaletteOptions, Sweep};
use tinct_palette::{Color, ColorError, gradient, transform};

pub const USAGE: &str = "\
usage: tinct [--format NAME] [--json] [--steps N] <color> <operation> [args...]

colors:  #RGB  #RGBA  #RRGGBB  #RRGGBBAA  r,g,b  (r, g, b, a)   (0-1 or 0-255)
formats: rgb rgba rgb255 hex hexalpha hsl web processing unity

operations:
  show                                 every notation of <color>
  lighten | darken [amount]            lightness +/- amount (default 0.1)
  saturate | desaturate [amount]       saturation +/- amount (default 0.1)
  tint | shade [amount]                mix toward white / black (default 0.1)
  adjust-hue <amount>                  rotate hue by amount turns
  grayscale | complement | invert
  triadic | tetradic | analogous | split-complementary
  hue-shifts <n | o1,o2,...>           n even shifts or explicit offsets
  monochromatic [n] [delta]            lightness sweep (default 3, 0.1)
  material [n] [delta]                 lightness sweep (default 5, 0.2)
  gradient <end> [steps]               two-color gradient (default 10 steps)
  stops <c2> [c3...]                   multi-stop gradient, length from --steps";

// Three or four numbers, comma separated, optionally parenthesized.
const TUPLE: &str = r"^\s*\(?\s*(-?(?:\d+(?:\.\d*)?|\.\d+))\s*,\s*(-?(?:\d+(?:\.\d*)?|\.\d+))\s*,\s*(-?(?:\d+(?:\.\d*)?|\.\d+))\s*(?:,\s*(-?(?:\d+(?:\.\d*)?|\.\d+))\s*)?\)?\s*$";

// ─── Errors ──────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    /// `-h` / `--help` was given.
    #[error("{}", USAGE)]
    Help,

    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("tuple pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

fn usage(msg: impl Into<String>) -> CliError {
    CliError::Usage(msg.into())
}

// ─── Operations ──────────────────────────────────────────────────────────────

/// What to do with the color.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Show,
    Lighten(f64),
    Darken(f64),
    Saturate(f64),
    Desaturate(f64),
    Tint(f64),
    Shade(f64),
    AdjustHue(f64),
    Grayscale,
    Complement,
    Invert,
    Triadic,
    Tetradic,
    Analogous,
    SplitComplementary,
    HueShifts(HueShifts),
    Monochromatic(Sweep),
    Material(Sweep),
    Gradient { end: Color, steps: usize },
    Stops { rest: Vec<Color>, steps: usize },
}

/// A fully parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Cli {
    pub color: Color,
    pub operation: Operation,
    pub format: Option<Format>,
    pub json: bool,
}

/// What an operation produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    One(Value),
    Many(Formatted),
    Notations(Notations),
}

impl Cli {
    /// Parse the arguments after the program name.
    ///
    /// # Errors
    ///
    /// [`CliError::Help`] for `-h`/`--help`, [`CliError::Usage`] for a
    /// malformed command line, [`CliError::Color`] for a bad color.
    pub fn parse<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let colors = ColorReader::new()?;
        let mut format = None;
        let mut json = false;
        let mut steps = None;
        let mut positional = Vec::new();

        let mut args = args.into_iter().map(Into::<String>::into);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Err(CliError::Help),
                "--json" => json = true,
                "--format" | "-f" => {
                    let name = args.next().ok_or_else(|| usage("--format needs a name"))?;
                    format = Some(parse_format(&name)?);
                }
                "--steps" | "-n" => {
                    let n = args.next().ok_or_else(|| usage("--steps needs a count"))?;
                    steps = Some(parse_count(&n)?);
                }
                _ => {
                    if let Some(name) = arg.strip_prefix("--format=") {
                        format = Some(parse_format(name)?);
                    } else if let Some(n) = arg.strip_prefix("--steps=") {
                        steps = Some(parse_count(n)?);
                    } else {
                        positional.push(arg);
                    }
                }
            }
        }

        let [color, name, rest @ ..] = positional.as_slice() else {
            return Err(usage("expected a color and an operation"));
        };
        let color = colors.read(color)?;
        let operation = parse_operation(name, rest, steps, &colors)?;

        Ok(Self {
            color,
            operation,
            format,
            json,
        })
    }

    /// Run the operation.
    ///
    /// # Errors
    ///
    /// Only [`CliError::Color`], from a gradient with too few stops.
    pub fn run(&self) -> Result<Output, CliError> {
        let c = self.color;
        let one = |color: Color| Output::One(format_one(&color, self.format));
        let many = |colors: Vec<Color>| Output::Many(format_many(&colors, self.format));

        log::debug!("{:?} on {c}", self.operation);

        Ok(match &self.operation {
            Operation::Show => Output::Notations(Notations::of(&c)),
            Operation::Lighten(amount) => one(transform::lighten(c, *amount)?),
            Operation::Darken(amount) => one(transform::darken(c, *amount)?),
            Operation::Saturate(amount) => one(transform::saturate(c, *amount)?),
            Operation::Desaturate(amount) => one(transform::desaturate(c, *amount)?),
            Operation::Tint(amount) => one(transform::tint(c, *amount)?),
            Operation::Shade(amount) => one(transform::shade(c, *amount)?),
            Operation::AdjustHue(amount) => one(transform::adjust_hue(c, *amount)?),
            Operation::Grayscale => one(transform::grayscale(c)?),
            Operation::Complement => one(transform::complement(c)?),
            Operation::Invert => one(transform::invert(c)?),
            Operation::Triadic => many(harmony::palette_triadic(c)?),
            Operation::Tetradic => many(harmony::palette_tetradic(c)?),
            Operation::Analogous => many(harmony::palette_analogous(c)?),
            Operation::SplitComplementary => many(harmony::palette_split_complementary(c)?),
            Operation::HueShifts(shifts) => many(harmony::palette_hue_shifts(c, shifts.clone())?),
            Operation::Monochromatic(sweep) => many(harmony::monochromatic_with(c, *sweep)?),
            Operation::Material(sweep) => many(harmony::material_with(c, *sweep)?),
            Operation::Gradient { end, steps } => many(gradient::gradient(c, end, *steps)?),
            Operation::Stops { rest, steps } => {
                many(gradient::gradient_stops_from(c, rest, *steps)?)
            }
        })
    }
}

/// Text for the terminal, or pretty JSON.
///
/// # Errors
///
/// [`CliError::Json`] if serialization fails.
pub fn render(output: &Output, json: bool) -> Result<String, CliError> {
    if json {
        let text = match output {
            Output::One(value) => serde_json::to_string_pretty(value)?,
            Output::Many(values) => serde_json::to_string_pretty(values)?,
            Output::Notations(notations) => serde_json::to_string_pretty(notations)?,
        };
        return Ok(text);
    }
    Ok(match output {
        Output::One(value) => value.to_string(),
        Output::Many(values) => values.to_string(),
        Output::Notations(notations) => notations.to_string(),
    })
}

// ─── Show ────────────────────────────────────────────────────────────────────

/// A color in every notation, in [`Format::all`] order, exports excluded.
#[derive(Debug, Clone, PartialEq)]
pub struct Notations(Vec<(Format, Value)>);

impl Notations {
    fn of(color: &Color) -> Self {
        Self(
            Format::all()
                .into_iter()
                .filter(|f| !f.is_export())
                .map(|f| (f, format_one(color, Some(f))))
                .collect(),
        )
    }
}

impl fmt::Display for Notations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (format, value)) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{:<9}{value}", format.name())?;
        }
        Ok(())
    }
}

// A JSON object keyed by format name, in display order.
impl Serialize for Notations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (format, value) in &self.0 {
            map.serialize_entry(format.name(), value)?;
        }
        map.end()
    }
}

// ─── Argument parsing ────────────────────────────────────────────────────────

/// Reads a color argument: a numeric tuple if it looks like one, hex
/// otherwise.
struct ColorReader {
    tuple: Regex,
}

impl ColorReader {
    fn new() -> Result<Self, CliError> {
        Ok(Self {
            tuple: Regex::new(TUPLE)?,
        })
    }

    fn read(&self, arg: &str) -> Result<Color, CliError> {
        let Some(caps) = self.tuple.captures(arg) else {
            return Ok(Color::parse(arg)?);
        };
        let values = caps
            .iter()
            .skip(1)
            .flatten()
            .map(|m| {
                m.as_str()
                    .parse::<f64>()
                    .map_err(|_| usage(format!("bad number {:?} in {arg:?}", m.as_str())))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Color::from_components(&values)?)
    }
}

fn parse_format(name: &str) -> Result<Format, CliError> {
    Format::from_name(name).ok_or_else(|| usage(format!("unknown format {name:?}")))
}

fn parse_count(arg: &str) -> Result<usize, CliError> {
    arg.trim()
        .parse()
        .map_err(|_| usage(format!("expected a count, got {arg:?}")))
}

fn parse_amount(arg: &str) -> Result<f64, CliError> {
    match arg.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(usage(format!("expected a number, got {arg:?}"))),
    }
}

/// `3` → three even shifts; `0,0.25,0.5` → those offsets.
fn parse_shifts(arg: &str) -> Result<HueShifts, CliError> {
    if arg.contains(',') {
        let offsets = arg
            .split(',')
            .map(parse_amount)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(HueShifts::Offsets(offsets))
    } else {
        Ok(HueShifts::Even(parse_count(arg)?))
    }
}

fn parse_operation(
    name: &str,
    args: &[String],
    steps: Option<usize>,
    colors: &ColorReader,
) -> Result<Operation, CliError> {
    let defaults = PaletteOptions::default();
    let amount = |args: &[String]| -> Result<f64, CliError> {
        match args {
            [] => Ok(defaults.amount),
            [a] => parse_amount(a),
            _ => Err(usage(format!("{name} takes at most one amount"))),
        }
    };
    let no_args = |op: Operation| {
        if args.is_empty() {
            Ok(op)
        } else {
            Err(usage(format!("{name} takes no arguments")))
        }
    };
    let sweep = |base: Sweep| -> Result<Sweep, CliError> {
        match args {
            [] => Ok(base),
            [n] => Ok(base.with(Some(parse_count(n)?), None)),
            [n, delta] => Ok(base.with(Some(parse_count(n)?), Some(parse_amount(delta)?))),
            _ => Err(usage(format!("{name} takes [n] [delta]"))),
        }
    };
    let steps_or_default = steps.unwrap_or(GradientOptions::default().steps);

    match name.to_ascii_lowercase().as_str() {
        "show" => no_args(Operation::Show),
        "lighten" => Ok(Operation::Lighten(amount(args)?)),
        "darken" => Ok(Operation::Darken(amount(args)?)),
        "saturate" => Ok(Operation::Saturate(amount(args)?)),
        "desaturate" => Ok(Operation::Desaturate(amount(args)?)),
        "tint" => Ok(Operation::Tint(amount(args)?)),
        "shade" => Ok(Operation::Shade(amount(args)?)),
        "adjust-hue" => match args {
            [a] => Ok(Operation::AdjustHue(parse_amount(a)?)),
            _ => Err(usage("adjust-hue takes one amount")),
        },
        "grayscale" => no_args(Operation::Grayscale),
        "complement" => no_args(Operation::Complement),
        "invert" => no_args(Operation::Invert),
        "triadic" => no_args(Operation::Triadic),
        "tetradic" => no_args(Operation::Tetradic),
        "analogous" => no_args(Operation::Analogous),
        "split-complementary" => no_args(Operation::SplitComplementary),
        "hue-shifts" => match args {
            [shifts] => Ok(Operation::HueShifts(parse_shifts(shifts)?)),
            _ => Err(usage("hue-shifts takes a count or a list of offsets")),
        },
        "monochromatic" => Ok(Operation::Monochromatic(sweep(defaults.monochromatic)?)),
        "material" => Ok(Operation::Material(sweep(defaults.material)?)),
        "gradient" => match args {
            [end] => Ok(Operation::Gradient {
                end: colors.read(end)?,
                steps: steps_or_default,
            }),
            [end, n] => Ok(Operation::Gradient {
                end: colors.read(end)?,
                steps: parse_count(n)?,
            }),
            _ => Err(usage("gradient takes <end> [steps]")),
        },
        // The start color plus no further stops is left to the engine,
        // which reports it as too few stops.
        "stops" => Ok(Operation::Stops {
            rest: args
                .iter()
                .map(|a| colors.read(a))
                .collect::<Result<_, _>>()?,
            steps: steps_or_default,
        }),
        _ => Err(usage(format!("unknown operation {name:?}"))),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(line: &str) -> Result<Cli, CliError> {
        Cli::parse(line.split_whitespace())
    }

    fn run(line: &str) -> String {
        let cli = parse(line).unwrap();
        render(&cli.run().unwrap(), cli.json).unwrap()
    }

    fn hex(s: &str) -> Color {
        Color::parse(s).unwrap()
    }

    // ── Parsing ──────────────────────────────────────────────────────────

    #[test]
    fn color_and_operation() {
        let cli = parse("#F00 invert").unwrap();
        assert_eq!(cli.color, hex("#FF0000"));
        assert_eq!(cli.operation, Operation::Invert);
        assert_eq!(cli.format, None);
        assert!(!cli.json);
    }

    #[test]
    fn flags_anywhere() {
        let cli = parse("--json #F00 triadic --format web").unwrap();
        assert!(cli.json);
        assert_eq!(cli.format, Some(Format::Web));

        let cli = parse("#F00 --format=HEX lighten").unwrap();
        assert_eq!(cli.format, Some(Format::Hex));
    }

    #[test]
    fn amounts_default_and_override() {
        assert_eq!(parse("#F00 lighten").unwrap().operation, Operation::Lighten(0.1));
        assert_eq!(parse("#F00 shade 0.3").unwrap().operation, Operation::Shade(0.3));
        assert_eq!(
            parse("#F00 adjust-hue -0.25").unwrap().operation,
            Operation::AdjustHue(-0.25)
        );
    }

    #[test]
    fn tuple_colors() {
        let expected = Color::rgb8(255, 128, 64);
        assert_eq!(parse("255,128,64 show").unwrap().color, expected);
        assert_eq!(parse("(255,128,64) show").unwrap().color, expected);
        assert_eq!(
            Cli::parse(["(1, 0.5, 0, 0.5)", "show"]).unwrap().color,
            Color::rgba(1.0, 0.5, 0.0, 0.5)
        );
    }

    #[test]
    fn hue_shift_forms() {
        assert_eq!(
            parse("#F00 hue-shifts 5").unwrap().operation,
            Operation::HueShifts(HueShifts::Even(5))
        );
        assert_eq!(
            parse("#F00 hue-shifts 0,0.5,-0.1").unwrap().operation,
            Operation::HueShifts(HueShifts::Offsets(vec![0.0, 0.5, -0.1]))
        );
    }

    #[test]
    fn sweeps_fill_defaults() {
        assert_eq!(
            parse("#F00 monochromatic").unwrap().operation,
            Operation::Monochromatic(Sweep::MONOCHROMATIC)
        );
        assert_eq!(
            parse("#F00 material 7").unwrap().operation,
            Operation::Material(Sweep { count: 7, max_delta: 0.2 })
        );
        assert_eq!(
            parse("#F00 material 3 0.05").unwrap().operation,
            Operation::Material(Sweep { count: 3, max_delta: 0.05 })
        );
    }

    #[test]
    fn gradient_steps() {
        let op = parse("#F00 gradient #00F").unwrap().operation;
        assert_eq!(op, Operation::Gradient { end: hex("#00F"), steps: 10 });
        let op = parse("#F00 gradient #00F 4").unwrap().operation;
        assert_eq!(op, Operation::Gradient { end: hex("#00F"), steps: 4 });
        let op = parse("--steps 6 #F00 stops #FFF #00F").unwrap().operation;
        assert_eq!(
            op,
            Operation::Stops {
                rest: vec![hex("#FFF"), hex("#00F")],
                steps: 6
            }
        );
    }

    #[test]
    fn usage_errors() {
        for line in [
            "",
            "#F00",
            "#F00 sparkle",
            "#F00 invert now",
            "#F00 lighten a",
            "#F00 lighten 0.1 0.2",
            "#F00 adjust-hue",
            "#F00 hue-shifts",
            "#F00 gradient",
            "#F00 invert --format cmyk",
            "#F00 invert --steps",
        ] {
            assert!(matches!(parse(line), Err(CliError::Usage(_))), "{line:?}");
        }
    }

    #[test]
    fn bad_colors() {
        assert!(matches!(parse("#12 invert"), Err(CliError::Color(_))));
        assert!(matches!(parse("300,0,0 invert"), Err(CliError::Color(_))));
        assert!(matches!(parse("#F00 gradient nope"), Err(CliError::Color(_))));
    }

    #[test]
    fn help() {
        assert!(matches!(parse("--help"), Err(CliError::Help)));
        assert!(matches!(parse("#F00 invert -h"), Err(CliError::Help)));
    }

    // ── Running ──────────────────────────────────────────────────────────

    #[test]
    fn single_color_output() {
        assert_eq!(run("#FF0000 invert --format hex"), "#00FFFF");
        assert_eq!(run("#FF0000 lighten 0.25 -f hex"), "#FF8080");
        assert_eq!(run("#FF0000 invert"), "#00FFFF");
        assert_eq!(run("#FF0000 invert --format rgb255"), "(0, 255, 255)");
    }

    #[test]
    fn palette_output() {
        assert_eq!(run("#F00 triadic --format web"), "#F00\n#0F0\n#00F");
        assert_eq!(
            run("#F00 triadic --format processing"),
            "color[] palette = { color(255, 0, 0), color(0, 255, 0), color(0, 0, 255) };"
        );
    }

    #[test]
    fn gradient_output() {
        let out = run("#000091 stops #FFF #E1000F --steps 5 --format hex");
        assert_eq!(out.lines().count(), 5);
        assert!(out.starts_with("#000091\n"));
        assert!(out.ends_with("\n#E1000F"));
    }

    #[test]
    fn stops_needs_another_color() {
        let cli = parse("#F00 stops").unwrap();
        assert!(matches!(
            cli.run(),
            Err(CliError::Color(ColorError::InsufficientStops(1)))
        ));
    }

    #[test]
    fn show_lists_every_notation() {
        let out = run("#FF0000 show");
        assert_eq!(
            out,
            "rgb      (1, 0, 0)\n\
             rgba     (1, 0, 0, 1)\n\
             rgb255   (255, 0, 0)\n\
             hex      #FF0000\n\
             hexalpha #FF0000FF\n\
             hsl      (0, 1, 0.5)\n\
             web      #F00"
        );
    }

    // ── JSON ─────────────────────────────────────────────────────────────

    #[test]
    fn json_single() {
        assert_eq!(run("#F00 invert --json --format hex"), "\"#00FFFF\"");
        assert_eq!(run("#F00 invert --json"), "\"#00FFFFFF\"");
    }

    #[test]
    fn json_palette() {
        let out = run("#F00 triadic --json --format rgb255");
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, serde_json::json!([[255, 0, 0], [0, 255, 0], [0, 0, 255]]));
    }

    #[test]
    fn json_show_is_keyed_by_format() {
        let out = run("#F00 show --json");
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["hex"], "#FF0000");
        assert_eq!(parsed["web"], "#F00");
        assert_eq!(parsed["rgb255"], serde_json::json!([255, 0, 0]));
        assert!(parsed.get("unity").is_none());
    }
}
