//! Convert a square image into a quantized grid map.
//! Usage: `gridify <source_img> <size> [--binary RATIO | --fivesplit T T T T T] [--dynamic N]`
//! - `source_img` is looked up inside `source_images/`.
//! - outputs land in `maps/` as `<stem>_<height>.out.png`.

use std::error::Error;
use std::path::Path;

use clap::Parser;

use gridify::convert::Mode;
use gridify::pipeline::{self, ConversionRequest};

const SOURCE_DIR: &str = "source_images";
const MAP_DIR: &str = "maps";

#[derive(Parser)]
#[command(about = "Convert a square image into a quantized grid map")]
struct Cli {
    /// Source image name from within the source_images directory
    source_img: String,

    /// Desired width / height of the square output image
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    size: u32,

    /// Threshold at brightness 255 * RATIO: darker pixels become barrier
    /// nodes, brighter ones free nodes
    #[arg(long, value_name = "RATIO", value_parser = parse_ratio, conflicts_with = "fivesplit")]
    binary: Option<f32>,

    /// Five brightness values (0-255) splitting pixels into a barrier band,
    /// four weight bands and free nodes
    #[arg(long, value_name = "T", num_args = 5)]
    fivesplit: Option<Vec<u8>>,

    /// Also emit a second image N times higher resolution than `size`
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    dynamic: Option<u32>,
}

fn parse_ratio(s: &str) -> Result<f32, String> {
    let ratio: f32 = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if (0.0..=1.0).contains(&ratio) {
        Ok(ratio)
    } else {
        Err(format!("ratio {ratio} out of bounds, use a value between 0 and 1"))
    }
}

impl Cli {
    fn mode(&self) -> Mode {
        if let Some(ratio) = self.binary {
            Mode::Binary { ratio }
        } else if let Some(thresholds) = &self.fivesplit {
            // clap enforces exactly five values
            Mode::five_split(thresholds.as_slice().try_into().expect("five thresholds"))
        } else {
            Mode::Resize
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let request = ConversionRequest {
        source_img: cli.source_img.clone(),
        size: cli.size,
        dynamic: cli.dynamic,
        mode: cli.mode(),
    };

    let written = pipeline::run(&request, Path::new(SOURCE_DIR), Path::new(MAP_DIR))?;
    for path in &written {
        println!("Wrote {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("gridify").chain(args.iter().copied()))
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn binary_and_fivesplit_conflict() {
        let res = parse(&[
            "maze.png", "8", "--binary", "0.5", "--fivesplit", "10", "20", "30", "40", "50",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn fivesplit_rejects_four_values() {
        assert!(parse(&["maze.png", "8", "--fivesplit", "10", "20", "30", "40"]).is_err());
    }

    #[test]
    fn fivesplit_rejects_six_values() {
        let res = parse(&["maze.png", "8", "--fivesplit", "10", "20", "30", "40", "50", "60"]);
        assert!(res.is_err());
    }

    #[test]
    fn fivesplit_rejects_out_of_range_values() {
        assert!(parse(&["maze.png", "8", "--fivesplit", "10", "20", "30", "40", "256"]).is_err());
    }

    #[test]
    fn binary_rejects_out_of_range_ratio() {
        assert!(parse(&["maze.png", "8", "--binary", "1.5"]).is_err());
        assert!(parse(&["maze.png", "8", "--binary", "-0.1"]).is_err());
    }

    #[test]
    fn binary_zero_still_selects_binary_mode() {
        let cli = parse(&["maze.png", "8", "--binary", "0.0"]).unwrap();
        assert_eq!(cli.mode(), Mode::Binary { ratio: 0.0 });
    }

    #[test]
    fn no_flags_means_plain_resize() {
        let cli = parse(&["maze.png", "8"]).unwrap();
        assert_eq!(cli.mode(), Mode::Resize);
    }

    #[test]
    fn fivesplit_values_reach_mode_sorted() {
        let cli = parse(&["maze.png", "8", "--fivesplit", "250", "50", "150", "100", "200"]).unwrap();
        assert_eq!(
            cli.mode(),
            Mode::FiveSplit {
                thresholds: [50, 100, 150, 200, 250]
            }
        );
    }

    #[test]
    fn size_must_be_positive() {
        assert!(parse(&["maze.png", "0"]).is_err());
    }

    #[test]
    fn dynamic_must_be_positive() {
        assert!(parse(&["maze.png", "8", "--dynamic", "0"]).is_err());
    }
}
