use std::{path::PathBuf, str::FromStr};

use serde::{Deserialize, Serialize};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(about = "Packs a listing of images into one compact sheet")]
pub struct Options {
    #[structopt(flatten)]
    pub global: GlobalOptions,

    #[structopt(subcommand)]
    pub command: Subcommand,
}

#[derive(Debug, StructOpt)]
pub struct GlobalOptions {
    /// The path to an imagemap.toml file, or a folder containing one. If not
    /// specified, imagemap will look for one in the current directory and use
    /// its defaults if there isn't one.
    #[structopt(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub enum Subcommand {
    /// Pack every image in a listing into one sheet and write out where each
    /// image ended up.
    Pack(PackOptions),

    /// Print statistics about the images in a listing without packing them.
    Stats(StatsOptions),
}

#[derive(Debug, StructOpt)]
pub struct PackOptions {
    /// The image listing to read. Defaults to input.txt.
    #[structopt(long)]
    pub input: Option<PathBuf>,

    /// Where to write the packed layout. Defaults to images/imagemap.html.
    #[structopt(long)]
    pub output: Option<PathBuf>,

    /// The format of the packed layout.
    ///
    /// Options:
    ///
    /// - html: One absolutely positioned <img> tag per image
    ///
    /// - json: Sheet size and every image's position as JSON
    #[structopt(long)]
    pub format: Option<OutputFormat>,

    /// Pixels added to the width and height of every image to leave a seam
    /// between them. Defaults to 1.
    #[structopt(long)]
    pub border: Option<u32>,

    /// Don't try packing every image rotated by 90 degrees.
    #[structopt(long)]
    pub no_transpose: bool,

    /// Don't try merging rows of the shortest images together.
    #[structopt(long)]
    pub no_collapse: bool,
}

#[derive(Debug, StructOpt)]
pub struct StatsOptions {
    /// The image listing to read. Defaults to input.txt.
    #[structopt(long)]
    pub input: Option<PathBuf>,

    /// Pixels added to the width and height of every image. Defaults to 1.
    #[structopt(long)]
    pub border: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Html,
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Html
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<OutputFormat, Self::Err> {
        match value {
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),

            _ => Err(String::from(
                "Invalid output format. Valid options are 'html' and 'json'.",
            )),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_pack_flags() {
        let options = Options::from_iter_safe(vec![
            "imagemap",
            "pack",
            "--input",
            "sizes.txt",
            "--format",
            "json",
            "--no-transpose",
        ])
        .unwrap();

        match options.command {
            Subcommand::Pack(pack) => {
                assert_eq!(pack.input, Some(PathBuf::from("sizes.txt")));
                assert_eq!(pack.output, None);
                assert_eq!(pack.format, Some(OutputFormat::Json));
                assert!(pack.no_transpose);
                assert!(!pack.no_collapse);
            }
            other => panic!("Expected pack, got {:?}", other),
        }
    }

    #[test]
    fn bad_format() {
        assert!("png".parse::<OutputFormat>().is_err());
        assert_eq!("html".parse::<OutputFormat>(), Ok(OutputFormat::Html));
    }
}
