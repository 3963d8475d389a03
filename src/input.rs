//! Reading image listings.
//!
//! A listing has one image per line, formatted like
//!
//! ```text
//! # Lines starting with a hash are comments
//! icons/save.png: PNG image data, 15 x 15
//! ```
//!
//! The sizes in a listing don't include the seam that imagemap leaves between
//! images, so every image is grown by a border before it gets packed.

use std::{io, path::Path};

use fs_err as fs;
use regex::Regex;
use shelfpack::InputImage;
use thiserror::Error;

/// Parses every image out of a listing, growing each by `border` pixels in
/// both directions.
pub fn parse_listing(contents: &str, border: u32) -> Result<Vec<InputImage>, InputError> {
    lazy_static::lazy_static! {
        static ref RECORD_PATTERN: Regex = Regex::new(r"(.*):.*, (\d+) x (\d+)").unwrap();
    }

    let mut images = Vec::new();

    for (index, line) in contents.lines().enumerate() {
        if line.starts_with('#') {
            continue;
        }

        let parse_error = || InputError::Parse {
            line_number: index + 1,
            line: line.to_owned(),
        };

        let captures = RECORD_PATTERN.captures(line).ok_or_else(parse_error)?;

        let name = &captures[1];
        let width = parse_dimension(&captures[2], border).ok_or_else(parse_error)?;
        let height = parse_dimension(&captures[3], border).ok_or_else(parse_error)?;

        images.push(InputImage::new(name, width, height));
    }

    log::trace!("Parsed {} images from listing", images.len());

    Ok(images)
}

pub fn read_listing<P: AsRef<Path>>(path: P, border: u32) -> Result<Vec<InputImage>, InputError> {
    let path = path.as_ref();
    log::trace!("Reading image listing from {}", path.display());

    let contents = fs::read_to_string(path)?;
    parse_listing(&contents, border)
}

fn parse_dimension(digits: &str, border: u32) -> Option<u32> {
    digits.parse::<u32>().ok()?.checked_add(border)
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Line {line_number} of the image listing is not a valid image: {line:?}")]
    Parse { line_number: usize, line: String },

    #[error(transparent)]
    Io {
        #[from]
        source: io::Error,
    },
}
