use thiserror::Error;

use crate::name::ImageName;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PackError {
    #[error("There are no images to pack")]
    Empty,

    #[error("Images are too large to fit in a sheet with 32-bit coordinates")]
    TooLarge,

    #[error("Image {name} has a degenerate size of {width}x{height}")]
    DegenerateImage {
        name: ImageName,
        width: u32,
        height: u32,
    },
}
