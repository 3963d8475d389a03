//! Shelfpack lays out fixed-size images into a compact rectangular sheet. It was
//! built for imagemap, a tool that turns a listing of image sizes into an HTML
//! page placing every image on one sheet.
//!
//! Images are packed into rows ("shelves") grouped by height. On top of that,
//! Shelfpack searches over every useful sheet width, over merging the shortest
//! groups of rows together, and over rotating the whole set of images by 90
//! degrees, keeping whichever layout has the smallest bounding box.
//!
//! ## Example
//! ```
//! use shelfpack::{InputImage, ShelfPacker};
//!
//! // Describe the images you want to pack. Names are carried through so you
//! // can find your images again afterwards.
//! let images = &[
//!     InputImage::new("button.png", 3, 2),
//!     InputImage::new("icon.png", 3, 2),
//!     InputImage::new("banner.png", 6, 2),
//! ];
//!
//! // Compute a layout.
//! let layout = ShelfPacker::new().pack(images).unwrap();
//!
//! assert_eq!(layout.area(), 24);
//! for image in layout.images() {
//!     println!("{} at ({}, {})", image.name(), image.left(), image.top());
//! }
//! ```

mod collapse;
mod error;
mod histogram;
mod layout;
mod name;
mod orientation;
mod packer;
mod shelf;
mod types;

pub use collapse::*;
pub use error::*;
pub use histogram::*;
pub use layout::*;
pub use name::*;
pub use orientation::*;
pub use packer::*;
pub use shelf::*;
pub use types::*;
