use crate::{error::PackError, types::PlacedImage};

/// A complete set of placed images along with their bounding box.
///
/// Layouts are never empty. Every statistic is computed once up front, since
/// packing searches compare many candidate layouts by area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    images: Vec<PlacedImage>,
    left: u32,
    top: u32,
    right: u32,
    bottom: u32,
    input_area: u64,
}

impl Layout {
    pub fn new(images: Vec<PlacedImage>) -> Result<Self, PackError> {
        let first = images.first().ok_or(PackError::Empty)?;

        let mut left = first.left();
        let mut top = first.top();
        let mut right = 0;
        let mut bottom = 0;
        let mut input_area = 0;

        for image in &images {
            let (image_right, image_bottom) = checked_edges(image)?;

            left = left.min(image.left());
            top = top.min(image.top());
            right = right.max(image_right);
            bottom = bottom.max(image_bottom);
            input_area += image.image().area();
        }

        Ok(Self {
            images,
            left,
            top,
            right,
            bottom,
            input_area,
        })
    }

    #[inline]
    pub fn images(&self) -> &[PlacedImage] {
        &self.images
    }

    #[inline]
    pub fn left(&self) -> u32 {
        self.left
    }

    #[inline]
    pub fn top(&self) -> u32 {
        self.top
    }

    #[inline]
    pub fn right(&self) -> u32 {
        self.right
    }

    #[inline]
    pub fn bottom(&self) -> u32 {
        self.bottom
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// The area of the bounding box around every image.
    #[inline]
    pub fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// The summed area of every image, which the bounding box can never be
    /// smaller than.
    #[inline]
    pub fn input_area(&self) -> u64 {
        self.input_area
    }

    /// The fraction of the bounding box covered by images, between 0 and 1.
    pub fn efficiency(&self) -> f64 {
        self.input_area as f64 / self.area() as f64
    }

    /// This layout mirrored across its main diagonal.
    pub fn transposed(&self) -> Self {
        Self {
            images: self.images.iter().map(PlacedImage::transposed).collect(),
            left: self.top,
            top: self.left,
            right: self.bottom,
            bottom: self.right,
            input_area: self.input_area,
        }
    }
}

/// The right and bottom edges of `image`, as long as they fit in a `u32`.
fn checked_edges(image: &PlacedImage) -> Result<(u32, u32), PackError> {
    let right = image.left().checked_add(image.width());
    let bottom = image.top().checked_add(image.height());

    match (right, bottom) {
        (Some(right), Some(bottom)) => Ok((right, bottom)),
        _ => Err(PackError::TooLarge),
    }
}
