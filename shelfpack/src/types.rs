use crate::name::ImageName;

/// An image that hasn't been placed yet.
///
/// `InputImage` is just a name and a 2D size. Sizes are expected to already
/// include any border or seam the consumer wants between images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputImage {
    pub(crate) name: ImageName,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl InputImage {
    #[inline]
    pub fn new<N: Into<ImageName>>(name: N, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }

    #[inline]
    pub fn name(&self) -> &ImageName {
        &self.name
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// The same image rotated by 90 degrees.
    pub fn transposed(&self) -> Self {
        Self {
            name: self.name.clone(),
            width: self.height,
            height: self.width,
        }
    }
}

/// The top-left corner of a placed image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub left: u32,
    pub top: u32,
}

impl Offset {
    #[inline]
    pub fn new(left: u32, top: u32) -> Self {
        Self { left, top }
    }

    #[inline]
    pub fn transposed(self) -> Self {
        Self {
            left: self.top,
            top: self.left,
        }
    }
}

/// An image that was placed by a packing function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedImage {
    pub(crate) image: InputImage,
    pub(crate) offset: Offset,
}

impl PlacedImage {
    #[inline]
    pub fn new(image: InputImage, offset: Offset) -> Self {
        Self { image, offset }
    }

    #[inline]
    pub fn image(&self) -> &InputImage {
        &self.image
    }

    #[inline]
    pub fn offset(&self) -> Offset {
        self.offset
    }

    #[inline]
    pub fn name(&self) -> &ImageName {
        &self.image.name
    }

    #[inline]
    pub fn left(&self) -> u32 {
        self.offset.left
    }

    #[inline]
    pub fn top(&self) -> u32 {
        self.offset.top
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height
    }

    /// Saturates at `u32::MAX`. [`Layout`] never holds placements whose edges
    /// don't fit in a `u32`.
    ///
    /// [`Layout`]: struct.Layout.html
    #[inline]
    pub fn right(&self) -> u32 {
        self.offset.left.saturating_add(self.image.width)
    }

    #[inline]
    pub fn bottom(&self) -> u32 {
        self.offset.top.saturating_add(self.image.height)
    }

    /// Mirrors this placement across the main diagonal, swapping both the
    /// image's size and its offset.
    pub fn transposed(&self) -> Self {
        Self {
            image: self.image.transposed(),
            offset: self.offset.transposed(),
        }
    }
}
