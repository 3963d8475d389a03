//! Summaries of an image listing, used to judge how good a packing is.

use std::fmt;

use shelfpack::{histogram, InputImage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputStats {
    pub image_count: usize,
    pub distinct_sizes: usize,
    pub distinct_widths: usize,
    pub distinct_heights: usize,

    /// The summed area of every image. No packing can be smaller than this.
    pub total_area: u64,

    /// How many images share each size, smallest area first.
    pub sizes: Vec<SizeCount>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeCount {
    pub width: u32,
    pub height: u32,
    pub count: usize,
}

impl SizeCount {
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl InputStats {
    pub fn new(images: &[InputImage]) -> Self {
        let by_size = histogram(images.iter().cloned(), InputImage::dimensions);
        let by_width = histogram(images.iter().cloned(), InputImage::width);
        let by_height = histogram(images.iter().cloned(), InputImage::height);

        let mut sizes: Vec<SizeCount> = by_size
            .iter()
            .map(|((width, height), images)| SizeCount {
                width: *width,
                height: *height,
                count: images.len(),
            })
            .collect();
        sizes.sort_by_key(SizeCount::area);

        Self {
            image_count: images.len(),
            distinct_sizes: by_size.len(),
            distinct_widths: by_width.len(),
            distinct_heights: by_height.len(),
            total_area: images.iter().map(InputImage::area).sum(),
            sizes,
        }
    }

    pub fn log(&self) {
        log::info!("{} images", self.image_count);
        log::info!(
            "{} different sizes, {} different widths, {} different heights",
            self.distinct_sizes,
            self.distinct_widths,
            self.distinct_heights
        );
        log::info!("Total image area is {} pixels", self.total_area);

        for size in &self.sizes {
            log::debug!(
                "{} images of size {}x{} (area {})",
                size.count,
                size.width,
                size.height,
                size.area()
            );
        }
    }
}

impl fmt::Display for InputStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} images", self.image_count)?;
        writeln!(f, "{} different sizes", self.distinct_sizes)?;
        writeln!(f, "{} different widths", self.distinct_widths)?;
        writeln!(f, "{} different heights", self.distinct_heights)?;
        writeln!(f, "Total area is {} pixels", self.total_area)?;

        for size in &self.sizes {
            writeln!(
                f,
                "{} images of size {}x{} area {}",
                size.count,
                size.width,
                size.height,
                size.area()
            )?;
        }

        Ok(())
    }
}
