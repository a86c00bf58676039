use super::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

// ============================================================================
// PixelBuffer
// ============================================================================

/// Packed-color pixel buffer for software rendering (ARGB8888, row-major).
/// This is the destination surface every track and the text overlay write into.
pub struct PixelBuffer {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Create a new pixel buffer with default resolution (640x480)
    pub fn new() -> Self {
        Self::with_size(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    /// Create a new pixel buffer with custom resolution
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![0; (width * height) as usize],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixels per row. Equal to the width for an owned buffer; kept separate
    /// in the API so index math always goes through it.
    #[inline]
    pub fn stride(&self) -> u32 {
        self.width
    }

    /// Check if coordinates are within bounds
    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// Index of pixel (x, y) in the backing store
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    /// Clear the whole surface to one packed color
    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Set a single pixel (bounds checked)
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            self.pixels[idx] = color;
        }
    }

    /// Read a pixel (bounds checked). Returns None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if self.in_bounds(x, y) {
            Some(self.pixels[self.pixel_index(x as u32, y as u32)])
        } else {
            None
        }
    }

    /// Fill a rectangle, clipped to the surface
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: u32) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w as i32).min(self.width as i32);
        let y1 = (y + h as i32).min(self.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        for row in y0..y1 {
            let start = self.pixel_index(x0 as u32, row as u32);
            let end = start + (x1 - x0) as usize;
            self.pixels[start..end].fill(color);
        }
    }

    /// Copy a contiguous run of packed colors into one row.
    ///
    /// This is the primitive behind the scrolled-history compositing: each
    /// viewport row is produced by exactly two of these copies, so it must
    /// stay a bulk `copy_from_slice`, never a per-pixel loop.
    ///
    /// The span is silently truncated at the right edge; rows outside the
    /// surface are ignored.
    pub fn copy_row_span(&mut self, x: i32, y: i32, span: &[u32]) {
        if y < 0 || y >= self.height as i32 || x >= self.width as i32 {
            return;
        }
        // Clip the left edge by skipping source pixels
        let (x, span) = if x < 0 {
            let skip = (-x) as usize;
            if skip >= span.len() {
                return;
            }
            (0, &span[skip..])
        } else {
            (x as u32, span)
        };
        let count = span.len().min((self.width - x) as usize);
        let start = self.pixel_index(x, y as u32);
        self.pixels[start..start + count].copy_from_slice(&span[..count]);
    }

    /// Raw pixel words (row-major)
    pub fn as_pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Raw bytes for SDL texture upload
    pub fn as_bytes(&self) -> &[u8] {
        // Safety: the Vec<u32> backing store is contiguous and the byte view
        // covers exactly pixels.len() * 4 bytes of initialized memory.
        unsafe {
            std::slice::from_raw_parts(self.pixels.as_ptr() as *const u8, self.pixels.len() * 4)
        }
    }
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new()
    }
}
