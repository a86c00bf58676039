//! Fixed-pitch bitmap font
//!
//! 96 glyphs covering the printable ASCII range (codes 32-127), addressed by
//! `code - 32`. Each glyph is an 8x8 one-bit bitmap packed into the static
//! table below: eight characters per glyph, one per source row, with the row's
//! bitmask encoded as `char - '0'`. Glyphs are rendered pixel-doubled into a
//! 16x16 cell.

use super::PixelBuffer;

/// Rendered glyph cell width in pixels (also the horizontal advance)
pub const GLYPH_WIDTH: u32 = 16;
/// Rendered glyph cell height in pixels
pub const GLYPH_HEIGHT: u32 = 16;
/// Vertical advance for `\n`
pub const LINE_ADVANCE: u32 = 20;
/// Fixed top-left margin where a text block starts
pub const TEXT_MARGIN: i32 = 8;

/// Number of glyphs in the table
const GLYPH_COUNT: usize = 96;
/// Packed rows per glyph
const ROWS_PER_GLYPH: usize = 8;

/// Packed bitmap table, `GLYPH_COUNT * ROWS_PER_GLYPH` characters.
const FONT_DATA: &[u8] =
    b"0000000044444040::000000::O:O::04N5>D?403C842IH02552E9F084200000\
      84222480248884204E>4>E40044O440000000442000O00000000066000@84210\
      >AIECA>0465444O0>A@@<3O0>A@<@A>0<:999O80O1?@@A>0>1?AAA>0OA@88440\
      >AA>AA>0>AAAN@>000400400004004428421248000O0O000248@8420>AA84040\
      >A@FEE>0>AAAOAA0?BB>BB?0>A111A>0?BBBBB?0O11O11O0O11O1110>A11IAN0\
      AAAOAAA0>44444>0L8888960A95359A0111111O0AKKEEEA0ACCEIIA0>AAAAA>0\
      ?AAA?110>AAAE9F0?AAA?9A0>A1>@A>0O4444440AAAAAA>0AA:::440AAEEE::0\
      AA:4:AA0AA:44440O@8421O0>22222>0001248@0>88888>04:A00000000000O0\
      2480000000>@NA^011=CAA?000>A1A>0@@FIAAN000>AO1>0<22O222000^AAN@>\
      11=CAAA04064444080<8888622B:6:B0644444<000?EEEE000?AAAA000>AAA>0\
      00>AA?1100>AAN@@00=C111000N1>@?022O222<0009999F000AA::4000AEE::0\
      00A:4:A000AA::4300O842O0H44244H04444444034484430002E800000000000";

/// One packed source row of a glyph, or 0 for codes outside the table.
#[inline]
fn glyph_row(code: u8, row: usize) -> u8 {
    let index = (code as usize).wrapping_sub(32);
    if index >= GLYPH_COUNT {
        return 0;
    }
    FONT_DATA[index * ROWS_PER_GLYPH + row].wrapping_sub(b'0')
}

/// Blit a single glyph at (x, y). Codes below 32 draw nothing.
pub fn draw_char(buffer: &mut PixelBuffer, x: i32, y: i32, code: u8, color: u32) {
    if code < 32 {
        return;
    }
    for sy in 0..GLYPH_HEIGHT as i32 {
        let row = glyph_row(code, (sy >> 1) as usize);
        if row == 0 {
            continue;
        }
        for sx in 0..GLYPH_WIDTH as i32 {
            if row & (1 << (sx >> 1)) != 0 {
                buffer.set_pixel(x + sx, y + sy, color);
            }
        }
    }
}

/// Blit a text string starting at the fixed margin.
///
/// `\n` resets the horizontal position and advances a line; every other
/// printable character blits its glyph and advances one cell. There is no
/// wrapping: the caller is responsible for text that fits the buffer.
pub fn draw_text(buffer: &mut PixelBuffer, text: &str, color: u32) {
    draw_text_at(buffer, TEXT_MARGIN, TEXT_MARGIN, text, color);
}

/// Blit a text string starting at (x, y).
pub fn draw_text_at(buffer: &mut PixelBuffer, x: i32, y: i32, text: &str, color: u32) {
    let mut cx = x;
    let mut cy = y;
    for &code in text.as_bytes() {
        if code == b'\n' {
            cx = x;
            cy += LINE_ADVANCE as i32;
        } else if code >= 32 {
            draw_char(buffer, cx, cy, code, color);
            cx += GLYPH_WIDTH as i32;
        }
    }
}

/// Pixel width of the widest line of `text`
pub fn text_width(text: &str) -> u32 {
    text.lines()
        .map(|line| line.bytes().filter(|&c| c >= 32).count() as u32 * GLYPH_WIDTH)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit_pixels(buffer: &PixelBuffer) -> usize {
        buffer.as_pixels().iter().filter(|&&p| p != 0).count()
    }

    #[test]
    fn test_space_draws_nothing() {
        let mut buf = PixelBuffer::with_size(32, 32);
        draw_char(&mut buf, 0, 0, b' ', 0x88888888);
        assert_eq!(lit_pixels(&buf), 0);
    }

    #[test]
    fn test_glyph_has_coverage() {
        let mut buf = PixelBuffer::with_size(32, 32);
        draw_char(&mut buf, 0, 0, b'A', 0x88888888);
        // 2x pixel doubling means every source bit lights a 2x2 block
        let lit = lit_pixels(&buf);
        assert!(lit > 0);
        assert_eq!(lit % 4, 0);
    }

    #[test]
    fn test_full_ascii_range_safe() {
        let mut buf = PixelBuffer::with_size(32, 32);
        for code in 0u8..=255 {
            draw_char(&mut buf, 0, 0, code, 0x88888888);
        }
    }

    #[test]
    fn test_newline_resets_column() {
        let mut one = PixelBuffer::with_size(64, 64);
        let mut two = PixelBuffer::with_size(64, 64);
        draw_text_at(&mut one, 0, 0, "A", 0x88888888);
        draw_text_at(&mut two, 0, 0, "\nA", 0x88888888);
        // Same glyph, shifted down by exactly one line advance
        for y in 0..64 {
            for x in 0..64i32 {
                let expected = if y >= LINE_ADVANCE as i32 {
                    one.get_pixel(x, y - LINE_ADVANCE as i32)
                } else {
                    Some(0)
                };
                assert_eq!(two.get_pixel(x, y), expected);
            }
        }
    }

    #[test]
    fn test_text_width_widest_line() {
        assert_eq!(text_width(""), 0);
        assert_eq!(text_width("abc"), 3 * GLYPH_WIDTH);
        assert_eq!(text_width("ab\nwider"), 5 * GLYPH_WIDTH);
    }
}
