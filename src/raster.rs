use image::{Rgba, RgbaImage};

/// Set a single pixel, ignoring coordinates outside the buffer.
#[inline]
pub fn put_pixel(img: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// Draw a one-pixel-wide line segment using Bresenham's algorithm.
pub fn draw_line(img: &mut RgbaImage, from: (i32, i32), to: (i32, i32), color: Rgba<u8>) {
    let (mut x0, mut y0) = from;
    let (x1, y1) = to;

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        put_pixel(img, x0, y0, color);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Draw an axis-aligned rectangle outline between two corner points.
pub fn draw_rect(img: &mut RgbaImage, a: (i32, i32), b: (i32, i32), color: Rgba<u8>) {
    let (x0, x1) = (a.0.min(b.0), a.0.max(b.0));
    let (y0, y1) = (a.1.min(b.1), a.1.max(b.1));

    for x in x0..=x1 {
        put_pixel(img, x, y0, color);
        put_pixel(img, x, y1, color);
    }
    for y in y0..=y1 {
        put_pixel(img, x0, y, color);
        put_pixel(img, x1, y, color);
    }
}

/// Draw an ellipse outline inscribed in the rectangle spanned by two corner
/// points, using the midpoint algorithm on integer radii.
pub fn draw_ellipse(img: &mut RgbaImage, a: (i32, i32), b: (i32, i32), color: Rgba<u8>) {
    let (x0, x1) = (a.0.min(b.0), a.0.max(b.0));
    let (y0, y1) = (a.1.min(b.1), a.1.max(b.1));

    let rx = ((x1 - x0) / 2) as i64;
    let ry = ((y1 - y0) / 2) as i64;
    let cx = (x0 + x1) / 2;
    let cy = (y0 + y1) / 2;

    if rx == 0 || ry == 0 {
        // degenerate ellipse collapses to a segment
        draw_line(img, (x0, y0), (x1, y1), color);
        return;
    }

    let plot4 = |img: &mut RgbaImage, x: i64, y: i64| {
        put_pixel(img, cx + x as i32, cy + y as i32, color);
        put_pixel(img, cx - x as i32, cy + y as i32, color);
        put_pixel(img, cx + x as i32, cy - y as i32, color);
        put_pixel(img, cx - x as i32, cy - y as i32, color);
    };

    let (rx2, ry2) = (rx * rx, ry * ry);
    let mut x = 0i64;
    let mut y = ry;

    // region 1: gradient > -1
    let mut d1 = ry2 - rx2 * ry + rx2 / 4;
    let mut dx = 2 * ry2 * x;
    let mut dy = 2 * rx2 * y;
    while dx < dy {
        plot4(img, x, y);
        if d1 < 0 {
            x += 1;
            dx += 2 * ry2;
            d1 += dx + ry2;
        } else {
            x += 1;
            y -= 1;
            dx += 2 * ry2;
            dy -= 2 * rx2;
            d1 += dx - dy + ry2;
        }
    }

    // region 2: gradient <= -1
    let mut d2 = ry2 * (2 * x + 1) * (2 * x + 1) / 4 + rx2 * (y - 1) * (y - 1) - rx2 * ry2;
    while y >= 0 {
        plot4(img, x, y);
        if d2 > 0 {
            y -= 1;
            dy -= 2 * rx2;
            d2 += rx2 - dy;
        } else {
            y -= 1;
            x += 1;
            dx += 2 * ry2;
            dy -= 2 * rx2;
            d2 += dx - dy + rx2;
        }
    }
}
