use crate::garden::Garden;
use crate::grid::wrap_coord;
use crate::walk::Frontier;

const ROCK: [u8; 4] = [70, 62, 58, 255];
const PLOT: [u8; 4] = [70, 130, 62, 255];
const REACHED: [u8; 4] = [245, 220, 90, 255];
const START: [u8; 4] = [200, 40, 40, 255];
const SHADE: [u8; 4] = [0, 0, 0, 255];

#[inline]
fn lerp_color(a: [u8; 4], b: [u8; 4], t: f32) -> [u8; 4] {
    let t = t.clamp(0.0, 1.0);
    [
        (a[0] as f32 + (b[0] as f32 - a[0] as f32) * t).round() as u8,
        (a[1] as f32 + (b[1] as f32 - a[1] as f32) * t).round() as u8,
        (a[2] as f32 + (b[2] as f32 - a[2] as f32) * t).round() as u8,
        255,
    ]
}

/// RGBA pixels, one per cell, row-major.
pub struct Rendered {
    pub rgba: Vec<u8>,
    pub w: usize,
    pub h: usize,
}

/// Render the tiled plane under the frontier's bounding box, one cell of
/// margin on each side. Alternate tile copies are shaded darker so the
/// tiling stays visible.
pub fn render_frontier(garden: &Garden, frontier: &Frontier) -> Rendered {
    let (r0, c0, r1, c1) = frontier
        .bounds()
        .unwrap_or((garden.start.0, garden.start.1, garden.start.0, garden.start.1));
    let (r0, c0, r1, c1) = (r0 - 1, c0 - 1, r1 + 1, c1 + 1);
    let w = (c1 - c0 + 1) as usize;
    let h = (r1 - r0 + 1) as usize;
    let (tw, th) = (garden.w() as i64, garden.h() as i64);
    let start_tile = wrap_coord(garden.start, garden.w(), garden.h());

    let mut rgba = vec![0u8; w * h * 4];
    for (y, row) in rgba.chunks_mut(w * 4).enumerate() {
        let r = r0 + y as i64;
        for x in 0..w {
            let c = c0 + x as i64;
            let pos = (r, c);
            let mut color = if frontier.contains(pos) {
                REACHED
            } else if !garden.is_open(pos) {
                ROCK
            } else if wrap_coord(pos, garden.w(), garden.h()) == start_tile {
                START
            } else {
                PLOT
            };
            if (r.div_euclid(th) + c.div_euclid(tw)) % 2 != 0 {
                color = lerp_color(color, SHADE, 0.25);
            }
            row[x * 4..x * 4 + 4].copy_from_slice(&color);
        }
    }

    Rendered { rgba, w, h }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(img: &Rendered, x: usize, y: usize) -> [u8; 4] {
        let i = (y * img.w + x) * 4;
        [img.rgba[i], img.rgba[i + 1], img.rgba[i + 2], img.rgba[i + 3]]
    }

    #[test]
    fn image_covers_frontier_with_margin() {
        let g = Garden::parse("...\n.S.\n..#").unwrap();
        let mut f = Frontier::new(g.start);
        f.advance(&g);
        let img = render_frontier(&g, &f);
        assert_eq!((img.w, img.h), (5, 5));
        assert_eq!(img.rgba.len(), 5 * 5 * 4);
        // (0,1) is reached, drawn at margin offset (1,2)
        assert_eq!(pixel(&img, 2, 1), REACHED);
        // (2,2) is a rock in the base tile
        assert_eq!(pixel(&img, 3, 3), ROCK);
        // start is not occupied after one move
        assert_eq!(pixel(&img, 2, 2), START);
    }

    #[test]
    fn neighbouring_tiles_are_shaded() {
        let g = Garden::parse("S").unwrap();
        let f = Frontier::new(g.start);
        let img = render_frontier(&g, &f);
        assert_eq!(pixel(&img, 1, 1), REACHED);
        assert_eq!(pixel(&img, 0, 1), lerp_color(START, SHADE, 0.25));
        assert_eq!(pixel(&img, 0, 0), START);
    }
}
