//! The three art resources: road, car, hazard.
//!
//! Each sprite carries the authoritative pixel dimensions of its source
//! bitmap (road 800x600, car 501x737, hazard 256x256). The simulation sizes
//! collision rects and tiles the road from those numbers; the character art
//! is only sampled at draw time, scaled to whatever terminal area is
//! available.

/// Character art with a logical pixel size.
pub struct Sprite {
    /// Source bitmap width in logical pixels.
    pub width: i32,
    /// Source bitmap height in logical pixels.
    pub height: i32,
    /// Fixed-width art rows, stretched over `width` x `height`.
    pub art: &'static [&'static str],
}

impl Sprite {
    /// Character at a normalized position within the sprite. `u` and `v`
    /// run 0..1 left-to-right and top-to-bottom.
    pub fn sample(&self, u: f64, v: f64) -> char {
        let v = v.clamp(0.0, 1.0);
        let u = u.clamp(0.0, 1.0);
        let row = ((v * self.art.len() as f64) as usize).min(self.art.len() - 1);
        let line = self.art[row];
        let len = line.chars().count();
        let col = ((u * len as f64) as usize).min(len - 1);
        line.chars().nth(col).unwrap_or(' ')
    }
}

/// One full-screen copy of the repeating road: grass shoulders, edge lines,
/// and a dashed center divider. Dash phase comes from the tile itself, so
/// scrolling the tile scrolls the dashes.
pub const ROAD: Sprite = Sprite {
    width: 800,
    height: 600,
    art: &[
        "░░░░▐     ┆    ▌░░░░",
        "░░░░▐     ┆    ▌░░░░",
        "░░░░▐     ┆    ▌░░░░",
        "░░░░▐          ▌░░░░",
        "░░░░▐          ▌░░░░",
        "░░░░▐          ▌░░░░",
        "░░░░▐     ┆    ▌░░░░",
        "░░░░▐     ┆    ▌░░░░",
        "░░░░▐     ┆    ▌░░░░",
        "░░░░▐          ▌░░░░",
        "░░░░▐          ▌░░░░",
        "░░░░▐          ▌░░░░",
    ],
};

/// The player's car, seen from above.
pub const CAR: Sprite = Sprite {
    width: 501,
    height: 737,
    art: &[
        "  ▄█▄  ",
        "▐█████▌",
        "▐█▀▀▀█▌",
        " █████ ",
        " █████ ",
        "▐█████▌",
        "▐█▄▄▄█▌",
        " ▀▀▀▀▀ ",
    ],
};

/// The falling hazard. A barrel, roughly.
pub const HAZARD: Sprite = Sprite {
    width: 256,
    height: 256,
    art: &[
        " ▄██▄ ",
        "██▒▒██",
        "██▒▒██",
        " ▀██▀ ",
    ],
};
