/* CONFIG */
pub const DEFAULT_PICTURE_DIMENSIONS: (usize, usize) = (800, 600);
pub const DEFAULT_BACKGROUND_COLOR: (usize, usize, usize) = WHITE;
pub const DEFAULT_FOREGROUND_COLOR: (usize, usize, usize) = BLACK;
pub const DEFAULT_POINT_RADIUS: usize = 2;
pub const DEFAULT_OUTPUT_PATH: &str = "output.png";
pub const MAX_PICTURE_DIMENSION: i64 = 8192;
pub const MAX_POINT_RADIUS: i64 = 512;

/* COLORS */
pub const WHITE: (usize, usize, usize) = (255, 255, 255);
pub const BLACK: (usize, usize, usize) = (0, 0, 0);
pub const RED: (usize, usize, usize) = (255, 0, 0);
