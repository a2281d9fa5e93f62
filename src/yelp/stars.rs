//! Five-glyph star rendering of a rating

pub const FULL_STAR: char = '★';
pub const HALF_STAR: char = '✯';
pub const EMPTY_STAR: char = '✩';

/// Number of glyphs in every rendering
pub const STAR_COUNT: usize = 5;

/// Render a 0-5 rating as exactly five glyphs
///
/// Whole stars are filled, any fractional remainder adds a single half star,
/// and the rest is padded with empty stars.
pub fn render(rating: f64) -> String {
    let rating = if rating.is_nan() {
        0.0
    } else {
        rating.clamp(0.0, STAR_COUNT as f64)
    };

    let full = rating.floor();
    let mut stars: String = std::iter::repeat(FULL_STAR).take(full as usize).collect();
    let mut len = full as usize;

    if rating - full > 0.0 {
        stars.push(HALF_STAR);
        len += 1;
    }

    stars.extend(std::iter::repeat(EMPTY_STAR).take(STAR_COUNT.saturating_sub(len)));
    stars
}
