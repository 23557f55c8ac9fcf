//! Scrolling column pairs
//!
//! A pair is a top and a bottom column sharing one x coordinate with a fixed
//! vertical gap between them. Pairs are never destroyed: once a pair scrolls
//! past the left edge it is recycled in place at the right edge with a new
//! gap position.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;

/// Which half of a column pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnHalf {
    /// Hangs from the top edge of the field
    Top,
    /// Stands on the bottom edge of the field
    Bottom,
}

impl ColumnHalf {
    /// Both halves, in collision-check order
    pub const BOTH: [ColumnHalf; 2] = [ColumnHalf::Top, ColumnHalf::Bottom];
}

/// A top/bottom column pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge shared by both halves
    pub x: f32,
    pub top_height: f32,
    pub bottom_height: f32,
    pub width: f32,
    /// Field height the pair was sized for
    pub field_height: f32,
    /// Vertical opening between the halves
    pub gap: f32,
    /// Lower bound for a freshly drawn top height
    pub min_top_height: f32,
}

impl Obstacle {
    /// Spawn a pair at `x` with a random gap position
    pub fn spawn<R: Rng + ?Sized>(
        x: f32,
        width: f32,
        field_height: f32,
        gap: f32,
        min_top_height: f32,
        rng: &mut R,
    ) -> Self {
        let mut obstacle = Self {
            x,
            top_height: 0.0,
            bottom_height: 0.0,
            width,
            field_height,
            gap,
            min_top_height,
        };
        obstacle.randomize_heights(field_height, rng);
        obstacle
    }

    #[inline]
    pub fn advance(&mut self, speed: f32) {
        self.x -= speed;
    }

    /// Right edge has passed the left edge of the field
    #[inline]
    pub fn is_offscreen_left(&self) -> bool {
        self.x + self.width < 0.0
    }

    /// Move back to the right edge and redraw the gap position
    pub fn recycle<R: Rng + ?Sized>(&mut self, field_width: f32, field_height: f32, rng: &mut R) {
        self.x = field_width;
        self.randomize_heights(field_height, rng);
    }

    /// Top height is a uniform integer in `[min_top_height, field_height / 2]`
    fn randomize_heights<R: Rng + ?Sized>(&mut self, field_height: f32, rng: &mut R) {
        let lo = self.min_top_height.ceil() as u32;
        let hi = ((field_height / 2.0).floor() as u32).max(lo);
        self.field_height = field_height;
        self.top_height = rng.random_range(lo..=hi) as f32;
        self.bottom_height = (field_height - self.top_height - self.gap).max(0.0);
    }

    /// Bounding box of one half
    pub fn half_bounds(&self, half: ColumnHalf) -> Aabb {
        match half {
            ColumnHalf::Top => Aabb::new(
                Vec2::new(self.x, self.field_height - self.top_height),
                Vec2::new(self.x + self.width, self.field_height),
            ),
            ColumnHalf::Bottom => Aabb::new(
                Vec2::new(self.x, 0.0),
                Vec2::new(self.x + self.width, self.bottom_height),
            ),
        }
    }

    pub fn half_center(&self, half: ColumnHalf) -> Vec2 {
        self.half_bounds(half).center()
    }

    /// Broad-phase test of one half against a box
    pub fn overlaps(&self, half: ColumnHalf, other: &Aabb) -> bool {
        self.half_bounds(half).overlaps(other)
    }

    /// Halves whose boxes touch `other`, top first
    pub fn overlapping_halves<'a>(
        &'a self,
        other: &'a Aabb,
    ) -> impl Iterator<Item = ColumnHalf> + 'a {
        ColumnHalf::BOTH
            .into_iter()
            .filter(move |&half| self.overlaps(half, other))
    }

    /// Lower edge of the opening (top of the bottom column)
    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.bottom_height
    }

    /// Upper edge of the opening (underside of the top column)
    #[inline]
    pub fn gap_top(&self) -> f32 {
        self.field_height - self.top_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn pair(x: f32) -> Obstacle {
        let mut rng = Pcg32::seed_from_u64(1);
        Obstacle::spawn(x, 100.0, 600.0, 200.0, 100.0, &mut rng)
    }

    #[test]
    fn test_spawn_heights_fill_field() {
        let o = pair(800.0);
        assert!(o.top_height >= 100.0 && o.top_height <= 300.0);
        assert_eq!(o.top_height.fract(), 0.0);
        assert_eq!(o.top_height + o.bottom_height + o.gap, 600.0);
    }

    #[test]
    fn test_advance_moves_left() {
        let mut o = pair(800.0);
        o.advance(3.0);
        assert_eq!(o.x, 797.0);
    }

    #[test]
    fn test_offscreen_left_uses_right_edge() {
        let mut o = pair(0.0);
        assert!(!o.is_offscreen_left());
        o.x = -5.0;
        assert!(!o.is_offscreen_left());
        o.x = -100.0;
        assert!(!o.is_offscreen_left());
        o.x = -105.0;
        assert!(o.is_offscreen_left());
    }

    #[test]
    fn test_recycle_resets_to_right_edge() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut o = pair(-150.0);
        o.recycle(800.0, 600.0, &mut rng);
        assert_eq!(o.x, 800.0);
        assert_eq!(o.top_height + o.bottom_height, 600.0 - 200.0);
    }

    #[test]
    fn test_half_geometry() {
        let mut o = pair(100.0);
        o.top_height = 150.0;
        o.bottom_height = 250.0;

        let top = o.half_bounds(ColumnHalf::Top);
        assert_eq!(top.min, Vec2::new(100.0, 450.0));
        assert_eq!(top.max, Vec2::new(200.0, 600.0));

        let bottom = o.half_bounds(ColumnHalf::Bottom);
        assert_eq!(bottom.min, Vec2::new(100.0, 0.0));
        assert_eq!(bottom.max, Vec2::new(200.0, 250.0));
        assert_eq!(o.half_center(ColumnHalf::Bottom), Vec2::new(150.0, 125.0));

        assert_eq!(o.gap_bottom(), 250.0);
        assert_eq!(o.gap_top(), 450.0);
    }

    #[test]
    fn test_overlapping_halves() {
        let mut o = pair(100.0);
        o.top_height = 150.0;
        o.bottom_height = 250.0;

        // Inside the gap: touches neither half
        let in_gap = Aabb::new(Vec2::new(120.0, 300.0), Vec2::new(190.0, 370.0));
        assert_eq!(o.overlapping_halves(&in_gap).count(), 0);

        // Spanning the whole field: touches both, top reported first
        let tall = Aabb::new(Vec2::new(120.0, 0.0), Vec2::new(190.0, 600.0));
        let halves: Vec<_> = o.overlapping_halves(&tall).collect();
        assert_eq!(halves, vec![ColumnHalf::Top, ColumnHalf::Bottom]);
    }

    #[test]
    fn test_small_field_never_goes_negative() {
        let mut rng = Pcg32::seed_from_u64(3);
        let o = Obstacle::spawn(0.0, 100.0, 250.0, 200.0, 100.0, &mut rng);
        assert!(o.bottom_height >= 0.0);
    }
}
