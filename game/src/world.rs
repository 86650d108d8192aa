use backend::{check_collision, Direction, Rect};

/// The movable actor and the static area it lives in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    pub actor: Rect,
    pub boundary: Rect,
    pub step: u32,
}

impl World {
    pub fn new(actor: Rect, boundary: Rect, step: u32) -> Self {
        Self {
            actor,
            boundary,
            step,
        }
    }

    /// Shifts the actor one step. A move that would leave the boundary is
    /// dropped entirely rather than clamped to the edge. Returns whether the
    /// actor moved.
    pub fn move_actor(&mut self, direction: Direction) -> bool {
        let step = i64::from(self.step);
        let (pos, extent, lo, span) = match direction {
            Direction::Left | Direction::Right => (
                self.actor.x,
                self.actor.w,
                self.boundary.x,
                self.boundary.w,
            ),
            Direction::Up | Direction::Down => (
                self.actor.y,
                self.actor.h,
                self.boundary.y,
                self.boundary.h,
            ),
        };
        let target = match direction {
            Direction::Left | Direction::Up => i64::from(pos) - step,
            Direction::Right | Direction::Down => i64::from(pos) + step,
        };
        let lo = i64::from(lo);
        let hi = lo + i64::from(span) - i64::from(extent);
        let target = match i32::try_from(target) {
            Ok(t) if (lo..=hi).contains(&target) => t,
            _ => {
                log::debug!("dropped {direction:?} move at {pos}: {target} outside [{lo}, {hi}]");
                return false;
            }
        };

        match direction {
            Direction::Left | Direction::Right => self.actor.x = target,
            Direction::Up | Direction::Down => self.actor.y = target,
        }
        true
    }

    /// The overlap test between actor and boundary, used as the highlight predicate.
    pub fn highlighted(&self) -> bool {
        check_collision(&self.actor, &self.boundary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn world() -> World {
        World::new(Rect::new(100, 100, 50, 50), Rect::new(0, 0, 800, 600), 5)
    }

    #[test]
    fn single_right_press_moves_one_step() {
        let mut w = world();
        assert!(w.move_actor(Direction::Right));
        assert_eq!(w.actor, Rect::new(105, 100, 50, 50));
    }

    #[test]
    fn each_direction_moves_its_own_axis() {
        let mut w = world();
        w.move_actor(Direction::Up);
        assert_eq!(w.actor, Rect::new(100, 95, 50, 50));
        w.move_actor(Direction::Left);
        assert_eq!(w.actor, Rect::new(95, 95, 50, 50));
        w.move_actor(Direction::Down);
        w.move_actor(Direction::Down);
        assert_eq!(w.actor, Rect::new(95, 105, 50, 50));
    }

    #[test]
    fn move_past_edge_is_dropped_not_clamped() {
        let mut w = World::new(Rect::new(3, 748, 50, 50), Rect::new(0, 0, 800, 800), 5);
        assert!(!w.move_actor(Direction::Left));
        assert!(!w.move_actor(Direction::Down));
        assert_eq!(w.actor, Rect::new(3, 748, 50, 50));

        let mut w = World::new(Rect::new(0, 550, 50, 50), Rect::new(0, 0, 800, 600), 5);
        assert!(!w.move_actor(Direction::Left));
        assert!(!w.move_actor(Direction::Down));
        assert!(w.move_actor(Direction::Up));
        assert_eq!(w.actor, Rect::new(0, 545, 50, 50));
    }

    #[test]
    fn actor_inside_boundary_is_highlighted() {
        let w = world();
        assert!(w.highlighted());

        let flush = World::new(Rect::new(0, 0, 50, 50), Rect::new(0, 0, 800, 600), 5);
        assert!(flush.highlighted());
    }

    #[test]
    fn move_beyond_i32_range_is_dropped() {
        let boundary = Rect::new(0, 0, u32::MAX, 10);
        let mut w = World::new(Rect::new(i32::MAX - 2, 0, 1, 1), boundary, 5);
        assert!(!w.move_actor(Direction::Right));
        assert_eq!(w.actor.x, i32::MAX - 2);

        let mut w = World::new(Rect::new(i32::MAX - 5, 0, 1, 1), boundary, 5);
        assert!(w.move_actor(Direction::Right));
        assert_eq!(w.actor.x, i32::MAX);
    }

    fn direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Up),
            Just(Direction::Down),
            Just(Direction::Left),
            Just(Direction::Right),
        ]
    }

    proptest! {
        #[test]
        fn actor_never_leaves_boundary(
            moves in prop::collection::vec(direction(), 0..400),
            step in 1u32..40,
        ) {
            let mut w = World::new(Rect::new(100, 100, 50, 50), Rect::new(0, 0, 800, 600), step);
            for dir in moves {
                w.move_actor(dir);
                prop_assert!(w.actor.x >= 0 && w.actor.x <= 800 - 50);
                prop_assert!(w.actor.y >= 0 && w.actor.y <= 600 - 50);
                prop_assert_eq!((w.actor.w, w.actor.h), (50, 50));
            }
        }
    }
}
