use backend::{Canvas, Color, EventSource, InputEvent};

use crate::world::World;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub highlight: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::BLUE,
            highlight: Color::RED,
        }
    }
}

/// Applies one frame's worth of input. A quit request does not cut the
/// drain short: later key presses in the same batch are still applied.
pub fn handle_events(state: LoopState, events: &[InputEvent], world: &mut World) -> LoopState {
    let mut next = state;
    for event in events {
        match event {
            InputEvent::Quit => {
                log::debug!("quit requested");
                next = LoopState::Stopped;
            }
            InputEvent::KeyDown(direction) => {
                world.move_actor(*direction);
            }
        }
    }
    next
}

/// Composes one frame: background, actor sprite, and the highlight outline
/// when the actor overlaps the boundary.
pub fn render<C: Canvas>(canvas: &mut C, texture: &C::Texture, world: &World, palette: &Palette) {
    canvas.clear(palette.background);
    canvas.draw_texture(texture, &world.actor);
    if world.highlighted() {
        canvas.draw_rect(&world.actor, palette.highlight);
    }
    canvas.present();
}

/// Runs until a quit request has been seen. The frame that observes the
/// request is still rendered; nothing is drawn after it. Returns the number
/// of frames rendered.
pub fn run<E, C>(
    events: &mut E,
    canvas: &mut C,
    texture: &C::Texture,
    world: &mut World,
    palette: &Palette,
) -> u64
where
    E: EventSource,
    C: Canvas,
{
    let mut state = LoopState::Running;
    let mut frames = 0u64;

    while state == LoopState::Running {
        let pending = events.poll_events();
        state = handle_events(state, &pending, world);
        render(canvas, texture, world, palette);
        frames += 1;
    }

    log::debug!("frame loop stopped, actor at {:?}", world.actor);
    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use backend::{Direction, Rect};
    use std::collections::VecDeque;

    #[derive(Debug, Clone, PartialEq)]
    enum Draw {
        Clear(Color),
        Texture(&'static str, Rect),
        Outline(Rect, Color),
        Present,
    }

    #[derive(Default)]
    struct RecordingCanvas {
        draws: Vec<Draw>,
    }

    impl RecordingCanvas {
        fn presents(&self) -> usize {
            self.draws.iter().filter(|d| **d == Draw::Present).count()
        }
    }

    impl Canvas for RecordingCanvas {
        type Texture = &'static str;

        fn clear(&mut self, color: Color) {
            self.draws.push(Draw::Clear(color));
        }

        fn draw_texture(&mut self, texture: &&'static str, dst: &Rect) {
            self.draws.push(Draw::Texture(*texture, *dst));
        }

        fn draw_rect(&mut self, rect: &Rect, color: Color) {
            self.draws.push(Draw::Outline(*rect, color));
        }

        fn present(&mut self) {
            self.draws.push(Draw::Present);
        }
    }

    /// Hands out one batch per frame; once exhausted it keeps asking to quit.
    struct ScriptedEvents {
        frames: VecDeque<Vec<InputEvent>>,
        polls: usize,
    }

    impl ScriptedEvents {
        fn new(frames: Vec<Vec<InputEvent>>) -> Self {
            Self {
                frames: frames.into(),
                polls: 0,
            }
        }
    }

    impl EventSource for ScriptedEvents {
        fn poll_events(&mut self) -> Vec<InputEvent> {
            self.polls += 1;
            self.frames
                .pop_front()
                .unwrap_or_else(|| vec![InputEvent::Quit])
        }
    }

    fn world() -> World {
        World::new(Rect::new(100, 100, 50, 50), Rect::new(0, 0, 800, 600), 5)
    }

    #[test]
    fn frame_draws_background_sprite_outline_then_presents() {
        let mut canvas = RecordingCanvas::default();
        render(&mut canvas, &"player", &world(), &Palette::default());

        let actor = Rect::new(100, 100, 50, 50);
        assert_eq!(
            canvas.draws,
            vec![
                Draw::Clear(Color::BLUE),
                Draw::Texture("player", actor),
                Draw::Outline(actor, Color::RED),
                Draw::Present,
            ]
        );
    }

    #[test]
    fn no_outline_without_overlap() {
        let mut canvas = RecordingCanvas::default();
        let detached = World::new(Rect::new(900, 100, 50, 50), Rect::new(0, 0, 800, 600), 5);
        render(&mut canvas, &"player", &detached, &Palette::default());
        assert!(!canvas
            .draws
            .iter()
            .any(|d| matches!(d, Draw::Outline(..))));
        assert_eq!(canvas.presents(), 1);
    }

    #[test]
    fn quit_still_applies_later_keys_in_the_same_drain() {
        let mut w = world();
        let state = handle_events(
            LoopState::Running,
            &[
                InputEvent::Quit,
                InputEvent::KeyDown(Direction::Right),
            ],
            &mut w,
        );
        assert_eq!(state, LoopState::Stopped);
        assert_eq!(w.actor, Rect::new(105, 100, 50, 50));
    }

    #[test]
    fn loop_renders_the_quit_frame_and_nothing_after() {
        let mut events = ScriptedEvents::new(vec![
            vec![InputEvent::KeyDown(Direction::Right)],
            vec![],
            vec![InputEvent::KeyDown(Direction::Down), InputEvent::Quit],
            vec![InputEvent::KeyDown(Direction::Down)],
        ]);
        let mut canvas = RecordingCanvas::default();
        let mut w = world();

        let frames = run(&mut events, &mut canvas, &"player", &mut w, &Palette::default());

        assert_eq!(frames, 3);
        assert_eq!(events.polls, 3);
        assert_eq!(canvas.presents(), 3);
        assert_eq!(canvas.draws.last(), Some(&Draw::Present));
        assert_eq!(w.actor, Rect::new(105, 105, 50, 50));
    }

    #[test]
    fn sprite_follows_the_actor_each_frame() {
        let mut events = ScriptedEvents::new(vec![
            vec![InputEvent::KeyDown(Direction::Left)],
            vec![InputEvent::KeyDown(Direction::Up), InputEvent::KeyDown(Direction::Up)],
        ]);
        let mut canvas = RecordingCanvas::default();
        let mut w = world();

        let frames = run(&mut events, &mut canvas, &"player", &mut w, &Palette::default());

        let sprites: Vec<Rect> = canvas
            .draws
            .iter()
            .filter_map(|d| match d {
                Draw::Texture(_, r) => Some(*r),
                _ => None,
            })
            .collect();
        assert_eq!(frames, 3);
        assert_eq!(
            sprites,
            vec![
                Rect::new(95, 100, 50, 50),
                Rect::new(95, 90, 50, 50),
                Rect::new(95, 90, 50, 50),
            ]
        );
    }
}
