use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use sdl2::EventPump;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn from_scancode(scancode: Scancode) -> Option<Direction> {
        match scancode {
            Scancode::Up => Some(Direction::Up),
            Scancode::Down => Some(Direction::Down),
            Scancode::Left => Some(Direction::Left),
            Scancode::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Direction),
}

/// Anything the frame loop can drain input from once per frame.
pub trait EventSource {
    /// Returns every event pending right now without blocking.
    fn poll_events(&mut self) -> Vec<InputEvent>;
}

/// Maps a raw SDL event onto the game's input model. Unhandled events yield `None`.
pub fn translate(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Quit { .. }
        | Event::KeyDown {
            scancode: Some(Scancode::Escape),
            ..
        } => Some(InputEvent::Quit),
        Event::KeyDown {
            scancode: Some(scancode),
            ..
        } => Direction::from_scancode(*scancode).map(InputEvent::KeyDown),
        _ => None,
    }
}

pub struct Input {
    event_pump: EventPump,
}

impl Input {
    pub fn new(event_pump: EventPump) -> Self {
        Self { event_pump }
    }
}

impl EventSource for Input {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let events: Vec<InputEvent> = self
            .event_pump
            .poll_iter()
            .filter_map(|event| translate(&event))
            .collect();
        if !events.is_empty() {
            log::trace!("polled {} input event(s)", events.len());
        }
        events
    }
}
