use std::collections::HashSet;

/// Logical game keys. The windowing layer maps physical key codes onto
/// these before handing events to the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Run left (A).
    Left,
    /// Run right (D).
    Right,
    /// Duck / fast-fall (S).
    FastFall,
    /// Jump (Space).
    Jump,
    /// Dash left (Q).
    DashLeft,
    /// Dash right (E).
    DashRight,
    /// Acceleration boost modifier (Ctrl), stacks with Left/Right.
    Boost,
    /// Leave the run (Escape).
    Quit,
}

/// Input event as delivered by the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// The window was asked to close.
    CloseRequested,
}

/// Immutable per-tick view of the input device: which keys are held, which
/// transitioned down this tick, and whether the window wants to close.
///
/// Passing this struct around (instead of polling a global key map) keeps
/// the player controller testable without a real input device.
#[derive(Debug, Clone, Default)]
pub struct InputSnapshot {
    held: HashSet<Key>,
    pressed: HashSet<Key>,
    close_requested: bool,
}

impl InputSnapshot {
    /// Whether the key is currently held down.
    pub fn held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Whether the key transitioned from released to pressed this tick.
    /// Auto-repeat `KeyDown` events while held do not count.
    pub fn pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }
}

/// Persistent key state, folded from frontend events once per tick.
#[derive(Debug, Default)]
pub struct InputState {
    held: HashSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold this tick's events into the held set and produce the snapshot.
    /// A `KeyDown` only lands in the pressed set when the key was not held
    /// before (leading edge).
    pub fn begin_tick(&mut self, events: &[InputEvent]) -> InputSnapshot {
        let mut pressed = HashSet::new();
        let mut close_requested = false;

        for event in events {
            match event {
                InputEvent::KeyDown(key) => {
                    if self.held.insert(*key) {
                        pressed.insert(*key);
                    }
                }
                InputEvent::KeyUp(key) => {
                    self.held.remove(key);
                }
                InputEvent::CloseRequested => close_requested = true,
            }
        }

        InputSnapshot {
            held: self.held.clone(),
            pressed,
            close_requested,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_down_is_held_and_pressed() {
        let mut state = InputState::new();
        let snap = state.begin_tick(&[InputEvent::KeyDown(Key::Jump)]);
        assert!(snap.held(Key::Jump));
        assert!(snap.pressed(Key::Jump));
    }

    #[test]
    fn holding_does_not_repress() {
        let mut state = InputState::new();
        state.begin_tick(&[InputEvent::KeyDown(Key::Jump)]);

        // No events: still held, no longer a leading edge.
        let snap = state.begin_tick(&[]);
        assert!(snap.held(Key::Jump));
        assert!(!snap.pressed(Key::Jump));

        // OS auto-repeat while held is not a leading edge either.
        let snap = state.begin_tick(&[InputEvent::KeyDown(Key::Jump)]);
        assert!(!snap.pressed(Key::Jump));
    }

    #[test]
    fn release_and_repress_fires_again() {
        let mut state = InputState::new();
        state.begin_tick(&[InputEvent::KeyDown(Key::DashRight)]);
        state.begin_tick(&[InputEvent::KeyUp(Key::DashRight)]);
        let snap = state.begin_tick(&[InputEvent::KeyDown(Key::DashRight)]);
        assert!(snap.pressed(Key::DashRight));
    }

    #[test]
    fn down_and_up_in_one_tick_still_counts_as_pressed() {
        let mut state = InputState::new();
        let snap = state.begin_tick(&[
            InputEvent::KeyDown(Key::Jump),
            InputEvent::KeyUp(Key::Jump),
        ]);
        assert!(snap.pressed(Key::Jump));
        assert!(!snap.held(Key::Jump));
    }

    #[test]
    fn close_requested_is_reported() {
        let mut state = InputState::new();
        let snap = state.begin_tick(&[InputEvent::CloseRequested]);
        assert!(snap.close_requested());
        let snap = state.begin_tick(&[]);
        assert!(!snap.close_requested());
    }
}
