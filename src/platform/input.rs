//! Key bindings and per-frame input snapshots

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// Keys the game cares about. Backends map their own key codes onto these;
/// anything else becomes `Other` with the backend's raw code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    S,
    Up,
    Down,
    Escape,
    Other(u32),
}

/// Anything that can answer "is this key held right now"
pub trait HeldKeys {
    fn is_held(&self, key: Key) -> bool;
}

impl HeldKeys for HashSet<Key> {
    fn is_held(&self, key: Key) -> bool {
        self.contains(&key)
    }
}

/// Which key drives which action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub left_up: Key,
    pub left_down: Key,
    pub right_up: Key,
    pub right_down: Key,
    pub quit: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left_up: Key::W,
            left_down: Key::S,
            right_up: Key::Up,
            right_down: Key::Down,
            quit: Key::Escape,
        }
    }
}

impl KeyBindings {
    /// Sample the held keys once for this frame
    pub fn snapshot<H: HeldKeys + ?Sized>(&self, held: &H) -> TickInput {
        TickInput {
            left_up: held.is_held(self.left_up),
            left_down: held.is_held(self.left_down),
            right_up: held.is_held(self.right_up),
            right_down: held.is_held(self.right_down),
            quit: held.is_held(self.quit),
        }
    }
}

/// Seeded stand-in for a real keyboard: each frame every bound movement key
/// is held with probability 0.5. Quit is never pressed.
pub struct RandomKeyboard {
    rng: Pcg32,
    keys: [Key; 4],
}

impl RandomKeyboard {
    pub fn new(seed: u64, bindings: &KeyBindings) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            keys: [
                bindings.left_up,
                bindings.left_down,
                bindings.right_up,
                bindings.right_down,
            ],
        }
    }

    /// Keys held during the next frame
    pub fn poll(&mut self) -> HashSet<Key> {
        let mut held = HashSet::new();
        for key in self.keys {
            if self.rng.random_bool(0.5) {
                held.insert(key);
            }
        }
        held
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings_snapshot() {
        let bindings = KeyBindings::default();
        let held: HashSet<Key> = [Key::W, Key::Down].into_iter().collect();
        let input = bindings.snapshot(&held);
        assert_eq!(
            input,
            TickInput {
                left_up: true,
                left_down: false,
                right_up: false,
                right_down: true,
                quit: false,
            }
        );
    }

    #[test]
    fn test_quit_and_unbound_keys() {
        let bindings = KeyBindings::default();
        let held: HashSet<Key> = [Key::Escape, Key::Other(42)].into_iter().collect();
        let input = bindings.snapshot(&held);
        assert!(input.quit);
        assert!(!input.left_up && !input.left_down && !input.right_up && !input.right_down);
    }

    #[test]
    fn test_rebound_keys() {
        let bindings = KeyBindings {
            left_up: Key::Other(1),
            ..Default::default()
        };
        let held: HashSet<Key> = [Key::W, Key::Other(1)].into_iter().collect();
        let input = bindings.snapshot(&held);
        assert!(input.left_up);
    }

    #[test]
    fn test_random_keyboard_is_seeded() {
        let bindings = KeyBindings::default();
        let mut a = RandomKeyboard::new(3, &bindings);
        let mut b = RandomKeyboard::new(3, &bindings);
        for _ in 0..100 {
            let held = a.poll();
            assert_eq!(held, b.poll());
            assert!(!held.contains(&Key::Escape));
        }
    }

    #[test]
    fn test_random_keyboard_follows_rebinding() {
        let bindings = KeyBindings {
            left_up: Key::Other(10),
            left_down: Key::Other(11),
            right_up: Key::Other(12),
            right_down: Key::Other(13),
            quit: Key::Escape,
        };
        let mut keyboard = RandomKeyboard::new(11, &bindings);
        let mut moved = false;
        for _ in 0..100 {
            let held = keyboard.poll();
            assert!(held.iter().all(|k| matches!(k, Key::Other(10..=13))));
            let input = bindings.snapshot(&held);
            moved |= input.left_up || input.left_down || input.right_up || input.right_down;
            // The default keys are unbound now
            assert_eq!(KeyBindings::default().snapshot(&held), TickInput::default());
        }
        assert!(moved);
    }
}
