//! Recorded and generated input scripts
//!
//! The simulation is a pure function of its inputs, so a list of per-frame
//! inputs is enough to reproduce a whole session.

use serde::{Deserialize, Serialize};

use crate::platform::{KeyBindings, RandomKeyboard};
use crate::sim::{GameState, RenderSnapshot, TickInput, tick};

/// Errors reading or writing a script
#[derive(thiserror::Error, Debug)]
pub enum ScriptError {
    #[error("Script JSON is invalid : {0}")]
    Json(#[from] serde_json::Error),
}

/// Inputs for consecutive frames, first frame first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputScript {
    pub frames: Vec<TickInput>,
}

impl InputScript {
    pub fn new(frames: Vec<TickInput>) -> Self {
        Self { frames }
    }

    /// Record `len` frames of a [`RandomKeyboard`] under the default
    /// bindings. Same seed, same script.
    pub fn random(seed: u64, len: usize) -> Self {
        let bindings = KeyBindings::default();
        let mut keyboard = RandomKeyboard::new(seed, &bindings);
        let frames = (0..len).map(|_| bindings.snapshot(&keyboard.poll())).collect();
        Self { frames }
    }

    /// Append a frame (recording)
    pub fn push(&mut self, input: TickInput) {
        self.frames.push(input);
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn to_json(&self) -> Result<String, ScriptError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Result of playing a script
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    /// One snapshot per simulated frame
    pub frames: Vec<RenderSnapshot>,
    /// State after the last simulated frame
    pub final_state: GameState,
    /// A frame asked to quit before the script ran out
    pub quit_early: bool,
}

/// Run a fresh session through `script`.
///
/// A frame with `quit` set ends playback without being simulated.
pub fn play(script: &InputScript) -> Trace {
    let mut state = GameState::new();
    let mut frames = Vec::with_capacity(script.len());
    let mut quit_early = false;

    for input in &script.frames {
        if input.quit {
            quit_early = true;
            break;
        }
        tick(&mut state, input);
        frames.push(RenderSnapshot::from(&state));
    }

    Trace {
        frames,
        final_state: state,
        quit_early,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_script_is_seeded() {
        let a = InputScript::random(7, 500);
        let b = InputScript::random(7, 500);
        let c = InputScript::random(8, 500);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 500);
        assert!(a.frames.iter().all(|f| !f.quit));
    }

    #[test]
    fn test_play_is_deterministic() {
        let script = InputScript::random(1234, 3000);
        let first = play(&script);
        let second = play(&script);
        assert_eq!(first, second);
        assert_eq!(first.frames.len(), 3000);
        assert!(!first.quit_early);
    }

    #[test]
    fn test_play_stops_at_quit() {
        let mut script = InputScript::random(5, 10);
        script.frames[4].quit = true;
        let trace = play(&script);
        assert!(trace.quit_early);
        assert_eq!(trace.frames.len(), 4);
        assert_eq!(trace.final_state.time_ticks, 4);
    }

    #[test]
    fn test_trace_scores_never_decrease() {
        let trace = play(&InputScript::random(99, 5000));
        for pair in trace.frames.windows(2) {
            assert!(pair[1].score.0 >= pair[0].score.0);
            assert!(pair[1].score.1 >= pair[0].score.1);
        }
    }

    #[test]
    fn test_script_json_round_trip() {
        let mut script = InputScript::default();
        script.push(TickInput {
            left_up: true,
            ..Default::default()
        });
        script.push(TickInput {
            quit: true,
            ..Default::default()
        });
        let json = script.to_json().unwrap();
        assert_eq!(InputScript::from_json(&json).unwrap(), script);
    }

    #[test]
    fn test_script_json_quit_defaults_false() {
        let json = r#"{"frames":[{"left_up":false,"left_down":true,"right_up":false,"right_down":false}]}"#;
        let script = InputScript::from_json(json).unwrap();
        assert!(script.frames[0].left_down);
        assert!(!script.frames[0].quit);
    }

    #[test]
    fn test_script_json_error() {
        let err = InputScript::from_json("{not json").unwrap_err();
        assert!(matches!(err, ScriptError::Json(_)));
    }
}
