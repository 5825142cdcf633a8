// Test support utilities for both unit and integration tests

use crate::player::{MediaElement, MediaError};
use std::cell::RefCell;
use std::rc::Rc;

/// Commands the player sent to the fake element
#[derive(Debug, Clone, PartialEq)]
pub enum MediaCall {
    Play,
    Pause,
    Seek(f64),
}

struct FakeState {
    paused: bool,
    current_time: f64,
    duration: f64,
    play_rejection: Option<String>,
    yield_reads: bool,
    paused_reads_left: Option<usize>,
    calls: Vec<MediaCall>,
}

/// In-memory media element for testing
///
/// Behaves like an `<audio>` element that never advances on its own: tests
/// move the playhead and set the length explicitly. Clones share state, so a
/// test can keep one clone while the player owns another.
#[derive(Clone)]
pub struct FakeMediaElement {
    state: Rc<RefCell<FakeState>>,
}

impl Default for FakeMediaElement {
    fn default() -> Self {
        FakeMediaElement {
            state: Rc::new(RefCell::new(FakeState {
                paused: true,
                current_time: 0.0,
                duration: f64::NAN,
                play_rejection: None,
                yield_reads: false,
                paused_reads_left: None,
                calls: Vec::new(),
            })),
        }
    }
}

impl FakeMediaElement {
    #[allow(unused)] // Used in tests
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paused(&self) -> bool {
        self.state.borrow().paused
    }

    /// Change the paused flag without going through the player
    pub fn set_paused(&self, paused: bool) {
        self.state.borrow_mut().paused = paused;
    }

    /// Move the playhead without going through the player
    pub fn set_current_time_external(&self, seconds: f64) {
        self.state.borrow_mut().current_time = seconds;
    }

    pub fn set_duration(&self, seconds: f64) {
        self.state.borrow_mut().duration = seconds;
    }

    /// Make every following play command fail, like a blocked autoplay
    pub fn reject_play(&self, reason: &str) {
        self.state.borrow_mut().play_rejection = Some(reason.to_string());
    }

    pub fn allow_play(&self) {
        self.state.borrow_mut().play_rejection = None;
    }

    /// Reached the end of the track: the element pauses itself
    pub fn finish(&self) {
        let mut state = self.state.borrow_mut();
        state.paused = true;
        if state.duration.is_finite() {
            state.current_time = state.duration;
        }
    }

    /// Make reads give up the task once before answering, like a round
    /// trip to the webview
    pub fn yield_on_reads(&self) {
        self.state.borrow_mut().yield_reads = true;
    }

    /// Let `reads` more paused-flag reads succeed, then fail every one after
    pub fn fail_paused_reads_after(&self, reads: usize) {
        self.state.borrow_mut().paused_reads_left = Some(reads);
    }

    async fn read_delay(&self) {
        let yield_reads = self.state.borrow().yield_reads;
        if yield_reads {
            tokio::task::yield_now().await;
        }
    }

    pub fn calls(&self) -> Vec<MediaCall> {
        self.state.borrow().calls.clone()
    }
}

#[async_trait::async_trait(?Send)]
impl MediaElement for FakeMediaElement {
    async fn is_paused(&self) -> Result<bool, MediaError> {
        self.read_delay().await;
        let mut state = self.state.borrow_mut();
        match state.paused_reads_left {
            Some(0) => return Err(MediaError::Eval("element detached".to_string())),
            Some(left) => state.paused_reads_left = Some(left - 1),
            None => {}
        }
        Ok(state.paused)
    }

    async fn play(&self) -> Result<(), MediaError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(MediaCall::Play);
        if let Some(reason) = &state.play_rejection {
            return Err(MediaError::PlayRejected(reason.clone()));
        }
        state.paused = false;
        Ok(())
    }

    async fn pause(&self) -> Result<(), MediaError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(MediaCall::Pause);
        state.paused = true;
        Ok(())
    }

    async fn current_time(&self) -> Result<f64, MediaError> {
        self.read_delay().await;
        Ok(self.state.borrow().current_time)
    }

    async fn set_current_time(&self, seconds: f64) -> Result<(), MediaError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(MediaCall::Seek(seconds));
        // Clamp the way a browser does once the length is known
        state.current_time = if state.duration.is_finite() {
            seconds.clamp(0.0, state.duration)
        } else {
            seconds.max(0.0)
        };
        Ok(())
    }

    async fn duration(&self) -> Result<f64, MediaError> {
        self.read_delay().await;
        Ok(self.state.borrow().duration)
    }
}
