use super::controller::PlayerError;
use std::cell::OnceCell;
use tracing::{info, warn};

/// Required reference to the media element
///
/// Empty until the view attaches the element, then read-only for the rest of
/// the player's life. Never reset.
pub struct MediaHandle<M> {
    element: OnceCell<M>,
}

impl<M> Default for MediaHandle<M> {
    fn default() -> Self {
        Self {
            element: OnceCell::new(),
        }
    }
}

impl<M> MediaHandle<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the element. The first attach wins; later calls are rejected
    /// and leave the original element in place.
    pub fn attach(&self, element: M) -> Result<(), PlayerError> {
        match self.element.set(element) {
            Ok(()) => {
                info!("Media element attached");
                Ok(())
            }
            Err(_) => {
                warn!("Media element already attached, ignoring second attach");
                Err(PlayerError::AlreadyAttached)
            }
        }
    }

    pub fn is_attached(&self) -> bool {
        self.element.get().is_some()
    }

    /// Get the attached element, failing if the view has not mounted it yet
    pub fn required(&self) -> Result<&M, PlayerError> {
        self.element.get().ok_or(PlayerError::NotAttached)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_before_attach() {
        let handle: MediaHandle<u8> = MediaHandle::new();
        assert!(!handle.is_attached());
        assert!(matches!(handle.required(), Err(PlayerError::NotAttached)));
    }

    #[test]
    fn test_first_attach_wins() {
        let handle = MediaHandle::new();
        handle.attach(1u8).unwrap();
        assert!(matches!(handle.attach(2u8), Err(PlayerError::AlreadyAttached)));
        assert_eq!(*handle.required().unwrap(), 1);
    }
}
