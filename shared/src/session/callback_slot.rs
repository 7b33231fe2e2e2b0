use std::sync::{Mutex, MutexGuard, PoisonError};

/// An application callback for one lifecycle event of one profile kind.
///
/// `Batch` receives every profile of a frame in a single call, and is the
/// primary form. `Each` is called once per profile.
pub enum ProfileFn<P> {
    Batch(Box<dyn FnMut(&[P]) + Send>),
    Each(Box<dyn FnMut(&P) + Send>),
}

impl<P> ProfileFn<P> {
    pub fn batch<F>(callback: F) -> Self
    where
        F: FnMut(&[P]) + Send + 'static,
    {
        Self::Batch(Box::new(callback))
    }

    pub fn each<F>(callback: F) -> Self
    where
        F: FnMut(&P) + Send + 'static,
    {
        Self::Each(Box::new(callback))
    }

    pub fn call(&mut self, profiles: &[P]) {
        match self {
            Self::Batch(callback) => callback(profiles),
            Self::Each(callback) => {
                for profile in profiles {
                    callback(profile);
                }
            }
        }
    }
}

/// A mutex-guarded, replaceable callback.
///
/// The same lock covers replacing the callback and invoking it, so a
/// callback is never swapped out halfway through a delivery.
pub struct CallbackSlot<P> {
    callback: Mutex<Option<ProfileFn<P>>>,
}

impl<P> CallbackSlot<P> {
    pub fn new() -> Self {
        Self {
            callback: Mutex::new(None),
        }
    }

    pub fn set(&self, callback: ProfileFn<P>) {
        *self.lock() = Some(callback);
    }

    /// Returns whether a callback was set.
    pub fn clear(&self) -> bool {
        self.lock().take().is_some()
    }

    pub fn is_set(&self) -> bool {
        self.lock().is_some()
    }

    /// Delivers `profiles` if a callback is set. Returns whether it was called.
    pub fn invoke(&self, profiles: &[P]) -> bool {
        match self.lock().as_mut() {
            Some(callback) => {
                callback.call(profiles);
                true
            }
            None => false,
        }
    }

    // a callback that panicked must not stop later deliveries
    fn lock(&self) -> MutexGuard<'_, Option<ProfileFn<P>>> {
        self.callback.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<P> Default for CallbackSlot<P> {
    fn default() -> Self {
        Self::new()
    }
}
