use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Instant,
};

use log::{debug, info, warn};

use tuio_shared::{
    Blob25D, Blob2D, Blob3D, Cursor25D, Cursor2D, Cursor3D, Object25D, Object2D, Object3D,
    OscMessage, PastFrameThreshold, ProfileError, ProfileFn, ProfileHandler, ProfileKind,
    ProfileKindError, TouchEvent,
};

use crate::{
    registry::{ListenerProfile, ProfileHandlers},
    transport::{join_receive_thread, Dispatcher, MessageReceiver, TransportError},
    ListenerConfig,
};

/// Tracks TUIO profiles arriving through a [`MessageReceiver`] and delivers
/// their lifecycle events to registered callbacks.
///
/// Each profile kind gets its own engine the first time it is tracked or a
/// callback is registered for it. Callbacks run on the transport's thread,
/// once per frame and event type, and receive the whole batch of profiles
/// that were added, updated or removed in that frame.
///
/// Every method, [`Listener::close`] included, may be called from inside a
/// callback.
pub struct Listener {
    config: ListenerConfig,
    receiver: Mutex<Box<dyn MessageReceiver>>,
    dispatcher: Dispatcher,
    handlers: Mutex<ProfileHandlers>,
    past_frame_threshold: PastFrameThreshold,
    started: Instant,
}

impl Listener {
    pub fn new<R: MessageReceiver + 'static>(config: ListenerConfig, receiver: R) -> Self {
        let past_frame_threshold = PastFrameThreshold::new(config.past_frame_threshold);
        let dispatcher = receiver.dispatcher();
        Self {
            config,
            receiver: Mutex::new(Box::new(receiver)),
            dispatcher,
            handlers: Mutex::new(ProfileHandlers::new()),
            past_frame_threshold,
            started: Instant::now(),
        }
    }

    pub fn config(&self) -> &ListenerConfig {
        &self.config
    }

    // Lifecycle

    pub fn bind(&self) -> Result<(), TransportError> {
        self.lock_receiver().bind()
    }

    pub fn listen(&self) -> Result<(), TransportError> {
        self.lock_receiver().listen()?;
        info!("TUIO listener started");
        Ok(())
    }

    /// Stops the transport and waits for its receive thread. The receiver
    /// lock is released before waiting, so a callback still running on that
    /// thread may call back into the listener.
    pub fn close(&self) -> Result<(), TransportError> {
        let thread = self.lock_receiver().stop()?;
        join_receive_thread(thread);
        info!("TUIO listener stopped");
        Ok(())
    }

    pub fn is_bound(&self) -> bool {
        self.lock_receiver().is_bound()
    }

    pub fn is_listening(&self) -> bool {
        self.lock_receiver().is_listening()
    }

    // Registration

    /// Starts tracking `P` without registering any callback, so that
    /// [`Listener::get_active_profiles`] reflects it. Returns the engine for
    /// the kind, which callbacks may hold on to for queries.
    pub fn track<P: ListenerProfile>(&self) -> Arc<ProfileHandler<P>> {
        let mut handlers = self.lock_handlers();
        if let Some(handler) = P::handler(&handlers) {
            return handler.clone();
        }

        let handler = Arc::new(ProfileHandler::<P>::new(self.past_frame_threshold.clone()));
        let subscriber = handler.clone();
        // subscribing goes through the shared routing table, never the
        // receiver lock, so a callback may track new kinds during `close()`
        self.dispatcher.subscribe(
            P::KIND.address(),
            Arc::new(move |message: &OscMessage| {
                if let Err(error) = subscriber.handle_message(message) {
                    log_rejected(P::KIND, &error);
                }
            }),
        );
        debug!("Tracking {}", P::KIND);

        *P::handler_mut(&mut handlers) = Some(handler.clone());
        handler
    }

    /// Starts tracking the profile kind sent to `address`. Fails for any
    /// address outside the nine TUIO 1.1 profiles.
    pub fn track_address(&self, address: &str) -> Result<ProfileKind, ProfileKindError> {
        let kind = ProfileKind::from_address(address)?;
        match kind {
            ProfileKind::Cursor2D => drop(self.track::<Cursor2D>()),
            ProfileKind::Cursor25D => drop(self.track::<Cursor25D>()),
            ProfileKind::Cursor3D => drop(self.track::<Cursor3D>()),
            ProfileKind::Object2D => drop(self.track::<Object2D>()),
            ProfileKind::Object25D => drop(self.track::<Object25D>()),
            ProfileKind::Object3D => drop(self.track::<Object3D>()),
            ProfileKind::Blob2D => drop(self.track::<Blob2D>()),
            ProfileKind::Blob25D => drop(self.track::<Blob25D>()),
            ProfileKind::Blob3D => drop(self.track::<Blob3D>()),
        }
        Ok(kind)
    }

    /// The engine for `P`, if the kind is tracked
    pub fn handler<P: ListenerProfile>(&self) -> Option<Arc<ProfileHandler<P>>> {
        P::handler(&self.lock_handlers()).cloned()
    }

    pub fn tracked_kinds(&self) -> Vec<ProfileKind> {
        self.lock_handlers().tracked_kinds()
    }

    /// Called once per frame with every profile of kind `P` that appeared
    pub fn set_added_callback<P, F>(&self, callback: F)
    where
        P: ListenerProfile,
        F: FnMut(&[P]) + Send + 'static,
    {
        self.track::<P>().set_added_callback(ProfileFn::batch(callback));
    }

    /// Called once per frame with every profile of kind `P` that changed
    pub fn set_updated_callback<P, F>(&self, callback: F)
    where
        P: ListenerProfile,
        F: FnMut(&[P]) + Send + 'static,
    {
        self.track::<P>().set_updated_callback(ProfileFn::batch(callback));
    }

    /// Called once per frame with the last known value of every profile of
    /// kind `P` that disappeared
    pub fn set_removed_callback<P, F>(&self, callback: F)
    where
        P: ListenerProfile,
        F: FnMut(&[P]) + Send + 'static,
    {
        self.track::<P>().set_removed_callback(ProfileFn::batch(callback));
    }

    pub fn set_added_item_callback<P, F>(&self, callback: F)
    where
        P: ListenerProfile,
        F: FnMut(&P) + Send + 'static,
    {
        self.track::<P>().set_added_callback(ProfileFn::each(callback));
    }

    pub fn set_updated_item_callback<P, F>(&self, callback: F)
    where
        P: ListenerProfile,
        F: FnMut(&P) + Send + 'static,
    {
        self.track::<P>().set_updated_callback(ProfileFn::each(callback));
    }

    pub fn set_removed_item_callback<P, F>(&self, callback: F)
    where
        P: ListenerProfile,
        F: FnMut(&P) + Send + 'static,
    {
        self.track::<P>().set_removed_callback(ProfileFn::each(callback));
    }

    /// Removes the callbacks of `P`. The kind stays tracked.
    pub fn clear_callbacks<P: ListenerProfile>(&self) {
        if let Some(handler) = self.handler::<P>() {
            handler.clear_callbacks();
        }
    }

    pub fn clear_all_callbacks(&self) {
        self.lock_handlers().clear_callbacks();
    }

    // Touch events share the 2D cursor slots: registering one replaces a
    // `Cursor2D` callback for the same event and vice versa.

    pub fn set_touches_added_callback<F>(&self, callback: F)
    where
        F: FnMut(&TouchEvent) + Send + 'static,
    {
        let callback = self.touch_callback(callback);
        self.track::<Cursor2D>().set_added_callback(callback);
    }

    pub fn set_touches_updated_callback<F>(&self, callback: F)
    where
        F: FnMut(&TouchEvent) + Send + 'static,
    {
        let callback = self.touch_callback(callback);
        self.track::<Cursor2D>().set_updated_callback(callback);
    }

    pub fn set_touches_removed_callback<F>(&self, callback: F)
    where
        F: FnMut(&TouchEvent) + Send + 'static,
    {
        let callback = self.touch_callback(callback);
        self.track::<Cursor2D>().set_removed_callback(callback);
    }

    // Queries

    /// Snapshot of the active profiles of kind `P`, in session id order.
    /// Empty if the kind is not tracked.
    pub fn get_active_profiles<P: ListenerProfile>(&self) -> Vec<P> {
        self.handler::<P>()
            .map(|handler| handler.active_profiles())
            .unwrap_or_default()
    }

    pub fn past_frame_threshold(&self) -> i32 {
        self.past_frame_threshold.get()
    }

    /// Applies to every tracked kind immediately
    pub fn set_past_frame_threshold(&self, past_frame_threshold: i32) {
        self.past_frame_threshold.set(past_frame_threshold);
    }

    /// Seconds since this listener was created, the clock touch events use
    pub fn elapsed_seconds(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    fn touch_callback<F>(&self, mut callback: F) -> ProfileFn<Cursor2D>
    where
        F: FnMut(&TouchEvent) + Send + 'static,
    {
        let started = self.started;
        ProfileFn::batch(move |cursors: &[Cursor2D]| {
            let event = TouchEvent::from_cursors(cursors, started.elapsed().as_secs_f64());
            callback(&event);
        })
    }

    fn lock_receiver(&self) -> MutexGuard<'_, Box<dyn MessageReceiver>> {
        self.receiver.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_handlers(&self) -> MutexGuard<'_, ProfileHandlers> {
        self.handlers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn log_rejected(kind: ProfileKind, error: &ProfileError) {
    match error {
        ProfileError::UnknownMessageType { .. } => debug!("Ignoring message on {}: {}", kind, error),
        _ => warn!("Dropping message on {}: {}", kind, error),
    }
}
