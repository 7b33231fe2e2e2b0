/// Collects lifecycle callbacks so tests can assert on what fired and when

use std::sync::{Arc, Mutex};

use tuio_client::{Listener, ListenerProfile, SessionId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Added(Vec<SessionId>),
    Updated(Vec<SessionId>),
    Removed(Vec<SessionId>),
}

/// Records every batch delivered for one profile kind
pub struct Recorder<P> {
    events: Arc<Mutex<Vec<Event>>>,
    profiles: Arc<Mutex<Vec<(Event, Vec<P>)>>>,
}

impl<P> Clone for Recorder<P> {
    fn clone(&self) -> Self {
        Self {
            events: self.events.clone(),
            profiles: self.profiles.clone(),
        }
    }
}

impl<P: ListenerProfile> Recorder<P> {
    /// Installs batch callbacks for all three events of `P`
    pub fn attach(listener: &Listener) -> Self {
        let recorder = Self {
            events: Arc::new(Mutex::new(Vec::new())),
            profiles: Arc::new(Mutex::new(Vec::new())),
        };

        let sink = recorder.clone();
        listener.set_added_callback::<P, _>(move |batch| sink.push(Event::Added(ids(batch)), batch));
        let sink = recorder.clone();
        listener
            .set_updated_callback::<P, _>(move |batch| sink.push(Event::Updated(ids(batch)), batch));
        let sink = recorder.clone();
        listener
            .set_removed_callback::<P, _>(move |batch| sink.push(Event::Removed(ids(batch)), batch));

        recorder
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    /// The profiles delivered with the `index`-th event
    pub fn batch(&self, index: usize) -> Vec<P> {
        self.profiles.lock().unwrap()[index].1.clone()
    }

    pub fn last_batch(&self) -> Option<Vec<P>> {
        self.profiles
            .lock()
            .unwrap()
            .last()
            .map(|(_, profiles)| profiles.clone())
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
        self.profiles.lock().unwrap().clear();
    }

    fn push(&self, event: Event, batch: &[P]) {
        self.events.lock().unwrap().push(event.clone());
        self.profiles.lock().unwrap().push((event, batch.to_vec()));
    }
}

fn ids<P: ListenerProfile>(batch: &[P]) -> Vec<SessionId> {
    batch.iter().map(|profile| profile.session_id()).collect()
}
