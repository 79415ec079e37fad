//! Fire-and-forget selection notifications sent to the shell.

use crossbeam_channel::{Receiver, Sender, TrySendError};
use orrery_space::ObjectCategory;
use tracing::{debug, trace};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SceneEvent {
    PlanetSelected(String),
    SpaceObjectSelected(ObjectCategory),
}

/// Sending half owned by the scene. The scene never waits on the shell and
/// keeps no record of what was selected.
#[derive(Clone)]
pub struct EventSink {
    sender: Sender<SceneEvent>,
}

impl EventSink {
    /// Unbounded channel; the receiver goes to the shell.
    pub fn channel() -> (Self, Receiver<SceneEvent>) {
        let (sender, receiver) = crossbeam_channel::unbounded();
        (Self { sender }, receiver)
    }

    pub fn new(sender: Sender<SceneEvent>) -> Self {
        Self { sender }
    }

    pub fn emit(&self, event: SceneEvent) {
        trace!(?event, "Emitting scene event");
        match self.sender.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => debug!(?event, "Event queue full, dropped"),
            Err(TrySendError::Disconnected(event)) => {
                debug!(?event, "No event listener, dropped")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_arrive_in_order() {
        let (sink, rx) = EventSink::channel();
        sink.emit(SceneEvent::PlanetSelected("Mars".into()));
        sink.emit(SceneEvent::SpaceObjectSelected(ObjectCategory::Pulsar));
        let got: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            got,
            vec![
                SceneEvent::PlanetSelected("Mars".into()),
                SceneEvent::SpaceObjectSelected(ObjectCategory::Pulsar),
            ]
        );
    }

    #[test]
    fn test_dropped_receiver_is_harmless() {
        let (sink, rx) = EventSink::channel();
        drop(rx);
        sink.emit(SceneEvent::PlanetSelected("Earth".into()));
    }

    #[test]
    fn test_full_bounded_queue_drops() {
        let (tx, rx) = crossbeam_channel::bounded(1);
        let sink = EventSink::new(tx);
        sink.emit(SceneEvent::PlanetSelected("Earth".into()));
        sink.emit(SceneEvent::PlanetSelected("Venus".into()));
        assert_eq!(rx.len(), 1);
    }
}
