use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::time::{MissedTickBehavior, interval};

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    TickFrame,
    Input(Event),
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}

/// Tick period for a redraw rate, kept within 15..=60 fps.
#[must_use]
pub fn frame_interval(fps: u8) -> Duration {
    Duration::from_millis(1000_u64 / u64::from(fps.clamp(15, 60)))
}

pub fn start_frame_task(tx: tokio::sync::mpsc::Sender<AppEvent>, fps: u8) {
    tokio::spawn(async move {
        let mut ticker = interval(frame_interval(fps));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            if tx.send(AppEvent::TickFrame).await.is_err() {
                break;
            }
        }
    });
}
