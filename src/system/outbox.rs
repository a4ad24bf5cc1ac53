//! Link Outbox
//!
//! Queues dashboard values, camera setup and command requests for the link
//! transmitter task. The robot loop must never wait on the UART, so senders
//! use `try_send` and drop the message when the queue is full.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use crate::system::command::{AutoRoutine, CommandScheduler};
use crate::system::frame::Outbound;
use crate::system::telemetry::Dashboard;
use crate::system::vision::{CameraPose, Vision};

/// Outbound queue depth, enough for several control cycles of telemetry
const OUTBOX_DEPTH: usize = 32;

/// Multi-producer, single-consumer outbound channel
static OUTBOUND_CHANNEL: Channel<CriticalSectionRawMutex, Outbound, OUTBOX_DEPTH> = Channel::new();

/// Queues a message without waiting, dropping it if the queue is full
pub fn post(message: Outbound) {
    if OUTBOUND_CHANNEL.try_send(message).is_err() {
        warn!("Outbox full, dropping {}", message);
    }
}

/// Waits for the next queued message
pub async fn receive() -> Outbound {
    OUTBOUND_CHANNEL.receive().await
}

/// Dashboard, vision and command collaborators backed by the driver station link
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkOutbox;

impl Dashboard for LinkOutbox {
    fn put_boolean(&mut self, key: &'static str, value: bool) {
        post(Outbound::Boolean { key, value });
    }

    fn put_number(&mut self, key: &'static str, value: f32) {
        post(Outbound::Number { key, value });
    }

    fn select_tab(&mut self, tab: &'static str) {
        post(Outbound::SelectTab(tab));
    }
}

impl Vision for LinkOutbox {
    fn set_camera_pose(&mut self, pose: &CameraPose) {
        post(Outbound::CameraPose(*pose));
    }
}

impl CommandScheduler for LinkOutbox {
    /// Routines execute on the drive controller; nothing to step here
    fn run(&mut self) {}

    fn schedule(&mut self, routine: AutoRoutine) {
        post(Outbound::Schedule(routine));
    }

    fn cancel(&mut self, routine: AutoRoutine) {
        post(Outbound::Cancel(routine));
    }

    fn cancel_all(&mut self) {
        post(Outbound::CancelAll);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::telemetry::{HUB_ACTIVE_KEY, TELEOP_TAB};

    fn drain() -> std::vec::Vec<Outbound> {
        core::iter::from_fn(|| OUTBOUND_CHANNEL.try_receive().ok()).collect()
    }

    // The channel is a single static, so everything touching it lives in one test.
    #[test]
    fn test_outbox_queues_and_drops_when_full() {
        drain();

        let mut outbox = LinkOutbox;
        outbox.select_tab(TELEOP_TAB);
        outbox.put_boolean(HUB_ACTIVE_KEY, true);
        outbox.schedule(AutoRoutine::new("Leave"));
        outbox.run();
        outbox.cancel_all();
        assert_eq!(
            drain(),
            [
                Outbound::SelectTab(TELEOP_TAB),
                Outbound::Boolean {
                    key: HUB_ACTIVE_KEY,
                    value: true
                },
                Outbound::Schedule(AutoRoutine::new("Leave")),
                Outbound::CancelAll,
            ]
        );

        for _ in 0..OUTBOX_DEPTH + 5 {
            outbox.put_number("Match Time", 1.0);
        }
        assert_eq!(drain().len(), OUTBOX_DEPTH);
    }
}
