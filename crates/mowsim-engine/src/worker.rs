use mowsim_core::{Command, MowerKey};
use tokio::sync::mpsc;

use crate::protocol::{Ack, Request};
use crate::{Result, SimError};

/// Execution unit for a single mower.
///
/// Emits one `Step` per command and suspends until the coordinator
/// acknowledges it, so a mower's commands are applied strictly in order.
/// Sends `Done` once the commands are exhausted. The worker never touches
/// the lawn or the mower itself.
pub(crate) async fn drive(
    key: MowerKey,
    commands: Vec<Command>,
    requests: mpsc::Sender<Request>,
    mut acks: mpsc::Receiver<Ack>,
) -> Result<()> {
    for command in commands {
        requests
            .send(Request::Step { key, command })
            .await
            .map_err(|_| SimError::Protocol(format!("{key}: coordinator stopped accepting steps")))?;

        let ack = acks.recv().await.ok_or_else(|| {
            SimError::Protocol(format!("{key}: acknowledgment channel closed mid-step"))
        })?;
        if ack.key != key {
            return Err(SimError::Protocol(format!(
                "{key}: received acknowledgment addressed to {}",
                ack.key
            )));
        }
    }

    requests
        .send(Request::Done { key })
        .await
        .map_err(|_| SimError::Protocol(format!("{key}: coordinator gone before completion")))?;
    Ok(())
}

// ─── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn key(n: usize) -> MowerKey {
        MowerKey::from_index(n)
    }

    #[tokio::test]
    async fn empty_commands_send_done_immediately() {
        let (req_tx, mut req_rx) = mpsc::channel(4);
        let (_ack_tx, ack_rx) = mpsc::channel(1);
        drive(key(0), Vec::new(), req_tx, ack_rx).await.unwrap();
        assert_eq!(req_rx.recv().await, Some(Request::Done { key: key(0) }));
        assert_eq!(req_rx.recv().await, None);
    }

    #[tokio::test]
    async fn waits_for_ack_between_steps() {
        let (req_tx, mut req_rx) = mpsc::channel(4);
        let (ack_tx, ack_rx) = mpsc::channel(1);
        let handle = tokio::spawn(drive(
            key(0),
            vec![Command::Left, Command::Forward],
            req_tx,
            ack_rx,
        ));

        let first = req_rx.recv().await.unwrap();
        assert_eq!(
            first,
            Request::Step {
                key: key(0),
                command: Command::Left
            }
        );
        // no second step until the first is acknowledged
        tokio::task::yield_now().await;
        assert!(req_rx.try_recv().is_err());

        ack_tx.send(Ack { key: key(0) }).await.unwrap();
        let second = req_rx.recv().await.unwrap();
        assert_eq!(
            second,
            Request::Step {
                key: key(0),
                command: Command::Forward
            }
        );
        ack_tx.send(Ack { key: key(0) }).await.unwrap();

        assert_eq!(req_rx.recv().await, Some(Request::Done { key: key(0) }));
        handle.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn foreign_ack_is_a_protocol_error() {
        let (req_tx, mut req_rx) = mpsc::channel(4);
        let (ack_tx, ack_rx) = mpsc::channel(1);
        let handle = tokio::spawn(drive(key(0), vec![Command::Right], req_tx, ack_rx));

        let step = req_rx.recv().await.unwrap();
        assert_eq!(step.key(), key(0));
        ack_tx.send(Ack { key: key(1) }).await.unwrap();

        let err = handle.await.unwrap().unwrap_err();
        assert!(matches!(err, SimError::Protocol(ref m) if m.contains("mower-2")));
        // the worker gave up without reporting completion
        assert_eq!(req_rx.recv().await, None);
    }

    #[tokio::test]
    async fn closed_ack_channel_is_a_protocol_error() {
        let (req_tx, mut req_rx) = mpsc::channel(4);
        let (ack_tx, ack_rx) = mpsc::channel::<Ack>(1);
        let handle = tokio::spawn(drive(key(0), vec![Command::Forward], req_tx, ack_rx));

        req_rx.recv().await.unwrap();
        drop(ack_tx);
        let err = handle.await.unwrap().unwrap_err();
        assert!(matches!(err, SimError::Protocol(_)));
    }
}
