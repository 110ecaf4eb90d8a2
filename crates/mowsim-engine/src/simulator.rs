use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use chrono::{DateTime, Utc};
use mowsim_core::config::SimConfig;
use mowsim_core::input::{LawnInput, MowerInput};
use mowsim_core::{FinalState, Lawn, Mower, MowerKey, Position};
use serde::Serialize;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::protocol::{Ack, Request};
use crate::{worker, Result, SimError};

// ─── SimulationReport ─────────────────────────────────────────────────────

/// Serializable outcome of a run.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub width: i32,
    pub height: i32,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    /// Final state per mower, in input order.
    pub mowers: BTreeMap<MowerKey, FinalState>,
}

// ─── Simulator ────────────────────────────────────────────────────────────

/// Owns the lawn and every mower, and is their only mutator.
///
/// [`Simulator::run`] spawns one worker task per mower. Workers send step
/// requests over a shared channel; the coordinating loop applies each step
/// to completion before reading the next request, then acknowledges it to
/// the requesting worker alone. No locks are involved because nothing but
/// that loop ever touches the lawn.
#[derive(Debug)]
pub struct Simulator {
    lawn: Lawn,
    mowers: BTreeMap<MowerKey, Mower>,
    output: BTreeMap<MowerKey, FinalState>,
    config: SimConfig,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
    ran: bool,
}

impl Simulator {
    /// Build the lawn, then place mowers in input order. Mower `i` (zero
    /// based) gets the key `mower-{i+1}`; later mowers contend for cells
    /// already taken by earlier ones.
    ///
    /// Any dimension or placement error aborts setup entirely.
    pub fn new(far_corner: Position, mowers: &[MowerInput]) -> mowsim_core::Result<Self> {
        let mut lawn = Lawn::new(far_corner)?;
        let mut placed = BTreeMap::new();
        for (i, m) in mowers.iter().enumerate() {
            let key = MowerKey::from_index(i);
            let mower = Mower::place(key, m.position, m.orientation, m.commands.clone(), &mut lawn)?;
            placed.insert(key, mower);
        }
        Ok(Self {
            lawn,
            mowers: placed,
            output: BTreeMap::new(),
            config: SimConfig::default(),
            started_at: None,
            finished_at: None,
            ran: false,
        })
    }

    pub fn from_input(input: &LawnInput) -> mowsim_core::Result<Self> {
        Self::new(input.far_corner, &input.mowers)
    }

    pub fn with_config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    pub fn lawn(&self) -> &Lawn {
        &self.lawn
    }

    pub fn mower(&self, key: MowerKey) -> Option<&Mower> {
        self.mowers.get(&key)
    }

    pub fn mowers(&self) -> impl Iterator<Item = &Mower> {
        self.mowers.values()
    }

    /// Final states recorded so far. An entry appears once its mower's
    /// worker reports completion and is never changed afterwards.
    pub fn output(&self) -> &BTreeMap<MowerKey, FinalState> {
        &self.output
    }

    pub fn report(&self) -> SimulationReport {
        SimulationReport {
            width: self.lawn.width(),
            height: self.lawn.height(),
            started_at: self.started_at,
            finished_at: self.finished_at,
            mowers: self.output.clone(),
        }
    }

    /// Drive every mower's commands to completion.
    ///
    /// Returns once every worker has reported completion. Any failure in the
    /// step handshake aborts the whole run. May only be called once.
    pub async fn run(&mut self) -> Result<()> {
        if self.ran {
            return Err(SimError::AlreadyRan);
        }
        self.ran = true;
        self.started_at = Some(Utc::now());
        tracing::info!(
            mowers = self.mowers.len(),
            width = self.lawn.width(),
            height = self.lawn.height(),
            "simulation started"
        );

        let (req_tx, req_rx) = mpsc::channel(self.config.channel_capacity.max(1));
        let mut acks = HashMap::with_capacity(self.mowers.len());
        let mut workers = JoinSet::new();
        for mower in self.mowers.values() {
            let (ack_tx, ack_rx) = mpsc::channel(1);
            acks.insert(mower.key(), ack_tx);
            workers.spawn(worker::drive(
                mower.key(),
                mower.commands().to_vec(),
                req_tx.clone(),
                ack_rx,
            ));
        }
        // Only workers hold senders, so the channel closes if they all exit.
        drop(req_tx);

        let deadline = self.config.deadline();
        let outcome = self.supervise(req_rx, &acks, &mut workers, deadline).await;
        if let Err(e) = &outcome {
            tracing::warn!(error = %e, "simulation aborted");
            workers.abort_all();
            return outcome;
        }

        while let Some(joined) = workers.join_next().await {
            joined??;
        }
        self.finished_at = Some(Utc::now());
        tracing::info!(finished = self.output.len(), "simulation finished");
        Ok(())
    }

    async fn supervise(
        &mut self,
        requests: mpsc::Receiver<Request>,
        acks: &HashMap<MowerKey, mpsc::Sender<Ack>>,
        workers: &mut JoinSet<Result<()>>,
        deadline: Option<Duration>,
    ) -> Result<()> {
        let coordinate = self.coordinate(requests, acks, workers);
        match deadline {
            Some(limit) => tokio::time::timeout(limit, coordinate)
                .await
                .unwrap_or(Err(SimError::DeadlineExceeded(limit))),
            None => coordinate.await,
        }
    }

    /// The single-writer loop. Services whichever request arrives next and
    /// finishes it before looking at the channel again.
    async fn coordinate(
        &mut self,
        mut requests: mpsc::Receiver<Request>,
        acks: &HashMap<MowerKey, mpsc::Sender<Ack>>,
        workers: &mut JoinSet<Result<()>>,
    ) -> Result<()> {
        let mut pending = self.mowers.len() - self.output.len();
        while pending > 0 {
            tokio::select! {
                Some(request) = requests.recv() => {
                    if self.handle(request, acks).await? {
                        pending -= 1;
                    }
                }
                Some(joined) = workers.join_next() => {
                    // A worker that exits early surfaces its error here
                    // rather than leaving the loop waiting on it.
                    joined??;
                }
                else => return Err(SimError::WorkerVanished { pending }),
            }
        }
        Ok(())
    }

    /// Apply one request. Returns `true` when it completed a mower.
    async fn handle(
        &mut self,
        request: Request,
        acks: &HashMap<MowerKey, mpsc::Sender<Ack>>,
    ) -> Result<bool> {
        let key = request.key();
        let Some(mower) = self.mowers.get_mut(&key) else {
            return Err(SimError::Protocol(format!("request from unknown mower {key}")));
        };

        match request {
            Request::Step { command, .. } => {
                let moved = mower
                    .apply(command, &mut self.lawn)
                    .map_err(|source| SimError::Step { key, source })?;
                tracing::debug!(
                    mower = %key,
                    %command,
                    moved,
                    position = %mower.position(),
                    orientation = %mower.orientation(),
                    "step applied"
                );

                let ack = acks
                    .get(&key)
                    .ok_or_else(|| SimError::Protocol(format!("no acknowledgment channel for {key}")))?;
                ack.send(Ack { key })
                    .await
                    .map_err(|_| SimError::Protocol(format!("{key} stopped waiting for acknowledgments")))?;
                Ok(false)
            }
            Request::Done { .. } => {
                let state = mower.snapshot();
                match self.output.entry(key) {
                    Entry::Occupied(_) => Err(SimError::Protocol(format!(
                        "{key} reported completion twice"
                    ))),
                    Entry::Vacant(slot) => {
                        slot.insert(state);
                        tracing::info!(mower = %key, final_state = %state, "mower finished");
                        Ok(true)
                    }
                }
            }
        }
    }
}

/// Set up a simulator from already-parsed `input`, run it under
/// `config`, and return the report.
pub async fn simulate(input: &LawnInput, config: SimConfig) -> Result<SimulationReport> {
    let mut sim = Simulator::from_input(input)?.with_config(config);
    sim.run().await?;
    Ok(sim.report())
}

// ─── Tests ────────────────────────────────────────────────────────────────
