//! Token selector lifecycle
//!
//! A selector starts in `Loading`, takes exactly one fetch result and settles
//! into `Failed`, `Empty` or `Ready`. The fetch runs outside the selector; its
//! result comes back through a single-use [`LoadTicket`]. Once the selector is
//! torn down the ticket is cancelled and a late result is dropped without
//! touching state or listeners.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use defuse_core::{FetchError, RawToken, SelectionError, TokenFetcher};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::listener::{dispatch, SelectionListener};
use crate::reconcile::{reconcile, Selection};
use crate::selection::SelectionStateMachine;
use crate::state::{PhaseKind, TokenSelectorState};
use crate::token_list::ReferenceTable;

/// Lifecycle phase
#[derive(Debug)]
pub enum Phase {
    Loading,
    Failed(FetchError),
    Loaded(SelectionStateMachine),
    TornDown,
}

impl Phase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Self::Loading => PhaseKind::Loading,
            Self::Failed(_) => PhaseKind::Error,
            Self::Loaded(machine) if machine.is_empty() => PhaseKind::Empty,
            Self::Loaded(_) => PhaseKind::Ready,
            Self::TornDown => PhaseKind::Closed,
        }
    }
}

/// Right to deliver the one fetch result of a selector
#[derive(Debug)]
pub struct LoadTicket {
    cancelled: Arc<AtomicBool>,
}

impl LoadTicket {
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Outcome of handing a fetch result to the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Applied,
    Discarded,
}

/// Owner of the token working set and the current selection
pub struct TokenSelector {
    reference: Arc<ReferenceTable>,
    listener: Arc<dyn SelectionListener>,
    phase: Phase,
    cancelled: Arc<AtomicBool>,
    ticket_issued: bool,
}

impl TokenSelector {
    pub fn new(reference: Arc<ReferenceTable>, listener: Arc<dyn SelectionListener>) -> Self {
        Self {
            reference,
            listener,
            phase: Phase::Loading,
            cancelled: Arc::new(AtomicBool::new(false)),
            ticket_issued: false,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn phase_kind(&self) -> PhaseKind {
        self.phase.kind()
    }

    /// The selection machine, once tokens have loaded
    pub fn machine(&self) -> Option<&SelectionStateMachine> {
        match &self.phase {
            Phase::Loaded(machine) => Some(machine),
            _ => None,
        }
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.machine().and_then(|m| m.selection())
    }

    /// Issue the load ticket. Returns `None` if one was already issued or
    /// the selector has been torn down.
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        if self.ticket_issued || !matches!(self.phase, Phase::Loading) {
            return None;
        }
        self.ticket_issued = true;
        Some(LoadTicket {
            cancelled: self.cancelled.clone(),
        })
    }

    /// Apply the fetch result carried by `ticket`.
    ///
    /// A fetch error settles into `Failed` without reconciling. A ticket that
    /// was cancelled, or belongs to another selector, is discarded.
    pub fn complete(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<RawToken>, FetchError>,
    ) -> Delivery {
        if !Arc::ptr_eq(&ticket.cancelled, &self.cancelled)
            || ticket.is_cancelled()
            || !matches!(self.phase, Phase::Loading)
        {
            tracing::warn!(
                phase = self.phase_kind().as_str(),
                "Discarding stale token fetch result"
            );
            return Delivery::Discarded;
        }

        let raw = match result {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Failed to fetch supported tokens: {}", e);
                self.phase = Phase::Failed(e);
                return Delivery::Applied;
            }
        };

        let machine = SelectionStateMachine::new(reconcile(&raw, &self.reference));
        tracing::info!(
            fetched = raw.len(),
            bridgeable = machine.tokens().len(),
            "Token selector loaded"
        );

        self.listener.on_tokens_loaded(machine.tokens());
        dispatch(self.listener.as_ref(), &machine.initial_events());
        self.phase = Phase::Loaded(machine);

        Delivery::Applied
    }

    /// Fetch and apply in one step, for a selector with a single owner
    pub async fn load(&mut self, fetcher: &dyn TokenFetcher) -> Delivery {
        let Some(ticket) = self.begin_load() else {
            return Delivery::Discarded;
        };
        let result = fetcher.fetch().await;
        self.complete(ticket, result)
    }

    /// Stop accepting results and transitions
    pub fn teardown(&mut self) {
        self.cancelled.store(true, Ordering::Release);
        if !matches!(self.phase, Phase::TornDown) {
            tracing::debug!(phase = self.phase_kind().as_str(), "Token selector torn down");
            self.phase = Phase::TornDown;
        }
    }

    pub fn on_asset_change(&mut self, asset_name: &str) -> Result<Selection, SelectionError> {
        let machine = self.machine_mut()?;
        let events = machine.on_asset_change(asset_name)?;
        let selection = machine.selection().cloned();
        dispatch(self.listener.as_ref(), &events);
        selection.ok_or(SelectionError::NotReady { phase: "empty" })
    }

    pub fn on_chain_change(&mut self, asset_identifier: &str) -> Result<Selection, SelectionError> {
        let machine = self.machine_mut()?;
        let events = machine.on_chain_change(asset_identifier)?;
        let selection = machine.selection().cloned();
        dispatch(self.listener.as_ref(), &events);
        selection.ok_or(SelectionError::NotReady { phase: "empty" })
    }

    /// Render-ready view of the current state
    pub fn snapshot(&self) -> TokenSelectorState {
        match &self.phase {
            Phase::Loaded(machine) => {
                let selection = machine.selection().cloned();
                let chains = selection
                    .as_ref()
                    .map(|s| machine.chain_options(&s.asset_name))
                    .unwrap_or_default();
                TokenSelectorState {
                    phase: self.phase_kind(),
                    error: None,
                    assets: machine
                        .available_assets()
                        .into_iter()
                        .map(str::to_string)
                        .collect(),
                    chains,
                    selection,
                }
            }
            Phase::Failed(e) => {
                TokenSelectorState::without_tokens(PhaseKind::Error, Some(e.to_string()))
            }
            other => TokenSelectorState::without_tokens(other.kind(), None),
        }
    }

    fn machine_mut(&mut self) -> Result<&mut SelectionStateMachine, SelectionError> {
        let phase = self.phase_kind().as_str();
        match &mut self.phase {
            Phase::Loaded(machine) => Ok(machine),
            _ => Err(SelectionError::NotReady { phase }),
        }
    }
}

impl Drop for TokenSelector {
    fn drop(&mut self) {
        self.cancelled.store(true, Ordering::Release);
    }
}

/// Run the fetch for a shared selector on the tokio runtime.
///
/// The lock is only held to take the ticket and to deliver the result, never
/// while the request is in flight.
pub fn spawn_load(
    selector: Arc<Mutex<TokenSelector>>,
    fetcher: Arc<dyn TokenFetcher>,
) -> JoinHandle<Delivery> {
    tokio::spawn(async move {
        let ticket = selector.lock().await.begin_load();
        let Some(ticket) = ticket else {
            return Delivery::Discarded;
        };

        let result = fetcher.fetch().await;
        if ticket.is_cancelled() {
            tracing::debug!("Selector closed while fetching; dropping response");
            return Delivery::Discarded;
        }

        selector.lock().await.complete(ticket, result)
    })
}
