//! POA Bridge Token Selection
//!
//! Turns the bridge's supported-token listing into the set of tokens that can
//! travel over the POA bridge, then drives the dependent asset → chain choice
//! a bridging form offers. The reference list decides membership; the fetched
//! records supply every field.

pub mod constants;
pub mod listener;
pub mod reconcile;
pub mod selection;
pub mod session;
pub mod state;
pub mod token_list;

pub use constants::{chain_display_name, POA_BRIDGE};
pub use listener::{NoopListener, SelectionListener, TracingListener};
pub use reconcile::{reconcile, BridgeableToken, Reconciled, Selection};
pub use selection::{SelectionEvent, SelectionStateMachine};
pub use session::{spawn_load, Delivery, LoadTicket, Phase, TokenSelector};
pub use state::{ChainOption, PhaseKind, TokenSelectorState};
pub use token_list::{ReferenceEntry, ReferenceTable};
