//! Fixed catalog of elevator operating modes.
//!
//! The catalog is read-only domain data: the six discrete states a lift
//! controller can be in, their display labels, and the adjacency table
//! that decides which state may follow which. Nothing here is ever
//! mutated after compilation.

mod state;
mod table;

pub use state::{LiftState, UnknownState};
pub use table::{allowed_next, is_legal, label_for, LEGAL_TRANSITIONS};
