//! Legal-adjacency table.

use super::state::LiftState;
use LiftState::*;

/// Permitted `(source, destinations)` pairs. Reproduced exactly; a state
/// missing from this table allows no outgoing transitions.
pub static LEGAL_TRANSITIONS: &[(LiftState, &[LiftState])] = &[
    (IdleClosed, &[DoorOpening, MovingUp, MovingDown]),
    (DoorOpening, &[DoorOpen]),
    (DoorOpen, &[DoorClosing]),
    (DoorClosing, &[IdleClosed, MovingUp, MovingDown]),
    (MovingUp, &[DoorOpening]),
    (MovingDown, &[DoorOpening]),
];

/// Destinations allowed from `source_id`, or `None` when the identifier
/// has no row in the table.
pub fn allowed_next(source_id: &str) -> Option<&'static [LiftState]> {
    let source = LiftState::from_id(source_id)?;
    LEGAL_TRANSITIONS
        .iter()
        .find(|(from, _)| *from == source)
        .map(|(_, to)| *to)
}

pub fn is_legal(from: LiftState, to: LiftState) -> bool {
    allowed_next(from.id()).is_some_and(|next| next.contains(&to))
}

/// Display label for an identifier; unknown identifiers are their own label.
pub fn label_for(id: &str) -> &str {
    match LiftState::from_id(id) {
        Some(state) => state.label(),
        None => id,
    }
}
