//! Field swap helpers shared by the entity patch types.

/// Replaces `slot` with `value` when set, returning the old value.
pub(crate) fn swap<T: Clone>(slot: &mut T, value: Option<&T>) -> Option<T> {
    value.map(|new_value| std::mem::replace(slot, new_value.clone()))
}

/// Puts `previous` back into `slot` if it still holds `applied`.
pub(crate) fn restore<T: Clone + PartialEq>(
    slot: &mut T,
    applied: Option<&T>,
    previous: Option<&T>,
) {
    if let (Some(applied_value), Some(previous_value)) = (applied, previous) {
        if slot == applied_value {
            *slot = previous_value.clone();
        }
    }
}

/// Passes the fallback in `previous` to a newer pending patch that also
/// wrote the field, leaving nothing to restore here.
pub(crate) fn hand_down<T>(
    previous: &mut Option<T>,
    later_applied: Option<&T>,
    later_previous: &mut Option<T>,
) {
    if later_applied.is_some() && previous.is_some() {
        *later_previous = previous.take();
    }
}

/// Forgets the fallback in `previous` once a newer write of the field has
/// been stored.
pub(crate) fn supersede<T>(previous: &mut Option<T>, later_applied: Option<&T>) {
    if later_applied.is_some() {
        *previous = None;
    }
}
