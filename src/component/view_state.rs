use std::sync::Arc;
use crate::models::reservation::Reservation;

/// Per-instance data the list view renders from.
#[derive(Clone, Debug, Default)]
pub struct ViewState {
    reservations: Arc<Vec<Reservation>>,
}

impl ViewState {
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Full replacement; the new sequence always gets a fresh identity.
    pub fn replace_reservations(
        &mut self,
        reservations: Vec<Reservation>,
    ) {
        self.reservations = Arc::new(reservations);
    }

    pub fn same_reservations(&self, other: &ViewState) -> bool {
        Arc::ptr_eq(&self.reservations, &other.reservations)
    }
}
