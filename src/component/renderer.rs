use std::fmt;
use crate::component::view_state::ViewState;
use crate::models::reservation::Reservation;

pub const LIST_TITLE: &str = "Attuali prenotazioni:";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListRow {
    pub key: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedList {
    pub title: &'static str,
    pub rows: Vec<ListRow>,
}

/// Pure: reads the state, never touches it and never schedules work.
pub fn render(state: &ViewState) -> RenderedList {
    RenderedList {
        title: LIST_TITLE,
        rows: state
            .reservations()
            .iter()
            .map(render_row)
            .collect(),
    }
}

fn render_row(reservation: &Reservation) -> ListRow {
    ListRow {
        key: reservation.id.clone(),
        text: format!(
            "{} per {} - {}",
            reservation.name,
            reservation.number_of_people,
            reservation.date_time,
        ),
    }
}

impl fmt::Display for RenderedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for row in &self.rows {
            writeln!(f, "  {}", row.text)?;
        }
        Ok(())
    }
}
