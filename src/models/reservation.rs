use std::fmt;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Any JSON the server sends for a display-only field, printed the way it came.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct DisplayValue(pub Value);

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::Null => Ok(()),
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Reservation {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "numberOfPeople", default)]
    pub number_of_people: DisplayValue,
    #[serde(rename = "dateTime", default)]
    pub date_time: DisplayValue,
}

impl Reservation {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        number_of_people: impl Into<Value>,
        date_time: impl Into<Value>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            number_of_people: DisplayValue(number_of_people.into()),
            date_time: DisplayValue(date_time.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_the_server_shape_and_ignores_extra_fields() {
        let reservation: Reservation = serde_json::from_value(json!({
            "_id": "64a1f0c2",
            "name": "Mario",
            "phone": "3331234567",
            "numberOfPeople": 4,
            "smoking": false,
            "dateTime": "2023-07-02T19:30:00.000Z",
            "specialRequests": "",
            "createdAt": "2023-07-01T10:00:00.000Z",
            "__v": 0
        }))
        .unwrap();

        assert_eq!(reservation.id, "64a1f0c2");
        assert_eq!(reservation.name, "Mario");
        assert_eq!(reservation.number_of_people.to_string(), "4");
        assert_eq!(reservation.date_time.to_string(), "2023-07-02T19:30:00.000Z");
    }

    #[test]
    fn accepts_plain_id() {
        let reservation: Reservation = serde_json::from_value(json!({
            "id": "r-1",
            "name": "Lucia",
            "numberOfPeople": "2",
            "dateTime": "domani sera"
        }))
        .unwrap();

        assert_eq!(reservation, Reservation::new("r-1", "Lucia", "2", "domani sera"));
    }

    #[test]
    fn display_fields_are_shown_as_sent() {
        let reservation: Reservation = serde_json::from_value(json!({
            "_id": "r-3",
            "name": "Franco",
            "numberOfPeople": "dieci",
            "dateTime": null
        }))
        .unwrap();
        assert_eq!(reservation.number_of_people.to_string(), "dieci");
        assert_eq!(reservation.date_time.to_string(), "");

        let reservation: Reservation = serde_json::from_value(json!({
            "_id": "r-4",
            "name": "Nina",
            "numberOfPeople": 2.5
        }))
        .unwrap();
        assert_eq!(reservation.number_of_people.to_string(), "2.5");
        assert_eq!(reservation.date_time, DisplayValue::default());

        assert_eq!(DisplayValue(json!(-1)).to_string(), "-1");
    }

    #[test]
    fn missing_id_is_a_decode_error() {
        let res = serde_json::from_value::<Reservation>(json!({
            "name": "Anna",
            "numberOfPeople": 2,
            "dateTime": "2023-07-02"
        }));
        assert!(res.is_err());
    }
}
