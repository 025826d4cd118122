//! Airline passenger record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Meal preference as an opaque integer code.
///
/// No meaning is attached to particular values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealPreferenceCode(pub i32);

impl fmt::Display for MealPreferenceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One passenger on one flight. Fields are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirlinePassenger {
    flight_number: String,
    name: String,
    seat: String,
    meal_preference: MealPreferenceCode,
}

impl AirlinePassenger {
    pub fn new(
        flight_number: impl Into<String>,
        name: impl Into<String>,
        seat: impl Into<String>,
        meal_preference: MealPreferenceCode,
    ) -> Self {
        Self {
            flight_number: flight_number.into(),
            name: name.into(),
            seat: seat.into(),
            meal_preference,
        }
    }

    pub fn flight_number(&self) -> &str {
        &self.flight_number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn seat(&self) -> &str {
        &self.seat
    }

    pub fn meal_preference(&self) -> MealPreferenceCode {
        self.meal_preference
    }

    /// The same passenger in a different seat.
    pub fn with_seat(self, seat: impl Into<String>) -> Self {
        Self {
            seat: seat.into(),
            ..self
        }
    }
}

impl fmt::Display for AirlinePassenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Flight: {}", self.flight_number)?;
        writeln!(f, "Passenger: {}", self.name)?;
        writeln!(f, "Seat: {}", self.seat)?;
        writeln!(f, "Meal preference code: {}", self.meal_preference)
    }
}
