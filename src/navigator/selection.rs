use crate::entities::{OptimizeFor, RouteRequest};
use crate::error::{validation_error, Error};
use crate::ui::{Input, Toggle, Ui};

pub const MISSING_ENDPOINTS: &str = "Please select both start and end locations";

/// Form state at the moment a route is requested.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    pub start: String,
    pub end: String,
    pub optimize_for: OptimizeFor,
    pub avoid_highways: bool,
}

impl Selection {
    pub fn read<U: Ui>(ui: &U) -> Self {
        let optimize_for = ui.value(Input::OptimizeFor);
        let optimize_for = match optimize_for.trim() {
            "" => OptimizeFor::default(),
            other => other.into(),
        };

        Self {
            start: ui.value(Input::Start).trim().into(),
            end: ui.value(Input::End).trim().into(),
            optimize_for,
            avoid_highways: ui.checked(Toggle::AvoidHighways),
        }
    }

    pub fn into_request(self) -> Result<RouteRequest, Error> {
        if self.start.is_empty() || self.end.is_empty() {
            return Err(validation_error(MISSING_ENDPOINTS));
        }

        Ok(RouteRequest {
            start: self.start,
            end: self.end,
            optimize_for: self.optimize_for,
            avoid_highways: self.avoid_highways,
        })
    }
}
