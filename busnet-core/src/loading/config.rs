use serde::{Deserialize, Serialize};

use crate::{Error, Minutes};

/// Parameters of the routing graph, supplied once before it is built
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutingSettings {
    /// Minutes spent waiting at a stop before boarding any bus
    pub bus_wait_time: Minutes,
    /// Bus speed in km/h
    pub bus_velocity: f64,
}

impl RoutingSettings {
    pub fn new(bus_wait_time: Minutes, bus_velocity: f64) -> Self {
        Self {
            bus_wait_time,
            bus_velocity,
        }
    }

    /// Checks that the settings produce non-negative edge weights
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSettings`] for a negative or non-finite wait time
    /// and for a velocity that is not a positive finite number.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.bus_wait_time.is_finite() || self.bus_wait_time < 0.0 {
            return Err(Error::InvalidSettings(format!(
                "bus_wait_time must be a non-negative number, got {}",
                self.bus_wait_time
            )));
        }
        if !self.bus_velocity.is_finite() || self.bus_velocity <= 0.0 {
            return Err(Error::InvalidSettings(format!(
                "bus_velocity must be a positive number, got {}",
                self.bus_velocity
            )));
        }
        Ok(())
    }

    /// Minutes a bus needs to cover `meters` of road
    pub fn travel_time(&self, meters: u64) -> Minutes {
        const METERS_PER_KM: f64 = 1000.0;
        const MINUTES_PER_HOUR: f64 = 60.0;

        #[allow(clippy::cast_precision_loss)]
        let meters = meters as f64;
        meters / METERS_PER_KM / self.bus_velocity * MINUTES_PER_HOUR
    }
}
