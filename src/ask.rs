use crate::airports::Airports;
use crate::error::Error;

pub const WEEKS_PER_YEAR: u64 = 52;

#[derive(Debug, Clone)]
pub struct RouteQuery {
    pub origin: String,
    pub destination: String,
    pub seats_per_flight: u32,
    pub weekly_frequency: u32,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RouteResult {
    pub origin: String,
    pub destination: String,
    pub distance_km: f64,
    pub weekly_seats: u64,
    pub annual_seats: u64,
    pub ask_km: f64,
}

/// Seat supply and available seat kilometers for a route of `distance_km`.
pub fn compute_ask(distance_km: f64, seats_per_flight: u32, weekly_frequency: u32) -> RouteResult {
    let weekly_seats = seats_per_flight as u64 * weekly_frequency as u64;
    let annual_seats = weekly_seats * WEEKS_PER_YEAR;

    RouteResult {
        distance_km,
        weekly_seats,
        annual_seats,
        ask_km: annual_seats as f64 * distance_km,
        ..Default::default()
    }
}

pub fn calculate_route(airports: &Airports, query: &RouteQuery) -> Result<RouteResult, Error> {
    if query.seats_per_flight == 0 {
        return Err(Error::InvalidInput("seats per flight must be at least 1".to_string()));
    }
    if query.weekly_frequency == 0 {
        return Err(Error::InvalidInput("weekly frequency must be at least 1".to_string()));
    }

    let origin = query.origin.trim().to_uppercase();
    let destination = query.destination.trim().to_uppercase();

    let (from, to) = match (airports.lookup(&origin), airports.lookup(&destination)) {
        (Some(from), Some(to)) => (from, to),
        (from, to) => {
            let mut unresolved = Vec::new();
            if from.is_none() {
                unresolved.push(origin);
            }
            if to.is_none() {
                unresolved.push(destination);
            }
            return Err(Error::UnresolvedAirports(unresolved));
        }
    };

    let result = compute_ask(
        from.distance_km(&to),
        query.seats_per_flight,
        query.weekly_frequency,
    );

    Ok(RouteResult {
        origin,
        destination,
        ..result
    })
}
