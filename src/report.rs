use crate::ask::RouteResult;
use crate::util::{format_thousands, format_thousands_f64};

pub fn build_route_string(result: &RouteResult) -> String {
    format!("Route: {} → {}", result.origin, result.destination)
}

pub fn build_report_string(result: &RouteResult) -> String {
    format!(
        "{route}\n\
         Distance: {distance} km\n\
         Weekly Seats: {weekly}\n\
         Annual Seats: {annual}\n\
         ASK (Available Seat Kilometers): {ask} km\n",
        route = build_route_string(result),
        distance = format_thousands_f64(result.distance_km, 2),
        weekly = format_thousands(result.weekly_seats),
        annual = format_thousands(result.annual_seats),
        ask = format_thousands_f64(result.ask_km, 0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report() {
        let result = RouteResult {
            origin: "ICN".to_string(),
            destination: "LAX".to_string(),
            distance_km: 9600.0,
            weekly_seats: 2100,
            annual_seats: 109200,
            ask_km: 1_048_320_000.0,
        };

        assert_eq!(
            build_report_string(&result),
            "Route: ICN → LAX\n\
             Distance: 9,600.00 km\n\
             Weekly Seats: 2,100\n\
             Annual Seats: 109,200\n\
             ASK (Available Seat Kilometers): 1,048,320,000 km\n"
        );
    }
}
