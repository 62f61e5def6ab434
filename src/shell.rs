use lazy_static::lazy_static;
use log::info;
use regex::Regex;
use std::io::{BufRead, Write};

use crate::airports::Airports;
use crate::ask::{calculate_route, RouteQuery};
use crate::config::ConfigData;
use crate::error::Error;
use crate::report::build_report_string;

lazy_static! {
    // ICN-LAX, ICN>LAX, ICN/LAX, ICN→LAX or ICN LAX
    static ref ROUTE_EXP: Regex =
        Regex::new(r"^\s*([^\s\-/>→]+)\s*(?:[\-/>→]|\s)\s*([^\s\-/>→]+)\s*$").unwrap();
}

pub fn parse_route(route: &str) -> Option<(String, String)> {
    let captures = ROUTE_EXP.captures(route)?;
    Some((captures[1].to_string(), captures[2].to_string()))
}

/// Parses a count that must be at least 1. Empty input takes `default`.
pub fn parse_count(input: &str, default: u32) -> Result<u32, Error> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(default);
    }

    match input.parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(Error::InvalidInput(format!(
            "'{}' is not a whole number of at least 1",
            input
        ))),
    }
}

/// Builds a query from command line arguments: ROUTE [SEATS] [FREQUENCY], where ROUTE is
/// either one argument (`ICN-LAX`) or the two codes as separate arguments (`ICN LAX`).
pub fn query_from_args(args: &[String], config: &ConfigData) -> Result<RouteQuery, Error> {
    let first = args
        .first()
        .ok_or_else(|| Error::InvalidInput("missing route".to_string()))?;

    let ((origin, destination), counts) = match parse_route(first) {
        Some(route) => (route, &args[1..]),
        // A number in second place is a seat count, not a destination
        None if args.len() >= 2 && args[1].parse::<u32>().is_err() => {
            let route = parse_route(&format!("{} {}", first, args[1])).ok_or_else(|| {
                Error::InvalidInput(format!("'{} {}' is not a route like ICN-LAX", first, args[1]))
            })?;
            (route, &args[2..])
        }
        None => {
            return Err(Error::InvalidInput(format!(
                "'{}' is not a route like ICN-LAX",
                first
            )))
        }
    };

    if counts.len() > 2 {
        return Err(Error::InvalidInput("too many arguments".to_string()));
    }

    let count = |index: usize| counts.get(index).map_or("", |s| s.as_str());
    let seats_per_flight = parse_count(count(0), config.default_seats)?;
    let weekly_frequency = parse_count(count(1), config.default_frequency)?;

    Ok(RouteQuery {
        origin,
        destination,
        seats_per_flight,
        weekly_frequency,
    })
}

pub struct Shell<'a, R, W> {
    airports: &'a Airports,
    input: R,
    output: W,
    default_seats: u32,
    default_frequency: u32,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(airports: &'a Airports, config: &ConfigData, input: R, output: W) -> Self {
        Self {
            airports,
            input,
            output,
            default_seats: config.default_seats,
            default_frequency: config.default_frequency,
        }
    }

    // None once the input is exhausted
    fn prompt(&mut self, label: &str) -> Result<Option<String>, Error> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_count(&mut self, label: &str, default: u32) -> Result<Option<u32>, Error> {
        loop {
            let line = match self.prompt(&format!("{} [{}]", label, default))? {
                Some(line) => line,
                None => return Ok(None),
            };

            match parse_count(&line, default) {
                Ok(n) => return Ok(Some(n)),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    /// Collects the four inputs. Returns None when the origin is left empty or input ends.
    pub fn read_query(&mut self) -> Result<Option<RouteQuery>, Error> {
        let origin = match self.prompt("Origin Airport IATA Code (e.g., ICN)")? {
            Some(origin) if !origin.is_empty() => origin,
            _ => return Ok(None),
        };
        let destination = match self.prompt("Destination Airport IATA Code (e.g., LAX)")? {
            Some(destination) => destination,
            None => return Ok(None),
        };
        let seats_per_flight =
            match self.prompt_count("Available Seats per Flight", self.default_seats)? {
                Some(n) => n,
                None => return Ok(None),
            };
        let weekly_frequency =
            match self.prompt_count("Weekly Frequency", self.default_frequency)? {
                Some(n) => n,
                None => return Ok(None),
            };

        Ok(Some(RouteQuery {
            origin,
            destination,
            seats_per_flight,
            weekly_frequency,
        }))
    }

    /// Writes the report for `query`, or the error message when it cannot be calculated.
    /// Returns whether a report was written.
    pub fn calculate(&mut self, query: &RouteQuery) -> Result<bool, Error> {
        let calculated = match calculate_route(self.airports, query) {
            Ok(result) => {
                info!("Calculated {} -> {}", result.origin, result.destination);
                write!(self.output, "{}", build_report_string(&result))?;
                true
            }
            Err(Error::UnresolvedAirports(codes)) => {
                info!("Unresolved airport codes: {:?}", codes);
                writeln!(self.output, "{}", Error::UnresolvedAirports(codes))?;
                false
            }
            Err(e @ Error::InvalidInput(_)) => {
                writeln!(self.output, "{}", e)?;
                false
            }
            Err(e) => return Err(e),
        };

        self.output.flush()?;
        Ok(calculated)
    }

    pub fn run(&mut self) -> Result<(), Error> {
        writeln!(
            self.output,
            "ASK Calculator\nEnter the IATA codes, number of available seats per flight, and weekly frequency.\nLeave the origin empty to exit.\n"
        )?;

        while let Some(query) = self.read_query()? {
            self.calculate(&query)?;
            writeln!(self.output)?;
        }

        Ok(())
    }
}
