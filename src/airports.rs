use crate::error::Error;
use crate::fetch::Fetcher;
use crate::util::LatLon;
use csv;
use log::{debug, info, warn};
use serde::Deserialize;
use std::collections::{hash_map::Entry, HashMap};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

// Marker OpenFlights uses for missing values
const NULL_FIELD: &str = "\\N";

#[derive(Deserialize, Debug)]
pub struct AirportData {
    pub id: u32,
    pub name: String,
    pub city: String,
    pub country: String,
    pub iata: String,
    pub icao: String,
    pub lat: f64,
    pub lon: f64,
    pub elevation: String,
    pub utc: String,
    pub dst: String,
    pub timezone: String,
    pub kind: String,
    pub source: String,
}

#[derive(Debug, Default)]
pub struct Airports {
    db: HashMap<String, LatLon>,
}

impl Airports {
    /// Reads the headerless OpenFlights `airports.dat` format.
    ///
    /// When an IATA code appears more than once the first row wins.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(reader);
        let mut db = HashMap::new();
        let mut duplicates = 0;

        for record in reader.deserialize() {
            let record: AirportData = record?;
            let iata = record.iata.trim().to_uppercase();

            if iata.is_empty() || iata == NULL_FIELD {
                continue;
            }

            match db.entry(iata) {
                Entry::Occupied(o) => {
                    debug!("Ignoring duplicate IATA code {} ({})", o.key(), record.name);
                    duplicates += 1;
                }
                Entry::Vacant(v) => {
                    v.insert(LatLon {
                        lat: record.lat,
                        lon: record.lon,
                    });
                }
            }
        }

        if duplicates > 0 {
            info!("Skipped {} duplicate IATA codes", duplicates);
        }

        Ok(Self { db })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Self::from_reader(File::open(path)?)
    }

    /// Reads the cached data file at `path`, downloading it from `url` first if it is missing.
    pub fn load<P: AsRef<Path>>(path: P, url: &str, fetcher: &Fetcher) -> Result<Self, Error> {
        let path = path.as_ref();

        if path.exists() {
            info!("Reading airport data from {}", path.display());
            return Self::from_path(path);
        }

        let text = fetcher.download(url)?;
        // Parse before caching so a broken download never lands on disk
        let airports = Self::from_reader(text.as_bytes())?;

        match save_cache(path, &text) {
            Ok(_) => info!("Saved airport data to {}", path.display()),
            Err(e) => warn!("Could not save airport data to {}: {}", path.display(), e),
        }

        Ok(airports)
    }

    pub fn lookup(&self, code: &str) -> Option<LatLon> {
        let location = self.db.get(&code.trim().to_uppercase()).copied();
        debug!("Lookup {} -> {:?}", code, location);
        location
    }

    pub fn len(&self) -> usize {
        self.db.len()
    }

    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }
}

// Sibling of the cache file that a download is written to before being renamed into place
fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".part");
    path.with_file_name(name)
}

// The cache only ever appears complete, an interrupted write leaves just the .part file
fn save_cache(path: &Path, text: &str) -> Result<(), Error> {
    let partial = partial_path(path);

    let written = File::create(&partial)
        .and_then(|mut file| {
            file.write_all(text.as_bytes())?;
            file.sync_all()
        })
        .and_then(|_| fs::rename(&partial, path));

    if let Err(e) = written {
        fs::remove_file(&partial).ok();
        return Err(e.into());
    }

    Ok(())
}
