//! Vienna's 23 administrative districts and the dashboard's selection model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of districts (Bezirke) in Vienna.
pub const DISTRICT_COUNT: u8 = 23;

/// Display names of the districts, indexed by `district number - 1`.
pub const DISTRICT_NAMES: [&str; DISTRICT_COUNT as usize] = [
    "Innere Stadt",
    "Leopoldstadt",
    "Landstraße",
    "Wieden",
    "Margareten",
    "Mariahilf",
    "Neubau",
    "Josefstadt",
    "Alsergrund",
    "Favoriten",
    "Simmering",
    "Meidling",
    "Hietzing",
    "Penzing",
    "Rudolfsheim-Fünfhaus",
    "Ottakring",
    "Hernals",
    "Währing",
    "Döbling",
    "Brigittenau",
    "Floridsdorf",
    "Donaustadt",
    "Liesing",
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DistrictError {
    #[error("District index {0} is outside 1..=23")]
    OutOfRange(u32),

    #[error("'{0}' is not a valid district selection")]
    InvalidSelection(String),
}

/// A validated district number in `1..=23`.
///
/// # Examples
///
/// ```
/// use wien_wetter::District;
///
/// let neubau = District::new(7).unwrap();
/// assert_eq!(neubau.name(), "Neubau");
/// assert_eq!(neubau.postal_label(), "1070 Wien");
/// assert!(District::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct District(u8);

impl District {
    pub fn new(index: u8) -> Result<Self, DistrictError> {
        if (1..=DISTRICT_COUNT).contains(&index) {
            Ok(District(index))
        } else {
            Err(DistrictError::OutOfRange(index as u32))
        }
    }

    /// All districts in ascending order.
    pub fn all() -> impl Iterator<Item = District> + Clone {
        (1..=DISTRICT_COUNT).map(District)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn name(self) -> &'static str {
        DISTRICT_NAMES[(self.0 - 1) as usize]
    }

    /// Postal-code style label, `"1" + two digit district + "0 Wien"`.
    pub fn postal_label(self) -> String {
        format!("1{:02}0 Wien", self.0)
    }
}

impl TryFrom<u8> for District {
    type Error = DistrictError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        District::new(value)
    }
}

impl From<District> for u8 {
    fn from(value: District) -> Self {
        value.0
    }
}

impl fmt::Display for District {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which part of the city the map shows.
///
/// On the wire the dashboard uses `0` for "nothing selected", `"all"` for
/// every district and `1..=23` for a single district.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    #[default]
    None,
    All,
    District(District),
}

impl Selection {
    /// Districts whose data has to be fetched and aggregated for this selection.
    pub fn districts_in_scope(self) -> Vec<District> {
        match self {
            Selection::None => Vec::new(),
            Selection::All => District::all().collect(),
            Selection::District(district) => vec![district],
        }
    }

    pub fn is_none(self) -> bool {
        matches!(self, Selection::None)
    }
}

impl From<District> for Selection {
    fn from(value: District) -> Self {
        Selection::District(value)
    }
}

impl FromStr for Selection {
    type Err = DistrictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("all") {
            return Ok(Selection::All);
        }
        match token.parse::<u32>() {
            Ok(0) => Ok(Selection::None),
            Ok(index) => u8::try_from(index)
                .map_err(|_| DistrictError::OutOfRange(index))
                .and_then(District::new)
                .map(Selection::District),
            Err(_) => Err(DistrictError::InvalidSelection(s.to_string())),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::None => write!(f, "0"),
            Selection::All => write!(f, "all"),
            Selection::District(district) => write!(f, "{}", district),
        }
    }
}

impl Serialize for Selection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
