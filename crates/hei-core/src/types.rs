//! Domain types shared by the builder and the query library.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Kind of higher institution. Serialized as its capitalized name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    University,
    College,
    Polytechnic,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::University, Category::College, Category::Polytechnic];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::University => "University",
            Category::College => "College",
            Category::Polytechnic => "Polytechnic",
        }
    }

    /// Directory name used by the image asset tree.
    pub fn plural(self) -> &'static str {
        match self {
            Category::University => "Universities",
            Category::College => "Colleges",
            Category::Polytechnic => "Polytechnics",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match against the three category names.
impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "invalid institution type '{}'; valid types are 'University', 'College' and 'Polytechnic'",
                    s
                ))
            })
    }
}

/// One record of the shipped dataset.
///
/// JSON keys follow the published file: `nameOfInstitution`, `type`,
/// `acronym`, `ownership`, `url`, `year` and the optional base64 `image`.
/// An absent image is omitted from the output rather than written as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Institution {
    #[serde(rename = "nameOfInstitution")]
    pub name: String,
    #[serde(rename = "type")]
    pub category: Category,
    pub acronym: String,
    pub ownership: String,
    pub url: String,
    pub year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Institution {
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Copy of this record with the image payload dropped. `self` is untouched.
    pub fn without_image(&self) -> Institution {
        Institution { image: None, ..self.clone() }
    }

    /// Copy for a query result, stripping the image unless `include_image`.
    pub fn project(&self, include_image: bool) -> Institution {
        if include_image { self.clone() } else { self.without_image() }
    }
}

macro_rules! states {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// The 36 states plus the Federal Capital Territory.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum State {
            $($variant),+
        }

        impl State {
            pub const ALL: &'static [State] = &[$(State::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(State::$variant => $name),+
                }
            }
        }
    };
}

states! {
    Abia => "Abia",
    Adamawa => "Adamawa",
    AkwaIbom => "Akwa Ibom",
    Anambra => "Anambra",
    Bauchi => "Bauchi",
    Bayelsa => "Bayelsa",
    Benue => "Benue",
    Borno => "Borno",
    CrossRiver => "Cross River",
    Delta => "Delta",
    Ebonyi => "Ebonyi",
    Edo => "Edo",
    Ekiti => "Ekiti",
    Enugu => "Enugu",
    FctAbuja => "FCT - Abuja",
    Gombe => "Gombe",
    Imo => "Imo",
    Jigawa => "Jigawa",
    Kaduna => "Kaduna",
    Kano => "Kano",
    Katsina => "Katsina",
    Kebbi => "Kebbi",
    Kogi => "Kogi",
    Kwara => "Kwara",
    Lagos => "Lagos",
    Nasarawa => "Nasarawa",
    Niger => "Niger",
    Ogun => "Ogun",
    Ondo => "Ondo",
    Osun => "Osun",
    Oyo => "Oyo",
    Plateau => "Plateau",
    Rivers => "Rivers",
    Sokoto => "Sokoto",
    Taraba => "Taraba",
    Yobe => "Yobe",
    Zamfara => "Zamfara",
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive match against the state names.
impl FromStr for State {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        State::ALL
            .iter()
            .copied()
            .find(|state| state.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidArgument(format!("unknown state '{}'", s)))
    }
}
