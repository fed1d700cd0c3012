use std::fmt::{Display, Error, Formatter};
use std::str::FromStr;

use crate::database::ParseTypeError;

/// Searchable column of the contacts table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Firstname,
    Lastname,
    Email,
}

impl Field {
    pub fn column(&self) -> &'static str {
        match self {
            Field::Firstname => "firstname",
            Field::Lastname => "lastname",
            Field::Email => "email",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        f.write_str(self.column())
    }
}

impl FromStr for Field {
    type Err = ParseTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "firstname" | "first_name" | "first" => Ok(Field::Firstname),
            "lastname" | "last_name" | "last" => Ok(Field::Lastname),
            "email" => Ok(Field::Email),
            _ => Err(ParseTypeError("Field", value.to_string())),
        }
    }
}
