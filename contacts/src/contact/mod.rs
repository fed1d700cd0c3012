use crate::database::{Connection, Entity, Error, Id, Result, Setup};

mod field;
pub use field::Field;

pub mod mapper;

/// Whether a contact has a row in the database
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    #[default]
    Unsaved,
    Persisted(Id),
}

impl Persistence {
    pub fn id(&self) -> Option<Id> {
        match self {
            Persistence::Unsaved => None,
            Persistence::Persisted(id) => Some(*id),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Contact {
    state: Persistence,
    firstname: String,
    lastname: String,
    email: String,
}

impl Contact {
    pub fn new<A, B, C>(firstname: A, lastname: B, email: C) -> Self
    where
        A: Into<String>,
        B: Into<String>,
        C: Into<String>,
    {
        Self {
            firstname: firstname.into(),
            lastname: lastname.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    pub fn state(&self) -> Persistence {
        self.state
    }

    /// Identity of the row backing this contact
    ///
    /// Stays set after [`mapper::destroy`], even though the row is gone.
    pub fn identity(&self) -> Option<Id> {
        self.state.id()
    }

    pub fn is_persisted(&self) -> bool {
        matches!(self.state, Persistence::Persisted(_))
    }

    pub fn firstname(&self) -> &str {
        &self.firstname
    }

    pub fn set_firstname<T: Into<String>>(&mut self, firstname: T) {
        self.firstname = firstname.into();
    }

    pub fn lastname(&self) -> &str {
        &self.lastname
    }

    pub fn set_lastname<T: Into<String>>(&mut self, lastname: T) {
        self.lastname = lastname.into();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email<T: Into<String>>(&mut self, email: T) {
        self.email = email.into();
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

impl TryFrom<&rusqlite::Row<'_>> for Contact {
    type Error = rusqlite::Error;

    fn try_from(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Contact {
            state: Persistence::Persisted(row.get("id")?),
            firstname: row.get("firstname")?,
            lastname: row.get("lastname")?,
            email: row.get("email")?,
        })
    }
}

impl Entity for Contact {
    fn id(&self) -> Option<Id> {
        self.identity()
    }

    fn find(db: &Connection, id: Id) -> Result<Self> {
        mapper::find_by_id(db, id)?.ok_or(Error::NotFound)
    }

    fn save(&mut self, db: &Connection) -> Result<()> {
        mapper::save(db, self)
    }

    fn destroy(&self, db: &Connection) -> Result<()> {
        mapper::destroy(db, self)
    }
}

impl Setup for Contact {
    fn setup(db: &Connection) -> Result<()> {
        log::info!("Creating table contacts if missing");
        match db.execute(
            "CREATE TABLE IF NOT EXISTS contacts (
                id INTEGER NOT NULL PRIMARY KEY,
                firstname VARCHAR(255) NOT NULL,
                lastname VARCHAR(255) NOT NULL,
                email VARCHAR(255) NOT NULL UNIQUE
            );",
            (),
        ) {
            Ok(_) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
