use std::path::Path;

pub use rusqlite::Connection;

mod error;
pub use error::{Error, OptionalExtension, ParseTypeError, Result};

mod id;
pub use id::Id;

/// Owned connection to the contacts database
///
/// Derefs to [`Connection`], which is what every mapper operation takes.
#[derive(Debug, derive_more::From, derive_more::Into, derive_more::Deref, derive_more::DerefMut)]
pub struct Database(Connection);

impl Database {
    pub fn open<T: AsRef<Path>>(path: T) -> Result<Self> {
        log::debug!("Opening database {}", path.as_ref().display());
        match Connection::open(path) {
            Ok(connection) => Ok(connection.into()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn memory() -> Result<Self> {
        match Connection::open_in_memory() {
            Ok(connection) => Ok(connection.into()),
            Err(e) => Err(e.into()),
        }
    }

    /// Create the tables if they don't exist yet
    pub fn setup(&self) -> Result<()> {
        crate::contact::Contact::setup(self)
    }

    /// Check whether a table with the given name exists
    pub fn has_table(&self, name: &str) -> Result<bool> {
        let mut statement = self.prepare(
            "SELECT name FROM sqlite_schema WHERE type = 'table' AND name = ?",
        )?;
        let mut rows = statement.query([name])?;
        let exists = rows.next()?.is_some();

        Ok(exists)
    }
}

/// Something stored as a row of a table
pub trait Entity: Sized {
    fn id(&self) -> Option<Id>;

    fn find(db: &Connection, id: Id) -> Result<Self>;
    fn save(&mut self, db: &Connection) -> Result<()>;
    fn destroy(&self, db: &Connection) -> Result<()>;
}

pub(crate) trait Setup {
    fn setup(db: &Connection) -> Result<()>;
}
