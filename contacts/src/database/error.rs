pub type Result<T> = std::result::Result<T, Error>;

#[derive(derive_more::Error, derive_more::Display, derive_more::From, Debug)]
pub enum Error {
    #[display("Not found")]
    NotFound,
    #[display("Not persisted")]
    NotPersisted,
    #[display("Data integrity error. {_0}")]
    Integrity(#[error(not(source))] String),
    #[display("Sqlite error. {_0}")]
    #[from]
    Sqlite(rusqlite::Error),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound)
    }
}

pub trait OptionalExtension<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExtension<T> for Result<T> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(value) => Ok(Some(value)),
            Err(Error::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[derive(Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Parse Type Error: {_0} {_1}")]
pub struct ParseTypeError(pub &'static str, pub String);
