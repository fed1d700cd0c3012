pub mod database;

pub mod contact;


pub use contact::{mapper, Contact, Field, Persistence};
pub use database::{Connection, Database, Entity, Error, Id, OptionalExtension, Result};

pub mod prelude {
    pub use crate::{
        contact::mapper, Connection, Contact, Database, Entity, Error, Field, Id, OptionalExtension,
        Persistence,
    };
}
