//! Stateless translation between [`Contact`]s and rows of the `contacts`
//! table
//!
//! Every operation takes the connection to run on and binds all values as
//! statement parameters.

use super::{Contact, Field, Persistence};
use crate::database::{Connection, Error, Id, Result};

pub const INSERT: &str = "INSERT INTO contacts (firstname, lastname, email) \
    VALUES ($1, $2, $3) RETURNING id";
pub const UPDATE: &str = "UPDATE contacts \
    SET firstname=$1, lastname=$2, email=$3 WHERE id=$4";
pub const DELETE: &str = "DELETE FROM contacts WHERE id=$1";
pub const SELECT_BY_ID: &str = "SELECT id, firstname, lastname, email FROM contacts WHERE id=$1";

const SELECT_ALL: &str = "SELECT id, firstname, lastname, email FROM contacts ORDER BY id";

pub fn select_by(field: Field) -> String {
    format!(
        "SELECT id, firstname, lastname, email FROM contacts WHERE {}=$1",
        field.column()
    )
}

/// Insert the contact if it has never been saved, update its row otherwise
///
/// An update matching no row (e.g. after [`destroy`]) is not an error.
pub fn save(db: &Connection, contact: &mut Contact) -> Result<()> {
    match contact.state {
        Persistence::Unsaved => insert(db, contact),
        Persistence::Persisted(id) => update(db, contact, id),
    }
}

fn insert(db: &Connection, contact: &mut Contact) -> Result<()> {
    log::debug!("{}", INSERT);

    let id = db.prepare(INSERT)?.query_row(
        rusqlite::params![contact.firstname, contact.lastname, contact.email],
        |row| row.get::<usize, Id>(0),
    )?;
    contact.state = Persistence::Persisted(id);

    Ok(())
}

fn update(db: &Connection, contact: &Contact, id: Id) -> Result<()> {
    log::debug!("{} [id = {}]", UPDATE, id);

    let changed = db.prepare(UPDATE)?.execute(rusqlite::params![
        contact.firstname,
        contact.lastname,
        contact.email,
        id
    ])?;

    if changed == 0 {
        log::warn!("No contact with id {} to update", id);
    }

    Ok(())
}

/// Delete the row backing the contact
///
/// The contact itself is left untouched and keeps its identity.
pub fn destroy(db: &Connection, contact: &Contact) -> Result<()> {
    let Persistence::Persisted(id) = contact.state else {
        return Err(Error::NotPersisted);
    };

    log::debug!("{} [id = {}]", DELETE, id);

    match db.prepare(DELETE)?.execute([id])? {
        0 => Err(Error::NotFound),
        _ => Ok(()),
    }
}

pub fn find_by_id(db: &Connection, id: Id) -> Result<Option<Contact>> {
    log::debug!("{} [id = {}]", SELECT_BY_ID, id);

    match db
        .prepare(SELECT_BY_ID)?
        .query_row([id], |row| Contact::try_from(row))
    {
        Ok(contact) => Ok(Some(contact)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Every contact whose `field` is exactly `value`
pub fn find_all_by(db: &Connection, field: Field, value: &str) -> Result<Vec<Contact>> {
    let query = select_by(field);
    log::debug!("{}", query);

    collect(db, &query, [value])
}

/// The contact with this email, if any
///
/// Emails are unique, so finding more than one row is reported as an
/// [`Error::Integrity`].
pub fn find_by_email(db: &Connection, email: &str) -> Result<Option<Contact>> {
    let mut contacts = find_all_by(db, Field::Email, email)?;

    if contacts.len() > 1 {
        return Err(Error::Integrity(format!(
            "{} contacts share the email {}",
            contacts.len(),
            email
        )));
    }

    Ok(contacts.pop())
}

pub fn all(db: &Connection) -> Result<Vec<Contact>> {
    log::debug!("{}", SELECT_ALL);

    collect(db, SELECT_ALL, [])
}

pub fn count(db: &Connection) -> Result<usize> {
    Ok(db.query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?)
}

fn collect<P: rusqlite::Params>(db: &Connection, query: &str, params: P) -> Result<Vec<Contact>> {
    let mut statement = db.prepare(query)?;
    let rows = statement.query_and_then(params, |row| Contact::try_from(row))?;

    match rows.collect::<rusqlite::Result<Vec<_>>>() {
        Ok(contacts) => Ok(contacts),
        Err(e) => Err(e.into()),
    }
}
