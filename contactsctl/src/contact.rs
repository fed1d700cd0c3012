use anyhow::Result;
use std::borrow::Cow;

use contacts::{mapper, Contact, Database, Entity, Field, Id};

use crate::cli::contact::*;
use crate::config::Config;

use tabled::{Table, Tabled};

struct CommandContext<'a> {
    conn: &'a Database,
}

#[derive(derive_more::From)]
struct ContactToDisplay(Contact);

impl Tabled for ContactToDisplay {
    const LENGTH: usize = 4;

    fn fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            self.0
                .identity()
                .map(|id| id.to_string().into())
                .unwrap_or("".into()),
            self.0.firstname().into(),
            self.0.lastname().into(),
            self.0.email().into(),
        ]
    }

    fn headers() -> Vec<Cow<'static, str>> {
        vec![
            "id".into(),
            "first name".into(),
            "last name".into(),
            "email".into(),
        ]
    }
}

pub fn run(config: &Config, command: &Command) -> Result<()> {
    let conn = &config.database()?;
    let cmd = CommandContext { conn };

    match command {
        Command::List(args) => cmd.list(args),
        Command::New(args) => cmd.create(args),
        Command::Show(args) => cmd.show(args),
        Command::Find(args) => cmd.find(args),
        Command::Update(args) => cmd.update(args),
        Command::Destroy(args) => cmd.destroy(args),
    }
}

fn print_table(contacts: Vec<Contact>) {
    if contacts.is_empty() {
        println!("No contact found");
    } else {
        let rows = contacts
            .into_iter()
            .map(ContactToDisplay::from)
            .collect::<Vec<_>>();
        println!("{}", Table::new(rows));
    }
}

impl CommandContext<'_> {
    fn list(&self, args: &List) -> Result<()> {
        let mut contacts = mapper::all(self.conn)?;
        if let Some(count) = args.count {
            contacts.truncate(count);
        }

        print_table(contacts);
        Ok(())
    }

    fn create(&self, args: &New) -> Result<()> {
        let mut contact = Contact::new(&args.firstname, &args.lastname, &args.email);
        contact.save(self.conn)?;

        if let Some(id) = contact.identity() {
            log::info!("Created contact {} ({})", id, contact.full_name());
            println!("Created contact {}", id);
        }
        Ok(())
    }

    fn show(&self, args: &Show) -> Result<()> {
        let contact = Contact::find(self.conn, Id::from(args.id))?;

        println!(
            "{} | {} <{}>",
            args.id,
            contact.full_name(),
            contact.email()
        );
        Ok(())
    }

    fn find(&self, args: &Find) -> Result<()> {
        let contacts: Vec<Contact> = match args.by {
            Field::Email => mapper::find_by_email(self.conn, &args.value)?
                .into_iter()
                .collect(),
            field => mapper::find_all_by(self.conn, field, &args.value)?,
        };

        print_table(contacts);
        Ok(())
    }

    fn update(&self, args: &Update) -> Result<()> {
        let mut contact = Contact::find(self.conn, Id::from(args.id))?;

        if let Some(firstname) = &args.firstname {
            contact.set_firstname(firstname);
        }
        if let Some(lastname) = &args.lastname {
            contact.set_lastname(lastname);
        }
        if let Some(email) = &args.email {
            contact.set_email(email);
        }

        contact.save(self.conn)?;
        Ok(())
    }

    fn destroy(&self, args: &Destroy) -> Result<()> {
        let contact = Contact::find(self.conn, Id::from(args.id))?;

        if args.confirm && crate::utils::confirm()? {
            contact.destroy(self.conn)?;
            log::info!("Destroyed contact {}", args.id);
        } else {
            anyhow::bail!("operation requires confirmation");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::prelude::{assert_eq, Result, *};

    fn contact_command(config: &Config) -> Result<&Command> {
        match config.command() {
            Some(crate::cli::Commands::Contact(command)) => Ok(command),
            command => anyhow::bail!("wrong command passed: {:?}", command),
        }
    }

    #[test]
    fn create() -> Result<()> {
        with_config_args(&["new", "Khurram", "Virani", "kv@gmail.com"], |config| {
            run(config, contact_command(config)?)?;

            let db = config.database()?;
            let contact = mapper::find_by_email(&db, "kv@gmail.com")?.unwrap();
            assert_eq!(Some(Id::from(1)), contact.identity());
            assert_eq!("Khurram Virani", contact.full_name());

            // Same email again violates the unique constraint
            assert!(run(config, contact_command(config)?).is_err());
            assert_eq!(1, mapper::count(&db)?);

            Ok(())
        })
    }

    #[test]
    fn update() -> Result<()> {
        with_config_args(&["update", "1", "--firstname", "K", "--lastname", "V"], |config| {
            assert!(run(config, contact_command(config)?).is_err());

            let db = config.database()?;
            let mut contact = Contact::new("Khurram", "Virani", "kv@gmail.com");
            contact.save(&db)?;

            run(config, contact_command(config)?)?;

            let contact = Contact::find(&db, Id::from(1))?;
            assert_eq!("K V", contact.full_name());
            assert_eq!("kv@gmail.com", contact.email());

            Ok(())
        })
    }

    #[test]
    fn find_parses_field() -> Result<()> {
        with_config_args(&["find", "Khurram", "--by", "first_name"], |config| {
            let Command::Find(args) = contact_command(config)? else {
                anyhow::bail!("wrong command passed: {:?}", config.command());
            };
            assert_eq!(Field::Firstname, args.by);
            assert_eq!("Khurram", args.value);

            run(config, contact_command(config)?)
        })
    }

    #[test]
    fn destroy_requires_confirmation() -> Result<()> {
        with_config_args(&["destroy", "1"], |config| {
            let db = config.database()?;
            let mut contact = Contact::new("Khurram", "Virani", "kv@gmail.com");
            contact.save(&db)?;

            assert!(run(config, contact_command(config)?).is_err());
            assert_eq!(1, mapper::count(&db)?);

            Ok(())
        })
    }
}
