use std::path::PathBuf;

use anyhow::{anyhow, Result};
use toml::{Table, Value};

use contacts::Database;

use crate::cli::{Cli, Commands};

#[derive(Debug)]
pub struct Config {
    pub dir: PathBuf,
    pub data_dir: PathBuf,
    cli: Cli,
    table: Table,
}

impl Config {
    pub fn try_parse() -> Result<Self> {
        Self::try_parse_from(std::env::args_os())
    }

    pub fn try_parse_from<I, T>(iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        use clap::Parser;

        let cli = Cli::try_parse_from(iter)?;

        let dir = match &cli.config {
            Some(dir) => dir.clone(),
            None => config_home()?,
        };
        let table = match std::fs::read_to_string(dir.join("config.toml")) {
            Ok(content) => content.parse::<Table>()?,
            Err(_) => Table::new(),
        };

        let data_dir = match cli.data.clone().or_else(|| {
            table
                .get("data_dir")
                .and_then(Value::as_str)
                .map(PathBuf::from)
        }) {
            Some(dir) => dir,
            None => data_home()?,
        };

        if !data_dir.is_dir() {
            return Err(anyhow!("Data directory is not a dir: {}", data_dir.display()));
        }

        Ok(Config {
            dir,
            data_dir,
            cli,
            table,
        })
    }

    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.cli.verbose.log_level_filter()
    }

    pub fn command(&self) -> Option<&Commands> {
        self.cli.command.as_ref()
    }

    pub fn database_path(&self) -> PathBuf {
        let db_filename = if let Some(db_table) = self.table.get("db").and_then(Value::as_table) {
            db_table
                .get("filename")
                .and_then(Value::as_str)
                .unwrap_or("contacts.db")
        } else {
            "contacts.db"
        };

        self.data_dir.join(db_filename)
    }

    /// Open the database, creating the contacts table if needed
    pub fn database(&self) -> Result<Database> {
        let db = Database::open(self.database_path())?;
        db.setup()?;
        Ok(db)
    }
}

fn config_home() -> Result<PathBuf> {
    match std::env::var("CONTACTS_CONFIG") {
        Ok(val) if !val.is_empty() => Ok(PathBuf::from(val)),
        _ => {
            let path = xdg::BaseDirectories::with_prefix("contacts")?
                .get_config_home();
            if !path.exists() {
                std::fs::create_dir_all(&path)?;
            }
            Ok(path)
        }
    }
}

fn data_home() -> Result<PathBuf> {
    match std::env::var("CONTACTS_DATA") {
        Ok(val) if !val.is_empty() => Ok(PathBuf::from(val)),
        _ => {
            let path = xdg::BaseDirectories::with_prefix("contacts")?
                .get_data_home();
            if !path.exists() {
                std::fs::create_dir_all(&path)?;
            }
            Ok(path)
        }
    }
}
