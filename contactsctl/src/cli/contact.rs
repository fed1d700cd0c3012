use clap::{Args, Subcommand};
use contacts::Field;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List contacts
    List(List),
    /// Create a new contact
    New(New),
    /// Show details about a contact
    Show(Show),
    /// Find contacts by first name, last name or email
    Find(Find),
    /// Update a contact
    Update(Update),
    /// Delete a contact
    Destroy(Destroy),
}

#[derive(Args, Clone, Debug)]
pub struct List {
    /// Maximum number of contacts to show
    #[arg(short = 'c', long)]
    pub count: Option<usize>,
}

#[derive(Args, Clone, Debug)]
pub struct New {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
}

#[derive(Args, Clone, Debug)]
pub struct Show {
    pub id: i64,
}

#[derive(Args, Clone, Debug)]
pub struct Find {
    /// Value to look for, matched exactly
    pub value: String,

    /// Column to search
    ///
    /// Possible values are firstname, lastname and email
    #[arg(short = 'b', long, value_name = "FIELD", default_value = "lastname")]
    pub by: Field,
}

#[derive(Args, Clone, Debug)]
pub struct Update {
    pub id: i64,

    #[arg(long, value_name = "NAME", help_heading = "Contact")]
    pub firstname: Option<String>,

    #[arg(long, value_name = "NAME", help_heading = "Contact")]
    pub lastname: Option<String>,

    #[arg(long, value_name = "EMAIL", help_heading = "Contact")]
    pub email: Option<String>,
}

#[derive(Args, Clone, Debug)]
pub struct Destroy {
    pub id: i64,

    /// Confirm deletion
    #[arg(long)]
    pub confirm: bool,
}
