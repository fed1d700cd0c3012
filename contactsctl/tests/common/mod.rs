use anyhow::Result;
use assert_cmd::Command;
use assert_fs::TempDir;

pub mod prelude {
    pub use super::Env;
    pub use anyhow::Result;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;
    pub use predicates::str;
}

pub struct Env {
    pub conf_dir: TempDir,
    pub data_dir: TempDir,
}

#[allow(unused_macros)]
macro_rules! cmd {
    ($env:ident, $($tail:tt)*) => {
        cmd!(@args $env.command()?, $($tail)* )
    };
    (@args $cmd:expr, --$arg:tt) => {
        $cmd.arg(concat!("--", stringify!($arg))).assert()
    };
    (@args $cmd:expr, -$arg:tt) => {
        $cmd.arg(concat!("-", stringify!($arg))).assert()
    };
    (@args $cmd:expr, $arg:tt) => {
        $cmd.arg(stringify!($arg)).assert()
    };
    (@args $cmd:expr, --$arg:tt $($tail:tt)*) => {
        cmd!(@args $cmd.arg(cmd!(@arg --$arg)), $($tail)*)
    };
    (@args $cmd:expr, -$arg:tt $($tail:tt)*) => {
        cmd!(@args $cmd.arg(cmd!(@arg -$arg)), $($tail)*)
    };
    (@args $cmd:expr, $arg:tt $($tail:tt)*) => {
        cmd!(@args $cmd.arg(cmd!(@arg $arg)), $($tail)*)
    };
    (@arg --$arg:tt) => { concat!("--", stringify!($arg)) };
    (@arg -$arg:tt) => { concat!("-", stringify!($arg)) };
    (@arg $arg:tt) => { stringify!($arg) };
}

/// Like `cmd!`, but returns the command before running it
#[allow(unused_macros)]
macro_rules! raw_cmd {
    ($env:ident, $($arg:tt)*) => {
        $env.command()?.args(raw_cmd!(@collect [] $($arg)*))
    };
    (@collect [$($out:expr),*]) => { [$($out),*] };
    (@collect [$($out:expr),*] --$arg:tt $($tail:tt)*) => {
        raw_cmd!(@collect [$($out,)* concat!("--", stringify!($arg))] $($tail)*)
    };
    (@collect [$($out:expr),*] $arg:tt $($tail:tt)*) => {
        raw_cmd!(@collect [$($out,)* stringify!($arg)] $($tail)*)
    };
}

impl Env {
    pub fn new() -> Result<Self> {
        Ok(Self {
            conf_dir: TempDir::new()?,
            data_dir: TempDir::new()?,
        })
    }

    pub fn command(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("contactsctl")?;
        cmd.arg("-C")
            .arg(self.conf_dir.path())
            .arg("-D")
            .arg(self.data_dir.path());
        Ok(cmd)
    }

    /// Run with arguments that don't survive `stringify!`, like emails
    #[allow(dead_code)]
    pub fn run(&self, args: &[&str]) -> Result<assert_cmd::assert::Assert> {
        Ok(self.command()?.args(args).assert())
    }

    /// Create a contact, expecting success
    #[allow(dead_code)]
    pub fn new_contact(&self, first: &str, last: &str, email: &str) -> Result<()> {
        self.run(&["new", first, last, email])?.success();
        Ok(())
    }
}
