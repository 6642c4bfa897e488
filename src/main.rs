//! Reassociate with the mount, UTS, network and IPC namespaces of pid 1,
//! chroot into its root and exec a command there (default `/bin/sh`).
//!
//! ```text
//! nsenter1 [command [args...]]
//! ```
//!
//! Every failure prints one line to stderr and exits 1.

use anyhow::Result;
use std::convert::Infallible;
use std::env;
use std::process;

mod command;
mod config;
mod enter;
mod error;
mod host;
mod logging;
mod namespace;

use command::CommandSpec;
use config::Config;
use error::EnterError;
use host::LinuxHost;

fn run() -> Result<Infallible> {
    logging::init()?;
    let config = Config::default();
    let command = CommandSpec::resolve(env::args_os(), &config.shell);
    let env = command::inherited_env();
    Ok(enter::enter(&mut LinuxHost, &config, &command, &env)?)
}

fn main() {
    let err = match run() {
        Ok(never) => match never {},
        Err(e) => e,
    };
    eprintln!("{}", err);
    process::exit(err.downcast_ref::<EnterError>().map_or(1, EnterError::exit_code));
}
