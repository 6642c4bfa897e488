use std::convert::Infallible;
use std::ffi::OsString;
use std::path::Path;
use tracing::debug;

use crate::command::CommandSpec;
use crate::config::Config;
use crate::error::{EnterError, Result};
use crate::host::Host;
use crate::namespace::Namespace;

/// Everything opened before the first state change.
pub struct Handles<H> {
    pub namespaces: Vec<(Namespace, H)>,
    pub root: H,
}

/// Open the four namespace files and the root directory of the target
/// process. Nothing is changed if any of them fails.
pub fn acquire<T: Host>(host: &mut T, config: &Config) -> Result<Handles<T::Handle>> {
    let failed = |source| EnterError::Acquire {
        target: config.target_dir(),
        source,
    };

    let mut namespaces = Vec::with_capacity(Namespace::ORDER.len());
    for &namespace in Namespace::ORDER.iter() {
        let path = namespace.path(&config.proc_root, config.target_pid);
        let handle = host.open(&path).map_err(failed)?;
        namespaces.push((namespace, handle));
    }
    let root = host.open(&config.root_path()).map_err(failed)?;

    Ok(Handles { namespaces, root })
}

/// Join the target's namespaces, chroot into its root and exec `command`.
/// Returns only on failure.
pub fn enter<T: Host>(
    host: &mut T,
    config: &Config,
    command: &CommandSpec,
    env: &[OsString],
) -> Result<Infallible> {
    let handles = acquire(host, config)?;
    debug!(pid_dir = %config.target_dir().display(), "handles acquired");

    for (namespace, handle) in handles.namespaces.iter() {
        host.setns(handle, *namespace)
            .map_err(|source| EnterError::Join { namespace: *namespace, source })?;
        debug!(%namespace, "joined");
    }

    host.fchdir(&handles.root)
        .map_err(|source| EnterError::Chdir { source })?;
    host.chroot(Path::new("."))
        .map_err(|source| EnterError::Chroot { source })?;
    debug!("root changed");

    debug!(program = ?command.program, argv = ?command.argv, "exec");
    host.exec(command, env)
        .map_err(|source| EnterError::Exec { source })
}
