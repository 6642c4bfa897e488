use std::path::PathBuf;
use nix::errno::Errno;
use thiserror::Error;

use crate::namespace::Namespace;

pub type Result<T> = std::result::Result<T, EnterError>;

/// One variant per fallible step. All of them are fatal and all exit 1;
/// only the printed line tells them apart.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EnterError {
    /// Covers all five opens with one message; the cause is almost always
    /// missing privilege.
    #[error("Failed to open {} files, are you root?", .target.display())]
    Acquire {
        target: PathBuf,
        #[source]
        source: Errno,
    },

    #[error("setns:{namespace}: {}", .source.desc())]
    Join {
        namespace: Namespace,
        #[source]
        source: Errno,
    },

    #[error("fchdir: {}", .source.desc())]
    Chdir {
        #[source]
        source: Errno,
    },

    #[error("chroot: {}", .source.desc())]
    Chroot {
        #[source]
        source: Errno,
    },

    #[error("execvpe: {}", .source.desc())]
    Exec {
        #[source]
        source: Errno,
    },
}

impl EnterError {
    pub fn exit_code(&self) -> i32 {
        1
    }
}
