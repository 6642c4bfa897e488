use std::fmt;
use std::path::{Path, PathBuf};
use nix::sched::CloneFlags;

/// The namespaces of the target process that get joined. PID and user
/// namespaces are left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    Mnt,
    Uts,
    Net,
    Ipc,
}

impl Namespace {
    /// Join order. The mount namespace must come first so the later
    /// fchdir/chroot resolve inside it.
    pub const ORDER: [Namespace; 4] = [Namespace::Mnt, Namespace::Uts, Namespace::Net, Namespace::Ipc];

    pub fn name(self) -> &'static str {
        match self {
            Namespace::Mnt => "mnt",
            Namespace::Uts => "uts",
            Namespace::Net => "net",
            Namespace::Ipc => "ipc",
        }
    }

    pub fn clone_flag(self) -> CloneFlags {
        match self {
            Namespace::Mnt => CloneFlags::CLONE_NEWNS,
            Namespace::Uts => CloneFlags::CLONE_NEWUTS,
            Namespace::Net => CloneFlags::CLONE_NEWNET,
            Namespace::Ipc => CloneFlags::CLONE_NEWIPC,
        }
    }

    /// `<proc_root>/<pid>/ns/<name>`
    pub fn path(self, proc_root: &Path, pid: u32) -> PathBuf {
        proc_root.join(pid.to_string()).join("ns").join(self.name())
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
