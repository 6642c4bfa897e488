use std::convert::Infallible;
use std::ffi::{CString, OsString};
use std::fs::File;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::io::AsRawFd;
use std::path::Path;
use nix::errno::Errno;
use nix::sched::setns;
use nix::unistd::{chroot, execvpe, fchdir};

use crate::command::CommandSpec;
use crate::namespace::Namespace;

/// Kernel operations the namespace switch is made of, in the order they
/// get called.
pub trait Host {
    type Handle;

    /// Read-only open of a namespace file or directory.
    fn open(&mut self, path: &Path) -> nix::Result<Self::Handle>;

    fn setns(&mut self, handle: &Self::Handle, namespace: Namespace) -> nix::Result<()>;

    fn fchdir(&mut self, handle: &Self::Handle) -> nix::Result<()>;

    fn chroot(&mut self, path: &Path) -> nix::Result<()>;

    /// Only returns on failure.
    fn exec(&mut self, command: &CommandSpec, env: &[OsString]) -> nix::Result<Infallible>;
}

pub struct LinuxHost;

impl Host for LinuxHost {
    type Handle = File;

    // std opens with O_CLOEXEC, so the handles go away with the exec.
    fn open(&mut self, path: &Path) -> nix::Result<File> {
        File::open(path).map_err(|e| Errno::from_raw(e.raw_os_error().unwrap_or(Errno::EIO as i32)))
    }

    fn setns(&mut self, handle: &File, namespace: Namespace) -> nix::Result<()> {
        setns(handle, namespace.clone_flag())
    }

    fn fchdir(&mut self, handle: &File) -> nix::Result<()> {
        fchdir(handle.as_raw_fd())
    }

    fn chroot(&mut self, path: &Path) -> nix::Result<()> {
        chroot(path)
    }

    fn exec(&mut self, command: &CommandSpec, env: &[OsString]) -> nix::Result<Infallible> {
        let program = to_cstring(&command.program)?;
        let argv = command.argv.iter().map(to_cstring).collect::<nix::Result<Vec<_>>>()?;
        let env = env.iter().map(to_cstring).collect::<nix::Result<Vec<_>>>()?;
        execvpe(&program, &argv, &env)
    }
}

fn to_cstring(s: &OsString) -> nix::Result<CString> {
    CString::new(s.as_bytes()).map_err(|_| Errno::EINVAL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn open_missing_file_reports_enoent() {
        let dir = tempfile::tempdir().unwrap();
        let err = LinuxHost.open(&dir.path().join("1/ns/mnt")).unwrap_err();
        assert_eq!(err, Errno::ENOENT);
    }

    #[test]
    fn open_directory_for_root_handle() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("1/root")).unwrap();
        assert!(LinuxHost.open(&dir.path().join("1/root")).is_ok());
    }

    #[test]
    fn interior_nul_is_einval() {
        let command = CommandSpec {
            program: OsString::from("a\0b"),
            argv: vec![OsString::from("a\0b")],
        };
        let err = LinuxHost.exec(&command, &[]).unwrap_err();
        assert_eq!(err, Errno::EINVAL);
    }
}
