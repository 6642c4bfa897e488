use std::path::PathBuf;

pub const DEFAULT_PROC_ROOT: &str = "/proc";
pub const DEFAULT_TARGET_PID: u32 = 1;
pub const DEFAULT_SHELL: &str = "/bin/sh";

/// Fixed for the lifetime of the process. There are no flags or config
/// files; tests build their own to point at a fake proc tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub proc_root: PathBuf,
    pub target_pid: u32,
    pub shell: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            proc_root: PathBuf::from(DEFAULT_PROC_ROOT),
            target_pid: DEFAULT_TARGET_PID,
            shell: PathBuf::from(DEFAULT_SHELL),
        }
    }
}

impl Config {
    /// `<proc_root>/<pid>`, used in diagnostics.
    pub fn target_dir(&self) -> PathBuf {
        self.proc_root.join(self.target_pid.to_string())
    }

    pub fn root_path(&self) -> PathBuf {
        self.target_dir().join("root")
    }
}
