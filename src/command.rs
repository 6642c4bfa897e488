use std::env;
use std::ffi::OsString;
use std::path::Path;

/// The program to exec and its full argv (argv[0] included).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: OsString,
    pub argv: Vec<OsString>,
}

impl CommandSpec {
    /// `shell` with an argv of just itself.
    pub fn shell(shell: &Path) -> Self {
        let shell = shell.as_os_str().to_os_string();
        CommandSpec {
            program: shell.clone(),
            argv: vec![shell],
        }
    }

    /// Resolve from this process's own argv. With at least one extra
    /// argument, the first extra one is the program and stays in argv.
    pub fn resolve<I>(args: I, shell: &Path) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        let argv: Vec<OsString> = args.into_iter().skip(1).collect();
        match argv.first() {
            Some(program) => CommandSpec {
                program: program.clone(),
                argv,
            },
            None => CommandSpec::shell(shell),
        }
    }
}

/// This process's environment as `KEY=VALUE` entries, in order, for the
/// new image.
pub fn inherited_env() -> Vec<OsString> {
    env::vars_os()
        .map(|(key, value)| {
            let mut entry = key;
            entry.push("=");
            entry.push(value);
            entry
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn no_arguments_runs_the_shell() {
        let spec = CommandSpec::resolve(os(&["nsenter1"]), Path::new("/bin/sh"));
        assert_eq!(spec.program, OsString::from("/bin/sh"));
        assert_eq!(spec.argv, os(&["/bin/sh"]));
    }

    #[test]
    fn arguments_pass_through_including_program() {
        let spec = CommandSpec::resolve(os(&["nsenter1", "/bin/ls", "-la", "/tmp"]), Path::new("/bin/sh"));
        assert_eq!(spec.program, OsString::from("/bin/ls"));
        assert_eq!(spec.argv, os(&["/bin/ls", "-la", "/tmp"]));
    }

    #[test]
    fn bare_name_is_kept_for_path_lookup() {
        let spec = CommandSpec::resolve(os(&["nsenter1", "docker"]), Path::new("/bin/sh"));
        assert_eq!(spec.program, OsString::from("docker"));
        assert_eq!(spec.argv, os(&["docker"]));
    }

    #[test]
    fn empty_argv_falls_back_to_shell() {
        let spec = CommandSpec::resolve(Vec::new(), Path::new("/bin/bash"));
        assert_eq!(spec, CommandSpec::shell(Path::new("/bin/bash")));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_arguments_survive() {
        use std::os::unix::ffi::OsStringExt;
        let odd = OsString::from_vec(vec![b'a', 0xff, b'b']);
        let spec = CommandSpec::resolve(vec![OsString::from("nsenter1"), OsString::from("echo"), odd.clone()], Path::new("/bin/sh"));
        assert_eq!(spec.argv[1], odd);
    }

    #[test]
    fn inherited_env_keeps_every_variable() {
        let env = inherited_env();
        assert_eq!(env.len(), env::vars_os().count());
        if let Some(path) = env::var_os("PATH") {
            let mut entry = OsString::from("PATH=");
            entry.push(path);
            assert!(env.contains(&entry));
        }
    }
}
