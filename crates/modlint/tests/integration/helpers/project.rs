use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use tempfile::TempDir;

/// A throwaway project directory to run `modlint lint` in.
pub struct Project {
    directory: TempDir,
}

impl Project {
    /// Create a project holding `files`, given as (relative path, contents).
    pub fn new(files: &[(&str, &str)]) -> anyhow::Result<Self> {
        let project = Self { directory: TempDir::new()? };
        for (path, contents) in files {
            project.write(path, contents)?;
        }
        Ok(project)
    }

    pub fn path(&self) -> &Path {
        self.directory.path()
    }

    pub fn write(&self, path: &str, contents: &str) -> anyhow::Result<()> {
        let path = self.path().join(path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// `modlint lint` from the project directory.
    pub fn lint(&self) -> Lint {
        self.lint_from("")
    }

    /// `modlint lint` from a subdirectory of the project.
    pub fn lint_from(&self, subdirectory: &str) -> Lint {
        let mut command = Command::new(env!("CARGO_BIN_EXE_modlint"));
        // The environment of the test process must not leak into the run.
        command
            .current_dir(self.path().join(subdirectory))
            .env_remove("module")
            .env_remove("MODLINT_LOG")
            .env("NO_COLOR", "1")
            .arg("lint");
        Lint { command, root: self.path().to_path_buf() }
    }
}

pub struct Lint {
    command: Command,
    root: PathBuf,
}

impl Lint {
    pub fn arg(&mut self, arg: &str) -> &mut Self {
        self.command.arg(arg);
        self
    }

    pub fn args<const N: usize>(&mut self, args: [&str; N]) -> &mut Self {
        self.command.args(args);
        self
    }

    pub fn module(&mut self, module: &str) -> &mut Self {
        self.command.env("module", module);
        self
    }

    pub fn concise(&mut self) -> &mut Self {
        self.args(["--output-format", "concise"])
    }

    /// Wait for the run to finish. The project directory is replaced by
    /// `[ROOT]` in the captured output.
    pub fn run(&mut self) -> RunOutput {
        let output = self.command.output().expect("Failed to spawn modlint");

        // Canonical first: on macOS it extends the plain temp path.
        let mut roots = Vec::new();
        if let Ok(canonical) = self.root.canonicalize() {
            roots.push(canonical.display().to_string());
        }
        roots.push(self.root.display().to_string());
        let redact = |bytes: &[u8]| {
            let mut text = String::from_utf8_lossy(bytes).into_owned();
            for root in &roots {
                text = text.replace(root.as_str(), "[ROOT]");
            }
            text
        };

        let arguments = self
            .command
            .get_args()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ");

        RunOutput {
            status: output.status,
            stdout: redact(&output.stdout),
            stderr: redact(&output.stderr),
            arguments,
        }
    }
}

/// What a run printed, displayed in a form fit for `insta` snapshots.
pub struct RunOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
    pub arguments: String,
}

impl RunOutput {
    pub fn exit_code(&self) -> i32 {
        self.status.code().unwrap_or(-1)
    }

    pub fn success(&self) -> bool {
        self.status.success()
    }
}

impl fmt::Display for RunOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `NO_COLOR` is set, but a stray escape code would make snapshots unreadable.
        let ansi = regex::Regex::new(r"\x1b\[[0-9;]*m").map_err(|_| fmt::Error)?;
        write!(
            f,
            "
success: {:?}
exit_code: {}
----- stdout -----
{}
----- stderr -----
{}
----- args -----
{}",
            self.success(),
            self.exit_code(),
            ansi.replace_all(&self.stdout, ""),
            ansi.replace_all(&self.stderr, ""),
            self.arguments,
        )
    }
}
