#![allow(dead_code)]
pub mod constants;

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use s2f_record::RecordSnapshot;

/// A scratch directory, also used as $HOME so that no real config file
/// is picked up.
pub struct Sandbox {
    pub root: PathBuf,
}

impl Sandbox {
    pub fn new(name: &str) -> Result<Self> {
        let root = std::env::temp_dir().join(format!("s2f-it-{}-{}", std::process::id(), name));
        let _ = std::fs::remove_dir_all(&root);
        std::fs::create_dir_all(&root).context("sandbox must be created")?;
        Ok(Self { root })
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Command ready to run the binary with a clean environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_sendmail2file"));
        cmd.env("HOME", &self.root)
            .env_remove("SENDMAIL2FILE_CONFIG")
            .env_remove("SENDMAIL2FILE_FILE")
            .env("RUST_LOG", "sendmail2file=debug");
        cmd
    }
}

impl Drop for Sandbox {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}

/// Run `cmd` with `email` on its standard input.
pub fn pipe_email(mut cmd: Command, email: &[u8]) -> Result<Output> {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .context("binary must start")?;

    let mut stdin = child.stdin.take().context("stdin must be piped")?;
    match stdin.write_all(email) {
        // the binary may fail and exit before reading its input
        Err(e) if e.kind() != std::io::ErrorKind::BrokenPipe => {
            return Err(e).context("email must be written to stdin")
        }
        _ => (),
    }
    drop(stdin);

    child.wait_with_output().context("binary must exit")
}

pub fn read_records(path: &Path) -> Result<Vec<RecordSnapshot>> {
    let content = std::fs::read_to_string(path)?;
    content
        .lines()
        .map(|l| serde_json::from_str(l).with_context(|| format!("'{}' must be a JSON record", l)))
        .collect()
}

pub fn file_len(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
