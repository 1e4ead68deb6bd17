use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;
use transcript_fixer::{BatchReport, FileStatus};

/// Scratch repository root with an empty `_data/transcripts` directory
pub struct TestRepo {
    root: TempDir,
}

impl TestRepo {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temporary repository root");
        std::fs::create_dir_all(root.path().join("_data").join("transcripts"))
            .expect("create transcript dir");
        Self { root }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn transcript_path(&self, name: &str) -> PathBuf {
        self.root.path().join("_data").join("transcripts").join(name)
    }

    pub fn write(&self, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.transcript_path(name);
        std::fs::write(&path, content).expect("write transcript");
        path
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.transcript_path(name)).expect("read transcript")
    }

    #[allow(dead_code)]
    pub fn run(&self, args: &[&str]) -> Output {
        self.run_from(self.root.path(), args)
    }

    /// Run the binary with `cwd` as working directory instead of the repo root
    #[allow(dead_code)]
    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_transcript-fixer"))
            .args(args)
            .current_dir(cwd)
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .output()
            .expect("failed to execute transcript-fixer binary")
    }
}

/// Status recorded for `file` in a batch report
#[allow(dead_code)]
pub fn status_of<'a>(report: &'a BatchReport, file: &str) -> Option<&'a FileStatus> {
    report.files.iter().find(|f| f.file == file).map(|f| &f.status)
}
