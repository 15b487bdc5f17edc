//! Document Compiler: LaTeX source to PDF through an external typesetter.
//!
//! Every compilation gets a fresh temporary directory owned by a `TempDir`
//! guard, so it is removed on every exit path, including timeouts and errors.

use std::path::Path;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::latex::validation::validate_latex;

const SOURCE_FILE: &str = "resume.tex";
const OUTPUT_FILE: &str = "resume.pdf";
const LOG_FILE: &str = "resume.log";
/// First pass lays out content, second resolves cross-references.
const PASSES: usize = 2;
const CHECK_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("LaTeX compiler (pdflatex) is not available on this system")]
    Unavailable,

    #[error("LaTeX validation failed: {}", .0.join("; "))]
    Invalid(Vec<String>),

    #[error("LaTeX compilation timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("{0}")]
    Failed(String),

    #[error("I/O error during compilation: {0}")]
    Io(#[from] std::io::Error),
}

/// One typesetting pass over `resume.tex` inside a working directory.
#[async_trait]
pub trait TypesetRunner: Send + Sync {
    async fn run_pass(&self, workdir: &Path) -> Result<(), CompileError>;
}

/// Runs `pdflatex` as a subprocess.
pub struct PdflatexRunner {
    binary: String,
}

impl PdflatexRunner {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// True when `<binary> --version` exits successfully within a few seconds.
    pub async fn check_available(&self) -> bool {
        let status = Command::new(&self.binary)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .status();

        match tokio::time::timeout(CHECK_TIMEOUT, status).await {
            Ok(Ok(status)) => status.success(),
            Ok(Err(e)) => {
                debug!("Typesetter check failed for {}: {e}", self.binary);
                false
            }
            Err(_) => {
                debug!("Typesetter check timed out for {}", self.binary);
                false
            }
        }
    }
}

#[async_trait]
impl TypesetRunner for PdflatexRunner {
    async fn run_pass(&self, workdir: &Path) -> Result<(), CompileError> {
        // A non-zero exit is expected when the source has errors; the presence
        // of the PDF decides success.
        let status = Command::new(&self.binary)
            .arg("-interaction=nonstopmode")
            .arg("-output-directory")
            .arg(workdir)
            .arg(SOURCE_FILE)
            .current_dir(workdir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .status()
            .await?;
        debug!("pdflatex pass exited with {status}");
        Ok(())
    }
}

#[derive(Clone)]
pub struct LatexCompiler {
    runner: Arc<dyn TypesetRunner>,
    /// Checked once at startup and never re-checked.
    available: bool,
    pass_timeout: Duration,
}

impl LatexCompiler {
    pub fn new(runner: Arc<dyn TypesetRunner>, available: bool, pass_timeout: Duration) -> Self {
        Self {
            runner,
            available,
            pass_timeout,
        }
    }

    /// Checks `binary` and builds a compiler around it.
    pub async fn detect(binary: &str, pass_timeout: Duration) -> Self {
        let runner = PdflatexRunner::new(binary);
        let available = runner.check_available().await;
        if available {
            info!("LaTeX compiler available: {binary}");
        } else {
            warn!("LaTeX compiler ({binary}) not found. PDF compilation will be unavailable.");
        }
        Self::new(Arc::new(runner), available, pass_timeout)
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub async fn compile(&self, source: &str) -> Result<Vec<u8>, CompileError> {
        if !self.available {
            return Err(CompileError::Unavailable);
        }

        let issues = validate_latex(source);
        if !issues.is_empty() {
            return Err(CompileError::Invalid(issues));
        }

        let workdir = tempfile::Builder::new().prefix("resume-latex-").tempdir()?;
        tokio::fs::write(workdir.path().join(SOURCE_FILE), source).await?;

        for pass in 1..=PASSES {
            match tokio::time::timeout(self.pass_timeout, self.runner.run_pass(workdir.path()))
                .await
            {
                Ok(result) => result?,
                Err(_) => {
                    warn!(pass, "LaTeX compilation timed out");
                    return Err(CompileError::Timeout(self.pass_timeout));
                }
            }
        }

        match tokio::fs::read(workdir.path().join(OUTPUT_FILE)).await {
            Ok(pdf) => {
                info!(bytes = pdf.len(), "LaTeX compilation succeeded");
                Ok(pdf)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let diagnostic = first_log_error(workdir.path()).await;
                warn!("LaTeX compilation failed: {diagnostic}");
                Err(CompileError::Failed(diagnostic))
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// First `!`-prefixed line of the typesetter log, or a generic message.
async fn first_log_error(workdir: &Path) -> String {
    let Ok(log) = tokio::fs::read(workdir.join(LOG_FILE)).await else {
        return "Compilation failed".to_string();
    };
    String::from_utf8_lossy(&log)
        .lines()
        .find(|line| line.starts_with('!'))
        .map(|line| line.trim_end().to_string())
        .unwrap_or_else(|| "Compilation failed".to_string())
}
