//! Rendering of check outcomes and failures

use archcheck_registry::{CheckOutcome, EmptyReason, RegistryError, RegistryKind};

use crate::output;

/// How a report line is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// ✓ on stdout
    Success,
    /// ✗ on stdout
    Failure,
    /// ✗ on stderr
    Error,
    /// ⚠ on stderr
    Warning,
    Plain,
    PlainErr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub mark: Mark,
    pub text: String,
}

impl Line {
    fn new(mark: Mark, text: impl Into<String>) -> Self {
        Self {
            mark,
            text: text.into(),
        }
    }

    /// Unstyled text as it appears on the terminal
    pub fn plain_text(&self) -> String {
        match self.mark {
            Mark::Success => format!("✓ {}", self.text),
            Mark::Failure | Mark::Error => format!("✗ {}", self.text),
            Mark::Warning => format!("⚠ {}", self.text),
            Mark::Plain | Mark::PlainErr => self.text.clone(),
        }
    }

    pub fn is_stderr(&self) -> bool {
        matches!(self.mark, Mark::Error | Mark::Warning | Mark::PlainErr)
    }
}

/// Everything the binary prints for one run, plus its exit status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub lines: Vec<Line>,
    pub exit_code: i32,
}

impl Report {
    pub fn from_outcome(outcome: &CheckOutcome) -> Self {
        let lines = match outcome {
            CheckOutcome::Supported {
                image, registry, ..
            } => vec![Line::new(
                Mark::Success,
                format!(
                    "Image {} ({}) supports all required architectures",
                    image,
                    registry.label()
                ),
            )],
            CheckOutcome::Missing {
                image,
                registry,
                architectures,
                missing,
            } => vec![
                Line::new(
                    Mark::Failure,
                    format!(
                        "Image {} ({}) is missing architectures: {}",
                        image,
                        registry.label(),
                        missing.join(", ")
                    ),
                ),
                Line::new(
                    Mark::Plain,
                    format!("Available architectures: {}", architectures.join(", ")),
                ),
            ],
            CheckOutcome::NotAnImage {
                image,
                registry,
                reason,
            } => vec![not_an_image(image, *registry, *reason)],
            CheckOutcome::NoArchitectures { image, .. } => vec![Line::new(
                Mark::PlainErr,
                format!("No architectures found for {}", image),
            )],
        };

        Self {
            lines,
            exit_code: outcome.exit_code(),
        }
    }

    pub fn from_error(err: &RegistryError) -> Self {
        let lines = match err {
            RegistryError::UnsupportedRegistry { .. } => vec![
                Line::new(Mark::Error, err.to_string()),
                Line::new(
                    Mark::PlainErr,
                    "Supported registries: DockerHub, ghcr.io, quay.io",
                ),
            ],
            RegistryError::InvalidReference { .. } => vec![Line::new(Mark::Error, err.to_string())],
            _ => vec![Line::new(Mark::PlainErr, err.to_string())],
        };

        Self {
            lines,
            exit_code: 1,
        }
    }

    pub fn print(&self) {
        for line in &self.lines {
            match line.mark {
                Mark::Success => output::success(&line.text),
                Mark::Failure => output::failure(&line.text),
                Mark::Error => output::error(&line.text),
                Mark::Warning => output::warning(&line.text),
                Mark::Plain => output::plain(&line.text),
                Mark::PlainErr => output::plain_err(&line.text),
            }
        }
    }
}

fn not_an_image(image: &str, registry: RegistryKind, reason: EmptyReason) -> Line {
    let what = match reason {
        EmptyReason::HelmChart => "a Helm chart",
        EmptyReason::OciArtifact | EmptyReason::Unrecognized => "an OCI artifact",
    };
    Line::new(
        Mark::Warning,
        format!(
            "{} ({}) is {}, not a container image",
            image,
            registry.label(),
            what
        ),
    )
}
