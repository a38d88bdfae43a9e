use clap::ValueEnum;
use cmakelint_core::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Print findings as `file:line: message [category]`, one per line
    #[default]
    Concise,
    /// Print findings as JSON
    Json,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Concise => write!(f, "concise"),
            Self::Json => write!(f, "json"),
        }
    }
}

pub trait Emitter {
    fn emit<W: Write>(&self, writer: &mut W, diagnostics: &[Diagnostic]) -> anyhow::Result<()>;
}

pub struct ConciseEmitter;

impl Emitter for ConciseEmitter {
    fn emit<W: Write>(&self, writer: &mut W, diagnostics: &[Diagnostic]) -> anyhow::Result<()> {
        for diagnostic in diagnostics {
            writeln!(writer, "{diagnostic}")?;
        }
        Ok(())
    }
}

pub struct JsonEmitter;

impl Emitter for JsonEmitter {
    fn emit<W: Write>(&self, writer: &mut W, diagnostics: &[Diagnostic]) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, diagnostics)?;
        writeln!(writer)?;
        Ok(())
    }
}
