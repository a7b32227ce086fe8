use serde::Deserialize;
use std::{fmt, process::Command};
use tracing::debug;

use crate::error::QueryError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryKind {
    WorkspaceConfig,
    Workspaces,
    Windows,
}

impl QueryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            QueryKind::WorkspaceConfig => "get_workspace_config",
            QueryKind::Workspaces => "get_workspaces",
            QueryKind::Windows => "get_windows",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything that can answer a window manager query with a JSON document.
pub trait QuerySource {
    fn fetch(&self, kind: QueryKind) -> Result<String, QueryError>;
}

pub struct SpatialMsg {
    program: String,
}

impl SpatialMsg {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl QuerySource for SpatialMsg {
    fn fetch(&self, kind: QueryKind) -> Result<String, QueryError> {
        debug!(program = %self.program, query = %kind, "running ipc query");
        let output = Command::new(&self.program)
            .args(["-t", kind.as_str()])
            .output()
            .map_err(|source| QueryError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(QueryError::Failed {
                program: self.program.clone(),
                kind,
                status: output.status,
                stderr: stderr.trim().to_string(),
            });
        }
        String::from_utf8(output.stdout).map_err(|source| QueryError::Utf8 { kind, source })
    }
}

pub fn query<T: for<'de> Deserialize<'de>>(
    source: &dyn QuerySource,
    kind: QueryKind,
) -> Result<T, QueryError> {
    let text = source.fetch(kind)?;
    debug!(query = %kind, bytes = text.len(), "decoding reply");
    serde_json::from_str(&text).map_err(|source| QueryError::Decode { kind, source })
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Answers every query with the same canned reply.
    pub struct CannedSource {
        pub kind: QueryKind,
        pub reply: &'static str,
    }

    impl CannedSource {
        pub fn new(kind: QueryKind, reply: &'static str) -> Self {
            Self { kind, reply }
        }
    }

    impl QuerySource for CannedSource {
        fn fetch(&self, kind: QueryKind) -> Result<String, QueryError> {
            assert_eq!(kind, self.kind, "unexpected query");
            Ok(self.reply.to_string())
        }
    }
}
