use std::{io, process::ExitStatus, string::FromUtf8Error};
use thiserror::Error;

use crate::backend::QueryKind;

/// Failure of a single IPC query.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("`{program} -t {kind}` exited with {status}: {stderr}")]
    Failed {
        program: String,
        kind: QueryKind,
        status: ExitStatus,
        stderr: String,
    },

    #[error("{kind} reply was not valid UTF-8")]
    Utf8 {
        kind: QueryKind,
        #[source]
        source: FromUtf8Error,
    },

    #[error("failed to decode {kind} reply: {source}")]
    Decode {
        kind: QueryKind,
        #[source]
        source: serde_json::Error,
    },
}
