// /////////////////////////////////////////////////////////////////////////////
// jsonshard
// Copyright (c) 2026 Michael Gardner, A Bit of Help, Inc.
// SPDX-License-Identifier: BSD-3-Clause
// See LICENSE file in the project root.
// /////////////////////////////////////////////////////////////////////////////

//! # Exit Codes
//!
//! Maps every [`JsonShardError`] variant to a distinct process exit code so
//! calling scripts can branch on failure class without parsing stderr.

use jsonshard_domain::JsonShardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    GenericError = 1,
    ConfigError = 2,
    SourceIoError = 3,
    SinkIoError = 4,
    ParseError = 5,
    Cancelled = 6,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

/// Classifies an error for the process exit code. `Cancelled` is inspected
/// recursively: a cancellation caused by a recorded source error exits as
/// that source error's own code, since that's the failure an operator
/// actually needs to see, not "cancelled".
pub fn map_error_to_exit_code(err: &JsonShardError) -> ExitCode {
    match err {
        JsonShardError::Config(_) => ExitCode::ConfigError,
        JsonShardError::SourceIo(_) => ExitCode::SourceIoError,
        JsonShardError::SinkIo(_) => ExitCode::SinkIoError,
        JsonShardError::Parse(_) => ExitCode::ParseError,
        JsonShardError::Cancelled { reason: Some(reason) } => map_error_to_exit_code(reason),
        JsonShardError::Cancelled { reason: None } => ExitCode::Cancelled,
    }
}

/// Converts a pipeline result into a process exit code, printing a single
/// diagnostic line to stderr on failure.
pub fn result_to_exit_code(result: Result<(), JsonShardError>) -> std::process::ExitCode {
    match result {
        Ok(()) => ExitCode::Success.into(),
        Err(err) => {
            eprintln!("jsonshard: {err}");
            map_error_to_exit_code(&err).into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_each_variant_to_its_documented_code() {
        assert_eq!(map_error_to_exit_code(&JsonShardError::config("x")), ExitCode::ConfigError);
        assert_eq!(map_error_to_exit_code(&JsonShardError::source_io("x")), ExitCode::SourceIoError);
        assert_eq!(map_error_to_exit_code(&JsonShardError::sink_io("x")), ExitCode::SinkIoError);
        assert_eq!(map_error_to_exit_code(&JsonShardError::parse("x")), ExitCode::ParseError);
        assert_eq!(map_error_to_exit_code(&JsonShardError::cancelled(None)), ExitCode::Cancelled);
    }

    #[test]
    fn cancellation_wrapping_a_source_error_exits_as_source_io() {
        let err = JsonShardError::cancelled(Some(JsonShardError::source_io("disk unplugged")));
        assert_eq!(map_error_to_exit_code(&err), ExitCode::SourceIoError);
    }

    #[test]
    fn success_maps_to_zero() {
        let code: std::process::ExitCode = ExitCode::Success.into();
        assert_eq!(format!("{code:?}"), format!("{:?}", std::process::ExitCode::from(0u8)));
    }
}
