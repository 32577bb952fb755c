//! CLI response formatting and output.
//!
//! Provides JSON envelope, printing, and exit code mapping.

use quickstruct::error::Hint;
use quickstruct::{Error, ErrorCode, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CliError>,
}

#[derive(Debug, Serialize)]
pub struct CliError {
    pub code: String,
    pub message: String,
    pub details: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<Vec<Hint>>,
}

impl<T: Serialize> CliResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            Error::internal_json(e.to_string(), Some("serialize response".to_string()))
        })
    }
}

impl CliResponse<()> {
    pub fn from_error(err: &Error) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(CliError {
                code: err.code.as_str().to_string(),
                message: err.message.clone(),
                details: err.details.clone(),
                hints: if err.hints.is_empty() {
                    None
                } else {
                    Some(err.hints.clone())
                },
            }),
        }
    }
}

fn print_response<T: Serialize>(response: &CliResponse<T>) -> Result<()> {
    use std::io::{self, Write};

    let payload = response.to_json()?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", payload) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return Ok(()); // Exit gracefully on SIGPIPE
        }
        return Err(Error::internal_io(
            e.to_string(),
            Some("write stdout".to_string()),
        ));
    }
    Ok(())
}

pub fn map_cmd_result_to_json<T: Serialize>(
    result: Result<(T, i32)>,
) -> (Result<serde_json::Value>, i32) {
    match result {
        Ok((data, exit_code)) => match serde_json::to_value(data) {
            Ok(value) => (Ok(value), exit_code),
            Err(err) => (
                Err(Error::internal_json(
                    err.to_string(),
                    Some("serialize response".to_string()),
                )),
                1,
            ),
        },
        Err(err) => {
            let exit_code = exit_code_for_error(err.code);
            (Err(err), exit_code)
        }
    }
}

pub fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ValidationInvalidName | ErrorCode::ValidationInvalidArgument => 2,

        ErrorCode::WorkspaceNotOpen => 3,

        ErrorCode::FileWriteFailed => 5,

        ErrorCode::InternalIoError | ErrorCode::InternalJsonError => 1,
    }
}

pub fn print_json_result(result: Result<serde_json::Value>) -> Result<()> {
    match result {
        Ok(data) => print_response(&CliResponse::success(data)),
        Err(err) => print_response(&CliResponse::<()>::from_error(&err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_write_failed_serializes_path_and_code() {
        let err = Error::file_write_failed(
            "/theme/sections/hero.liquid",
            "Permission denied",
            vec!["/theme/assets/hero-stylesheet.css".to_string()],
        );

        let json = CliResponse::<()>::from_error(&err).to_json().unwrap();

        assert!(json.contains("\"code\": \"file.write_failed\""));
        assert!(json.contains("/theme/sections/hero.liquid"));
        assert!(json.contains("hero-stylesheet.css"));
        assert!(json.contains("\"success\": false"));
    }

    #[test]
    fn hints_are_omitted_when_empty() {
        let err = Error::validation_invalid_name("x", "too long");
        let json = CliResponse::<()>::from_error(&err).to_json().unwrap();
        assert!(!json.contains("hints"));
    }

    #[test]
    fn error_codes_map_to_exit_codes() {
        let cases = [
            (Error::workspace_not_open(), 3),
            (Error::validation_invalid_name("x", "bad"), 2),
            (Error::file_write_failed("p", "e", Vec::new()), 5),
            (Error::internal_io("e", None), 1),
        ];
        for (err, expected) in cases {
            let (_value, exit_code) = map_cmd_result_to_json::<serde_json::Value>(Err(err));
            assert_eq!(exit_code, expected);
        }
    }

    #[test]
    fn success_keeps_command_exit_code() {
        let (value, exit_code) = map_cmd_result_to_json(Ok((serde_json::json!({"a": 1}), 0)));
        assert_eq!(exit_code, 0);
        assert_eq!(value.unwrap()["a"], 1);
    }
}
