use std::io;
use vulnerable_binary::config::ConfigError;
use vulnerable_binary::probe::ProbeError;

fn create_exited_error() -> ProbeError {
    ProbeError::Exited {
        code: Some(1),
        stdout: b"Pinging 127.0.0.1".to_vec(),
        stderr: b"request timed out".to_vec(),
    }
}

#[test]
fn test_probe_error_is_launch_failure() {
    let spawn_error = ProbeError::Spawn(io::Error::new(io::ErrorKind::NotFound, "not found"));
    assert!(spawn_error.is_launch_failure());

    let exited = create_exited_error();
    assert!(!exited.is_launch_failure()); // The child ran
}

#[test]
fn test_probe_error_captured_stdout() {
    let spawn_error = ProbeError::Spawn(io::Error::new(
        io::ErrorKind::PermissionDenied,
        "permission denied",
    ));
    assert!(spawn_error.captured_stdout().is_empty());
    assert!(spawn_error.into_stdout().is_empty());

    let exited = create_exited_error();
    assert_eq!(exited.captured_stdout(), b"Pinging 127.0.0.1");
    assert_eq!(exited.into_stdout(), b"Pinging 127.0.0.1".to_vec());
}

#[test]
fn test_probe_error_error_category() {
    let spawn_error = ProbeError::from(io::Error::new(io::ErrorKind::NotFound, "not found"));
    assert_eq!(spawn_error.error_category(), "LAUNCH");

    let exited = create_exited_error();
    assert_eq!(exited.error_category(), "EXIT");
}

#[test]
fn test_probe_error_display() {
    let spawn_error = ProbeError::Spawn(io::Error::new(io::ErrorKind::NotFound, "not found"));
    assert_eq!(
        spawn_error.to_string(),
        "Failed to launch probe process: not found"
    );

    let killed = ProbeError::Exited {
        code: None,
        stdout: Vec::new(),
        stderr: Vec::new(),
    };
    assert_eq!(
        killed.to_string(),
        "Probe process exited unsuccessfully (code: None)"
    );
}

#[test]
fn test_config_error_key() {
    let invalid_bool = ConfigError::InvalidBool {
        key: "VULNERABLE_BINARY_VERBOSE",
        value: "loud".to_string(),
    };
    assert_eq!(invalid_bool.key(), "VULNERABLE_BINARY_VERBOSE");

    let unknown_mode = ConfigError::UnknownProbeMode {
        key: "VULNERABLE_BINARY_PROBE_MODE",
        value: "shell".to_string(),
    };
    assert_eq!(unknown_mode.key(), "VULNERABLE_BINARY_PROBE_MODE");
    assert!(unknown_mode.to_string().contains("'shell'"));
}
