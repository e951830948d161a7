//! Shared test helpers for integration tests
//!
//! This module provides common utilities used across all test files.

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;
use elb::entities::Engine;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A home directory with no config in it, so the user's own settings never leak in
pub fn empty_home() -> PathBuf {
    Path::new(env!("CARGO_TARGET_TMPDIR")).join("elb-empty-home")
}

/// Helper to get an elb command with logging and user config neutralised
pub fn elb() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("elb"));
    let home = empty_home();
    cmd.env_remove("ELB_LOG")
        .env_remove("RUST_LOG")
        .env_remove("ELB_WARNING_THRESHOLD")
        .env_remove("ELB_HOUR_POLICY")
        .env("HOME", &home)
        .env("XDG_CONFIG_HOME", home.join(".config"));
    cmd
}

/// A sample engine: Core(Compressor(Stage 1, Stage 2), Shaft), Turbine(Blade, Disk), Starter
///
/// Stage 1 is at its life limit, Blade is inside the 50 h warning margin.
pub const SAMPLE_ENGINE: &str = r#"name: GTE-100
serial_number: ENG-0001
total_hours: 450
total_cycles: 12
components:
  - id: "1"
    description: Core
    part_number: C-1
    serial_number: SN-CORE
    current_hours: 450
    children:
      - id: "2"
        description: Compressor
        part_number: CP-1
        serial_number: SN-COMP
        current_hours: 450
        children:
          - id: "3"
            description: Stage 1
            part_number: ST1-1
            serial_number: SN-STAGE1
            current_hours: 500
            life_limit: 500
          - id: "4"
            description: Stage 2
            part_number: ST2-1
            serial_number: SN-STAGE2
            current_hours: 450
      - id: "5"
        description: Shaft
        part_number: SH-1
        serial_number: SN-SHAFT
        current_hours: 450
  - id: "6"
    description: Turbine
    part_number: T-1
    serial_number: SN-TURB
    current_hours: 450
    children:
      - id: "7"
        description: Blade
        part_number: B-1
        serial_number: SN-BLADE
        current_hours: 450
        life_limit: 480
      - id: "8"
        description: Disk
        part_number: D-1
        serial_number: SN-DISK
        current_hours: 450
  - id: "9"
    description: Starter
    part_number: S-1
    serial_number: SN-START
    current_hours: 120
"#;

/// Write the sample engine into a temp directory and return its path
pub fn setup_engine() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("engine.yaml");
    fs::write(&path, SAMPLE_ENGINE).unwrap();
    (tmp, path)
}

/// Write an arbitrary file into the temp directory
pub fn write_file(tmp: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = tmp.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Load the engine document back for assertions
pub fn read_engine(path: &Path) -> Engine {
    elb::core::document::load(path).unwrap()
}
