/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! Installing the global subscriber can only happen once per process, so it lives in
//! its own test binary.

use std::path::PathBuf;

use rand::Rng;
use serial_test::serial;
use seq_index::*;
use tracing_core::LevelFilter;

/// A log file path in the OS temp dir that no other test run shares.
fn scratch_log_path() -> PathBuf {
    let number: u32 = rand::rng().random_range(0..1_000_000);
    std::env::temp_dir().join(format!("seq-index-global-{number:06}.log"))
}

#[test]
#[serial]
fn test_install_global_logs_strategy_choices() {
    let file_path = scratch_log_path();
    let config = TracingConfig::new_file(file_path.to_str().unwrap(), LevelFilter::DEBUG);

    config.clone().install_global().unwrap();
    // There can only be one global subscriber.
    assert!(config.install_global().is_err());

    let data = vec![1, 2, 3];
    assert_eq!(element_at(&data, from_end(1)), Ok(&3));
    assert_eq!(element_at(Unindexed::new(1..4), from_end(1)), Ok(3));
    assert_eq!(slice(&data, Span::from(1..)).into_iter().count(), 2);

    let contents = std::fs::read_to_string(&file_path).unwrap();
    assert!(contents.contains("element_at: direct access"), "{contents}");
    assert!(contents.contains("element_at: single pass"), "{contents}");
    assert!(contents.contains("slice: direct access"), "{contents}");
    // Trace level events are filtered out at DEBUG.
    assert!(!contents.contains("trailing window"), "{contents}");

    std::fs::remove_file(&file_path).ok();
}
