#![allow(dead_code)]

use indoc::indoc;
use serde_json::Value;
use slashcmd::config::parse_grammar;
use slashcmd::dispatch::{Outcome, Success};

/// Grammar shared by the integration tests.
pub const GRAMMAR: &str = indoc! {"
    commands:
      - name: order
        aliases: gimme
        commands:
          - name: pizza
            result:
              action: 310
          - name: nachos
            aliases: [chips, cheese]
            result:
              action: 311
      - name: package
        result:
          pipeline: 340
        package_aliases:
          - aliases: [tizen, tizen-nacl]
            platforms: [tizen-nacl_armv7, tizen-nacl_x86_32, tizen-nacl_x86_64]
          - aliases: [linux]
            platforms: [linux, linuxcxx11]
      - name: rebuild
        commands:
          - name: everything
            result:
              pipeline: 339
      - name: coverage
        result:
          pipeline: 341
"};

pub fn document(yaml: &str) -> Value {
    parse_grammar(yaml).unwrap()
}

pub fn assert_success(outcome: Outcome) -> Success {
    match outcome {
        Outcome::Success(success) => success,
        Outcome::Failure(failure) => panic!("expected Success, got: {}", failure.message),
    }
}

pub fn assert_failure(outcome: Outcome) -> String {
    match outcome {
        Outcome::Failure(failure) => failure.message,
        Outcome::Success(success) => panic!("expected Failure, got {success:?}"),
    }
}
