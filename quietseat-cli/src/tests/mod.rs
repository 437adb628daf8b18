//! Shared test harness modules for the quietseat CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;
use crate::decide::{
    DecideConfig, config_from_layers_for_test, execute_decide,
    load_decision_request, run_decide_with,
};

mod helpers;
