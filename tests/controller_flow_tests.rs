//! Intent-Level-Tests durch Controller und State, nach Feature aufgeteilt.

#[path = "controller_flow_tests/common.rs"]
mod common;
#[path = "controller_flow_tests/reorder.rs"]
mod reorder;
#[path = "controller_flow_tests/selection_and_flags.rs"]
mod selection_and_flags;
#[path = "controller_flow_tests/view.rs"]
mod view;
