mod search_flow_tests;
mod suggest_tests;
pub mod support;
