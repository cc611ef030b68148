#[cfg(test)]
mod common;

#[cfg(test)]
mod http_backend_tests;

#[cfg(test)]
mod orchestrator_tests;

#[cfg(test)]
mod session_flow_tests;
