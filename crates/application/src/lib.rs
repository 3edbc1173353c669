//! iterdns application layer: ports, response classification and the
//! iterative resolution use case.
pub mod ports;
pub mod services;
pub mod use_cases;
