pub mod demo;
pub mod naive;
pub mod report;
pub mod timing;
pub mod verify;
pub mod workload;
