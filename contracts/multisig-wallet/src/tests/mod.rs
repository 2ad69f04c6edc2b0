
pub mod execution_test;
