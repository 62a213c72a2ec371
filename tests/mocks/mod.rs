pub mod failing_backend;
