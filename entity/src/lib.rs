pub mod employees;
