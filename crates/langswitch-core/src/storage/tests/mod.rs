pub mod roots_tests;
