pub mod recap_testkit;
