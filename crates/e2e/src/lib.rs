// <crate>/tests signals to Cargo that files inside of it are integration tests.
// Integration tests are compiled into separate binaries which is slow. To avoid
// this we create one integration test binary and include all the tests we want
// to run in it. This library holds what those tests share.

pub mod setup;
