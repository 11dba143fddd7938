#![allow(dead_code)]

pub use taskqueue_test_utils::builders;
pub use taskqueue_test_utils::init_tracing;
