use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, $msg:literal) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            $msg
        );
        println!("^ panic caught");
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;

/// Runs `run`, returning the message it panicked with, or None if it completed normally.
#[allow(unused)]
pub(crate) fn panic_message<R>(run: impl FnOnce() -> R) -> Option<String> {
    panic::catch_unwind(AssertUnwindSafe(run))
        .err()
        .map(|payload| payload_str(&*payload))
}

fn payload_str(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else {
        String::from("<non-string panic payload>")
    }
}
