#![cfg(test)]

/// Runs `$code` and checks that it panics, with a message containing `$msg` if given.
macro_rules! assert_should_panic {
    ($msg:expr, $code:block) => {{
        let res = ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| $code));

        match res {
            Ok(_) => panic!("test expected to panic but didn't"),
            Err(err) => {
                if let Some(msg) = err.downcast_ref::<String>() {
                    assert!(msg.contains($msg), "unexpected panic message: {}", msg);
                } else if let Some(&msg) = err.downcast_ref::<&str>() {
                    assert!(msg.contains($msg), "unexpected panic message: {}", msg);
                } else {
                    panic!("couldn't decipher the panic message of the test")
                }
            }
        }
    }};

    ($code:block) => {{
        let res = ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| $code));

        if res.is_ok() {
            panic!("test expected to panic but didn't");
        }
    }};
}
