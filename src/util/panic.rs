/// Asserts that the provided block panics, without letting the panic escape the test.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "block was expected to panic but returned normally")
    };
    ($run:block, $msg:literal) => {
        assert!(std::panic::catch_unwind(|| $run).is_err(), $msg);
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
