//! Reading parameters before any selection
//!
//! Kept in its own test binary so no other test can select first.

use doge_params::{params, try_params, Error};

#[test]
fn test_read_before_selection() {
    assert_eq!(try_params().unwrap_err(), Error::ParamsNotSelected);

    let result = std::panic::catch_unwind(params);
    assert!(result.is_err());
}
