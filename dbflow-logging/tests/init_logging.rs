use dbflow_logging::init_logging;

#[test]
fn test_init_logging() {
    let res = init_logging();

    assert!(res.is_ok());

    // the logger can only be installed once per process
    assert!(init_logging().is_err());
}
