#![cfg(feature = "tracing")]

use logging::{VerbosityConfig, init_tracing, trace_acl};

// One test per binary: the subscriber is process-global.
#[test]
fn installs_once_and_rejects_reinstallation() {
    let config = VerbosityConfig::from_verbose_level(3);

    init_tracing(config).expect("first installation succeeds");
    trace_acl!(ace_count = 2u16, "acl: header decoded");

    assert!(init_tracing(config).is_err());
}
