use std::time::Duration;

use num_bigint::BigUint;
use sha2::Sha512;

use srp6a::groups::G_2048;
use srp6a::{
    create_verifier, create_verifier_and_salt, SrpClientSession, SrpConfig, SrpError,
    SrpParameters, SrpServerSession, SrpSession, UPadding, VerifierAndSalt,
};

fn config() -> SrpConfig<Sha512> {
    SrpConfig::new(SrpParameters::new(&G_2048))
}

#[test]
fn wrong_password_is_rejected() {
    let config = config();
    let salt = config.routines().generate_random_salt(16);
    let verifier = create_verifier(&config, "alice", &salt, b"password");

    let mut server = SrpServerSession::new(config.clone());
    let b_pub = server.step1("alice", &salt, &verifier).unwrap();

    let mut client = SrpClientSession::new(config.clone());
    client.step1("alice", b"password-diff").unwrap();
    let credentials = client.step2(&salt, &b_pub).unwrap();

    let err = server.step2(&credentials.a_pub, &credentials.m1).unwrap_err();
    assert_eq!(err, SrpError::BadClientCredentials);
    assert_eq!(err.to_string(), "bad client credentials");
    // no key was agreed on either side
    assert!(server.shared_key().is_err());
}

#[test]
fn tampered_server_evidence_is_rejected() {
    let config = config();
    let VerifierAndSalt { salt, verifier } =
        create_verifier_and_salt(&config, "alice", b"password", 16);

    let mut server = SrpServerSession::new(config.clone());
    let b_pub = server.step1("alice", &salt, &verifier).unwrap();

    let mut client = SrpClientSession::new(config.clone());
    client.step1("alice", b"password").unwrap();
    let credentials = client.step2(&salt, &b_pub).unwrap();

    let m2 = server.step2(&credentials.a_pub, &credentials.m1).unwrap();
    let tampered = m2 + 1u32;
    assert_eq!(
        client.step3(&tampered).unwrap_err(),
        SrpError::BadServerCredentials
    );
    assert!(client.shared_key().is_err());
}

#[test]
fn server_step2_not_from_step1() {
    let one = BigUint::from(1u32);
    let mut server = SrpServerSession::new(config());
    let err = server.step2(&one, &one).unwrap_err();
    assert_eq!(err.to_string(), "step2 not from step1");
}

#[test]
fn server_step1_not_from_init() {
    let config = config();
    let VerifierAndSalt { salt, verifier } =
        create_verifier_and_salt(&config, "pepi", b"password", 16);

    let mut server = SrpServerSession::new(config);
    server.step1("pepi", &salt, &verifier).unwrap();
    let err = server.step1("pepi", &salt, &verifier).unwrap_err();
    assert_eq!(err.to_string(), "step1 not from init");
}

#[test]
fn client_step_order_is_enforced() {
    let one = BigUint::from(1u32);

    let mut client = SrpClientSession::new(config());
    assert_eq!(
        client.step2(&one, &one).unwrap_err().to_string(),
        "step2 not from step1"
    );
    assert_eq!(
        client.step3(&one).unwrap_err().to_string(),
        "step3 not from step2"
    );

    client.step1("alice", b"password").unwrap();
    assert_eq!(
        client.step1("alice", b"password").unwrap_err().to_string(),
        "step1 not from init"
    );
    assert_eq!(
        client.step3(&one).unwrap_err().to_string(),
        "step3 not from step2"
    );
}

#[test]
fn degenerate_client_public_value_is_rejected() {
    let config = config();
    let zero = BigUint::from(0u32);
    let one = BigUint::from(1u32);
    let VerifierAndSalt { salt, verifier } =
        create_verifier_and_salt(&config, "pepi", b"password", 16);

    // A = 0 and A = N are both congruent to zero and must be refused
    for a_pub in [zero, config.parameters().n().clone()] {
        let mut server = SrpServerSession::new(config.clone());
        server.step1("pepi", &salt, &verifier).unwrap();
        let err = server.step2(&a_pub, &one).unwrap_err();
        assert_eq!(err, SrpError::IllegalParameter { name: "A" });
    }
}

#[test]
fn degenerate_server_public_value_is_rejected() {
    let config = config();
    let salt = config.routines().generate_random_salt(16);

    for b_pub in [BigUint::from(0u32), config.parameters().n().clone()] {
        let mut client = SrpClientSession::new(config.clone());
        client.step1("alice", b"password").unwrap();
        let err = client.step2(&salt, &b_pub).unwrap_err();
        assert_eq!(err, SrpError::IllegalParameter { name: "B" });
    }
}

#[test]
fn zero_verifier_is_rejected() {
    let config = config();
    let salt = config.routines().generate_random_salt(16);
    let mut server = SrpServerSession::new(config);
    let err = server
        .step1("alice", &salt, &BigUint::from(0u32))
        .unwrap_err();
    assert_eq!(err, SrpError::IllegalParameter { name: "v" });
}

#[test]
fn shared_key_is_write_once() {
    let config = config();
    let s = config.routines().generate_private_value();

    let mut session = SrpSession::new(config);
    assert_eq!(session.shared_key().unwrap_err(), SrpError::SharedKeyNotSet);
    assert_eq!(
        session.hashed_shared_key().unwrap_err(),
        SrpError::SharedKeyNotSet
    );

    session.set_shared_key(s.clone()).unwrap();
    assert_eq!(session.shared_key().unwrap(), &s);
    assert_eq!(session.shared_key().unwrap(), &s);

    assert_eq!(
        session.set_shared_key(s.clone()).unwrap_err(),
        SrpError::SharedKeyAlreadySet
    );

    let expected = session.config().routines().compute_session_key(&s);
    assert_eq!(session.hashed_shared_key().unwrap(), expected);
}

#[test]
fn verifier_is_deterministic() {
    let config = config();
    let salt = config.routines().generate_random_salt(16);
    let other_salt = config.routines().generate_random_salt(16);

    let v = create_verifier(&config, "alice", &salt, b"password");
    assert_eq!(v, create_verifier(&config, "alice", &salt, b"password"));
    assert_ne!(v, create_verifier(&config, "alice", &salt, b"passwore"));
    assert_ne!(v, create_verifier(&config, "alice", &other_salt, b"password"));

    // with the identity folded into x, it contributes as well
    let config = SrpConfig::<Sha512>::new(SrpParameters::with_options(
        &G_2048,
        UPadding::Unpadded,
        true,
    ));
    let v = create_verifier(&config, "alice", &salt, b"password");
    assert_eq!(v, create_verifier(&config, "alice", &salt, b"password"));
    assert_ne!(v, create_verifier(&config, "alicf", &salt, b"password"));
}

#[test]
fn expiry_is_advisory_metadata() {
    let stale = SrpSession::with_timeout(config(), Duration::ZERO);
    std::thread::sleep(Duration::from_millis(10));
    assert!(stale.is_expired());
    assert!(stale.expires_at() <= std::time::SystemTime::now());

    let fresh = SrpClientSession::new(config());
    assert!(!fresh.session().is_expired());
}
