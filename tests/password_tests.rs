use nova_backend::util::password::{PasswordError, PasswordUtils, PasswordUtilsImpl};

#[test]
fn test_hash_password_success() {
    let password = "correct horse battery staple";
    let hash = PasswordUtilsImpl::hash_password(password).expect("hashing should succeed");

    assert!(!hash.is_empty());
    assert_ne!(hash, password);
}

#[test]
fn test_hash_uses_bcrypt_with_cost_12() {
    let hash = PasswordUtilsImpl::hash_password("secret1").expect("hashing should succeed");
    // Modular crypt format: $2<minor>$<cost>$...
    assert!(hash.starts_with("$2"));
    assert!(hash.contains("$12$"), "unexpected cost in hash: {}", hash);
}

#[test]
fn test_verify_correct_password() {
    let password = "secret1";
    let hash = PasswordUtilsImpl::hash_password(password).expect("hashing should succeed");

    let valid = PasswordUtilsImpl::verify_password(password, &hash)
        .expect("verification should succeed");
    assert!(valid);
}

#[test]
fn test_verify_wrong_password() {
    let hash = PasswordUtilsImpl::hash_password("secret1").expect("hashing should succeed");

    let valid = PasswordUtilsImpl::verify_password("secret2", &hash)
        .expect("verification should succeed");
    assert!(!valid);
}

#[test]
fn test_same_password_hashes_differently() {
    // Random per-hash salt: two hashes of one password must differ, and both
    // must still verify.
    let password = "secret1";
    let first = PasswordUtilsImpl::hash_password(password).expect("hashing should succeed");
    let second = PasswordUtilsImpl::hash_password(password).expect("hashing should succeed");

    assert_ne!(first, second);
    assert!(PasswordUtilsImpl::verify_password(password, &first).unwrap());
    assert!(PasswordUtilsImpl::verify_password(password, &second).unwrap());
}

#[test]
fn test_hash_does_not_contain_plaintext() {
    let password = "veryrecognizablepassword";
    let hash = PasswordUtilsImpl::hash_password(password).expect("hashing should succeed");
    assert!(!hash.contains(password));
}

#[test]
fn test_verify_unicode_password() {
    let password = "pässwörd-日本語";
    let hash = PasswordUtilsImpl::hash_password(password).expect("hashing should succeed");

    assert!(PasswordUtilsImpl::verify_password(password, &hash).unwrap());
    assert!(!PasswordUtilsImpl::verify_password("pässwörd", &hash).unwrap());
}

#[test]
fn test_verify_rejects_non_bcrypt_hash() {
    let result = PasswordUtilsImpl::verify_password("secret1", "not-a-bcrypt-hash");
    assert!(matches!(result, Err(PasswordError::InvalidHashFormat)));
}

#[test]
fn test_verify_rejects_empty_hash() {
    let result = PasswordUtilsImpl::verify_password("secret1", "");
    assert!(matches!(result, Err(PasswordError::InvalidHashFormat)));
}
