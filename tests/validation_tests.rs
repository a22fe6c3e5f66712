//! Black-box checks of the validation rules through the crate's public API.

use nova_backend::dto::account_dto::{AccountValidationError, LoginRequest, RegisterRequest};
use nova_backend::dto::item_dto::{ItemSubmission, ItemValidationError};
use nova_backend::model::item::Category;
use nova_backend::util::upload::{UploadError, UploadedImage, MAX_IMAGE_BYTES};

fn wallet_submission() -> ItemSubmission {
    ItemSubmission {
        item_name: Some("Wallet".to_string()),
        category: Some("accessories".to_string()),
        description: Some("Black leather".to_string()),
        location: Some("Library".to_string()),
        date: Some("2024-01-01".to_string()),
        image: None,
    }
}

#[test]
fn test_wallet_report_validates_with_client_date() {
    let valid = wallet_submission().validate().expect("submission should validate");
    assert_eq!(valid.name, "Wallet");
    assert_eq!(valid.category, Category::Accessories);
    assert_eq!(valid.description, "Black leather");
    assert_eq!(valid.location, "Library");
    assert!(valid.image.is_none());

    let date = valid.date.expect("client-supplied date should be kept");
    assert_eq!(date.to_rfc3339(), "2024-01-01T00:00:00+00:00");
}

#[test]
fn test_omitted_date_is_left_for_the_service_to_default() {
    let mut submission = wallet_submission();
    submission.date = None;
    let valid = submission.validate().expect("submission should validate");
    assert!(valid.date.is_none());
}

#[test]
fn test_every_required_item_field_is_enforced() {
    for (field, clear) in [
        ("itemName", Box::new(|s: &mut ItemSubmission| s.item_name = None)
            as Box<dyn Fn(&mut ItemSubmission)>),
        ("category", Box::new(|s: &mut ItemSubmission| s.category = None)),
        ("description", Box::new(|s: &mut ItemSubmission| s.description = None)),
        ("location", Box::new(|s: &mut ItemSubmission| s.location = None)),
    ] {
        let mut submission = wallet_submission();
        clear(&mut submission);
        assert_eq!(
            submission.validate().unwrap_err(),
            ItemValidationError::MissingField(field),
            "expected {} to be required",
            field
        );
    }
}

#[test]
fn test_category_outside_the_enum_is_rejected() {
    let mut submission = wallet_submission();
    submission.category = Some("vehicles".to_string());
    assert!(matches!(
        submission.validate().unwrap_err(),
        ItemValidationError::InvalidCategory(_)
    ));
}

#[test]
fn test_upload_policy_rejects_bad_type_and_oversize() {
    assert!(matches!(
        UploadedImage::new("application/pdf".to_string(), vec![0u8; 8]),
        Err(UploadError::UnsupportedType(_))
    ));
    assert!(matches!(
        UploadedImage::new("image/png".to_string(), vec![0u8; MAX_IMAGE_BYTES + 1]),
        Err(UploadError::TooLarge(_))
    ));
    assert!(UploadedImage::new("image/webp".to_string(), vec![0u8; 8]).is_ok());
}

fn register(username: &str, password: &str, confirm: &str) -> RegisterRequest {
    RegisterRequest {
        username: Some(username.to_string()),
        password: Some(password.to_string()),
        confirm_password: Some(confirm.to_string()),
    }
}

#[test]
fn test_short_username_is_rejected() {
    assert_eq!(
        register("ab", "secret1", "secret1").validate().unwrap_err(),
        AccountValidationError::InvalidUsername
    );
}

#[test]
fn test_short_password_is_rejected() {
    assert_eq!(
        register("validuser", "123", "123").validate().unwrap_err(),
        AccountValidationError::WeakPassword
    );
}

#[test]
fn test_registration_checks_run_in_order() {
    // Presence first, then username length, then password length, then match.
    let request = RegisterRequest { username: None, password: None, confirm_password: None };
    assert_eq!(
        request.validate().unwrap_err(),
        AccountValidationError::MissingField("username")
    );

    assert_eq!(
        register("ab", "123", "456").validate().unwrap_err(),
        AccountValidationError::InvalidUsername
    );
    assert_eq!(
        register("validuser", "123", "456").validate().unwrap_err(),
        AccountValidationError::WeakPassword
    );
    assert_eq!(
        register("validuser", "secret1", "secret2").validate().unwrap_err(),
        AccountValidationError::PasswordMismatch
    );
}

#[test]
fn test_usernames_normalize_the_same_way_on_both_paths() {
    // Registration stores the lower-cased name; login must look it up the
    // same way for case-insensitive uniqueness to hold.
    let registered = register("CaseSensitive", "secret1", "secret1")
        .validate()
        .expect("registration should validate");
    let login = LoginRequest {
        username: Some("cAsEsEnSiTiVe".to_string()),
        password: Some("secret1".to_string()),
    };
    let logged_in = login.validate().expect("login should validate");
    assert_eq!(registered.username, logged_in.username);
}
