use entity::{user_license_type::LicenseType, user_plan_type::PlanType};

use crate::server::{
    data::user::{user_branch::UserBranchRepository, UserRepository},
    error::{user::UserError, Error},
    service::user::{UserService, DUPLICATE_USERNAME_MESSAGE},
    util::password::UNUSABLE_PASSWORD,
};

use super::*;

/// Expect a regular account to be active without staff permissions
#[tokio::test]
async fn creates_regular_user() -> Result<(), TestError> {
    let test = setup().await?;

    let user_service = UserService::new(&test.db);
    let result = user_service.create_user(new_user("sunsin")).await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert!(user.is_active);
    assert!(!user.is_staff);
    assert!(!user.is_superuser);
    assert_eq!(user.full_name, "이 순신");
    assert_eq!(user.gender_label, "남성");

    // Password is stored hashed and the branch association is written
    let stored = UserRepository::new(&test.db).get(user.id).await?.unwrap();
    assert!(stored.password.starts_with("$argon2id$"));
    let association = UserBranchRepository::new(&test.db)
        .get_by_user(user.id)
        .await?;
    assert_eq!(association.map(|row| row.branch_id), Some(1));

    Ok(())
}

/// Expect an account without a password to store the unusable marker
#[tokio::test]
async fn stores_unusable_password_without_password() -> Result<(), TestError> {
    let test = setup().await?;

    let mut details = new_user("sunsin");
    details.password = None;

    let user = UserService::new(&test.db)
        .create_user(details)
        .await
        .unwrap();

    let stored = UserRepository::new(&test.db).get(user.id).await?.unwrap();
    assert_eq!(stored.password, UNUSABLE_PASSWORD);

    Ok(())
}

/// Expect license and plan types to be stored when given
#[tokio::test]
async fn stores_license_and_plan_types() -> Result<(), TestError> {
    let test = setup().await?;

    let mut details = new_user("sunsin");
    details.license_type = Some(LicenseType::SecondClassOrdinary);
    details.plan_type = Some(PlanType::GuaranteedPass);

    let user_service = UserService::new(&test.db);
    let created = user_service.create_user(details).await.unwrap();
    let fetched = user_service.get_user(created.id).await.unwrap().unwrap();

    assert_eq!(fetched.license_type.as_deref(), Some("2종 보통"));
    assert_eq!(fetched.plan_type.as_deref(), Some("합격 보장제"));

    Ok(())
}

/// Expect a staff account without superuser permission
#[tokio::test]
async fn creates_staff() -> Result<(), TestError> {
    let test = setup().await?;

    let user = UserService::new(&test.db)
        .create_staff(new_user("staff"))
        .await
        .unwrap();

    assert!(user.is_staff);
    assert!(!user.is_superuser);

    Ok(())
}

/// Expect a superuser to also be staff
#[tokio::test]
async fn creates_superuser() -> Result<(), TestError> {
    let test = setup().await?;

    let user_service = UserService::new(&test.db);
    let user = user_service
        .create_superuser(new_user("admin"))
        .await
        .unwrap();

    assert!(user.is_staff);
    assert!(user.is_superuser);
    let stored = user_service.get_by_username("admin").await.unwrap().unwrap();
    assert!(stored.is_staff && stored.is_superuser);

    Ok(())
}

/// Expect a superuser without password to be refused
#[tokio::test]
async fn superuser_requires_password() -> Result<(), TestError> {
    let test = setup().await?;

    let mut details = new_user("admin");
    details.password = None;

    let result = UserService::new(&test.db).create_superuser(details).await;

    assert!(matches!(
        result,
        Err(Error::UserError(UserError::PasswordRequired))
    ));
    assert!(UserRepository::new(&test.db)
        .get_by_username("admin")
        .await?
        .is_none());

    Ok(())
}

/// Expect only gender codes 1 and 2 to be accepted
#[tokio::test]
async fn accepts_only_known_gender_codes() -> Result<(), TestError> {
    let test = setup().await?;
    let user_service = UserService::new(&test.db);

    let mut female = new_user("female");
    female.gender = 2;
    assert_eq!(user_service.create_user(female).await.unwrap().gender, 2);

    for code in [0i32, 3, -1] {
        let mut details = new_user(&format!("gender{}", code.abs()));
        details.gender = code;

        let result = user_service.create_user(details).await;

        assert!(matches!(result, Err(Error::Validation(ref errors)) if errors.has("gender")));
    }

    Ok(())
}

/// Expect a username field error for a taken username
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_branch("본점")
        .with_mock_user("sunsin", 1)
        .build()
        .await?;

    let result = UserService::new(&test.db)
        .create_user(new_user("sunsin"))
        .await;

    match result {
        Err(Error::Validation(errors)) => assert_eq!(
            errors.get("username"),
            Some(&[DUPLICATE_USERNAME_MESSAGE.to_string()][..])
        ),
        other => panic!("expected validation error, got {:?}", other),
    }

    Ok(())
}

/// Expect invalid fields and an unknown branch to be reported together
#[tokio::test]
async fn reports_invalid_fields() -> Result<(), TestError> {
    let test = setup().await?;

    let mut details = new_user("");
    details.surname = "가".repeat(21);
    details.phone_number = "123".to_string();
    details.branch_id = 99;

    let result = UserService::new(&test.db).create_user(details).await;

    match result {
        Err(Error::Validation(errors)) => {
            assert!(errors.has("username"));
            assert!(errors.has("surname"));
            assert!(errors.has("phone_number"));
            assert!(errors.has("branch"));
            assert!(!errors.has("given_name"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }

    Ok(())
}
