use crate::server::{
    error::Error,
    service::branch::{BranchService, DUPLICATE_NAME_MESSAGE},
};

use super::*;

/// Expect the created branch to be active and carry its display name
#[tokio::test]
async fn creates_branch() -> Result<(), TestError> {
    let test = TestBuilder::new().with_branch_tables().build().await?;

    let branch_service = BranchService::new(&test.db);
    let result = branch_service.create_branch(&branch_form("해운대")).await;

    assert!(result.is_ok());
    let branch = result.unwrap();
    assert!(branch.is_active);
    assert_eq!(branch.display_name, "해운대점");

    Ok(())
}

/// Expect the display name not to double the branch suffix
#[tokio::test]
async fn keeps_existing_suffix() -> Result<(), TestError> {
    let test = TestBuilder::new().with_branch_tables().build().await?;

    let branch_service = BranchService::new(&test.db);
    let branch = branch_service
        .create_branch(&branch_form("서면점"))
        .await
        .unwrap();

    assert_eq!(branch.display_name, "서면점");

    Ok(())
}

/// Expect a name field error when the name is already in use
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_branch_tables()
        .with_mock_branch("해운대")
        .build()
        .await?;

    let branch_service = BranchService::new(&test.db);
    let result = branch_service.create_branch(&branch_form("해운대")).await;

    match result {
        Err(Error::Validation(errors)) => {
            assert_eq!(
                errors.get("name"),
                Some(&[DUPLICATE_NAME_MESSAGE.to_string()][..])
            );
        }
        other => panic!("expected validation error, got {:?}", other),
    }

    Ok(())
}

/// Expect Error when required tables are not present
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let branch_service = BranchService::new(&test.db);
    let result = branch_service.create_branch(&branch_form("해운대")).await;

    assert!(matches!(result, Err(Error::DbErr(_))));

    Ok(())
}
