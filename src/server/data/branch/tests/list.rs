use super::*;

/// Expect branches to be returned ordered by name
#[tokio::test]
async fn lists_branches_ordered_by_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_branch_tables()
        .with_mock_branch("역삼")
        .with_mock_branch("강남")
        .with_mock_branch("서초")
        .build()
        .await?;

    let branch_repo = BranchRepository::new(&test.db);
    let branches = branch_repo.list().await?;

    let names: Vec<&str> = branches.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["강남", "서초", "역삼"]);

    Ok(())
}

/// Expect search to match name or street address and filter on open status
#[tokio::test]
async fn searches_by_name_address_and_status() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_branch_tables()
        .with_mock_branch("강남")
        .with_mock_branch("부산")
        .build()
        .await?;

    let branch_repo = BranchRepository::new(&test.db);
    branch_repo.set_active(2, false).await?;

    let by_name = branch_repo.search(Some("부산"), None).await?;
    assert_eq!(by_name.len(), 1);

    // Every mock branch shares the same street address
    let by_address = branch_repo.search(Some("테헤란로"), None).await?;
    assert_eq!(by_address.len(), 2);

    let active = branch_repo.search(None, Some(true)).await?;
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].name, "강남");

    Ok(())
}
