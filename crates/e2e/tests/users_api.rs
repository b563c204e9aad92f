//! Users resource scenarios against the mock placeholder API

use anyhow::Result;
use placebo_client::factory;
use placebo_client::model::{User, UserPatch};
use placebo_client::validate::{
    validate_array, validate_array_items_have_fields, validate_email, validate_field_eq,
    validate_fields, validate_nested_field, validate_status, validate_status_in,
};
use placebo_e2e::start_mock_api;
use serde_json::json;

#[tokio::test]
async fn listing_returns_users_with_contact_fields() -> Result<()> {
    let api = start_mock_api().await?;
    let resp = api.users.list().await?;
    validate_status(resp.status(), 200)?;
    let body = resp.value()?;
    validate_array(&body, 1)?;
    validate_array_items_have_fields(&body, &["id", "name", "username", "email"])?;
    Ok(())
}

#[tokio::test]
async fn fetch_by_id_returns_the_seeded_user() -> Result<()> {
    let api = start_mock_api().await?;
    let resp = api.users.get(1).await?;
    validate_status(resp.status(), 200)?;
    let user: User = resp.json()?;
    assert_eq!(user.id, Some(1));
    assert_eq!(user.username, "Bret");
    validate_email(&user.email)?;
    Ok(())
}

#[tokio::test]
async fn user_carries_nested_address_and_company() -> Result<()> {
    let api = start_mock_api().await?;
    let body = api.users.get(1).await?.value()?;
    validate_fields(&body, &["address", "company"])?;
    validate_nested_field(&body, "address.street")?;
    validate_nested_field(&body, "address.city")?;
    validate_nested_field(&body, "address.zipcode")?;
    validate_nested_field(&body, "address.geo.lat")?;
    validate_nested_field(&body, "company.catchPhrase")?;
    Ok(())
}

#[tokio::test]
async fn every_seeded_email_is_well_formed() -> Result<()> {
    let api = start_mock_api().await?;
    let users: Vec<User> = api.users.list().await?.json()?;
    assert!(!users.is_empty());
    for user in &users {
        validate_email(&user.email)?;
    }
    Ok(())
}

#[tokio::test]
async fn filter_by_username_finds_exactly_one() -> Result<()> {
    let api = start_mock_api().await?;
    let resp = api.users.by_username("Bret").await?;
    validate_status(resp.status(), 200)?;
    let body = resp.value()?;
    validate_array(&body, 1)?;
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    validate_field_eq(&items[0], "name", &json!("Leanne Graham"))?;
    Ok(())
}

#[tokio::test]
async fn filter_by_unknown_username_is_empty() -> Result<()> {
    let api = start_mock_api().await?;
    let resp = api.users.by_username("nobody-here").await?;
    validate_status(resp.status(), 200)?;
    let body = resp.value()?;
    validate_array(&body, 0)?;
    assert!(body.as_array().unwrap().is_empty());
    Ok(())
}

#[tokio::test]
async fn create_echoes_identity_fields() -> Result<()> {
    let api = start_mock_api().await?;
    let username = format!("user-{}", uuid::Uuid::new_v4());
    let user = factory::users::custom("Created User", &username, "created@example.com");
    let resp = api.users.create(&user).await?;
    validate_status(resp.status(), 201)?;
    let body = resp.value()?;
    validate_field_eq(&body, "username", &json!(username))?;
    validate_field_eq(&body, "email", &json!("created@example.com"))?;
    let created: User = resp.json()?;
    assert!(created.id.is_some_and(|id| id > 3));
    Ok(())
}

#[tokio::test]
async fn create_full_user_keeps_nested_structures() -> Result<()> {
    let api = start_mock_api().await?;
    let resp = api.users.create(&factory::users::default()).await?;
    validate_status(resp.status(), 201)?;
    let created: User = resp.json()?;
    assert!(created.address.is_some());
    assert!(created.company.is_some());
    validate_nested_field(&resp.value()?, "address.geo.lng")?;
    Ok(())
}

#[tokio::test]
async fn create_minimal_user_omits_optionals() -> Result<()> {
    let api = start_mock_api().await?;
    let resp = api.users.create(&factory::users::minimal()).await?;
    validate_status(resp.status(), 201)?;
    let created: User = resp.json()?;
    assert!(created.address.is_none());
    assert!(created.phone.is_none());
    assert!(created.company.is_none());
    Ok(())
}

#[tokio::test]
async fn create_contact_only_user_echoes_contact_fields() -> Result<()> {
    let api = start_mock_api().await?;
    let user = factory::users::contact_only(
        "Contact User",
        "contactuser",
        "contact@example.com",
        Some("555-0100"),
        Some("contact.example.com"),
    );
    let resp = api.users.create(&user).await?;
    validate_status(resp.status(), 201)?;
    let created: User = resp.json()?;
    assert_eq!(created.phone.as_deref(), Some("555-0100"));
    assert_eq!(created.website.as_deref(), Some("contact.example.com"));
    Ok(())
}

#[tokio::test]
async fn batch_created_users_are_distinct() -> Result<()> {
    let api = start_mock_api().await?;
    let batch = factory::users::batch(3);
    let mut seen = Vec::new();
    for user in &batch {
        let created: User = api.users.create(user).await?.json()?;
        assert!(!seen.contains(&created.username));
        seen.push(created.username);
    }
    Ok(())
}

#[tokio::test]
async fn replace_overwrites_the_user() -> Result<()> {
    let api = start_mock_api().await?;
    let replacement = factory::users::custom("Renamed", "renamed", "renamed@example.com");
    let resp = api.users.replace(2, &replacement).await?;
    validate_status(resp.status(), 200)?;
    let body = resp.value()?;
    validate_field_eq(&body, "id", &json!(2))?;
    validate_field_eq(&body, "username", &json!("renamed"))?;
    Ok(())
}

#[tokio::test]
async fn patch_changes_only_the_email() -> Result<()> {
    let api = start_mock_api().await?;
    let before: User = api.users.get(3).await?.json()?;
    let patch = UserPatch {
        email: Some("patched@example.com".to_string()),
        ..Default::default()
    };
    let resp = api.users.update(3, &patch).await?;
    validate_status(resp.status(), 200)?;
    let after: User = resp.json()?;
    assert_eq!(after.email, "patched@example.com");
    assert_eq!(after.name, before.name);
    assert_eq!(after.username, before.username);
    Ok(())
}

#[tokio::test]
async fn delete_then_read_is_not_found() -> Result<()> {
    let api = start_mock_api().await?;
    let resp = api.users.delete(2).await?;
    validate_status_in(resp.status(), &[200, 204])?;
    let read = api.users.get(2).await?;
    validate_status(read.status(), 404)?;
    Ok(())
}

#[tokio::test]
async fn count_reflects_the_seeded_population() -> Result<()> {
    let api = start_mock_api().await?;
    assert_eq!(api.users.count().await?, 3);
    Ok(())
}
