mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn register_owner(client: &reqwest::Client, base_url: &str, tag: &str) -> Result<i64> {
    let res = client
        .post(format!("{}/api/users", base_url))
        .json(&json!({
            "name": "Owner",
            "email": common::unique_email(tag),
            "password": "123456"
        }))
        .send()
        .await?;
    anyhow::ensure!(
        res.status() == StatusCode::CREATED,
        "owner registration failed: {}",
        res.status()
    );
    let body = res.json::<Value>().await?;
    Ok(body["id"].as_i64().expect("owner id"))
}

#[tokio::test]
async fn listing_requires_user_id() -> Result<()> {
    if !common::database_configured() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/contacts", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], "Missing or invalid userId");
    Ok(())
}

#[tokio::test]
async fn contact_round_trip() -> Result<()> {
    if !common::database_configured() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let owner_id = register_owner(&client, &server.base_url, "roundtrip").await?;

    // Create echoes the submitted owner
    let res = client
        .post(format!("{}/api/contacts", server.base_url))
        .json(&json!({
            "name": "A",
            "email": "a@x.com",
            "phone": "1234567",
            "userId": owner_id
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = res.json::<Value>().await?;
    assert_eq!(created["userId"].as_i64(), Some(owner_id));

    // Listing by owner returns exactly the new contact
    let listed = client
        .get(format!(
            "{}/api/contacts?userId={}",
            server.base_url, owner_id
        ))
        .send()
        .await?
        .json::<Value>()
        .await?;
    let listed = listed.as_array().expect("contact array");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["name"], "A");
    assert_eq!(listed[0]["email"], "a@x.com");
    assert_eq!(listed[0]["phone"], "1234567");

    // Full replacement update of the phone
    let res = client
        .put(format!(
            "{}/api/contacts/{}",
            server.base_url, created["id"]
        ))
        .json(&json!({ "name": "A", "email": "a@x.com", "phone": "7654321" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let listed = client
        .get(format!(
            "{}/api/contacts?userId={}",
            server.base_url, owner_id
        ))
        .send()
        .await?
        .json::<Value>()
        .await?;
    let listed = listed.as_array().expect("contact array");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["phone"], "7654321");
    assert_eq!(listed[0]["name"], "A");
    assert_eq!(listed[0]["email"], "a@x.com");
    assert_eq!(listed[0]["userId"].as_i64(), Some(owner_id));
    Ok(())
}

#[tokio::test]
async fn creation_rejects_unknown_owner() -> Result<()> {
    if !common::database_configured() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/contacts", server.base_url))
        .json(&json!({
            "name": "Orphan",
            "email": "o@x.com",
            "phone": "1234567",
            "userId": 2147483647
        }))
        .send()
        .await?;

    // The foreign key on insert is the enforcement point
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn creation_reports_every_missing_field() -> Result<()> {
    if !common::database_configured() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/contacts", server.base_url))
        .json(&json!({}))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    let details = body["details"].as_array().expect("details array");
    assert_eq!(details.len(), 4);
    Ok(())
}

#[tokio::test]
async fn missing_contact_paths_are_404() -> Result<()> {
    if !common::database_configured() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/contacts/2147483647", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .put(format!("{}/api/contacts/2147483647", server.base_url))
        .json(&json!({ "name": "X", "email": "x@x.com", "phone": "1234567" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .delete(format!("{}/api/contacts/2147483647", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn deleting_a_contact_returns_no_content() -> Result<()> {
    if !common::database_configured() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let owner_id = register_owner(&client, &server.base_url, "delcontact").await?;
    let created = client
        .post(format!("{}/api/contacts", server.base_url))
        .json(&json!({
            "name": "Temp",
            "email": "t@x.com",
            "phone": "1234567",
            "userId": owner_id
        }))
        .send()
        .await?
        .json::<Value>()
        .await?;

    let res = client
        .delete(format!(
            "{}/api/contacts/{}",
            server.base_url, created["id"]
        ))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client
        .get(format!(
            "{}/api/contacts/{}",
            server.base_url, created["id"]
        ))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn deleting_the_owner_removes_their_contacts() -> Result<()> {
    if !common::database_configured() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let owner_id = register_owner(&client, &server.base_url, "cascade").await?;
    let res = client
        .post(format!("{}/api/contacts", server.base_url))
        .json(&json!({
            "name": "Held",
            "email": "h@x.com",
            "phone": "1234567",
            "userId": owner_id
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .delete(format!("{}/api/users/{}", server.base_url, owner_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let listed = client
        .get(format!(
            "{}/api/contacts?userId={}",
            server.base_url, owner_id
        ))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(listed.as_array().map(Vec::len), Some(0));
    Ok(())
}
