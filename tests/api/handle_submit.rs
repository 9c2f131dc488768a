use crate::helpers::{spawn_form, when_posting_a_message, when_relaying_an_email};
use wiremock::matchers::{any, body_json};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn missing_fields_are_rejected_without_any_network_call() {
    // Arrange
    let mut app = spawn_form().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.api_server)
        .await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.relay_server)
        .await;
    let test_cases = vec![
        ("", "jane@example.com", "Hello", "missing the name"),
        ("Jane", "", "Hello", "missing the email"),
        ("Jane", "jane@example.com", "", "missing the message"),
        ("", "", "", "missing every field"),
    ];

    for (name, email, content, description) in test_cases {
        // Act
        app.fill(name, email, content);
        app.form.handle_submit().await;

        // Assert
        assert_eq!(
            app.form.error(),
            Some("All fields are required."),
            "The form did not report missing fields when the draft was {}.",
            description
        );
        assert_eq!(app.form.success(), None);
        app.assert_draft(name, email, content);
    }
}

#[tokio::test]
async fn malformed_emails_are_rejected_without_any_network_call() {
    // Arrange
    let mut app = spawn_form().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.api_server)
        .await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.relay_server)
        .await;

    for email in ["bademail", "a@b", "a@@b.com"] {
        // Act
        app.fill("Jane", email, "Hello");
        app.form.handle_submit().await;

        // Assert
        assert_eq!(
            app.form.error(),
            Some("Invalid email format."),
            "The form accepted {}.",
            email
        );
        assert_eq!(app.form.success(), None);
        app.assert_draft("Jane", email, "Hello");
    }
}

#[tokio::test]
async fn a_valid_draft_is_posted_as_json_and_relayed() {
    // Arrange
    let mut app = spawn_form().await;
    app.fill_valid_draft();

    when_posting_a_message()
        .and(body_json(serde_json::json!({
            "name": "Jane",
            "email": "jane@example.com",
            "content": "Hello"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&app.api_server)
        .await;
    when_relaying_an_email()
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.relay_server)
        .await;

    // Act
    app.form.handle_submit().await;

    // Assert
    assert_eq!(app.form.success(), Some("Message sent successfully!"));
    assert_eq!(app.form.error(), None);
    app.assert_draft("", "", "");
}

#[tokio::test]
async fn the_relay_carries_the_configured_recipients_and_the_draft() {
    // Arrange
    let mut app = spawn_form().await;
    app.fill_valid_draft();

    when_posting_a_message()
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.api_server)
        .await;
    when_relaying_an_email()
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.relay_server)
        .await;

    // Act
    app.form.handle_submit().await;

    // Assert
    let received_requests = app.relay_server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&received_requests[0].body).unwrap();
    let params = &body["template_params"];
    assert_eq!(
        params["to_email"],
        "paredes.jonathen@yahoo.com, gottabookemall2024@gmail.com"
    );
    assert_eq!(params["to_name"], "Big Faddy");
    assert_eq!(params["from_name"], "Jane");
    assert_eq!(params["from_email"], "jane@example.com");
    assert_eq!(params["message"], "Hello");
    assert_eq!(body["service_id"], "service_ud7473n");
    assert_eq!(body["template_id"], "template_asbgwce");
}

#[tokio::test]
async fn a_rejection_surfaces_the_server_reason_and_keeps_the_draft() {
    // Arrange
    let mut app = spawn_form().await;
    app.fill_valid_draft();

    when_posting_a_message()
        .respond_with(
            ResponseTemplate::new(400).set_body_json(serde_json::json!({ "error": "Too long" })),
        )
        .expect(1)
        .mount(&app.api_server)
        .await;
    when_relaying_an_email()
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.relay_server)
        .await;

    // Act
    app.form.handle_submit().await;

    // Assert
    assert_eq!(app.form.error(), Some("Too long"));
    assert_eq!(app.form.success(), None);
    app.assert_draft("Jane", "jane@example.com", "Hello");
}

#[tokio::test]
async fn a_rejection_without_a_reason_uses_the_fallback_message() {
    // Arrange
    let mut app = spawn_form().await;
    app.fill_valid_draft();

    when_posting_a_message()
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.api_server)
        .await;

    // Act
    app.form.handle_submit().await;

    // Assert
    assert_eq!(app.form.error(), Some("Failed to send message."));
    app.assert_draft("Jane", "jane@example.com", "Hello");
}

#[tokio::test]
async fn an_unreachable_api_is_reported_as_a_transport_error() {
    // Arrange
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let mut configuration =
        contact_form::configuration::get_configuration().expect("Failed to read configuration.");
    configuration.api.base_url = format!("http://127.0.0.1:{}", port);
    let mut form = configuration.form().unwrap();
    form.set_name("Jane");
    form.set_email("jane@example.com");
    form.set_content("Hello");

    // Act
    form.handle_submit().await;

    // Assert
    assert_eq!(
        form.error(),
        Some("An error occurred while sending the message to the API.")
    );
    assert_eq!(form.draft().name(), "Jane");
}

#[tokio::test]
async fn a_relay_failure_is_reported_as_partial_success_and_keeps_the_draft() {
    // Arrange
    let mut app = spawn_form().await;
    app.fill_valid_draft();

    when_posting_a_message()
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.api_server)
        .await;
    when_relaying_an_email()
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.relay_server)
        .await;

    // Act
    app.form.handle_submit().await;

    // Assert
    assert_eq!(
        app.form.error(),
        Some("Message sent to the API, but email delivery failed.")
    );
    assert_eq!(app.form.success(), None);
    app.assert_draft("Jane", "jane@example.com", "Hello");
}

#[tokio::test]
async fn resubmitting_a_cleared_draft_reports_missing_fields() {
    // Arrange
    let mut app = spawn_form().await;
    app.fill_valid_draft();

    when_posting_a_message()
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.api_server)
        .await;
    when_relaying_an_email()
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.relay_server)
        .await;

    // Act 1 - successful submission clears the draft
    app.form.handle_submit().await;
    assert_eq!(app.form.success(), Some("Message sent successfully!"));

    // Act 2 - resubmit twice without typing anything
    for _ in 0..2 {
        app.form.handle_submit().await;

        // Assert
        assert_eq!(app.form.error(), Some("All fields are required."));
        assert_eq!(app.form.success(), None);
    }
}

#[tokio::test]
async fn a_retry_after_a_failure_replaces_the_error_with_success() {
    // Arrange
    let mut app = spawn_form().await;
    app.fill_valid_draft();

    when_posting_a_message()
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&app.api_server)
        .await;
    when_posting_a_message()
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.api_server)
        .await;
    when_relaying_an_email()
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.relay_server)
        .await;

    // Act 1 - the API is down
    app.form.handle_submit().await;
    assert_eq!(app.form.error(), Some("Failed to send message."));

    // Act 2 - retry with the retained draft
    app.form.handle_submit().await;

    // Assert
    assert_eq!(app.form.error(), None);
    assert_eq!(app.form.success(), Some("Message sent successfully!"));
    app.assert_draft("", "", "");
}
