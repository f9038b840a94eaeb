// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

use std::sync::Arc;

use httpmock::Method::POST;
use httpmock::MockServer;
use url::Url;

use folio::config::SiteConfig;
use folio::models::contact::{ContactField, ContactFields};
use folio::mvu::{self, AppModel, CommandRunner, Msg};
use folio::storage::MemoryStore;
use folio::ui::components::contact_form::{
    ContactMsg, SENT_MESSAGE, StatusKind, SUBMIT_LABEL, UNAVAILABLE_MESSAGE,
};

fn runner(endpoint: &str) -> CommandRunner {
    CommandRunner::new(
        Arc::new(MemoryStore::default()),
        Arc::new(MemoryStore::default()),
        Url::parse(endpoint).unwrap(),
    )
    .unwrap()
}

/// Apply a message, run its commands, and feed every reply back in.
/// Returns how many commands were executed.
fn drive(model: &mut AppModel, runner: &CommandRunner, msg: Msg) -> usize {
    let mut queue = vec![msg];
    let mut executed = 0;
    while let Some(msg) = queue.pop() {
        let mut cmds = Vec::new();
        mvu::update(model, msg, &mut cmds);
        for cmd in cmds {
            executed += 1;
            queue.extend(runner.run(cmd));
        }
    }
    executed
}

fn fill(model: &mut AppModel, runner: &CommandRunner, blank: Option<ContactField>) {
    for (field, value) in [
        (ContactField::Name, "Ada"),
        (ContactField::Email, "ada@example.org"),
        (ContactField::Subject, "Hello"),
        (ContactField::Message, "Nice site"),
    ] {
        let value = if Some(field) == blank { "  " } else { value };
        drive(
            model,
            runner,
            Msg::Contact(ContactMsg::FieldChanged(field, value.into())),
        );
    }
}

#[test]
fn successful_post_clears_form_and_reenables_submit() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/f/site")
            .header("content-type", "application/json")
            .header("accept", "application/json")
            .json_body(serde_json::json!({
                "name": "Ada",
                "email": "ada@example.org",
                "subject": "Hello",
                "message": "Nice site",
            }));
        then.status(200);
    });
    let runner = runner(&server.url("/f/site"));
    let mut model = AppModel::new(&SiteConfig::builtin().unwrap());
    fill(&mut model, &runner, None);

    let executed = drive(&mut model, &runner, Msg::Contact(ContactMsg::Submit));

    mock.assert();
    assert_eq!(executed, 1);
    let status = model.contact.status().unwrap();
    assert_eq!(status.text, SENT_MESSAGE);
    assert_eq!(status.kind, StatusKind::Success);
    assert_eq!(model.contact.fields(), &ContactFields::default());
    assert!(model.contact.submit_enabled());
    assert_eq!(model.contact.submit_label(), SUBMIT_LABEL);
}

#[test]
fn server_error_maps_to_generic_message() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/f/site");
        then.status(503).body("upstream down");
    });
    let runner = runner(&server.url("/f/site"));
    let mut model = AppModel::new(&SiteConfig::builtin().unwrap());
    fill(&mut model, &runner, None);

    drive(&mut model, &runner, Msg::Contact(ContactMsg::Submit));

    mock.assert();
    let status = model.contact.status().unwrap();
    assert_eq!(status.text, UNAVAILABLE_MESSAGE);
    assert_eq!(status.kind, StatusKind::Error);
    assert_eq!(model.contact.fields().name, "Ada", "fields kept for retry");
    assert!(model.contact.submit_enabled());
}

#[test]
fn blank_field_makes_no_request() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST);
        then.status(200);
    });
    let runner = runner(&server.url("/f/site"));
    let mut model = AppModel::new(&SiteConfig::builtin().unwrap());
    fill(&mut model, &runner, Some(ContactField::Subject));

    let executed = drive(&mut model, &runner, Msg::Contact(ContactMsg::Submit));

    assert_eq!(executed, 0);
    mock.assert_hits(0);
    assert_eq!(
        model.contact.status().map(|s| s.kind),
        Some(StatusKind::Error)
    );
}
