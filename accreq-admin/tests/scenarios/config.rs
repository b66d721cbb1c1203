use accreq_admin::{ActionConfig, EmailComposer, TemplateEmailComposer};

pub fn config_from_json_fills_defaults() -> anyhow::Result<()> {
    let config = ActionConfig::from_json(r#"{ "appUrl": "https://app.example/" }"#)?;
    assert_eq!(config, ActionConfig::new("https://app.example/"));
    assert_eq!(config.app_name, "TEAMMATES");

    let config = ActionConfig::from_json(
        r#"{
            "appUrl": "https://courses.example",
            "appName": "Courses",
            "senderName": "Courses Admin",
            "senderEmail": "no-reply@courses.example",
            "supportEmail": "help@courses.example"
        }"#,
    )?;
    assert_eq!(config.app_name, "Courses");
    assert_eq!(config.support_email, "help@courses.example");

    assert!(ActionConfig::from_json(r#"{ "appName": "no url" }"#).is_err());
    Ok(())
}

pub fn composer_uses_config() {
    let config = ActionConfig::new("https://courses.example")
        .with_sender("Courses Admin", "no-reply@courses.example")
        .with_support_email("help@courses.example");
    let composer = TemplateEmailComposer::new(&config);

    let email = composer.compose_account_join_email(
        "https://courses.example/web/join?iscreatingaccount=true&key=abc",
        "dana@school.edu",
        "Dana Lim",
    );

    assert_eq!(email.recipient, "dana@school.edu");
    assert_eq!(email.sender_name, "Courses Admin");
    assert_eq!(email.sender_email, "no-reply@courses.example");
    assert_eq!(email.reply_to, "help@courses.example");
    assert_eq!(email.subject, "TEAMMATES: Welcome to TEAMMATES! Dana Lim");
    assert!(email.content.contains("https://courses.example/web/join?iscreatingaccount=true&key=abc"));
    assert!(email.content.contains("help@courses.example"));
    assert!(!email.content.contains("${"));
}

pub fn user_name_is_not_expanded() {
    let config = ActionConfig::new("https://courses.example").with_support_email("help@courses.example");
    let composer = TemplateEmailComposer::new(&config);

    let email = composer.compose_account_join_email(
        "https://courses.example/web/join?iscreatingaccount=true&key=abc",
        "eve@school.edu",
        "Eve ${joinUrl} ${supportEmail}",
    );

    assert!(email.content.contains("Hello Eve ${joinUrl} ${supportEmail},"));
    assert_eq!(
        email.content.matches("https://courses.example/web/join").count(),
        1
    );
}
