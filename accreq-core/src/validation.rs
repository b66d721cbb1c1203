//! Field rules applied by stores before an account request is written.
//!
//! Each check returns `None` for an acceptable value, or a human readable
//! reason otherwise. Stores collect the reasons and reject the write.

use std::sync::OnceLock;

use regex_lite::Regex;

pub const PERSON_NAME_FIELD_NAME: &str = "person name";
pub const PERSON_NAME_MAX_LENGTH: usize = 100;
pub const EMAIL_FIELD_NAME: &str = "email";
pub const EMAIL_MAX_LENGTH: usize = 254;
pub const INSTITUTE_NAME_FIELD_NAME: &str = "institute name";
pub const INSTITUTE_NAME_MAX_LENGTH: usize = 128;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[\w+-][\w+.-]*@([A-Za-z0-9-]+\.)+[A-Za-z]+$")
            .expect("email pattern compiles")
    })
}

fn empty_info(field_name: &str) -> String {
    format!("The field '{}' is empty.", field_name)
}

fn too_long_info(value: &str, field_name: &str, max_length: usize) -> String {
    format!(
        "\"{}\" is not acceptable as a/an {} because it is too long. The value of a/an {} should be no longer than {} characters.",
        value, field_name, field_name, max_length
    )
}

fn size_capped_info(value: &str, field_name: &str, max_length: usize) -> Option<String> {
    if value.is_empty() {
        Some(empty_info(field_name))
    } else if value.chars().count() > max_length {
        Some(too_long_info(value, field_name, max_length))
    } else {
        None
    }
}

pub fn invalidity_info_for_person_name(name: &str) -> Option<String> {
    if let Some(info) = size_capped_info(name, PERSON_NAME_FIELD_NAME, PERSON_NAME_MAX_LENGTH) {
        return Some(info);
    }
    match name.chars().next() {
        Some(c) if !c.is_alphanumeric() => Some(format!(
            "\"{}\" is not acceptable as a/an {} because it starts with a non-alphanumeric character.",
            name, PERSON_NAME_FIELD_NAME
        )),
        _ => None,
    }
}

pub fn invalidity_info_for_institute_name(institute: &str) -> Option<String> {
    size_capped_info(institute, INSTITUTE_NAME_FIELD_NAME, INSTITUTE_NAME_MAX_LENGTH)
}

pub fn invalidity_info_for_email(email: &str) -> Option<String> {
    if let Some(info) = size_capped_info(email, EMAIL_FIELD_NAME, EMAIL_MAX_LENGTH) {
        return Some(info);
    }
    if !email_regex().is_match(email) {
        return Some(format!(
            "\"{}\" is not acceptable as a/an {} because it is not in the correct format.",
            email, EMAIL_FIELD_NAME
        ));
    }
    None
}

pub fn sanitize_name(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn sanitize_email(value: &str) -> String {
    value.trim().to_string()
}
