use integrat_spec::types::{Slug, SlugError};

#[test]
fn slug_accepts_lowercase_with_hyphen() {
    let slug = Slug::new("bcs-mcp").unwrap();
    assert_eq!(slug.as_str(), "bcs-mcp");
}

#[test]
fn slug_accepts_leading_digit() {
    assert!(Slug::new("1abc").is_ok());
}

#[test]
fn slug_accepts_dots_and_underscores() {
    assert!(Slug::new("messages.fetch_v2").is_ok());
}

#[test]
fn slug_rejects_uppercase() {
    assert_eq!(Slug::new("BCS_MCP"), Err(SlugError::InvalidStart));
}

#[test]
fn slug_rejects_empty() {
    assert_eq!(Slug::new(""), Err(SlugError::Empty));
}

#[test]
fn slug_rejects_leading_separator() {
    assert_eq!(Slug::new("-abc"), Err(SlugError::InvalidStart));
}

#[test]
fn slug_rejects_inner_invalid_characters() {
    assert_eq!(Slug::new("abc/def"), Err(SlugError::InvalidCharacters));
    assert_eq!(Slug::new("abC"), Err(SlugError::InvalidCharacters));
}
