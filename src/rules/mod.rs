//! Rule implementations for ftlsync.
//!
//! Each rule has a thin `check_*_issues` entry point that loads files for a
//! [`ProjectContext`](crate::core::ProjectContext) and a pure `check_*`
//! function that works on already-parsed inputs.
//!
//! ## Module Structure
//!
//! - `missing`: Messages present in the source locale but absent from a target
//! - `unused`: Keys that no corpus file mentions

pub mod missing;
pub mod unused;

use crate::{
    core::{LocaleResource, MessageLocation},
    issues::ParseErrorIssue,
};

/// One warning per junk entry of `resource`.
pub fn parse_error_issues(file_path: &str, resource: &LocaleResource) -> Vec<ParseErrorIssue> {
    resource
        .junk()
        .map(|junk| ParseErrorIssue {
            location: MessageLocation::with_line(file_path, junk.line),
            error: junk.reason.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parsers::ftl::parse_resource;

    #[test]
    fn test_parse_error_issues_point_at_junk_lines() {
        let resource = parse_resource("    .orphan = O\nok = fine\n!!! nope\n");
        let issues = parse_error_issues("de.ftl", &resource);

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].location.line, 1);
        assert_eq!(issues[0].error, "attribute without a message");
        assert_eq!(issues[1].location.line, 3);
        assert_eq!(issues[1].error, "expected `key = value`");
    }

    #[test]
    fn test_clean_resource_has_no_parse_errors() {
        let resource = parse_resource("# c\na = A\n    .b = B\n");
        assert!(parse_error_issues("en.ftl", &resource).is_empty());
    }
}
