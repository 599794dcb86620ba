//! Formats a webhook event as a one-line notification message.
//!
//! Pure functions only; the HTTP layers on both sides stay out of here.

use crate::event::GitHubEvent;

/// First seven characters of a commit SHA, or the whole string if shorter.
fn short_sha(sha: &str) -> &str {
    sha.get(..7).unwrap_or(sha)
}

/// Renders the notification message for an event.
pub fn describe(event: &GitHubEvent) -> String {
    match event {
        GitHubEvent::Star(star) => format!(
            "User {} {} star on {}",
            star.sender.login, star.action, star.repository.full_name
        ),

        GitHubEvent::Issues(payload) => match payload.action.as_str() {
            "opened" => format!("An issue was opened with this title {}", payload.issue.title),
            "closed" => format!("An issue was closed by {}", payload.issue.user.login),
            "reopened" => format!("An issue was reopened by {}", payload.issue.user.login),
            other => format!("Unhandled action for the issue event {}", other),
        },

        GitHubEvent::Push(push) => {
            let message = format!(
                "User {} pushed to {} from {} to {}",
                push.sender.login,
                push.repository.full_name,
                short_sha(&push.before),
                short_sha(&push.after),
            );
            if push.forced {
                format!("BEWARE: {} (FORCED PUSH)", message)
            } else {
                message
            }
        }

        GitHubEvent::Unrecognized { event } => format!("Unknown event {}", event),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Issue, IssuePayload, PushPayload, Repository, StarPayload, User};

    fn push_payload(before: &str, after: &str, forced: bool) -> GitHubEvent {
        GitHubEvent::Push(PushPayload {
            before: before.to_string(),
            after: after.to_string(),
            repository: Repository {
                full_name: "org/repo".to_string(),
            },
            sender: User {
                login: "bob".to_string(),
            },
            forced,
        })
    }

    fn issue_payload(action: &str) -> GitHubEvent {
        GitHubEvent::Issues(IssuePayload {
            action: action.to_string(),
            issue: Issue {
                title: "Broken build".to_string(),
                user: User {
                    login: "carol".to_string(),
                },
            },
        })
    }

    #[test]
    fn star_message_uses_action_verbatim() {
        let event = GitHubEvent::Star(StarPayload {
            action: "deleted".to_string(),
            sender: User {
                login: "ada".to_string(),
            },
            repository: Repository {
                full_name: "org/repo".to_string(),
            },
        });
        assert_eq!(describe(&event), "User ada deleted star on org/repo");
    }

    #[test]
    fn issue_actions_have_fixed_templates() {
        assert_eq!(
            describe(&issue_payload("opened")),
            "An issue was opened with this title Broken build"
        );
        assert_eq!(
            describe(&issue_payload("closed")),
            "An issue was closed by carol"
        );
        assert_eq!(
            describe(&issue_payload("reopened")),
            "An issue was reopened by carol"
        );
    }

    #[test]
    fn unhandled_issue_action_falls_back() {
        assert_eq!(
            describe(&issue_payload("labeled")),
            "Unhandled action for the issue event labeled"
        );
    }

    #[test]
    fn issue_action_matching_is_case_sensitive() {
        assert_eq!(
            describe(&issue_payload("Opened")),
            "Unhandled action for the issue event Opened"
        );
    }

    #[test]
    fn push_message_shortens_shas_to_seven_chars() {
        let event = push_payload("abcdefgh123", "1234567abcdef", false);
        assert_eq!(
            describe(&event),
            "User bob pushed to org/repo from abcdefg to 1234567"
        );
    }

    #[test]
    fn short_shas_are_used_whole() {
        let event = push_payload("abc", "de", false);
        assert_eq!(describe(&event), "User bob pushed to org/repo from abc to de");
    }

    #[test]
    fn forced_push_is_wrapped_with_a_warning() {
        let event = push_payload("abcdef1234567", "1234567abcdef", true);
        assert_eq!(
            describe(&event),
            "BEWARE: User bob pushed to org/repo from abcdef1 to 1234567 (FORCED PUSH)"
        );
    }

    #[test]
    fn plain_push_has_no_warning_prefix() {
        let event = push_payload("abcdef1234567", "1234567abcdef", false);
        assert!(!describe(&event).contains("BEWARE"));
    }

    #[test]
    fn unrecognized_event_names_the_raw_header() {
        let event = GitHubEvent::Unrecognized {
            event: "foo".to_string(),
        };
        assert_eq!(describe(&event), "Unknown event foo");
    }

    #[test]
    fn missing_header_reads_as_unknown() {
        let event = GitHubEvent::Unrecognized {
            event: "unknown".to_string(),
        };
        assert_eq!(describe(&event), "Unknown event unknown");
    }
}
