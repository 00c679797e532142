//! Submitter filtering for pull request listings

use std::collections::BTreeSet;
use tea_gitea::PullRequest;

/// Set of submitter identities a listing is narrowed to
///
/// An inactive criteria lets every pull request with a submitter through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchCriteria {
    identities: BTreeSet<String>,
    active: bool,
}

impl MatchCriteria {
    /// Criteria that matches every submitter
    pub fn any() -> Self {
        Self::default()
    }

    /// Criteria restricted to the given identities
    ///
    /// An empty iterator yields inactive criteria.
    pub fn only<I, S>(identities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let identities: BTreeSet<String> = identities.into_iter().map(Into::into).collect();
        let active = !identities.is_empty();
        Self { identities, active }
    }

    /// Build criteria from command line options
    ///
    /// `match_login` wins over everything else and restricts the listing to
    /// `current_login`. Otherwise `identity` and the comma-separated
    /// `identities` are combined; entries are trimmed and blanks dropped.
    /// With neither, matching is disabled.
    pub fn resolve(
        identity: Option<&str>,
        identities: Option<&str>,
        match_login: bool,
        current_login: &str,
    ) -> Self {
        if match_login {
            return Self::only([current_login]);
        }

        let explicit = identity
            .into_iter()
            .chain(identities.into_iter().flat_map(|list| list.split(',')))
            .map(str::trim)
            .filter(|entry| !entry.is_empty());

        Self::only(explicit)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether a submitter identity passes the criteria
    pub fn matches(&self, identity: &str) -> bool {
        !self.active || self.identities.contains(identity)
    }

    /// Whether a pull request passes; entries without a submitter never do
    pub fn matches_pull(&self, pull: &PullRequest) -> bool {
        match &pull.user {
            Some(user) => self.matches(user.identity()),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use tea_gitea::User;

    fn pull_by(user: Option<User>) -> PullRequest {
        PullRequest {
            number: 1,
            title: "t".to_string(),
            body: None,
            user,
            updated_at: DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z").unwrap(),
        }
    }

    #[test]
    fn test_inactive_matches_everyone() {
        let criteria = MatchCriteria::resolve(None, None, false, "me@example.com");
        assert!(!criteria.is_active());
        assert!(criteria.matches("anyone"));
        assert!(criteria.matches(""));
    }

    #[test]
    fn test_comma_list() {
        let criteria = MatchCriteria::resolve(None, Some("alice, bob,,carol "), false, "me");
        assert!(criteria.is_active());
        assert_eq!(criteria, MatchCriteria::only(["alice", "bob", "carol"]));
        assert!(criteria.matches("bob"));
        assert!(!criteria.matches("dave"));
        assert!(!criteria.matches("Bob"));
    }

    #[test]
    fn test_single_identity_combined_with_list() {
        let criteria = MatchCriteria::resolve(Some("erin"), Some("frank"), false, "me");
        assert!(criteria.matches("erin"));
        assert!(criteria.matches("frank"));
        assert!(!criteria.matches("me"));
    }

    #[test]
    fn test_match_login_overrides_list() {
        let criteria = MatchCriteria::resolve(Some("erin"), Some("alice,bob"), true, "me");
        assert_eq!(criteria, MatchCriteria::only(["me"]));
        assert!(criteria.matches("me"));
        assert!(!criteria.matches("alice"));
        assert!(!criteria.matches("erin"));
    }

    #[test]
    fn test_blank_list_disables_matching() {
        let criteria = MatchCriteria::resolve(None, Some(" , "), false, "me");
        assert!(!criteria.is_active());
        assert!(criteria.matches("whoever"));
    }

    #[test]
    fn test_pull_without_submitter_is_skipped() {
        assert!(!MatchCriteria::any().matches_pull(&pull_by(None)));
    }

    #[test]
    fn test_pull_matches_on_identity() {
        let user = User {
            login: "alice".to_string(),
            full_name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        };
        let pull = pull_by(Some(user));
        assert!(MatchCriteria::only(["alice@example.com"]).matches_pull(&pull));
        assert!(!MatchCriteria::only(["alice"]).matches_pull(&pull));
        assert!(MatchCriteria::any().matches_pull(&pull));
    }
}
