use serde::{Deserialize, Serialize};

/// One tracked practice problem for a user.
///
/// The owning user is not part of the entity; callers pass the user key to
/// every repository operation. Together with that key, `title_slug` forms
/// the composite identity of the stored row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Stable identifier of the problem (e.g. `two-sum`).
    pub title_slug: String,
    /// URL to the problem. Opaque to this layer.
    pub link: String,
    /// Next scheduled review date. String-encoded, passed through unvalidated.
    pub repeat_date: String,
    /// Date of the last successful completion. Passed through unvalidated.
    pub last_completion_date: String,
}

impl Problem {
    /// Creates a problem record with the given fields.
    pub fn new(
        title_slug: impl Into<String>,
        link: impl Into<String>,
        repeat_date: impl Into<String>,
        last_completion_date: impl Into<String>,
    ) -> Self {
        Self {
            title_slug: title_slug.into(),
            link: link.into(),
            repeat_date: repeat_date.into(),
            last_completion_date: last_completion_date.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_all_fields() {
        let problem = Problem::new(
            "two-sum",
            "https://leetcode.com/problems/two-sum/",
            "2024-01-01",
            "2023-12-01",
        );

        assert_eq!(problem.title_slug, "two-sum");
        assert_eq!(problem.link, "https://leetcode.com/problems/two-sum/");
        assert_eq!(problem.repeat_date, "2024-01-01");
        assert_eq!(problem.last_completion_date, "2023-12-01");
    }
}
