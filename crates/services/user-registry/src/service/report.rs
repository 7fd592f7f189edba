//! Plain-text user report.

use std::fmt;

use domain::UserRecord;

/// Report over a set of users, rendered through `Display`.
///
/// Users are printed in the order given; the registry passes them sorted by ID.
pub struct UserReport<'a> {
    title: &'a str,
    users: &'a [UserRecord],
}

impl<'a> UserReport<'a> {
    pub fn new(title: &'a str, users: &'a [UserRecord]) -> Self {
        Self { title, users }
    }

    pub fn active_count(&self) -> usize {
        self.users.iter().filter(|u| u.is_active()).count()
    }
}

impl fmt::Display for UserReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))?;

        if self.users.is_empty() {
            writeln!(f, "No users registered.")?;
        }
        for user in self.users {
            writeln!(
                f,
                "#{} {} <{}> | age {} | {} | {}",
                user.id,
                user.name,
                user.email,
                user.age,
                user.role_label(),
                user.status
            )?;
        }

        let active = self.active_count();
        write!(
            f,
            "Total: {} users ({} active, {} inactive)",
            self.users.len(),
            active,
            self.users.len() - active
        )
    }
}
