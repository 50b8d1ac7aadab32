//! Domain-level constants.
//!
//! Messages returned to callers when a user operation fails.

/// Message reported when the persistence step of a create yields nothing
pub const CREATE_USER_FAILED: &str = "Problem to create a user. Try again";

/// Build the not-found message for a user id
pub fn user_not_found_message(id: &str) -> String {
    format!("User with id {} not found", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_id() {
        assert_eq!(user_not_found_message("42"), "User with id 42 not found");
    }
}
