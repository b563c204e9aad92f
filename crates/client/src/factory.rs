//! Deterministic test-data constructors
//!
//! Pure functions only: no I/O, no randomness, no shared state. Batch
//! variants derive every field of the Nth item from N, so repeated
//! runs produce identical payloads.

use crate::model::{Address, Comment, Company, Geo, Post, User};

/// Filler sentence reused by the long-body variants
const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, \
                     sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. ";

pub mod posts {
    use super::*;

    /// A structurally complete post for user 1.
    pub fn default() -> Post {
        custom(
            1,
            "Test Post Title",
            "This is a test post body with meaningful content for validation.",
        )
    }

    pub fn custom(user_id: u64, title: &str, body: &str) -> Post {
        Post {
            id: None,
            user_id,
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    /// The smallest payload the API accepts.
    pub fn minimal(user_id: u64) -> Post {
        custom(user_id, "T", "B")
    }

    /// Body well past 100 characters, for long-content handling.
    pub fn long_body(user_id: u64) -> Post {
        Post {
            id: None,
            user_id,
            title: "Long Content Post".to_string(),
            body: LOREM.repeat(10),
        }
    }

    /// Title and body carrying punctuation and symbol characters.
    pub fn special_chars(user_id: u64) -> Post {
        custom(
            user_id,
            "Special @#$% Characters & Symbols!",
            r##"Body with symbols: <>&"'`~!@#$%^&*()_+-=[]{}|;:,.?/"##,
        )
    }

    /// `count` posts for one user; the Nth item is a fixed function of N.
    pub fn batch(user_id: u64, count: usize) -> Vec<Post> {
        (1..=count)
            .map(|n| {
                custom(
                    user_id,
                    &format!("Test Post {n}"),
                    &format!("Body content for test post number {n}."),
                )
            })
            .collect()
    }
}

pub mod comments {
    use super::*;

    pub fn for_post(post_id: u64) -> Comment {
        custom(
            post_id,
            "Test Commenter",
            "commenter@example.com",
            "An insightful test comment.",
        )
    }

    pub fn custom(post_id: u64, name: &str, email: &str, body: &str) -> Comment {
        Comment {
            post_id,
            id: None,
            name: name.to_string(),
            email: email.to_string(),
            body: body.to_string(),
        }
    }

    pub fn batch(post_id: u64, count: usize) -> Vec<Comment> {
        (1..=count)
            .map(|n| {
                custom(
                    post_id,
                    &format!("Commenter {n}"),
                    &format!("commenter{n}@example.com"),
                    &format!("Comment number {n}."),
                )
            })
            .collect()
    }
}

pub mod users {
    use super::*;

    /// A fully populated user, nested address and company included.
    pub fn default() -> User {
        User {
            id: None,
            name: "Test User".to_string(),
            username: "testuser".to_string(),
            email: "testuser@example.com".to_string(),
            address: Some(Address {
                street: "123 Test Street".to_string(),
                suite: "Apt. 4".to_string(),
                city: "Testville".to_string(),
                zipcode: "12345-6789".to_string(),
                geo: Geo {
                    lat: "-37.3159".to_string(),
                    lng: "81.1496".to_string(),
                },
            }),
            phone: Some("1-770-736-8031 x56442".to_string()),
            website: Some("testuser.example.com".to_string()),
            company: Some(Company {
                name: "Test Company".to_string(),
                catch_phrase: "Multi-layered client-server neural-net".to_string(),
                bs: "harness real-time e-markets".to_string(),
            }),
        }
    }

    /// Identity fields only, everything optional left out.
    pub fn custom(name: &str, username: &str, email: &str) -> User {
        User {
            id: None,
            name: name.to_string(),
            username: username.to_string(),
            email: email.to_string(),
            address: None,
            phone: None,
            website: None,
            company: None,
        }
    }

    /// The smallest payload the API accepts.
    pub fn minimal() -> User {
        custom("Min User", "minuser", "min@example.com")
    }

    /// Identity plus direct-contact fields.
    pub fn contact_only(
        name: &str,
        username: &str,
        email: &str,
        phone: Option<&str>,
        website: Option<&str>,
    ) -> User {
        User {
            phone: phone.map(str::to_string),
            website: website.map(str::to_string),
            ..custom(name, username, email)
        }
    }

    /// `count` users; the Nth item is a fixed function of N.
    pub fn batch(count: usize) -> Vec<User> {
        (1..=count)
            .map(|n| {
                custom(
                    &format!("Test User {n}"),
                    &format!("testuser{n}"),
                    &format!("testuser{n}@example.com"),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_post_is_complete() {
        let post = posts::default();
        assert_eq!(post.user_id, 1);
        assert!(post.id.is_none());
        assert!(!post.title.is_empty());
        assert!(!post.body.is_empty());
    }

    #[test]
    fn post_batches_are_deterministic() {
        let first = posts::batch(2, 3);
        let second = posts::batch(2, 3);
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
        assert_eq!(first[1].title, "Test Post 2");
        assert!(first.iter().all(|p| p.user_id == 2));
    }

    #[test]
    fn long_body_exceeds_a_hundred_chars() {
        assert!(posts::long_body(1).body.len() > 100);
    }

    #[test]
    fn special_chars_post_carries_symbols() {
        let post = posts::special_chars(1);
        assert!(post.title.contains('@'));
        assert!(post.body.contains('&'));
    }

    #[test]
    fn comment_batch_emails_are_distinct() {
        let batch = comments::batch(1, 4);
        let mut emails: Vec<_> = batch.iter().map(|c| c.email.clone()).collect();
        emails.dedup();
        assert_eq!(emails.len(), 4);
        assert!(batch.iter().all(|c| c.post_id == 1));
    }

    #[test]
    fn default_user_has_nested_structures() {
        let user = users::default();
        assert!(user.address.is_some());
        assert!(user.company.is_some());
        assert_eq!(user.address.unwrap().geo.lat, "-37.3159");
    }

    #[test]
    fn minimal_user_has_no_optionals() {
        let user = users::minimal();
        assert!(user.address.is_none());
        assert!(user.phone.is_none());
        assert!(user.website.is_none());
        assert!(user.company.is_none());
    }

    #[test]
    fn contact_only_user_carries_requested_fields() {
        let user = users::contact_only("N", "u", "u@example.com", Some("555-0100"), None);
        assert_eq!(user.phone.as_deref(), Some("555-0100"));
        assert!(user.website.is_none());
    }

    #[test]
    fn user_batch_usernames_are_distinct() {
        let batch = users::batch(5);
        let mut names: Vec<_> = batch.iter().map(|u| u.username.clone()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 5);
    }
}
