//! Text rendering of fetched records.
//!
//! A `DisplayNode` is what one list entry shows: a caption and an image
//! source. Rendering has no failure modes; callers decide what to do with
//! errors before they get here.

use std::fmt;

use crate::error::FetchError;
use crate::types::{Joke, User, UserList};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNode {
    pub text: String,
    pub image_src: String,
}

impl From<&User> for DisplayNode {
    fn from(user: &User) -> Self {
        Self {
            text: format!("{} {}", user.first_name, user.last_name),
            image_src: user.avatar.clone(),
        }
    }
}

impl fmt::Display for DisplayNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {} <{}>", self.text, self.image_src)
    }
}

/// One node per user, in input order.
pub fn render_users(users: &UserList) -> Vec<DisplayNode> {
    users.data.iter().map(DisplayNode::from).collect()
}

pub fn render_joke(joke: &Joke) -> [String; 2] {
    [joke.setup.clone(), joke.delivery.clone()]
}

/// Message written into an error display surface.
pub fn render_error(err: &FetchError) -> String {
    err.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u32, first: &str, last: &str) -> User {
        User {
            id,
            email: format!("{}@reqres.in", first.to_lowercase()),
            first_name: first.to_string(),
            last_name: last.to_string(),
            avatar: format!("https://reqres.in/img/faces/{id}-image.jpg"),
        }
    }

    #[test]
    fn one_node_per_user_in_order() {
        let list = UserList {
            page: 1,
            per_page: 6,
            total: 2,
            total_pages: 1,
            data: vec![user(1, "George", "Bluth"), user(2, "Janet", "Weaver")],
        };
        let nodes = render_users(&list);
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].text, "George Bluth");
        assert_eq!(nodes[1].image_src, "https://reqres.in/img/faces/2-image.jpg");
        assert_eq!(
            nodes[1].to_string(),
            "- Janet Weaver <https://reqres.in/img/faces/2-image.jpg>"
        );
    }

    #[test]
    fn empty_list_renders_nothing() {
        let list = UserList {
            page: 3,
            per_page: 6,
            total: 12,
            total_pages: 2,
            data: Vec::new(),
        };
        assert!(render_users(&list).is_empty());
    }

    #[test]
    fn joke_renders_as_two_lines() {
        let joke = Joke {
            setup: "setup".to_string(),
            delivery: "delivery".to_string(),
        };
        assert_eq!(render_joke(&joke), ["setup".to_string(), "delivery".to_string()]);
    }

    #[test]
    fn error_renders_its_message() {
        let err = FetchError::HttpStatus {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        };
        assert_eq!(render_error(&err), "Fetch failed. 500 Internal Server Error");
    }
}
