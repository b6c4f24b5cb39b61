//! Display attributes shown next to the user in the chat room.

use serde::{Deserialize, Serialize};

use crate::rules::{Rule, Rules};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
    #[serde(rename = "o")]
    Other,
}

/// Profile metadata embedded in every issued token.
///
/// These values are independent of the username the token is issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatProfile {
    pub nick: String,
    /// Avatar image path
    pub img: String,
    /// Profile page URL
    pub url: String,
    pub gender: Gender,
    pub emoji: String,
    pub rules: Rules,
}

impl Default for ChatProfile {
    fn default() -> Self {
        Self {
            nick: "killer".to_string(),
            img: "/static/photos/killer.jpg".to_string(),
            url: "/u/killer".to_string(),
            gender: Gender::Male,
            emoji: "🤖".to_string(),
            rules: Rules::new([Rule::RedCam, Rule::NoImage]),
        }
    }
}
