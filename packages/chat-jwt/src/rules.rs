//! Moderation rules carried in the `rules` claim.
//!
//! Some rules imply others: `novideo` also counts as `nobroadcast`. Always
//! check a rule through its `is_*` predicate instead of comparing variants.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rule {
    /// Can not use video features at all
    NoVideo,
    /// Can not share their webcam
    NoBroadcast,
    /// Can not upload or see images
    NoImage,
    /// Camera is force marked NSFW
    RedCam,
}

impl Rule {
    pub fn is_no_video(self) -> bool {
        self == Rule::NoVideo
    }

    pub fn is_no_image(self) -> bool {
        self == Rule::NoImage
    }

    pub fn is_no_broadcast(self) -> bool {
        matches!(self, Rule::NoVideo | Rule::NoBroadcast)
    }

    pub fn is_red_cam(self) -> bool {
        self == Rule::RedCam
    }
}

/// Ordered list of rules as it appears on the token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rules(pub Vec<Rule>);

impl Rules {
    pub fn new(rules: impl IntoIterator<Item = Rule>) -> Self {
        Self(rules.into_iter().collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Flatten the rule list into the flag map the chat front-end reads.
    pub fn to_dict(&self) -> BTreeMap<&'static str, bool> {
        let any = |pred: fn(Rule) -> bool| self.iter().any(|r| pred(*r));

        BTreeMap::from([
            ("IsNoVideoRule", any(Rule::is_no_video)),
            ("IsNoImageRule", any(Rule::is_no_image)),
            ("IsNoBroadcastRule", any(Rule::is_no_broadcast)),
            ("IsRedCamRule", any(Rule::is_red_cam)),
        ])
    }
}
