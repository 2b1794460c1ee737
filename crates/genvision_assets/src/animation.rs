//! Animation definitions and the named set used by the UI.

use crate::loader::load_file_optional;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// The named animations the presentation layer knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationKind {
    /// Idle header animation
    Coding,
    /// Shown while a request is in flight
    Spinner,
    /// Shown once a response arrives
    Balloon,
}

impl AnimationKind {
    /// All kinds, in display order.
    pub const ALL: [AnimationKind; 3] = [
        AnimationKind::Coding,
        AnimationKind::Spinner,
        AnimationKind::Balloon,
    ];

    /// File stem under the assets directory.
    pub fn file_stem(&self) -> &'static str {
        match self {
            AnimationKind::Coding => "coding",
            AnimationKind::Spinner => "spinner",
            AnimationKind::Balloon => "balloon",
        }
    }
}

/// A parsed animation document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct Animation {
    /// Name the animation was loaded under
    name: String,
    /// Raw Lottie JSON
    definition: serde_json::Value,
}

impl Animation {
    /// Wraps a parsed definition.
    pub fn new(name: impl Into<String>, definition: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            definition,
        }
    }
}

/// The animations available for one page render. Each may be missing.
#[derive(Debug, Clone, Default, PartialEq, Getters)]
pub struct AnimationSet {
    coding: Option<Animation>,
    spinner: Option<Animation>,
    balloon: Option<Animation>,
}

impl AnimationSet {
    /// Loads `coding.json`, `spinner.json` and `balloon.json` from `dir`.
    ///
    /// Never fails; missing or broken files leave the slot empty.
    #[instrument(skip(dir), fields(dir = %dir.as_ref().display()))]
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let mut set = Self::default();
        for kind in AnimationKind::ALL {
            let path = dir.join(format!("{}.json", kind.file_stem()));
            let animation = load_file_optional(kind.file_stem(), &path);
            set.set(kind, animation);
        }
        debug!(loaded = set.loaded_count(), "Animation set loaded");
        set
    }

    /// Returns the animation for `kind`, if loaded.
    pub fn get(&self, kind: AnimationKind) -> Option<&Animation> {
        match kind {
            AnimationKind::Coding => self.coding.as_ref(),
            AnimationKind::Spinner => self.spinner.as_ref(),
            AnimationKind::Balloon => self.balloon.as_ref(),
        }
    }

    /// Replaces the animation for `kind`.
    pub fn set(&mut self, kind: AnimationKind, animation: Option<Animation>) {
        match kind {
            AnimationKind::Coding => self.coding = animation,
            AnimationKind::Spinner => self.spinner = animation,
            AnimationKind::Balloon => self.balloon = animation,
        }
    }

    /// Number of animations that loaded.
    pub fn loaded_count(&self) -> usize {
        AnimationKind::ALL
            .iter()
            .filter(|kind| self.get(**kind).is_some())
            .count()
    }
}
