//! Fragment Key Module
//!
//! The closed registry of fragment identifiers known to the cache.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FragmentError;

// == Fragment Key ==
/// Identifies one dashboard fragment.
///
/// The set is fixed at compile time, so every generator table and cache
/// store keyed by `FragmentKey` is exhaustive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FragmentKey {
    Styles,
    Scripts,
    Header,
    Footer,
    StatsBar,
    TaskListSection,
    FilterBar,
    SearchBox,
    EmptyState,
    LoadingSpinner,
    ErrorBanner,
    SkeletonTask,
    SkeletonTaskList,
    SkeletonStats,
    SkeletonHeader,
    ProgressSection,
    ActivitySection,
    SettingsPanel,
    HelpSection,
    ToastContainer,
    ModalContainer,
}

impl FragmentKey {
    /// Every key, in registry order.
    pub const ALL: [FragmentKey; 21] = [
        FragmentKey::Styles,
        FragmentKey::Scripts,
        FragmentKey::Header,
        FragmentKey::Footer,
        FragmentKey::StatsBar,
        FragmentKey::TaskListSection,
        FragmentKey::FilterBar,
        FragmentKey::SearchBox,
        FragmentKey::EmptyState,
        FragmentKey::LoadingSpinner,
        FragmentKey::ErrorBanner,
        FragmentKey::SkeletonTask,
        FragmentKey::SkeletonTaskList,
        FragmentKey::SkeletonStats,
        FragmentKey::SkeletonHeader,
        FragmentKey::ProgressSection,
        FragmentKey::ActivitySection,
        FragmentKey::SettingsPanel,
        FragmentKey::HelpSection,
        FragmentKey::ToastContainer,
        FragmentKey::ModalContainer,
    ];

    // == Wire Name ==
    /// Returns the camelCase name used on the wire and in logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            FragmentKey::Styles => "styles",
            FragmentKey::Scripts => "scripts",
            FragmentKey::Header => "header",
            FragmentKey::Footer => "footer",
            FragmentKey::StatsBar => "statsBar",
            FragmentKey::TaskListSection => "taskListSection",
            FragmentKey::FilterBar => "filterBar",
            FragmentKey::SearchBox => "searchBox",
            FragmentKey::EmptyState => "emptyState",
            FragmentKey::LoadingSpinner => "loadingSpinner",
            FragmentKey::ErrorBanner => "errorBanner",
            FragmentKey::SkeletonTask => "skeletonTask",
            FragmentKey::SkeletonTaskList => "skeletonTaskList",
            FragmentKey::SkeletonStats => "skeletonStats",
            FragmentKey::SkeletonHeader => "skeletonHeader",
            FragmentKey::ProgressSection => "progressSection",
            FragmentKey::ActivitySection => "activitySection",
            FragmentKey::SettingsPanel => "settingsPanel",
            FragmentKey::HelpSection => "helpSection",
            FragmentKey::ToastContainer => "toastContainer",
            FragmentKey::ModalContainer => "modalContainer",
        }
    }

    // == Registry Index ==
    /// Position of this key in [`FragmentKey::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FragmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FragmentKey {
    type Err = FragmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FragmentKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| FragmentError::UnknownKey(s.to_string()))
    }
}
