//! Dashboard view assembly.

use crate::cache::{FragmentCache, FragmentKey};

/// Body sections, top to bottom.
pub const BODY_LAYOUT: [FragmentKey; 17] = [
    FragmentKey::Header,
    FragmentKey::ErrorBanner,
    FragmentKey::StatsBar,
    FragmentKey::SearchBox,
    FragmentKey::FilterBar,
    FragmentKey::LoadingSpinner,
    FragmentKey::SkeletonTaskList,
    FragmentKey::TaskListSection,
    FragmentKey::EmptyState,
    FragmentKey::ProgressSection,
    FragmentKey::ActivitySection,
    FragmentKey::SettingsPanel,
    FragmentKey::HelpSection,
    FragmentKey::Footer,
    FragmentKey::ToastContainer,
    FragmentKey::ModalContainer,
    FragmentKey::Scripts,
];

/// Renders the full dashboard document through the cache.
///
/// After the first render every fragment lookup is a hit.
pub fn render_dashboard(cache: &mut FragmentCache) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\" />\n<title>Tasks</title>\n",
    );
    html.push_str(&cache.get(FragmentKey::Styles));
    html.push_str("\n</head>\n<body>\n");

    for key in BODY_LAYOUT {
        html.push_str(&cache.get(key));
        html.push('\n');
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// Concatenates the requested fragments in order.
pub fn render_fragments(cache: &mut FragmentCache, keys: &[FragmentKey]) -> String {
    keys.iter().map(|key| cache.get(*key)).collect::<Vec<_>>().join("\n")
}
