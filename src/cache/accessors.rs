//! Per-key convenience accessors.
//!
//! Each method forwards to [`FragmentCache::get`] with a fixed key.

use crate::cache::{FragmentCache, FragmentKey};

macro_rules! cached_accessors {
    ($($method:ident => $key:ident),+ $(,)?) => {
        impl FragmentCache {
            $(
                #[doc = concat!("Cached `", stringify!($key), "` fragment.")]
                pub fn $method(&mut self) -> String {
                    self.get(FragmentKey::$key)
                }
            )+
        }
    };
}

cached_accessors! {
    cached_styles => Styles,
    cached_scripts => Scripts,
    cached_header => Header,
    cached_footer => Footer,
    cached_stats_bar => StatsBar,
    cached_task_list_section => TaskListSection,
    cached_filter_bar => FilterBar,
    cached_search_box => SearchBox,
    cached_empty_state => EmptyState,
    cached_loading_spinner => LoadingSpinner,
    cached_error_banner => ErrorBanner,
    cached_skeleton_task => SkeletonTask,
    cached_skeleton_task_list => SkeletonTaskList,
    cached_skeleton_stats => SkeletonStats,
    cached_skeleton_header => SkeletonHeader,
    cached_progress_section => ProgressSection,
    cached_activity_section => ActivitySection,
    cached_settings_panel => SettingsPanel,
    cached_help_section => HelpSection,
    cached_toast_container => ToastContainer,
    cached_modal_container => ModalContainer,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::GeneratorTable;

    fn named_cache() -> FragmentCache {
        FragmentCache::new(GeneratorTable::from_fn(|key| {
            Box::new(move || key.as_str().to_string())
        }))
    }

    #[test]
    fn test_accessor_forwards_to_get() {
        let mut cache = named_cache();

        assert_eq!(cache.cached_header(), "header");
        assert_eq!(cache.cached_header(), "header");

        let stats = cache.stats();
        assert_eq!(stats.total_misses, 1);
        assert_eq!(stats.total_hits, 1);
    }

    #[test]
    fn test_accessors_hit_their_own_keys() {
        let mut cache = named_cache();

        assert_eq!(cache.cached_skeleton_task(), "skeletonTask");
        assert_eq!(cache.cached_modal_container(), "modalContainer");
        assert_eq!(cache.cached_stats_bar(), "statsBar");
        assert!(cache.has(FragmentKey::SkeletonTask));
        assert!(cache.has(FragmentKey::ModalContainer));
        assert!(cache.has(FragmentKey::StatsBar));
        assert_eq!(cache.len(), 3);
    }
}
