//! Fragments Module
//!
//! Default content generators for the task dashboard and the view that
//! stitches cached fragments into a page.

mod markup;
mod view;

pub use view::{render_dashboard, render_fragments, BODY_LAYOUT};

use crate::cache::{FragmentKey, Generator, GeneratorTable};

/// Generator table backed by the built-in dashboard markup.
pub fn default_generators() -> GeneratorTable {
    GeneratorTable::from_fn(generator_for)
}

fn generator_for(key: FragmentKey) -> Generator {
    match key {
        FragmentKey::Styles => Box::new(markup::styles),
        FragmentKey::Scripts => Box::new(markup::scripts),
        FragmentKey::Header => Box::new(markup::header),
        FragmentKey::Footer => Box::new(markup::footer),
        FragmentKey::StatsBar => Box::new(markup::stats_bar),
        FragmentKey::TaskListSection => Box::new(markup::task_list_section),
        FragmentKey::FilterBar => Box::new(markup::filter_bar),
        FragmentKey::SearchBox => Box::new(markup::search_box),
        FragmentKey::EmptyState => Box::new(markup::empty_state),
        FragmentKey::LoadingSpinner => Box::new(markup::loading_spinner),
        FragmentKey::ErrorBanner => Box::new(markup::error_banner),
        FragmentKey::SkeletonTask => Box::new(markup::skeleton_task),
        FragmentKey::SkeletonTaskList => Box::new(markup::skeleton_task_list),
        FragmentKey::SkeletonStats => Box::new(markup::skeleton_stats),
        FragmentKey::SkeletonHeader => Box::new(markup::skeleton_header),
        FragmentKey::ProgressSection => Box::new(markup::progress_section),
        FragmentKey::ActivitySection => Box::new(markup::activity_section),
        FragmentKey::SettingsPanel => Box::new(markup::settings_panel),
        FragmentKey::HelpSection => Box::new(markup::help_section),
        FragmentKey::ToastContainer => Box::new(markup::toast_container),
        FragmentKey::ModalContainer => Box::new(markup::modal_container),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_generators_are_non_empty() {
        let table = default_generators();
        for key in FragmentKey::ALL {
            assert!(!table.generate(key).is_empty(), "{key} produced nothing");
        }
    }

    #[test]
    fn test_default_generators_are_deterministic() {
        let table = default_generators();
        for key in FragmentKey::ALL {
            assert_eq!(table.generate(key), table.generate(key));
        }
    }

    #[test]
    fn test_skeleton_list_repeats_skeleton_task() {
        let table = default_generators();
        let row = table.generate(FragmentKey::SkeletonTask);
        let list = table.generate(FragmentKey::SkeletonTaskList);
        assert_eq!(list.matches(row.as_str()).count(), 5);
    }
}
