use df_catalog::{FilterController, StatusFilter};
use df_domain::tool::{ToolRecord, ToolStatus};
use proptest::prelude::*;

fn status() -> impl Strategy<Value = ToolStatus> {
    prop::sample::select(ToolStatus::ALL.to_vec())
}

fn filter() -> impl Strategy<Value = StatusFilter> {
    prop::sample::select(StatusFilter::CONTROLS.to_vec())
}

fn record() -> impl Strategy<Value = ToolRecord> {
    ("[a-z]{1,8}", "[A-Za-z ]{0,12}", status(), prop::collection::vec("[A-Za-z]{1,6}", 0..4))
        .prop_map(|(slug, name, status, tags)| ToolRecord {
            slug,
            name,
            status,
            tags,
            ..ToolRecord::default()
        })
}

fn expected(tools: &[ToolRecord], filter: StatusFilter, query: &str) -> Vec<String> {
    let query = query.trim().to_lowercase();
    tools
        .iter()
        .filter(|t| filter.admits(t.status))
        .filter(|t| {
            query.is_empty()
                || t.name.to_lowercase().contains(&query)
                || t.tags.join(" ").to_lowercase().contains(&query)
        })
        .map(|t| t.slug.clone())
        .collect()
}

proptest! {
    #[test]
    fn visible_set_is_status_and_query_match(
        tools in prop::collection::vec(record(), 0..20),
        filter in filter(),
        query in "[A-Za-z ]{0,4}",
    ) {
        let mut controller = FilterController::from_tools(&tools);
        controller.set_status_filter(filter);
        controller.set_query(&query);

        let visible: Vec<String> = controller.visible_slugs().map(str::to_owned).collect();
        prop_assert_eq!(&visible, &expected(&tools, filter, &query));
        prop_assert_eq!(controller.empty_state_visible(), visible.is_empty());
    }

    #[test]
    fn query_never_reveals_filtered_out_cards(
        tools in prop::collection::vec(record(), 0..20),
        filter in filter(),
        first in "[a-z]{0,3}",
        second in "[a-z]{0,3}",
    ) {
        let mut controller = FilterController::from_tools(&tools);
        controller.set_status_filter(filter);
        controller.set_query(&first);
        controller.set_query(&second);

        for (position, tool) in tools.iter().enumerate() {
            if controller.is_visible(position) {
                prop_assert!(filter.admits(tool.status));
            }
        }
    }

    #[test]
    fn exactly_one_control_is_active(filter in filter()) {
        let mut controller = FilterController::from_tools(&[]);
        controller.set_status_filter(filter);
        let active = controller.controls().iter().filter(|c| c.active).count();
        prop_assert_eq!(active, 1);
    }
}
