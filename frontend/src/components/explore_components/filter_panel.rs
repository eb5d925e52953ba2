//! Filter panel: every control of the explore search plus the clear-filters button.

use common::{
    explore_const::{PUBLICATION_TYPE_OPTIONS, element_id},
    filter_bounds::CountBounds,
    filter_session::FilterEvent,
    filter_state::{FilterField, SortOrder, format_date},
};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_content_icons::MdClear, md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}}};

use crate::{data_definitions::page_environment::PageEnvironment, pages::explore_page::ExploreState};

const INPUT_STYLE: &str = "
    width: 100%;
    box-sizing: border-box;
    padding: 6px 10px;
    border: 1px solid rgba(0, 0, 0, 0.3);
    border-radius: 6px;
    font-size: 15px;
    font-family: Roboto, sans-serif;
";

#[component]
pub fn FilterPanel() -> Element {
    let explore_state = use_context::<ExploreState>();
    let environment = use_context::<PageEnvironment>();
    let dispatch = explore_state.dispatch;
    let (filters, bounds) = {
        let session = explore_state.session.read();
        (session.state.clone(), session.bounds)
    };

    let on_input = move |field: FilterField| {
        move |event: Event<FormData>| dispatch.call(FilterEvent::Input { field, value: event.value() })
    };

    rsx! {
        form {
            id: element_id::FILTERS,
            style: "display: flex; flex-direction: column; gap: 14px;",
            onsubmit: move |event| event.prevent_default(),

            input { r#type: "hidden", id: element_id::CSRF_TOKEN, value: "{environment.csrf_token}" }

            FilterRow { label: "Search for datasets by title, author or tag",
                input {
                    r#type: "search",
                    id: FilterField::Query.element_id(),
                    style: INPUT_STYLE,
                    placeholder: "Search datasets",
                    value: "{filters.query}",
                    oninput: on_input(FilterField::Query),
                }
            }

            FilterRow { label: "Filter by publication type",
                select {
                    id: FilterField::PublicationType.element_id(),
                    style: INPUT_STYLE,
                    value: "{filters.publication_type}",
                    oninput: on_input(FilterField::PublicationType),
                    for (value, label) in PUBLICATION_TYPE_OPTIONS.iter().copied() {
                        option {
                            key: "{value}",
                            value: value,
                            selected: filters.publication_type == value,
                            "{label}"
                        }
                    }
                }
            }

            FilterRow { label: "Filter by publication date",
                div {
                    style: "display: flex; flex-direction: row; gap: 8px; align-items: center;",
                    input {
                        r#type: "date",
                        id: FilterField::StartDate.element_id(),
                        style: INPUT_STYLE,
                        value: "{filters.start_date}",
                        max: bounds.dates.start_date_max.map(format_date),
                        oninput: on_input(FilterField::StartDate),
                    }
                    span { style: "color: rgba(0, 0, 0, 0.5);", "to" }
                    input {
                        r#type: "date",
                        id: FilterField::EndDate.element_id(),
                        style: INPUT_STYLE,
                        value: "{filters.end_date}",
                        min: bounds.dates.end_date_min.map(format_date),
                        oninput: on_input(FilterField::EndDate),
                    }
                }
            }

            CountRangeFilter {
                label: "Number of UVL models",
                min_field: FilterField::MinUvl,
                max_field: FilterField::MaxUvl,
                min_value: filters.min_uvl.clone(),
                max_value: filters.max_uvl.clone(),
                bounds: bounds.uvl,
            }

            ValidUvlsToggle { checked: filters.by_valid_uvls }

            CountRangeFilter {
                label: "Number of configurations",
                min_field: FilterField::MinConfigurations,
                max_field: FilterField::MaxConfigurations,
                min_value: filters.min_num_configurations.clone(),
                max_value: filters.max_num_configurations.clone(),
                bounds: bounds.configurations,
            }

            FilterRow { label: "Sort results",
                div {
                    style: "display: flex; flex-direction: row; gap: 16px;",
                    for sort_order in SortOrder::ALL {
                        label {
                            key: "{sort_order}",
                            style: "display: flex; align-items: center; gap: 6px; cursor: pointer;",
                            input {
                                r#type: "radio",
                                name: FilterField::Sorting.element_id(),
                                id: "sorting_{sort_order}",
                                value: sort_order.as_str(),
                                checked: filters.sorting == sort_order,
                                oninput: move |_| dispatch.call(FilterEvent::Input {
                                    field: FilterField::Sorting,
                                    value: sort_order.to_string(),
                                }),
                            }
                            "{sort_order.label()}"
                        }
                    }
                }
            }

            button {
                id: element_id::CLEAR_FILTERS,
                r#type: "button",
                style: "
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 6px;
                    cursor: pointer;
                    background: white;
                    border: 1px solid rgba(0, 0, 0, 0.5);
                    border-radius: 1000px;
                    padding: 8px 14px;
                    font-size: 15px;
                ",
                onclick: move |_| dispatch.call(FilterEvent::Cleared),
                Icon { icon: MdClear, style: "width: 18px; height: 18px;" }
                "Clear filters"
            }
        }
    }
}

#[component]
fn FilterRow(label: String, children: Element) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 6px;",
            span {
                style: "font-size: 14px; font-weight: 500; color: rgb(75, 87, 112);",
                "{label}"
            }
            {children}
        }
    }
}

/// A min/max number pair; each field narrows the other's selectable range.
#[component]
fn CountRangeFilter(
    label: String,
    min_field: FilterField,
    max_field: FilterField,
    min_value: String,
    max_value: String,
    bounds: CountBounds,
) -> Element {
    let dispatch = use_context::<ExploreState>().dispatch;
    let on_input = move |field: FilterField| {
        move |event: Event<FormData>| dispatch.call(FilterEvent::Input { field, value: event.value() })
    };

    rsx! {
        FilterRow { label,
            div {
                style: "display: flex; flex-direction: row; gap: 8px; align-items: center;",
                input {
                    r#type: "number",
                    id: min_field.element_id(),
                    style: INPUT_STYLE,
                    placeholder: "Min",
                    min: "0",
                    max: bounds.min_field_ceiling.map(|v| v.to_string()),
                    value: "{min_value}",
                    oninput: on_input(min_field),
                }
                span { style: "color: rgba(0, 0, 0, 0.5);", "to" }
                input {
                    r#type: "number",
                    id: max_field.element_id(),
                    style: INPUT_STYLE,
                    placeholder: "Max",
                    min: bounds.max_field_floor.map(|v| v.to_string()),
                    value: "{max_value}",
                    oninput: on_input(max_field),
                }
            }
        }
    }
}

#[component]
fn ValidUvlsToggle(checked: bool) -> Element {
    let dispatch = use_context::<ExploreState>().dispatch;
    rsx! {
        div {
            id: FilterField::ByValidUvls.element_id(),
            role: "checkbox",
            aria_checked: "{checked}",
            style: "
                display: flex;
                flex-direction: row;
                gap: 10px;
                cursor: pointer;
                align-items: center;
                font-size: 15px;
            ",
            onclick: move |_| dispatch.call(FilterEvent::Input {
                field: FilterField::ByValidUvls,
                value: (!checked).to_string(),
            }),
            if checked {
                Icon { icon: MdCheckBox, style: "width: 24px; height: 24px; color: rgb(28, 33, 45); flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 24px; height: 24px; color: black; flex-shrink: 0;" }
            }
            "Only datasets with valid UVL models"
        }
    }
}
