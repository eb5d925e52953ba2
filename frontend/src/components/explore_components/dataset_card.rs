//! Dataset result card component.

use common::{filter_session::FilterEvent, result_view::DatasetCardView};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdOpenInNew, md_file_icons::MdFileDownload}};

use crate::{components::explore_components::star_rating::StarRating, pages::explore_page::ExploreState};

#[component]
pub fn DatasetCard(card: ReadSignal<DatasetCardView>) -> Element {
    let DatasetCardView {
        dataset_id,
        title,
        url,
        publication_type,
        created_at,
        description,
        authors,
        tags,
        download_href,
        download_label,
    } = card.read().clone();

    rsx! {
        div {
            class: "x-dataset-card",
            style: "
                display: flex;
                flex-direction: column;
                gap: 10px;
                background: white;
                border: 1px solid #AAAAAA33;
                border-radius: 8px;
                padding: 16px 20px;
                box-sizing: border-box;
                width: 100%;
            ",
            // Row 1: TITLE - SPACER - PUBLICATION TYPE
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 12px;",
                h3 {
                    style: "margin: 0; font-size: 20px; font-weight: 400; min-width: 0; overflow: hidden; text-overflow: ellipsis;",
                    a { href: "{url}", "{title}" }
                }
                div { style: "flex: 1 1 auto;" }
                QueryBadge { text: publication_type }
            }
            p {
                style: "margin: 0; color: rgba(0, 0, 0, 0.5);",
                "{created_at}"
            }

            CardSection { label: "Description",
                p { style: "margin: 0;", "{description}" }
            }

            CardSection { label: "Authors",
                for (index, author) in authors.into_iter().enumerate() {
                    p { key: "{index}", style: "margin: 0;", "{author}" }
                }
            }

            CardSection { label: "Tags",
                div {
                    style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 6px;",
                    for (index, tag) in tags.into_iter().enumerate() {
                        QueryBadge { key: "{index}-{tag}", text: tag }
                    }
                }
            }

            CardSection { label: "Rating",
                StarRating { dataset_id }
            }

            CardSection { label: "",
                div {
                    style: "display: flex; flex-direction: row; gap: 8px;",
                    CardLinkButton { href: url.clone(), label: "View dataset",
                        Icon { icon: MdOpenInNew, style: "width: 16px; height: 16px;" }
                    }
                    CardLinkButton { href: download_href, label: download_label,
                        Icon { icon: MdFileDownload, style: "width: 16px; height: 16px;" }
                    }
                }
            }
        }
    }
}

/// Badge that copies its text into the query field, which re-runs the search.
#[component]
fn QueryBadge(text: String) -> Element {
    let dispatch = use_context::<ExploreState>().dispatch;
    let clicked_text = text.clone();
    rsx! {
        span {
            style: "
                cursor: pointer;
                background-color: #367ED8;
                color: white;
                border-radius: 6px;
                padding: 2px 8px;
                font-size: 13px;
                font-weight: 500;
                white-space: nowrap;
            ",
            onclick: move |_| dispatch.call(FilterEvent::BadgeClicked(clicked_text.clone())),
            "{text}"
        }
    }
}

#[component]
fn CardSection(label: String, children: Element) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: row; gap: 12px; align-items: flex-start;",
            span {
                style: "flex-shrink: 0; width: 30%; color: rgba(0, 0, 0, 0.5);",
                "{label}"
            }
            div {
                style: "flex: 1; min-width: 0;",
                {children}
            }
        }
    }
}

#[component]
fn CardLinkButton(href: String, label: String, children: Element) -> Element {
    rsx! {
        a {
            href: "{href}",
            style: "
                display: flex;
                align-items: center;
                gap: 6px;
                border: 1px solid #367ED8;
                border-radius: 5px;
                padding: 4px 10px;
                color: #367ED8;
                text-decoration: none;
                font-size: 14px;
            ",
            {children}
            "{label}"
        }
    }
}
