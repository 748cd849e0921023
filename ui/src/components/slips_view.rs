use dioxus::prelude::*;

use slips_common::currency::format_rand;
use slips_common::dates::format_date;
use slips_common::receipt::Receipt;

use super::app::Route;
use super::shared_state::use_shared_state;

#[component]
pub fn SlipsView() -> Element {
    let shared_state = use_shared_state();
    let nav = use_navigator();
    let mut search_query = use_signal(String::new);

    let filtered: Vec<Receipt> = {
        let shared = shared_state.read();
        let query = search_query.read();
        let found: Vec<Receipt> = shared
            .data
            .search(query.as_str())
            .into_iter()
            .cloned()
            .collect();
        found
    };
    let found_label = match filtered.len() {
        1 => "1 Receipt Found".to_string(),
        n => format!("{n} Receipts Found"),
    };

    rsx! {
        div { class: "slips-view",
            div { class: "slips-heading",
                h2 { "My Receipts" }
                div { class: "search-bar",
                    input {
                        r#type: "search",
                        placeholder: "Search receipts...",
                        value: "{search_query}",
                        oninput: move |evt| search_query.set(evt.value()),
                    }
                }
            }
            div { class: "dashboard-section",
                h3 { "{found_label}" }
                table { class: "receipt-table",
                    thead {
                        tr {
                            th { "Receipt #" }
                            th { "Date" }
                            th { "Store" }
                            th { "Cashier" }
                            th { "Items" }
                            th { class: "numeric", "Total" }
                            th { class: "centered", "Actions" }
                        }
                    }
                    tbody {
                        if filtered.is_empty() {
                            tr {
                                td { colspan: "7", class: "empty-state",
                                    "No receipts found matching your search."
                                }
                            }
                        }
                        {filtered.into_iter().map(|receipt| {
                            let row_id = receipt.id.0.clone();
                            let button_id = row_id.clone();
                            let date = format_date(&receipt.date);
                            let total = format_rand(receipt.total());
                            let item_count = receipt.items().len();
                            rsx! {
                                tr { class: "clickable",
                                    key: "{receipt.id}",
                                    onclick: move |_| { nav.push(Route::Slip { id: row_id.clone() }); },
                                    td { "{receipt.receipt_number}" }
                                    td { "{date}" }
                                    td { "{receipt.store_location}" }
                                    td { "{receipt.cashier_name}" }
                                    td { "{item_count} items" }
                                    td { class: "numeric", "{total}" }
                                    td { class: "centered",
                                        button {
                                            onclick: move |evt| {
                                                evt.stop_propagation();
                                                nav.push(Route::Slip { id: button_id.clone() });
                                            },
                                            "View Slip"
                                        }
                                    }
                                }
                            }
                        })}
                    }
                }
            }
        }
    }
}
