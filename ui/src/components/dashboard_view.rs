use dioxus::prelude::*;

use slips_common::aggregate::RECENT_RECEIPTS;
use slips_common::currency::format_rand;
use slips_common::dates::format_date;
use slips_common::receipt::Receipt;

use super::app::Route;
use super::sales_chart::SalesChart;
use super::shared_state::use_shared_state;

#[component]
pub fn DashboardView() -> Element {
    let shared_state = use_shared_state();
    let nav = use_navigator();

    // Everything is recomputed from the snapshot on each render.
    let shared = shared_state.read();
    let summary = shared.data.summary();
    let top_products = shared.data.top_selling_products();
    let daily_sales = shared.data.daily_sales().to_vec();
    let recent: Vec<Receipt> = shared
        .data
        .recent(RECENT_RECEIPTS)
        .into_iter()
        .cloned()
        .collect();
    drop(shared);

    let total_str = format_rand(summary.total_sales);
    let average_str = format_rand(summary.average_purchase);

    rsx! {
        div { class: "dashboard",
            div { class: "dashboard-heading",
                h2 { "Sales Dashboard" }
                button {
                    class: "primary",
                    onclick: move |_| { nav.push(Route::Slips {}); },
                    "View All Receipts"
                }
            }

            div { class: "summary-cards",
                div { class: "summary-card",
                    p { class: "card-title", "Total Sales" }
                    p { class: "card-value", "{total_str}" }
                }
                div { class: "summary-card",
                    p { class: "card-title", "Total Receipts" }
                    p { class: "card-value", "{summary.receipt_count}" }
                }
                div { class: "summary-card",
                    p { class: "card-title", "Average Purchase" }
                    p { class: "card-value", "{average_str}" }
                }
            }

            div { class: "dashboard-charts",
                div { class: "dashboard-section chart-section",
                    h3 { "Daily Sales (Last 14 Days)" }
                    SalesChart { points: daily_sales }
                }
                div { class: "dashboard-section",
                    h3 { "Top Selling Products" }
                    if top_products.is_empty() {
                        p { class: "empty-state", "No products sold yet." }
                    } else {
                        div { class: "top-products",
                            {top_products.into_iter().map(|product| {
                                let revenue = format_rand(product.revenue);
                                rsx! {
                                    div { class: "top-product",
                                        key: "{product.id}",
                                        div {
                                            p { class: "product-name", "{product.name}" }
                                            p { class: "product-qty", "Qty: {product.quantity}" }
                                        }
                                        span { class: "product-revenue", "{revenue}" }
                                    }
                                }
                            })}
                        }
                    }
                }
            }

            div { class: "dashboard-section",
                h3 { "Recent Receipts" }
                table { class: "receipt-table",
                    thead {
                        tr {
                            th { "Receipt #" }
                            th { "Date" }
                            th { "Store" }
                            th { "Items" }
                            th { class: "numeric", "Total" }
                            th { class: "numeric", "Actions" }
                        }
                    }
                    tbody {
                        {recent.into_iter().map(|receipt| {
                            let id = receipt.id.0.clone();
                            let date = format_date(&receipt.date);
                            let total = format_rand(receipt.total());
                            let item_count = receipt.items().len();
                            rsx! {
                                tr { key: "{receipt.id}",
                                    td { "{receipt.receipt_number}" }
                                    td { "{date}" }
                                    td { "{receipt.store_location}" }
                                    td { "{item_count} items" }
                                    td { class: "numeric", "{total}" }
                                    td { class: "numeric",
                                        button {
                                            onclick: move |_| { nav.push(Route::Slip { id: id.clone() }); },
                                            "View"
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
