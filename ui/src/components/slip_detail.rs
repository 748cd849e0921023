use dioxus::prelude::*;

use slips_common::currency::{format_rand, vat_amount, VAT_PERCENT};
use slips_common::dates::{format_date, format_time};
use slips_common::receipt::ReceiptId;

use super::app::Route;
use super::shared_state::use_shared_state;

const STORE_PHONE: &str = "Tel: (+27) 011 123 4567";

/// A single slip laid out like the till printout.
#[component]
pub fn SlipDetailView(receipt_id: String) -> Element {
    let shared_state = use_shared_state();
    let nav = use_navigator();

    let receipt = shared_state
        .read()
        .data
        .receipt(&ReceiptId(receipt_id.clone()))
        .cloned();

    let Some(receipt) = receipt else {
        tracing::debug!("No receipt with id {receipt_id}");
        return rsx! {
            div { class: "not-found",
                h2 { "Receipt Not Found" }
                p { "The receipt you're looking for doesn't exist or has been deleted." }
                button {
                    onclick: move |_| { nav.push(Route::Slips {}); },
                    "Back to Receipts"
                }
            }
        };
    };

    let date = format_date(&receipt.date);
    let time = format_time(&receipt.date);
    let subtotal = format_rand(receipt.total());
    let vat = format_rand(vat_amount(receipt.total()));

    rsx! {
        div { class: "slip-detail",
            button {
                class: "ghost",
                onclick: move |_| nav.go_back(),
                "Back"
            }
            div { class: "receipt-paper",
                div { class: "receipt-edge" }
                div { class: "receipt-header",
                    h1 { "SHOPRITE" }
                    p { "{receipt.store_location} Branch" }
                    p { class: "muted", "{STORE_PHONE}" }
                }
                div { class: "receipt-meta",
                    div {
                        p { "{date}" }
                        p { class: "muted", "{time}" }
                    }
                    div { class: "numeric",
                        p { "Receipt #{receipt.receipt_number}" }
                        p { class: "muted", "Cashier: {receipt.cashier_name}" }
                    }
                }
                table { class: "receipt-items",
                    thead {
                        tr {
                            th { "ITEM" }
                            th { class: "centered", "QTY" }
                            th { class: "numeric", "PRICE" }
                            th { class: "numeric", "AMOUNT" }
                        }
                    }
                    tbody {
                        {receipt.items().iter().enumerate().map(|(index, item)| {
                            let price = format_rand(item.price);
                            let amount = format_rand(item.line_total());
                            let quantity = item.quantity();
                            rsx! {
                                tr { key: "{index}",
                                    td {
                                        p { class: "item-name", "{item.name}" }
                                        p { class: "muted", "{item.category}" }
                                    }
                                    td { class: "centered", "{quantity}" }
                                    td { class: "numeric", "{price}" }
                                    td { class: "numeric", "{amount}" }
                                }
                            }
                        })}
                    }
                }
                div { class: "receipt-totals",
                    p { span { "Subtotal:" } span { "{subtotal}" } }
                    p { span { "VAT ({VAT_PERCENT}%):" } span { "{vat}" } }
                    p { class: "grand-total", span { "Total:" } span { "{subtotal}" } }
                }
                div { class: "receipt-footer",
                    p { "Payment Method: {receipt.payment_method}" }
                    p { class: "muted", "Thank you for shopping at Shoprite!" }
                    p { class: "muted", "Visit us again soon." }
                }
                div { class: "receipt-edge" }
            }
            div { class: "slip-actions",
                button {
                    class: "outline",
                    onclick: move |_| {
                        document::eval("window.print();");
                    },
                    "Print Receipt"
                }
                button {
                    class: "primary",
                    onclick: move |_| { nav.push(Route::Slips {}); },
                    "All Receipts"
                }
            }
        }
    }
}
