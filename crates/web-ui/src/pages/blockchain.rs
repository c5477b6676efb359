//! Read-only ledger viewer

use dioxus::prelude::*;

use crate::components::{EmptyState, ErrorMessage, Spinner};
use crate::hooks::use_session;
use crate::models::{Block, BlockchainStats, format_timestamp};
use crate::services::BlockchainApi;

#[component]
pub fn BlockchainPage() -> Element {
    let context = use_session();
    let api = use_hook(|| BlockchainApi::new(context.client()));

    let mut stats = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.stats().await }
        }
    });
    let mut blocks = use_resource(move || {
        let api = api.clone();
        async move { api.blocks().await }
    });

    let stats_view = match &*stats.read() {
        None => rsx! { Spinner {} },
        Some(Err(e)) => rsx! { ErrorMessage { message: e.user_message() } },
        Some(Ok(stats)) => rsx! { StatsCard { stats: stats.clone() } },
    };

    let blocks_view = match &*blocks.read() {
        None => rsx! { Spinner { message: Some("Loading blocks...".to_string()) } },
        Some(Err(e)) => rsx! { ErrorMessage { message: e.user_message() } },
        Some(Ok(list)) if list.is_empty() => rsx! {
            EmptyState { message: "No blocks recorded yet".to_string() }
        },
        Some(Ok(list)) => rsx! { BlockTable { blocks: list.clone() } },
    };

    rsx! {
        div { class: "space-y-6",
            div { class: "flex items-center justify-between",
                h1 { class: "text-2xl font-bold text-gray-900", "Blockchain Ledger" }
                button {
                    class: "px-4 py-2 rounded-md text-sm font-medium bg-gray-200 text-gray-800 hover:bg-gray-300",
                    onclick: move |_| {
                        stats.restart();
                        blocks.restart();
                    },
                    "Refresh"
                }
            }
            {stats_view}
            {blocks_view}
        }
    }
}

#[component]
fn StatsCard(stats: BlockchainStats) -> Element {
    let last_block = stats
        .last_block_time
        .as_deref()
        .map(format_timestamp)
        .unwrap_or_else(|| "-".to_string());
    let entries = [
        ("Total blocks", stats.total_blocks.to_string()),
        ("Reservations recorded", stats.total_reservations.to_string()),
        ("Chain type", stats.blockchain_type.clone()),
        ("Status", stats.status.clone()),
        ("Last block", last_block),
    ];

    rsx! {
        div { class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-5",
            for (label, value) in entries {
                div { class: "rounded-lg bg-white p-4 shadow",
                    p { class: "text-xs uppercase text-gray-500", "{label}" }
                    p { class: "mt-1 text-lg font-semibold text-gray-900", "{value}" }
                }
            }
        }
    }
}

#[component]
fn BlockTable(blocks: Vec<Block>) -> Element {
    rsx! {
        div { class: "overflow-x-auto rounded-lg bg-white shadow",
            table { class: "min-w-full text-sm",
                thead { class: "bg-gray-50 text-left text-gray-600",
                    tr {
                        th { class: "px-4 py-2", "#" }
                        th { class: "px-4 py-2", "Time" }
                        th { class: "px-4 py-2", "Hash" }
                        th { class: "px-4 py-2", "Previous" }
                        th { class: "px-4 py-2", "Nonce" }
                        th { class: "px-4 py-2", "Data" }
                    }
                }
                tbody {
                    for block in blocks {
                        BlockRow { key: "{block.index}", block }
                    }
                }
            }
        }
    }
}

#[component]
fn BlockRow(block: Block) -> Element {
    let time = block.display_time();
    let hash = block.short_hash();
    let previous = crate::models::shorten_hash(&block.previous_hash);
    let data = block.data.to_string();

    rsx! {
        tr { class: "border-t",
            td { class: "px-4 py-2 font-mono", "{block.index}" }
            td { class: "px-4 py-2", "{time}" }
            td { class: "px-4 py-2 font-mono", title: "{block.hash}", "{hash}" }
            td { class: "px-4 py-2 font-mono", title: "{block.previous_hash}", "{previous}" }
            td { class: "px-4 py-2", "{block.nonce}" }
            td { class: "px-4 py-2 font-mono text-xs text-gray-600 truncate max-w-xs", "{data}" }
        }
    }
}
