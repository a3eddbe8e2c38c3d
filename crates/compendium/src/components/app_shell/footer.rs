use compendium_core::metrics::FilterMetricsSnapshot;
use dioxus::prelude::*;

/// Footer with item counts and filter timings
#[component]
pub fn StatusFooter(displayed: usize, total: usize, metrics: FilterMetricsSnapshot) -> Element {
    let last_filter = match metrics.last_ms {
        Some(ms) => format!("last filter {:.1} ms", ms),
        None => "no filter run yet".to_string(),
    };
    let cancelled = metrics.cancelled;

    rsx! {
        footer { class: "cp-footer",
            span { class: "cp-footer-text",
                "{displayed} of {total} items · {last_filter} · {cancelled} cancelled"
            }
            if metrics.failed > 0 {
                span { class: "cp-footer-text cp-footer-text--error",
                    "{metrics.failed} failed"
                }
            }
        }
    }
}
