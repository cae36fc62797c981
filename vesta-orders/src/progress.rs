use chrono::{DateTime, Utc};

use crate::models::{OrderStatus, OrderSummary};

/// The normal forward progression of an order.
pub const ORDER_PROGRESSION: [OrderStatus; 4] = [
    OrderStatus::Processing,
    OrderStatus::Shipped,
    OrderStatus::OutForDelivery,
    OrderStatus::Delivered,
];

/// Render model for the order-status progress bar.
///
/// `stages` are the labelled stops; `filled_segments` counts the connecting
/// segments drawn as complete, which equals the index of the current status
/// within the track. Cancellation is a side branch, not a stop on the normal
/// track: it renders a truncated two-stage track instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressTrack {
    pub stages: Vec<&'static str>,
    pub filled_segments: usize,
    pub cancelled: bool,
}

impl ProgressTrack {
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }
}

/// Map an order status onto its progress track.
pub fn progress_track(status: OrderStatus) -> ProgressTrack {
    if status == OrderStatus::Cancelled {
        return ProgressTrack {
            stages: vec!["Processing", "Cancelled"],
            filled_segments: 1,
            cancelled: true,
        };
    }

    let index = ORDER_PROGRESSION
        .iter()
        .position(|s| *s == status)
        .unwrap_or(0);

    ProgressTrack {
        stages: ORDER_PROGRESSION.iter().map(|s| s.label()).collect(),
        filled_segments: index,
        cancelled: false,
    }
}

/// List-row date format used throughout the order history.
pub fn format_order_date(date: DateTime<Utc>) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// Headline for an order-history row: terminal statuses lead with their own
/// date, everything else with the order date.
pub fn status_headline(summary: &OrderSummary) -> String {
    match summary.order_status {
        OrderStatus::Delivered => {
            format!("Delivered on {}", format_order_date(summary.order_status_date))
        }
        OrderStatus::Cancelled => {
            format!("Cancelled on {}", format_order_date(summary.order_status_date))
        }
        _ => format!("Ordered on {}", format_order_date(summary.order_date)),
    }
}

/// Sub-caption under the headline.
pub fn status_caption(status: OrderStatus) -> String {
    match status {
        OrderStatus::Processing => "Your Order is in Process".to_string(),
        other => format!("Your Order has been {}", other.label()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use vesta_catalog::{ColorRef, ProductVariation, SizeRef};

    fn summary(status: OrderStatus) -> OrderSummary {
        OrderSummary {
            order_id: 7,
            product_variation: ProductVariation {
                id: 3,
                product_name: "Linen Shirt".to_string(),
                color: ColorRef {
                    color: "Blue".to_string(),
                },
                size: SizeRef {
                    size: "M".to_string(),
                },
                product_image: String::new(),
            },
            quantity: 1,
            total_amount: "499.00".to_string(),
            order_status: status,
            order_date: Utc.with_ymd_and_hms(2024, 5, 2, 10, 0, 0).unwrap(),
            order_status_date: Utc.with_ymd_and_hms(2024, 5, 12, 18, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_filled_segments_equal_status_index() {
        assert_eq!(progress_track(OrderStatus::Processing).filled_segments, 0);
        assert_eq!(progress_track(OrderStatus::Shipped).filled_segments, 1);
        assert_eq!(progress_track(OrderStatus::OutForDelivery).filled_segments, 2);
        assert_eq!(progress_track(OrderStatus::Delivered).filled_segments, 3);
    }

    #[test]
    fn test_normal_track_has_four_stages() {
        let track = progress_track(OrderStatus::Shipped);
        assert_eq!(track.stage_count(), 4);
        assert!(!track.cancelled);
        assert_eq!(
            track.stages,
            vec!["Processing", "Shipped", "Out For Delivery", "Delivered"]
        );
    }

    #[test]
    fn test_cancelled_renders_truncated_two_stage_track() {
        let track = progress_track(OrderStatus::Cancelled);
        assert!(track.cancelled);
        assert_eq!(track.stage_count(), 2);
        assert_eq!(track.stages, vec!["Processing", "Cancelled"]);
        assert_eq!(track.filled_segments, 1);
    }

    #[test]
    fn test_headline_picks_the_right_date() {
        assert_eq!(
            status_headline(&summary(OrderStatus::Delivered)),
            "Delivered on 12-05-2024"
        );
        assert_eq!(
            status_headline(&summary(OrderStatus::Cancelled)),
            "Cancelled on 12-05-2024"
        );
        assert_eq!(
            status_headline(&summary(OrderStatus::Shipped)),
            "Ordered on 02-05-2024"
        );
    }

    #[test]
    fn test_caption_wording() {
        assert_eq!(
            status_caption(OrderStatus::Processing),
            "Your Order is in Process"
        );
        assert_eq!(
            status_caption(OrderStatus::OutForDelivery),
            "Your Order has been Out For Delivery"
        );
    }
}
