use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle state of an order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    /// Partially automated: some items delivered, the rest need manual
    /// admin completion.
    Processing,
    Completed,
    Cancelled,
    Refunded,
    Failed,
}

impl OrderStatus {
    /// Terminal negative states that return consumed stock to the pool.
    pub fn is_reversal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Cancelled | OrderStatus::Refunded | OrderStatus::Failed
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Refunded => "Refunded",
            OrderStatus::Failed => "Failed",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversal_states() {
        assert!(OrderStatus::Cancelled.is_reversal());
        assert!(OrderStatus::Refunded.is_reversal());
        assert!(OrderStatus::Failed.is_reversal());
        assert!(!OrderStatus::Pending.is_reversal());
        assert!(!OrderStatus::Processing.is_reversal());
        assert!(!OrderStatus::Completed.is_reversal());
    }
}
