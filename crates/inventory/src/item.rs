use serde::{Deserialize, Serialize};

/// One row of the `inventory_data` dataset: historical shortage statistics
/// for a single encoded item.
///
/// Immutable except for `probability`, which a prediction round sets exactly
/// once per fetch cycle. A later round may overwrite it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Dataset-unique item identifier.
    pub item_encoded: i64,
    pub total_observations: i64,
    pub historical_shortage_prob: f64,
    pub avg_shortage_qty: f64,
    pub max_shortage_qty: i64,
    pub total_shortage_qty: i64,
    pub shortage_qty_7d_avg: f64,
    pub shortage_qty_30d_avg: f64,
    pub shortage_freq_7d: f64,
    pub shortage_freq_30d: f64,
    pub is_shortage: i64,

    /// Model-predicted shortage probability. Absent until a prediction round
    /// succeeds for this row; a failed per-row request leaves it absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
}

impl InventoryItem {
    /// Copy of this row with the predicted probability attached. Every other
    /// field is carried over unchanged.
    pub fn with_probability(&self, probability: f64) -> Self {
        Self {
            probability: Some(probability),
            ..self.clone()
        }
    }
}

/// Sort rows for display: highest predicted probability first, rows without
/// a prediction last, `item_encoded` ascending as the final tiebreak.
///
/// Total over any mix of annotated and bare rows: missing probabilities
/// compare as the lowest value instead of poisoning the order the way a
/// NaN-producing subtraction would.
pub fn sort_by_probability_desc(rows: &mut [InventoryItem]) {
    rows.sort_by(|a, b| {
        let pa = a.probability.unwrap_or(f64::NEG_INFINITY);
        let pb = b.probability.unwrap_or(f64::NEG_INFINITY);
        pb.total_cmp(&pa)
            .then_with(|| a.item_encoded.cmp(&b.item_encoded))
    });
}

/// Built-in sample of the `inventory_data` dataset. Backs the in-memory
/// store when no database is configured, and the test suites.
pub fn sample_rows() -> Vec<InventoryItem> {
    let base = |item_encoded,
                historical_shortage_prob,
                avg_shortage_qty,
                max_shortage_qty,
                total_shortage_qty| InventoryItem {
        item_encoded,
        total_observations: 744,
        historical_shortage_prob,
        avg_shortage_qty,
        max_shortage_qty,
        total_shortage_qty,
        shortage_qty_7d_avg: 0.0,
        shortage_qty_30d_avg: 0.0,
        shortage_freq_7d: 0.0,
        shortage_freq_30d: 0.0,
        is_shortage: 0,
        probability: None,
    };

    vec![
        base(0, 0.009408602, 0.080645161, 26, 60),
        base(1, 0.001344086, 0.420698925, 313, 313),
        base(2, 0.010752688, 0.127688172, 44, 95),
        base(3, 0.00672043, 0.045698925, 10, 34),
        base(4, 0.018817204, 0.119623656, 56, 89),
        base(5, 0.009408602, 0.044354839, 17, 33),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(item_encoded: i64, probability: Option<f64>) -> InventoryItem {
        InventoryItem {
            item_encoded,
            total_observations: 10,
            historical_shortage_prob: 0.1,
            avg_shortage_qty: 0.5,
            max_shortage_qty: 3,
            total_shortage_qty: 7,
            shortage_qty_7d_avg: 0.2,
            shortage_qty_30d_avg: 0.3,
            shortage_freq_7d: 0.4,
            shortage_freq_30d: 0.6,
            is_shortage: 1,
            probability,
        }
    }

    #[test]
    fn with_probability_changes_only_the_probability() {
        let original = row(7, None);
        let annotated = original.with_probability(0.42);

        assert_eq!(annotated.probability, Some(0.42));
        assert_eq!(
            InventoryItem {
                probability: None,
                ..annotated
            },
            original
        );
    }

    #[test]
    fn with_probability_overwrites_a_previous_round() {
        let annotated = row(7, Some(0.1)).with_probability(0.9);
        assert_eq!(annotated.probability, Some(0.9));
    }

    #[test]
    fn unannotated_rows_serialize_without_a_probability_field() {
        let value = serde_json::to_value(row(1, None)).unwrap();
        assert!(value.get("probability").is_none());

        let value = serde_json::to_value(row(1, Some(0.25))).unwrap();
        assert_eq!(value["probability"], 0.25);
    }

    #[test]
    fn sort_puts_missing_probabilities_last() {
        let mut rows = vec![row(0, None), row(1, Some(0.2)), row(2, Some(0.9))];
        sort_by_probability_desc(&mut rows);

        let order: Vec<i64> = rows.iter().map(|r| r.item_encoded).collect();
        assert_eq!(order, vec![2, 1, 0]);
    }

    #[test]
    fn sort_breaks_ties_by_item_id() {
        let mut rows = vec![
            row(3, Some(0.5)),
            row(1, Some(0.5)),
            row(5, None),
            row(2, None),
        ];
        sort_by_probability_desc(&mut rows);

        let order: Vec<i64> = rows.iter().map(|r| r.item_encoded).collect();
        assert_eq!(order, vec![1, 3, 2, 5]);
    }

    #[test]
    fn sort_is_deterministic_for_any_input_arrangement() {
        let rows = vec![row(0, Some(0.3)), row(1, None), row(2, Some(0.7)), row(3, None)];

        let mut forward = rows.clone();
        sort_by_probability_desc(&mut forward);

        let mut reversed: Vec<InventoryItem> = rows.into_iter().rev().collect();
        sort_by_probability_desc(&mut reversed);

        assert_eq!(forward, reversed);
    }

    #[test]
    fn sample_rows_have_unique_ids_and_no_probability() {
        let rows = sample_rows();
        assert_eq!(rows.len(), 6);
        for (i, r) in rows.iter().enumerate() {
            assert_eq!(r.item_encoded, i as i64);
            assert!(r.probability.is_none());
        }
    }
}
