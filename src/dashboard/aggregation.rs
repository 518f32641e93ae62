//! Transaction data aggregation for the monthly analytics views.
//!
//! Each function here is pure: it takes the month's records as a slice and
//! returns plain data, so the combined view can call all three over a single
//! store read.

use std::collections::HashMap;

use crate::transaction::Transaction;

use super::models::{CategoryCount, RangeCount, Statistics};

/// The labels and upper price bounds of the ten fixed histogram buckets.
///
/// A record belongs to the first bucket whose upper bound its price does not
/// exceed; the last bucket has no upper bound. Every price falls in exactly
/// one bucket, so bucket counts always sum to the record count.
const PRICE_BUCKETS: [(&str, Option<f64>); 10] = [
    ("0-100", Some(100.0)),
    ("101-200", Some(200.0)),
    ("201-300", Some(300.0)),
    ("301-400", Some(400.0)),
    ("401-500", Some(500.0)),
    ("501-600", Some(600.0)),
    ("601-700", Some(700.0)),
    ("701-800", Some(800.0)),
    ("801-900", Some(900.0)),
    ("901-above", None),
];

/// Sums the sale amount over sold records and counts sold and unsold records.
pub(super) fn compute_statistics(transactions: &[Transaction]) -> Statistics {
    let mut statistics = Statistics {
        total_sale_amount: 0.0,
        total_sold_items: 0,
        total_not_sold_items: 0,
    };

    for transaction in transactions {
        if transaction.sold {
            statistics.total_sale_amount += transaction.price;
            statistics.total_sold_items += 1;
        } else {
            statistics.total_not_sold_items += 1;
        }
    }

    statistics
}

/// Counts records per price bucket, in the fixed bucket order.
///
/// Zero-count buckets are included.
pub(super) fn compute_bar_chart(transactions: &[Transaction]) -> Vec<RangeCount> {
    let mut counts = [0usize; PRICE_BUCKETS.len()];

    for transaction in transactions {
        let index = PRICE_BUCKETS
            .iter()
            .position(|(_, upper)| match upper {
                Some(upper) => transaction.price <= *upper,
                None => true,
            })
            .expect("the last bucket has no upper bound");

        counts[index] += 1;
    }

    PRICE_BUCKETS
        .iter()
        .zip(counts)
        .map(|((label, _), count)| RangeCount {
            range: (*label).to_owned(),
            count,
        })
        .collect()
}

/// Counts records per distinct product title, in first-occurrence order.
pub(super) fn compute_pie_chart(transactions: &[Transaction]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    let mut index_by_title: HashMap<&str, usize> = HashMap::new();

    for transaction in transactions {
        match index_by_title.get(transaction.title.as_str()) {
            Some(&index) => counts[index].count += 1,
            None => {
                index_by_title.insert(&transaction.title, counts.len());
                counts.push(CategoryCount {
                    category: transaction.title.clone(),
                    count: 1,
                });
            }
        }
    }

    counts
}

#[cfg(test)]
mod aggregation_tests {
    use time::macros::datetime;

    use crate::transaction::Transaction;

    use super::{compute_bar_chart, compute_pie_chart, compute_statistics};

    fn transaction(title: &str, price: f64, sold: bool) -> Transaction {
        Transaction {
            id: 0,
            title: title.to_owned(),
            description: String::new(),
            price,
            date_of_sale: datetime!(2026-03-15 12:00 UTC),
            sold,
        }
    }

    #[test]
    fn statistics_sums_sold_amounts_and_counts_both_outcomes() {
        let transactions = [
            transaction("Laptop", 150.0, true),
            transaction("Mouse", 150.0, true),
            transaction("Keyboard", 150.0, false),
        ];

        let statistics = compute_statistics(&transactions);

        assert_eq!(statistics.total_sale_amount, 300.0);
        assert_eq!(statistics.total_sold_items, 2);
        assert_eq!(statistics.total_not_sold_items, 1);
    }

    #[test]
    fn statistics_counts_cover_every_record() {
        let transactions = [
            transaction("A", 10.0, true),
            transaction("B", 20.0, false),
            transaction("C", 30.0, false),
            transaction("D", 40.0, true),
        ];

        let statistics = compute_statistics(&transactions);

        assert_eq!(
            statistics.total_sold_items + statistics.total_not_sold_items,
            transactions.len()
        );
    }

    #[test]
    fn statistics_of_no_records_is_zero() {
        let statistics = compute_statistics(&[]);

        assert_eq!(statistics.total_sale_amount, 0.0);
        assert_eq!(statistics.total_sold_items, 0);
        assert_eq!(statistics.total_not_sold_items, 0);
    }

    #[test]
    fn bar_chart_returns_all_buckets_in_order() {
        let bar_chart = compute_bar_chart(&[]);

        let labels: Vec<&str> = bar_chart.iter().map(|bucket| bucket.range.as_str()).collect();
        assert_eq!(
            labels,
            [
                "0-100", "101-200", "201-300", "301-400", "401-500", "501-600", "601-700",
                "701-800", "801-900", "901-above"
            ]
        );
        assert!(bar_chart.iter().all(|bucket| bucket.count == 0));
    }

    #[test]
    fn bar_chart_places_prices_on_bucket_bounds() {
        let transactions = [
            transaction("A", 0.0, true),
            transaction("B", 100.0, true),
            transaction("C", 100.5, true),
            transaction("D", 200.0, true),
            transaction("E", 900.5, true),
            transaction("F", 901.0, true),
        ];

        let bar_chart = compute_bar_chart(&transactions);

        assert_eq!(bar_chart[0].count, 2); // 0.0 and 100.0
        assert_eq!(bar_chart[1].count, 2); // 100.5 and 200.0
        assert_eq!(bar_chart[9].count, 2); // 900.5 and 901.0
    }

    #[test]
    fn bar_chart_counts_sum_to_record_count() {
        let transactions: Vec<Transaction> = (0..25)
            .map(|i| transaction("P", i as f64 * 47.3, i % 2 == 0))
            .collect();

        let bar_chart = compute_bar_chart(&transactions);

        let total: usize = bar_chart.iter().map(|bucket| bucket.count).sum();
        assert_eq!(total, transactions.len());
    }

    #[test]
    fn pie_chart_counts_distinct_titles_in_first_occurrence_order() {
        let transactions = [
            transaction("Laptop", 799.0, true),
            transaction("Mouse", 25.0, false),
            transaction("Laptop", 799.0, false),
        ];

        let pie_chart = compute_pie_chart(&transactions);

        assert_eq!(pie_chart.len(), 2);
        assert_eq!(pie_chart[0].category, "Laptop");
        assert_eq!(pie_chart[0].count, 2);
        assert_eq!(pie_chart[1].category, "Mouse");
        assert_eq!(pie_chart[1].count, 1);
    }

    #[test]
    fn pie_chart_counts_sum_to_record_count() {
        let transactions = [
            transaction("A", 1.0, true),
            transaction("B", 2.0, true),
            transaction("A", 3.0, false),
            transaction("C", 4.0, true),
        ];

        let pie_chart = compute_pie_chart(&transactions);

        let total: usize = pie_chart.iter().map(|slice| slice.count).sum();
        assert_eq!(total, transactions.len());
    }
}
