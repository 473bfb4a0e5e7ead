use super::batch::Batch;
use super::errors::DomainError;
use super::order_line::OrderLine;

/// Pick the batch that should fulfil `line`, allocate it there and return the
/// batch reference.
///
/// Only batches of the line's sku that can cover the whole quantity are
/// candidates. In-stock batches win over shipping ones, then the earliest eta;
/// ties keep their input order. If a batch already holds the line its
/// reference is returned unchanged.
pub fn allocate(line: &OrderLine, batches: &mut [Batch]) -> Result<String, DomainError> {
    if let Some(batch) = batches.iter().find(|b| b.is_allocated(line)) {
        return Ok(batch.reference().to_string());
    }

    let mut candidates: Vec<&mut Batch> = batches
        .iter_mut()
        .filter(|b| b.can_allocate(line))
        .collect();
    // stable
    candidates.sort_by(|a, b| a.cmp_by_eta(b));

    match candidates.into_iter().next() {
        Some(batch) => {
            batch.allocate(line)?;
            Ok(batch.reference().to_string())
        }
        None => Err(DomainError::OutOfStock(line.sku().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Days, NaiveDate};

    use super::*;

    fn tomorrow() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 2).expect("valid date")
    }

    fn later(days: u64) -> NaiveDate {
        tomorrow() + Days::new(days)
    }

    fn line(quantity: i32) -> OrderLine {
        OrderLine::new("BLUE-VASE", quantity, 1).expect("valid line")
    }

    fn batch(reference: &str, quantity: i32, eta: Option<NaiveDate>) -> Batch {
        Batch::new(reference, "BLUE-VASE", quantity, eta).expect("valid batch")
    }

    #[test]
    fn prefers_in_stock_batch_over_shipment() {
        let mut batches = vec![
            batch("batch-being-shipped", 10, Some(tomorrow())),
            batch("batch-in-stock", 20, None),
        ];
        let line = line(2);

        let reference = allocate(&line, &mut batches).expect("allocation succeeds");

        assert_eq!(reference, "batch-in-stock");
        assert!(batches[1].is_allocated(&line));
        assert_eq!(batches[1].quantity(), 18);
        assert_eq!(batches[0].quantity(), 10);
    }

    #[test]
    fn prefers_earliest_eta() {
        let mut batches = vec![
            batch("batch2", 10, Some(later(1))),
            batch("batch1", 10, Some(tomorrow())),
        ];

        let reference = allocate(&line(2), &mut batches).expect("allocation succeeds");

        assert_eq!(reference, "batch1");
        assert_eq!(batches[1].quantity(), 8);
        assert_eq!(batches[0].quantity(), 10);
    }

    #[test]
    fn skips_batches_that_cannot_cover_the_line() {
        let mut batches = vec![
            batch("batch1", 10, Some(tomorrow())),
            batch("batch2", 20, Some(later(1))),
        ];

        let reference = allocate(&line(12), &mut batches).expect("allocation succeeds");

        assert_eq!(reference, "batch2");
        assert_eq!(batches[0].quantity(), 10);
        assert_eq!(batches[1].quantity(), 8);
    }

    #[test]
    fn returns_allocated_reference() {
        let mut batches = vec![batch("batch1", 10, None)];
        let reference = allocate(&line(2), &mut batches).expect("allocation succeeds");
        assert_eq!(reference, batches[0].reference());
    }

    #[test]
    fn fails_out_of_stock_without_touching_batches() {
        let mut batches = vec![batch("batch1", 10, None)];

        let err = allocate(&line(12), &mut batches).unwrap_err();

        assert_eq!(err, DomainError::OutOfStock("BLUE-VASE".to_string()));
        assert_eq!(batches[0].quantity(), 10);
    }

    #[test]
    fn ignores_batches_of_other_skus() {
        let mut batches = vec![
            Batch::new("sofa", "GENERIC-SOFA", 100, None).expect("valid batch"),
            batch("vase", 5, Some(tomorrow())),
        ];

        let reference = allocate(&line(3), &mut batches).expect("allocation succeeds");

        assert_eq!(reference, "vase");
        assert_eq!(batches[0].quantity(), 100);
    }

    #[test]
    fn ties_keep_input_order() {
        let mut batches = vec![batch("first", 10, None), batch("second", 10, None)];
        let reference = allocate(&line(1), &mut batches).expect("allocation succeeds");
        assert_eq!(reference, "first");
    }

    #[test]
    fn repeated_line_stays_on_its_batch() {
        let mut batches = vec![batch("in-stock", 5, None), batch("shipping", 50, Some(tomorrow()))];
        let line = line(4);

        let first = allocate(&line, &mut batches).expect("first allocation");
        let second = allocate(&line, &mut batches).expect("second allocation");

        assert_eq!(first, "in-stock");
        assert_eq!(second, "in-stock");
        assert_eq!(batches[0].quantity(), 1);
        assert_eq!(batches[1].quantity(), 50);
    }
}
