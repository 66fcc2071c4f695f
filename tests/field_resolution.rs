//! Field Resolution Tests
//!
//! - Plain setters resolve to the empty binding
//! - Source setters resolve to (field_id, info_area)
//! - Link setters resolve to the link's target field
//! - Drafts built from a filtered result

use std::sync::Arc;

use crmquery::condition::Condition;
use crmquery::field::{Field, FieldSetterField};
use crmquery::record::{LinkInfoField, PricedRecord, RecordBuilder};
use crmquery::result::{CachedResult, MetaInfo, QueryResult, Record, RecordSet};
use serde_json::json;

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn test_plain_setter_is_empty_for_any_info_area() {
    let setter = FieldSetterField::plain(0);
    for area in ["FI", "KP", "PR", "AP"] {
        let field = setter.field_with_info_area(area);
        assert!(field.is_empty());
        assert_eq!(field, Field::empty(area));
    }
    assert!(!setter.is_field());
}

#[test]
fn test_source_setter_resolves_field_seven() {
    let setter = FieldSetterField::source(0, 7);
    assert!(setter.is_field());
    assert_eq!(setter.field_with_info_area("FI"), Field::new(7, "FI"));
}

#[test]
fn test_link_setter_capabilities() {
    let setter = FieldSetterField::link(2, LinkInfoField::new(1, 4, json!(1), json!("yes")));
    assert!(setter.is_link());
    assert!(!setter.is_field());
    assert_eq!(setter.result_position(), 2);
    assert_eq!(setter.field_with_info_area("PR"), Field::new(4, "PR"));
}

// =============================================================================
// Building Drafts
// =============================================================================

/// Drafts are built only for the rows a cached result retained.
#[test]
fn test_build_drafts_from_cached_result() {
    let base = Arc::new(QueryResult::from_record_set(
        MetaInfo::new("AR").with_field("AR", 1).with_field("AR", 6),
        RecordSet::new(vec![
            Record::new("AR.1", vec![json!("Bolt"), json!(0.5)]),
            Record::new("AR.2", vec![json!("Nut"), json!(0.2)]),
            Record::new("AR.3", vec![json!("Gear"), json!(12.0)]),
        ]),
    ));
    let cheap = CachedResult::new(base, &Condition::field_lt(1, json!(1))).unwrap();

    let builder = RecordBuilder::new(
        "AP",
        vec![
            FieldSetterField::source(0, 2),
            FieldSetterField::source(1, 8),
        ],
    )
    .with_parent_link(0);
    let drafts = builder.build_all(&cheap).unwrap();

    assert_eq!(drafts.len(), 2);
    assert_eq!(drafts[0].value_of(&Field::new(2, "AP")), Some(&json!("Bolt")));
    assert_eq!(drafts[1].value_of(&Field::new(2, "AP")), Some(&json!("Nut")));
    assert_eq!(
        drafts[1].parent().map(|p| p.identification()),
        Some("AR.2".to_string())
    );

    let priced: Vec<PricedRecord> = drafts
        .into_iter()
        .map(|draft| {
            let price = draft
                .value_of(&Field::new(8, "AP"))
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            PricedRecord::new(draft, price, 10.0, "EUR")
        })
        .collect();
    assert!((priced[0].total() - 5.0).abs() < 1e-9);
    assert!((priced[1].total() - 2.0).abs() < 1e-9);
}
