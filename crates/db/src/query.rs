//! Filter predicates and update documents.
//!
//! A [`Filter`] is a boolean expression over field comparisons, evaluated
//! against a document's field map. Numeric values compare across BSON integer
//! and double representations; values of different non-numeric types are
//! incomparable, and a comparison against a missing or incomparable field is
//! simply false.

use std::cmp::Ordering;

use bson::Bson;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    Gt,
    Lt,
}

/// A structured filter predicate.
#[derive(Debug, Clone)]
pub enum Filter {
    /// Matches every document.
    All,
    Cmp { field: String, op: CmpOp, value: Bson },
    And(Vec<Filter>),
    Or(Vec<Filter>),
}

impl Filter {
    /// Single-field comparison.
    pub fn cmp(field: impl Into<String>, op: CmpOp, value: impl Into<Bson>) -> Self {
        Self::Cmp { field: field.into(), op, value: value.into() }
    }

    /// Single-field equality.
    pub fn eq(field: impl Into<String>, value: impl Into<Bson>) -> Self {
        Self::cmp(field, CmpOp::Eq, value)
    }
}

/// Options for `find`.
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    /// Restrict returned documents to these fields.
    pub projection: Option<Vec<String>>,
}

impl FindOptions {
    pub fn project(fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self { projection: Some(fields.into_iter().map(Into::into).collect()) }
    }
}

/// An update template: set fields to values, then add deltas to fields.
#[derive(Debug, Clone, Default)]
pub struct UpdateDoc {
    pub set: Vec<(String, Bson)>,
    pub inc: Vec<(String, i64)>,
}

/// Outcome of an update operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReport {
    pub matched: u64,
    pub modified: u64,
}

/// Outcome of a delete operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteReport {
    pub deleted: u64,
}

pub fn eval_filter(doc: &bson::Document, filter: &Filter) -> bool {
    match filter {
        Filter::All => true,
        Filter::And(fs) => fs.iter().all(|f| eval_filter(doc, f)),
        Filter::Or(fs) => fs.iter().any(|f| eval_filter(doc, f)),
        Filter::Cmp { field, op, value } => doc.get(field).is_some_and(|v| {
            compare_bson(v, value).is_some_and(|ord| match op {
                CmpOp::Eq => ord == Ordering::Equal,
                CmpOp::Gt => ord == Ordering::Greater,
                CmpOp::Lt => ord == Ordering::Less,
            })
        }),
    }
}

/// Compare two BSON values, widening numerics to `f64`.
///
/// Returns `None` for values of incomparable types; a string never equals a
/// number, so a non-numeric key probe against a numeric field matches nothing.
pub fn compare_bson(a: &Bson, b: &Bson) -> Option<Ordering> {
    fn as_f64(v: &Bson) -> Option<f64> {
        match v {
            Bson::Int32(n) => Some(f64::from(*n)),
            Bson::Int64(n) => Some(*n as f64),
            Bson::Double(f) => Some(*f),
            _ => None,
        }
    }

    if let (Some(x), Some(y)) = (as_f64(a), as_f64(b)) {
        return Some(x.total_cmp(&y));
    }
    match (a, b) {
        (Bson::String(x), Bson::String(y)) => Some(x.cmp(y)),
        (Bson::Boolean(x), Bson::Boolean(y)) => Some(x.cmp(y)),
        _ => None,
    }
}

/// Copy only the named fields out of a document.
pub fn project_fields(doc: &bson::Document, fields: &[String]) -> bson::Document {
    let mut out = bson::Document::new();
    for field in fields {
        if let Some(v) = doc.get(field) {
            out.insert(field.clone(), v.clone());
        }
    }
    out
}

/// Apply an update in place. Returns whether the document changed.
///
/// Increments widen to `Int64`; incrementing a missing field creates it
/// holding the delta, matching the upstream store's `$inc` behavior.
pub fn apply_update(doc: &mut bson::Document, update: &UpdateDoc) -> bool {
    let mut changed = false;
    for (field, value) in &update.set {
        if doc.get(field) != Some(value) {
            doc.insert(field.clone(), value.clone());
            changed = true;
        }
    }
    for (field, delta) in &update.inc {
        let next = match doc.get(field) {
            Some(Bson::Int32(n)) => Bson::Int64(i64::from(*n) + delta),
            Some(Bson::Int64(n)) => Bson::Int64(n + delta),
            Some(Bson::Double(f)) => Bson::Double(f + *delta as f64),
            _ => Bson::Int64(*delta),
        };
        doc.insert(field.clone(), next);
        changed = true;
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    fn mark() -> bson::Document {
        doc! { "Name": "Asha", "RollNo": 101_i64, "WAD": 45_i64, "CC": 38_i64 }
    }

    #[test]
    fn gt_is_strict() {
        let at = Filter::cmp("WAD", CmpOp::Gt, 45_i64);
        let below = Filter::cmp("WAD", CmpOp::Gt, 44_i64);
        assert!(!eval_filter(&mark(), &at));
        assert!(eval_filter(&mark(), &below));
    }

    #[test]
    fn numeric_comparison_crosses_bson_int_widths() {
        let doc = doc! { "RollNo": 101_i32 };
        let filter = Filter::cmp("RollNo", CmpOp::Eq, 101_i64);
        assert!(eval_filter(&doc, &filter));
    }

    #[test]
    fn string_probe_never_matches_numeric_field() {
        let filter = Filter::eq("RollNo", "101");
        assert!(!eval_filter(&mark(), &filter));
    }

    #[test]
    fn missing_field_fails_every_comparison() {
        for op in [CmpOp::Eq, CmpOp::Gt, CmpOp::Lt] {
            let filter = Filter::cmp("CNS", op, 0_i64);
            assert!(!eval_filter(&mark(), &filter));
        }
    }

    #[test]
    fn conjunction_requires_all_arms() {
        let both = Filter::And(vec![
            Filter::cmp("WAD", CmpOp::Gt, 40_i64),
            Filter::cmp("CC", CmpOp::Gt, 40_i64),
        ]);
        assert!(!eval_filter(&mark(), &both));
    }

    #[test]
    fn disjunction_requires_one_arm() {
        let either = Filter::Or(vec![
            Filter::cmp("WAD", CmpOp::Lt, 40_i64),
            Filter::cmp("CC", CmpOp::Lt, 40_i64),
        ]);
        // WAD is 45 but CC is 38.
        assert!(eval_filter(&mark(), &either));
    }

    #[test]
    fn projection_keeps_only_named_fields() {
        let projected = project_fields(&mark(), &["Name".to_string()]);
        assert_eq!(projected, doc! { "Name": "Asha" });
    }

    #[test]
    fn inc_adds_and_creates() {
        let mut doc = doc! { "WAD": 25_i64 };
        let update = UpdateDoc {
            set: vec![],
            inc: vec![("WAD".into(), 10), ("CC".into(), 10)],
        };
        assert!(apply_update(&mut doc, &update));
        assert_eq!(doc, doc! { "WAD": 35_i64, "CC": 10_i64 });
    }

    #[test]
    fn set_of_identical_value_reports_unchanged() {
        let mut doc = doc! { "Actor": "A" };
        let update = UpdateDoc { set: vec![("Actor".into(), Bson::String("A".into()))], inc: vec![] };
        assert!(!apply_update(&mut doc, &update));
    }
}
