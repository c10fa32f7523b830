use super::*;
use crate::model::bands::{AgreementBand, Verdict};
use crate::model::confusion::ConfusionMatrix;
use serde_json::json;

fn key_rows(bits: &[u8]) -> Vec<AnswerKeyRow> {
    bits.iter()
        .enumerate()
        .map(|(idx, &b)| AnswerKeyRow::new(idx as u64 + 1, b as u64))
        .collect()
}

fn sheet(bits: &[u8]) -> Value {
    Value::Array(bits.iter().map(|&b| json!(b)).collect())
}

fn pattern50() -> Vec<u8> {
    (0..50).map(|i| if i % 3 == 0 { 1 } else { 0 }).collect()
}

#[test]
fn test_worked_example_n4() {
    let m = compute_kappa_metrics(&key_rows(&[1, 0, 1, 0]), &json!([1, 1, 1, 0]), 4).unwrap();
    assert_eq!(
        m.matrix,
        ConfusionMatrix {
            a: 2,
            b: 1,
            c: 0,
            d: 1
        }
    );
    assert!((m.po - 0.75).abs() < 1e-12);
    assert!((m.pe - 0.5).abs() < 1e-12);
    assert!((m.kappa - 0.5).abs() < 1e-12);
    assert_eq!(m.interpretation, AgreementBand::Moderate);
    assert_eq!(m.verdict, Verdict::RequiresRetraining);
    assert_eq!(m.rounded.po_percent, 75.0);
    assert_eq!(m.rounded.kappa, 0.5);
}

#[test]
fn test_perfect_agreement_qualifies() {
    let bits = pattern50();
    let m = compute_kappa_metrics(&key_rows(&bits), &sheet(&bits), 50).unwrap();
    assert_eq!(m.matrix.b, 0);
    assert_eq!(m.matrix.c, 0);
    assert_eq!(m.po, 1.0);
    assert_eq!(m.kappa, 1.0);
    assert_eq!(m.interpretation, AgreementBand::AlmostPerfect);
    assert_eq!(m.verdict, Verdict::Qualified);
    assert_eq!(m.sensitivity, Some(1.0));
    assert_eq!(m.specificity, Some(1.0));
}

#[test]
fn test_inverted_sheet_has_zero_observed_agreement() {
    let bits = pattern50();
    let inverted: Vec<u8> = bits.iter().map(|b| 1 - b).collect();
    let m = compute_kappa_metrics(&key_rows(&bits), &sheet(&inverted), 50).unwrap();
    assert_eq!(m.matrix.a, 0);
    assert_eq!(m.matrix.d, 0);
    assert_eq!(m.po, 0.0);
    assert!(m.kappa < 0.0);
    assert_eq!(m.interpretation, AgreementBand::WorseThanChance);
    assert!(m.rounded.kappa < 0.0);
}

#[test]
fn test_default_question_count_errors_surface() {
    let bits = pattern50();
    let rows = key_rows(&bits);

    let short = sheet(&bits[..49]);
    assert_eq!(
        compute_kappa_metrics(&rows, &short, 50).unwrap_err(),
        KappaError::WrongLength {
            expected: 50,
            actual: 49
        }
    );

    let mut items: Vec<Value> = bits.iter().map(|&b| json!(b)).collect();
    items[11] = json!("maybe");
    assert_eq!(
        compute_kappa_metrics(&rows, &Value::Array(items), 50).unwrap_err(),
        KappaError::InvalidAnswerAtPosition { question: 12 }
    );

    assert_eq!(
        compute_kappa_metrics(&rows, &json!("not a list"), 50).unwrap_err(),
        KappaError::NotASequence
    );

    let partial: Vec<AnswerKeyRow> = rows
        .iter()
        .filter(|r| r.question_number != json!(37))
        .cloned()
        .collect();
    assert_eq!(
        compute_kappa_metrics(&partial, &sheet(&bits), 50).unwrap_err(),
        KappaError::IncompleteAnswerKey { question: 37 }
    );
}

#[test]
fn test_key_checked_before_answers() {
    let rows = key_rows(&[1, 0]);
    assert_eq!(
        compute_kappa_metrics(&rows, &json!("junk"), 3).unwrap_err(),
        KappaError::IncompleteAnswerKey { question: 3 }
    );
}

#[test]
fn test_single_class_is_degenerate() {
    let ones = vec![1u8; 10];
    let err = compute_kappa_metrics(&key_rows(&ones), &sheet(&ones), 10).unwrap_err();
    assert!(matches!(err, KappaError::DegenerateKappa { .. }));
    assert_eq!(err.kind(), "degenerate_kappa");
}

#[test]
fn test_zero_questions_is_degenerate() {
    let err = compute_kappa_metrics(&[], &json!([]), 0).unwrap_err();
    assert!(matches!(err, KappaError::DegenerateKappa { .. }));
}

#[test]
fn test_rounding_never_crosses_pass_threshold() {
    let bits = pattern50();
    let rows = key_rows(&bits);
    for flips in 0..bits.len() {
        let mut cand = bits.clone();
        for q in 0..flips {
            cand[q] = 1 - cand[q];
        }
        let Ok(m) = compute_kappa_metrics(&rows, &sheet(&cand), 50) else {
            continue;
        };
        assert_eq!(m.kappa < 0.0, m.rounded.kappa < 0.0);
        assert_eq!(m.kappa >= 0.7, m.rounded.kappa >= 0.7);
        assert_eq!(m.matrix.total(), 50);
    }
}

#[test]
fn test_deterministic_bits() {
    let bits = pattern50();
    let mut cand = bits.clone();
    cand[4] = 1;
    cand[9] = 1;
    cand[12] = 0;
    let a = compute_kappa_metrics(&key_rows(&bits), &sheet(&cand), 50).unwrap();
    let b = compute_kappa_metrics(&key_rows(&bits), &sheet(&cand), 50).unwrap();
    assert_eq!(a.kappa.to_bits(), b.kappa.to_bits());
    assert_eq!(a.pe.to_bits(), b.pe.to_bits());
    assert_eq!(a, b);
}

#[test]
fn test_score_against_key_lists_disagreements() {
    let key = build_answer_key(&key_rows(&[1, 0, 1, 0, 1, 0]), 6).unwrap();
    let scored = score_against_key(&key, &json!([0, 0, 1, 1, 1, 0])).unwrap();
    assert_eq!(scored.disagreements.false_negatives, vec![1]);
    assert_eq!(scored.disagreements.false_positives, vec![4]);
    assert_eq!(scored.metrics.total_questions, 6);
}

#[test]
fn test_metrics_serialize_absent_statistics_as_null() {
    let m = compute_kappa_metrics(&key_rows(&[0, 0, 0, 0, 0]), &json!([1, 1, 0, 0, 0]), 5)
        .unwrap();
    let v = serde_json::to_value(&m).unwrap();
    assert!(v["sensitivity"].is_null());
    assert!(v["rounded"]["sensitivity"].is_null());
    assert_eq!(v["interpretation"], json!("slight"));
    assert_eq!(v["verdict"], json!("requires retraining"));
}
