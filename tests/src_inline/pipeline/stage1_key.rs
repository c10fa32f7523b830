use super::*;
use serde_json::json;

fn full_rows(n: usize) -> Vec<AnswerKeyRow> {
    (1..=n)
        .map(|q| AnswerKeyRow::new(q as u64, (q % 2) as u64))
        .collect()
}

#[test]
fn test_complete_key_in_question_order() {
    let key = build_answer_key(&full_rows(50), 50).unwrap();
    assert_eq!(key.len(), 50);
    assert_eq!(key.question(1), Some(Answer::Positive));
    assert_eq!(key.question(2), Some(Answer::Negative));
    assert_eq!(key.question(50), Some(Answer::Negative));
    assert_eq!(key.question(0), None);
    assert_eq!(key.question(51), None);
}

#[test]
fn test_rows_out_of_order_are_sorted() {
    let mut rows = full_rows(10);
    rows.reverse();
    let key = build_answer_key(&rows, 10).unwrap();
    let expected: Vec<u8> = (1..=10).map(|q| (q % 2) as u8).collect();
    let got: Vec<u8> = key.answers().iter().map(|a| a.as_u8()).collect();
    assert_eq!(got, expected);
}

#[test]
fn test_missing_question_names_first_gap() {
    let rows: Vec<AnswerKeyRow> = full_rows(50)
        .into_iter()
        .filter(|r| r.question_number != json!(37))
        .collect();
    let err = build_answer_key(&rows, 50).unwrap_err();
    assert_eq!(err, KappaError::IncompleteAnswerKey { question: 37 });
}

#[test]
fn test_malformed_rows_are_skipped_not_fatal() {
    let mut rows = full_rows(3);
    rows.push(AnswerKeyRow::new("abc", 1));
    rows.push(AnswerKeyRow::new(0, 1));
    rows.push(AnswerKeyRow::new(4, 1));
    rows.push(AnswerKeyRow::new(2.5, 1));
    rows.push(AnswerKeyRow::new(2, "maybe"));
    rows.push(AnswerKeyRow::default());
    let key = build_answer_key(&rows, 3).unwrap();
    assert_eq!(key.len(), 3);
    assert_eq!(key.question(2), Some(Answer::Negative));
}

#[test]
fn test_bad_row_does_not_fill_gap() {
    let rows = vec![
        AnswerKeyRow::new(1, 1),
        AnswerKeyRow::new(2, "yes"),
        AnswerKeyRow::new(3, 0),
    ];
    let err = build_answer_key(&rows, 3).unwrap_err();
    assert_eq!(err, KappaError::IncompleteAnswerKey { question: 2 });
}

#[test]
fn test_duplicate_question_last_row_wins() {
    let rows = vec![
        AnswerKeyRow::new(1, 0),
        AnswerKeyRow::new(2, 0),
        AnswerKeyRow::new(1, 1),
    ];
    let key = build_answer_key(&rows, 2).unwrap();
    assert_eq!(key.question(1), Some(Answer::Positive));
}

#[test]
fn test_string_coercible_rows() {
    let rows = vec![
        AnswerKeyRow::new("1", "1"),
        AnswerKeyRow::new(" 2 ", false),
        AnswerKeyRow::new(3.0, true),
    ];
    let key = build_answer_key(&rows, 3).unwrap();
    let got: Vec<u8> = key.answers().iter().map(|a| a.as_u8()).collect();
    assert_eq!(got, vec![1, 0, 1]);
}

#[test]
fn test_deserialized_row_with_missing_field_is_skipped() {
    let rows: Vec<AnswerKeyRow> = serde_json::from_value(json!([
        {"question_number": 1, "expected_answer": 1},
        {"question_number": 2},
        {"question_number": 2, "expected_answer": "0"}
    ]))
    .unwrap();
    let key = build_answer_key(&rows, 2).unwrap();
    assert_eq!(key.question(2), Some(Answer::Negative));
}

#[test]
fn test_huge_question_count_reports_gap_without_allocating() {
    let err = build_answer_key(&full_rows(2), usize::MAX).unwrap_err();
    assert_eq!(err, KappaError::IncompleteAnswerKey { question: 3 });
}

#[test]
fn test_gap_found_before_last_row_with_sparse_rows() {
    let rows = vec![AnswerKeyRow::new(1, 1), AnswerKeyRow::new(3, 0)];
    let err = build_answer_key(&rows, 1_000_000).unwrap_err();
    assert_eq!(err, KappaError::IncompleteAnswerKey { question: 2 });
}
