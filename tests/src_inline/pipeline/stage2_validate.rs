use super::*;
use serde_json::json;

#[test]
fn test_valid_mixed_representations() {
    let answers = json!([1, "0", true, false, "1", 0.0]);
    let out = validate_answers(&answers, 6).unwrap();
    let bits: Vec<u8> = out.iter().map(|a| a.as_u8()).collect();
    assert_eq!(bits, vec![1, 0, 1, 0, 1, 0]);
}

#[test]
fn test_not_a_sequence() {
    assert_eq!(
        validate_answers(&json!({"1": 1}), 1).unwrap_err(),
        KappaError::NotASequence
    );
    assert_eq!(
        validate_answers(&json!("1010"), 4).unwrap_err(),
        KappaError::NotASequence
    );
    assert_eq!(
        validate_answers(&json!(null), 0).unwrap_err(),
        KappaError::NotASequence
    );
}

#[test]
fn test_wrong_length_reports_both_counts() {
    let answers = Value::Array(vec![json!(1); 49]);
    assert_eq!(
        validate_answers(&answers, 50).unwrap_err(),
        KappaError::WrongLength {
            expected: 50,
            actual: 49
        }
    );
}

#[test]
fn test_invalid_answer_reports_question_number() {
    let mut items = vec![json!(0); 50];
    items[11] = json!("maybe");
    let answers = Value::Array(items);
    assert_eq!(
        validate_answers(&answers, 50).unwrap_err(),
        KappaError::InvalidAnswerAtPosition { question: 12 }
    );
}

#[test]
fn test_first_bad_value_wins() {
    let answers = json!([1, null, 2, "x"]);
    assert_eq!(
        validate_answers(&answers, 4).unwrap_err(),
        KappaError::InvalidAnswerAtPosition { question: 2 }
    );
}

#[test]
fn test_length_checked_before_values() {
    let answers = json!(["bad", "bad"]);
    assert_eq!(
        validate_answers(&answers, 3).unwrap_err(),
        KappaError::WrongLength {
            expected: 3,
            actual: 2
        }
    );
}
